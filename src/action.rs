use std::path::PathBuf;

use crossterm::event::KeyEvent;

use crate::dispatch::DispatchEvent;

#[derive(Debug, Clone)]
pub enum Action {
    Quit,
    Tick,

    // Widget interaction
    ToggleWidget,
    WidgetKey(KeyEvent),
    Paste(String),

    // Host lifecycle
    CycleTheme,
    CyclePosition,
    ForceUpdate,
    ToggleMount,
    DocumentChanged(PathBuf),

    Dispatch(DispatchEvent),
}
