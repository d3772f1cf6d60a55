// Handlers - input mapping and action dispatch for the preview

use std::time::Instant;

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::Preview;
use crate::action::Action;
use crate::dispatch::DispatchEvent;
use crate::host::{element_attributes, Attributes, Position};
use crate::theme::DEFAULT_THEME;
use crate::widget::WidgetAction;

/// Map a key to an action. Ctrl bindings always apply; other keys go to an
/// open widget, or act as shortcuts while it is closed.
pub(super) fn map_key(key: KeyEvent, widget_open: bool) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => return Some(Action::Quit),
            KeyCode::Char('t') => return Some(Action::CycleTheme),
            KeyCode::Char('p') => return Some(Action::CyclePosition),
            KeyCode::Char('r') => return Some(Action::ForceUpdate),
            KeyCode::Char('d') => return Some(Action::ToggleMount),
            _ => {}
        }
    }

    if widget_open {
        return Some(Action::WidgetKey(key));
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('o') => Some(Action::ToggleWidget),
        KeyCode::Char('t') => Some(Action::CycleTheme),
        KeyCode::Char('p') => Some(Action::CyclePosition),
        KeyCode::Char('r') => Some(Action::ForceUpdate),
        KeyCode::Char('m') => Some(Action::ToggleMount),
        _ => None,
    }
}

impl Preview {
    fn widget_open(&self) -> bool {
        self.host.widget().is_some_and(|w| w.is_open())
    }

    pub(super) fn handle_event(&mut self, event: CrosstermEvent) -> Option<Action> {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => map_key(key, self.widget_open()),
            CrosstermEvent::Paste(text) => Some(Action::Paste(text)),
            _ => None,
        }
    }

    /// Apply `action`. Returns whether the screen needs redrawing.
    pub(super) fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => {
                self.should_quit = true;
                false
            }
            Action::Tick => self
                .host
                .widget_mut()
                .is_some_and(|w| w.tick(Instant::now())),
            Action::ToggleWidget => {
                if let Some(widget) = self.host.widget_mut() {
                    let action = widget.toggle();
                    self.report(action);
                }
                true
            }
            Action::WidgetKey(key) => {
                let action = self
                    .host
                    .widget_mut()
                    .and_then(|w| w.handle_key(key, Instant::now()));
                match action {
                    Some(action) => {
                        self.report(action);
                        true
                    }
                    None => false,
                }
            }
            Action::Paste(text) => {
                if let Some(widget) = self.host.widget_mut() {
                    widget.paste(&text);
                }
                true
            }
            Action::CycleTheme => {
                self.cycle_theme();
                true
            }
            Action::CyclePosition => {
                let current = Position::resolve(self.host.attributes().get("position"));
                let next = current.next();
                self.host.set_attribute("position", next.name());
                self.set_status(format!("Position: {}", next));
                true
            }
            Action::ForceUpdate => {
                self.host.force_update();
                self.set_status(format!("Re-rendered ({} renders)", self.host.render_count()));
                true
            }
            Action::ToggleMount => {
                if self.host.is_connected() {
                    self.host.unmount();
                    self.set_status("Widget removed from the page");
                } else {
                    self.host.mount(Attributes::new());
                    self.set_status("Widget added to the page");
                }
                true
            }
            Action::DocumentChanged(path) => {
                self.reload_document(&path);
                true
            }
            Action::Dispatch(event) => self.handle_dispatch(event),
        }
    }

    fn report(&mut self, action: WidgetAction) {
        match action {
            WidgetAction::MessageSent(text) => {
                let preview: String = text.chars().take(40).collect();
                self.set_status(format!("Message sent: {}", preview));
            }
            WidgetAction::Toggled(open) => {
                self.set_status(if open { "Chat opened" } else { "Chat closed" });
            }
            WidgetAction::None | WidgetAction::Submit => {}
        }
    }

    fn cycle_theme(&mut self) {
        let names = self.host.resolver().catalog().names();
        if names.is_empty() {
            return;
        }
        let current = self.host.attributes().get("theme").unwrap_or(DEFAULT_THEME);
        let next = names
            .iter()
            .position(|name| name == current)
            .map(|i| (i + 1) % names.len())
            .unwrap_or(0);
        let name = names[next].clone();
        self.host.set_attribute("theme", &name);
        self.set_status(format!("Theme: {}", name));
    }

    fn reload_document(&mut self, path: &std::path::Path) {
        tracing::info!("Host document changed: {}", path.display());
        match element_attributes(Some(path), self.options.element, &self.options.overrides) {
            Ok(attributes) => {
                if self.host.configure(attributes) {
                    self.set_status(format!("Reloaded {}", path.display()));
                } else {
                    self.set_status(format!("Reloaded {} (no changes)", path.display()));
                }
            }
            Err(e) => {
                tracing::warn!("Failed to reload host document: {}", e);
                self.set_status(format!("Reload failed: {}", e));
            }
        }
    }

    fn handle_dispatch(&mut self, event: DispatchEvent) -> bool {
        if let DispatchEvent::Failed { ref error, .. } = event {
            self.set_status(format!("Delivery failed: {}", error));
        }
        match self.host.widget_mut() {
            Some(widget) => widget.handle_dispatch(event),
            None => {
                tracing::debug!("Discarding dispatch result for unmounted widget");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::preview_with;
    use crate::app::PreviewOptions;
    use crate::host::HostState;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[rstest]
    #[case(ctrl('q'), true)]
    #[case(ctrl('c'), true)]
    #[case(key(KeyCode::Char('q')), false)]
    #[case(key(KeyCode::Esc), false)]
    fn test_quit_keys(#[case] event: KeyEvent, #[case] open: bool) {
        assert!(matches!(map_key(event, open), Some(Action::Quit)));
    }

    #[test]
    fn test_open_widget_receives_plain_keys() {
        assert!(matches!(map_key(key(KeyCode::Char('q')), true), Some(Action::WidgetKey(_))));
        assert!(matches!(map_key(key(KeyCode::Esc), true), Some(Action::WidgetKey(_))));
        assert!(matches!(map_key(ctrl('t'), true), Some(Action::CycleTheme)));
    }

    #[test]
    fn test_closed_widget_shortcuts() {
        assert!(matches!(map_key(key(KeyCode::Enter), false), Some(Action::ToggleWidget)));
        assert!(matches!(map_key(key(KeyCode::Char('p')), false), Some(Action::CyclePosition)));
        assert!(matches!(map_key(key(KeyCode::Char('r')), false), Some(Action::ForceUpdate)));
        assert!(map_key(key(KeyCode::Char('x')), false).is_none());
    }

    #[test]
    fn test_cycle_theme_sets_attribute() {
        let dir = TempDir::new().unwrap();
        let mut preview = preview_with(&dir, PreviewOptions::default());
        let names = preview.host().resolver().catalog().names();
        let start = names.iter().position(|n| n == DEFAULT_THEME).unwrap();

        preview.dispatch(Action::CycleTheme);
        let expected = &names[(start + 1) % names.len()];
        assert_eq!(preview.host().attributes().get("theme"), Some(expected.as_str()));
        assert_eq!(&preview.host().widget().unwrap().theme().name, expected);
        assert_eq!(preview.host().render_count(), 2);
    }

    #[test]
    fn test_cycle_position() {
        let dir = TempDir::new().unwrap();
        let mut preview = preview_with(&dir, PreviewOptions::default());
        preview.dispatch(Action::CyclePosition);
        assert_eq!(preview.host().position(), Position::BottomRight.next());
    }

    #[test]
    fn test_send_and_status() {
        let dir = TempDir::new().unwrap();
        let mut preview = preview_with(&dir, PreviewOptions::default());
        preview.dispatch(Action::ToggleWidget);
        assert_eq!(preview.status(), "Chat opened");

        for c in "hi there".chars() {
            preview.dispatch(Action::WidgetKey(key(KeyCode::Char(c))));
        }
        preview.dispatch(Action::WidgetKey(key(KeyCode::Enter)));
        assert_eq!(preview.status(), "Message sent: hi there");
        assert!(preview.host().widget().unwrap().is_typing());
    }

    #[test]
    fn test_toggle_mount() {
        let dir = TempDir::new().unwrap();
        let mut preview = preview_with(&dir, PreviewOptions::default());
        preview.dispatch(Action::ToggleMount);
        assert_eq!(preview.host().state(), HostState::Disconnected);
        assert!(preview.host().root().is_none());

        let event = DispatchEvent::Failed {
            session_id: "session_x".to_string(),
            message_id: 1,
            error: "boom".to_string(),
        };
        assert!(!preview.dispatch(Action::Dispatch(event)));

        preview.dispatch(Action::ToggleMount);
        assert!(preview.host().widget().is_some());
    }

    #[test]
    fn test_document_reload_reconfigures() {
        let dir = TempDir::new().unwrap();
        let page = dir.path().join("page.html");
        std::fs::write(&page, r#"<chat-widget theme="zen"></chat-widget>"#).unwrap();
        let mut preview = preview_with(
            &dir,
            PreviewOptions {
                document: Some(page.clone()),
                overrides: vec![("company-name".to_string(), "Acme".to_string())],
                ..Default::default()
            },
        );

        std::fs::write(&page, r#"<chat-widget theme="retro"></chat-widget>"#).unwrap();
        preview.dispatch(Action::DocumentChanged(page.clone()));
        let widget = preview.host().widget().unwrap();
        assert_eq!(widget.theme().name, "retro");
        assert_eq!(widget.theme().branding.company_name, "Acme");
        assert_eq!(preview.host().render_count(), 2);

        preview.dispatch(Action::DocumentChanged(page.clone()));
        assert!(preview.status().ends_with("(no changes)"));

        std::fs::remove_file(&page).unwrap();
        preview.dispatch(Action::DocumentChanged(page));
        assert!(preview.status().starts_with("Reload failed"));
        assert_eq!(preview.host().widget().unwrap().theme().name, "retro");
    }
}
