// App module - interactive preview of one <chat-widget>
// - mod.rs: App and Preview structs, constructors, terminal setup
// - event_loop.rs: run() loop polling input, dispatch results and the document watcher
// - rendering.rs: host page backdrop, widget and status bar
// - handlers.rs: key mapping and action dispatch

mod event_loop;
mod handlers;
mod rendering;

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::config::{ConfigManager, ConfigWatcherMode};
use crate::dispatch::DispatchEvent;
use crate::error::{Result, WidgetError};
use crate::host::{element_attributes, ThemeResolver, WidgetHost};
use crate::widget::WidgetContext;

/// What to preview and how.
#[derive(Debug, Clone, Default)]
pub struct PreviewOptions {
    pub document: Option<PathBuf>,
    pub element: usize,
    pub overrides: Vec<(String, String)>,
    pub watch: bool,
}

/// Preview state, independent of the terminal.
pub struct Preview {
    host: WidgetHost,
    options: PreviewOptions,
    watcher: Option<ConfigWatcherMode>,
    dispatch_rx: mpsc::UnboundedReceiver<DispatchEvent>,
    status: String,
    should_quit: bool,
}

impl Preview {
    pub fn new(options: PreviewOptions, config: &ConfigManager) -> Result<Self> {
        let (dispatch_tx, dispatch_rx) = mpsc::unbounded_channel();
        let context = WidgetContext {
            settings: config.widget().clone(),
            dispatch_events: Some(dispatch_tx),
        };
        let resolver = ThemeResolver::new(config.catalog());

        let attributes = element_attributes(options.document.as_deref(), options.element, &options.overrides)?;
        let mut host = WidgetHost::new(resolver, context);
        host.mount(attributes);

        let watcher = match &options.document {
            Some(path) if options.watch && config.general().watch_host_document => {
                tracing::info!("Watching host document {}", path.display());
                Some(ConfigWatcherMode::for_file(path, config.general().watch_debounce_ms))
            }
            _ => None,
        };

        let status = match &options.document {
            Some(path) => format!("Loaded {}", path.display()),
            None => "No host document, using defaults".to_string(),
        };

        Ok(Self {
            host,
            options,
            watcher,
            dispatch_rx,
            status,
            should_quit: false,
        })
    }

    pub fn host(&self) -> &WidgetHost {
        &self.host
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_watching(&self) -> bool {
        self.watcher.is_some()
    }

    fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        tracing::debug!("Status: {}", self.status);
    }
}

pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    preview: Preview,
    tick_interval: Duration,
    last_tick: Instant,
    needs_redraw: bool,
}

impl App {
    pub fn new(options: PreviewOptions, config: &ConfigManager) -> Result<Self> {
        // Load before touching the terminal so document errors print normally
        let preview = Preview::new(options, config)?;

        enable_raw_mode().map_err(|e| WidgetError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
            .map_err(|e| WidgetError::Terminal(e.to_string()))?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| WidgetError::Terminal(e.to_string()))?;

        Ok(Self {
            terminal,
            preview,
            tick_interval: Duration::from_millis(config.general().tick_interval_ms.max(10)),
            last_tick: Instant::now(),
            needs_redraw: true,
        })
    }

    fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    pub(super) fn preview_with(dir: &TempDir, options: PreviewOptions) -> Preview {
        let config = ConfigManager::new(Some(dir.path().to_path_buf())).unwrap();
        Preview::new(options, &config).unwrap()
    }

    #[test]
    fn test_preview_mounts_widget() {
        let dir = TempDir::new().unwrap();
        let preview = preview_with(&dir, PreviewOptions::default());
        assert!(preview.host().is_connected());
        assert!(preview.host().widget().is_some());
        assert!(!preview.is_watching());
        assert_eq!(preview.status(), "No host document, using defaults");
    }

    #[test]
    fn test_missing_document_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config = ConfigManager::new(Some(dir.path().to_path_buf())).unwrap();
        let options = PreviewOptions {
            document: Some(dir.path().join("missing.html")),
            ..Default::default()
        };
        assert!(Preview::new(options, &config).is_err());
    }

    #[test]
    fn test_watcher_only_when_requested() {
        let dir = TempDir::new().unwrap();
        let page = dir.path().join("page.html");
        std::fs::write(&page, "<chat-widget theme=\"zen\"></chat-widget>").unwrap();

        let unwatched = preview_with(
            &dir,
            PreviewOptions {
                document: Some(page.clone()),
                ..Default::default()
            },
        );
        assert!(!unwatched.is_watching());

        let watched = preview_with(
            &dir,
            PreviewOptions {
                document: Some(page),
                watch: true,
                ..Default::default()
            },
        );
        assert!(watched.is_watching());
        assert_eq!(watched.host().widget().unwrap().theme().name, "zen");
    }
}
