// Event loop - main run() method, dispatch results and document watching

use std::time::{Duration, Instant};

use crossterm::event;

use super::{App, Preview};
use crate::action::Action;
use crate::config::ConfigEvent;
use crate::error::{Result, WidgetError};

impl Preview {
    /// Drain finished dispatches. Returns true if anything changed.
    pub(super) fn poll_dispatch_events(&mut self) -> bool {
        let mut events = Vec::new();
        while let Ok(event) = self.dispatch_rx.try_recv() {
            events.push(event);
        }

        let mut changed = false;
        for event in events {
            changed |= self.dispatch(Action::Dispatch(event));
        }
        changed
    }

    /// Poll the host document watcher. Returns true if the document changed.
    pub(super) fn poll_document_watcher(&mut self) -> bool {
        let events = match self.watcher.as_mut() {
            Some(watcher) => watcher.poll_events(),
            None => return false,
        };

        let mut changed = false;
        for event in events {
            match event {
                ConfigEvent::Changed(path) => {
                    changed |= self.dispatch(Action::DocumentChanged(path));
                }
                ConfigEvent::Error(msg) => {
                    tracing::warn!("Document watcher error: {}", msg);
                }
            }
        }
        changed
    }
}

impl App {
    pub fn run(&mut self) -> Result<()> {
        loop {
            // ---- 1. Poll non-input sources ----

            if self.preview.poll_dispatch_events() {
                self.mark_dirty();
            }

            if self.preview.poll_document_watcher() {
                self.mark_dirty();
            }

            // Tick (reply delays, typing animation)
            if self.last_tick.elapsed() >= self.tick_interval {
                if self.preview.dispatch(Action::Tick) {
                    self.mark_dirty();
                }
                self.last_tick = Instant::now();
            }

            if self.preview.should_quit() {
                break;
            }

            // ---- 2. Poll user input ----

            if event::poll(Duration::from_millis(16)).map_err(|e| WidgetError::Terminal(e.to_string()))? {
                let event = event::read().map_err(|e| WidgetError::Terminal(e.to_string()))?;

                if matches!(event, event::Event::Resize(_, _)) {
                    self.mark_dirty();
                }
                if let Some(action) = self.preview.handle_event(event) {
                    if self.preview.dispatch(action) {
                        self.mark_dirty();
                    }
                }
            }

            if self.preview.should_quit() {
                break;
            }

            // ---- 3. Draw once if anything changed ----

            if self.needs_redraw {
                self.draw()?;
                self.needs_redraw = false;
            }
        }

        tracing::info!("Preview closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::app::tests::preview_with;
    use crate::app::PreviewOptions;
    use crate::dispatch::DispatchEvent;
    use tempfile::TempDir;

    #[test]
    fn test_dispatch_events_reach_the_widget() {
        let dir = TempDir::new().unwrap();
        let mut preview = preview_with(&dir, PreviewOptions::default());
        assert!(!preview.poll_dispatch_events());

        let sender = preview_sender(&mut preview);
        let session_id = preview.host().widget().unwrap().session_id().to_string();
        let before = preview.host().widget().unwrap().messages().len();

        sender
            .send(DispatchEvent::Delivered {
                session_id: session_id.clone(),
                message_id: 999,
                reply: Some("From the API".to_string()),
            })
            .unwrap();
        sender
            .send(DispatchEvent::Delivered {
                session_id: "session_other".to_string(),
                message_id: 999,
                reply: Some("Not for us".to_string()),
            })
            .unwrap();

        assert!(preview.poll_dispatch_events());
        let widget = preview.host().widget().unwrap();
        assert_eq!(widget.messages().len(), before + 1);
        assert_eq!(widget.messages().last().unwrap().message, "From the API");
    }

    fn preview_sender(
        preview: &mut super::Preview,
    ) -> tokio::sync::mpsc::UnboundedSender<DispatchEvent> {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        preview.dispatch_rx = rx;
        tx
    }

    #[test]
    fn test_no_watcher_no_events() {
        let dir = TempDir::new().unwrap();
        let mut preview = preview_with(&dir, PreviewOptions::default());
        assert!(!preview.poll_document_watcher());
    }
}
