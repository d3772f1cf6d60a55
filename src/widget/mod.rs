//! The chat widget presentation tree: toggle button, header, message list,
//! typing indicator, composer and footer.

pub mod bubble;
pub mod composer;
pub mod message;
pub mod typing;
pub mod view;

use std::collections::VecDeque;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc::UnboundedSender;

use crate::config::WidgetSettings;
use crate::dispatch::{new_session_id, DispatchEvent, Dispatcher, Endpoints};
use crate::error::Result;
use crate::host::{Position, WidgetProps};
use crate::theme::Theme;

pub use composer::Composer;
pub use message::{sample_conversation, DeliveryStatus, Message, MessageKind};
pub use typing::TypingIndicator;

/// What a widget interaction produced. `None` means the input was consumed
/// with nothing further to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetAction {
    None,
    /// Composer asked to send its draft.
    Submit,
    Toggled(bool),
    MessageSent(String),
}

/// Shared inputs every widget instance is created with.
#[derive(Debug, Clone, Default)]
pub struct WidgetContext {
    pub settings: WidgetSettings,
    pub dispatch_events: Option<UnboundedSender<DispatchEvent>>,
}

#[derive(Debug, Clone)]
struct PendingReply {
    due: Instant,
    text: String,
}

pub struct ChatWidget {
    props: WidgetProps,
    settings: WidgetSettings,
    session_id: String,
    dispatcher: Option<Dispatcher>,
    dispatch_events: Option<UnboundedSender<DispatchEvent>>,
    open: bool,
    composer: Composer,
    messages: Vec<Message>,
    next_id: u64,
    pending_replies: VecDeque<PendingReply>,
    awaiting_api: usize,
    typing: TypingIndicator,
    /// Rows scrolled up from the newest message.
    scroll: u16,
}

impl ChatWidget {
    pub fn new(props: WidgetProps, context: &WidgetContext) -> Result<Self> {
        let messages = if context.settings.sample_conversation {
            sample_conversation()
        } else {
            Vec::new()
        };

        let mut widget = Self {
            props,
            settings: context.settings.clone(),
            session_id: new_session_id(),
            dispatcher: None,
            dispatch_events: context.dispatch_events.clone(),
            open: context.settings.start_open,
            composer: Composer::new(),
            next_id: messages.len() as u64,
            messages,
            pending_replies: VecDeque::new(),
            awaiting_api: 0,
            typing: TypingIndicator::new(),
            scroll: 0,
        };
        widget.dispatcher = widget.build_dispatcher()?;
        tracing::debug!("Created chat widget {}", widget.session_id);
        Ok(widget)
    }

    /// Endpoints that cannot be parsed do not fail here; messages sent to
    /// them are marked failed instead.
    fn build_dispatcher(&self) -> Result<Option<Dispatcher>> {
        let api = self.props.api_endpoint();
        let webhook = self.props.webhook_url();
        if api.is_none() && webhook.is_none() {
            return Ok(None);
        }
        let base = self.settings.endpoint_base();
        let endpoints = Endpoints {
            api,
            webhook,
            base: base.as_ref(),
        };
        Dispatcher::new(
            endpoints,
            self.session_id.clone(),
            self.settings.request_timeout(),
            self.dispatch_events.clone(),
        )
        .map(Some)
    }

    /// Replace the props, keeping conversation state. The dispatcher is
    /// rebuilt when the endpoints change.
    pub fn set_props(&mut self, props: WidgetProps) -> Result<()> {
        let endpoints_changed =
            props.api_endpoint() != self.props.api_endpoint() || props.webhook_url() != self.props.webhook_url();
        self.props = props;
        if endpoints_changed {
            self.dispatcher = self.build_dispatcher().unwrap_or_else(|e| {
                tracing::warn!("Dispatcher unavailable for {}: {}", self.session_id, e);
                None
            });
        }
        Ok(())
    }

    pub fn props(&self) -> &WidgetProps {
        &self.props
    }

    pub fn theme(&self) -> &Theme {
        &self.props.theme
    }

    pub fn position(&self) -> Position {
        Position::resolve(self.props.config.position.as_deref().filter(|p| !p.is_empty()))
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn typing(&self) -> &TypingIndicator {
        &self.typing
    }

    pub fn is_typing(&self) -> bool {
        self.typing.is_active()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn toggle(&mut self) -> WidgetAction {
        self.set_open(!self.open)
    }

    pub fn set_open(&mut self, open: bool) -> WidgetAction {
        self.open = open;
        if open {
            self.scroll = 0;
        }
        tracing::debug!("Widget toggled {}", if open { "open" } else { "closed" });
        WidgetAction::Toggled(open)
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_add(rows);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    /// Keys for an open widget. Closed widgets only react to toggling, which
    /// the caller handles.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<WidgetAction> {
        if !self.open {
            return None;
        }
        match key.code {
            KeyCode::Esc => Some(self.set_open(false)),
            KeyCode::PageUp => {
                self.scroll_up(5);
                Some(WidgetAction::None)
            }
            KeyCode::PageDown => {
                self.scroll_down(5);
                Some(WidgetAction::None)
            }
            _ => match self.composer.handle_key(key)? {
                WidgetAction::Submit => Some(self.send(now).unwrap_or(WidgetAction::None)),
                other => Some(other),
            },
        }
    }

    pub fn paste(&mut self, text: &str) {
        if self.open {
            self.composer.paste_text(text);
        }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Send the draft. Blank drafts are ignored and keep the draft as typed.
    pub fn send(&mut self, now: Instant) -> Option<WidgetAction> {
        let text = self.composer.text().trim().to_string();
        if text.is_empty() {
            return None;
        }
        self.composer.clear();

        let id = self.next_id();
        let dispatched = self
            .dispatcher
            .as_ref()
            .map(|dispatcher| dispatcher.send(id, &text))
            .unwrap_or(false);

        let status = if dispatched {
            self.awaiting_api += 1;
            DeliveryStatus::Sending
        } else if self.props.api_endpoint().is_some() {
            DeliveryStatus::Failed
        } else {
            DeliveryStatus::Sent
        };
        self.messages.push(Message::sent(id, text.clone(), status));
        self.scroll = 0;

        if self.props.api_endpoint().is_none() {
            self.pending_replies.push_back(PendingReply {
                due: now + self.settings.reply_delay(),
                text: self.settings.auto_reply.clone(),
            });
        }
        self.update_typing();

        tracing::debug!("Message {} sent ({})", id, status.label());
        Some(WidgetAction::MessageSent(text))
    }

    fn update_typing(&mut self) {
        self.typing
            .set_active(!self.pending_replies.is_empty() || self.awaiting_api > 0);
    }

    /// Deliver due auto-replies and advance the typing animation. Returns
    /// whether anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(reply) = self.pending_replies.front() {
            if reply.due > now {
                break;
            }
            if let Some(reply) = self.pending_replies.pop_front() {
                let id = self.next_id();
                self.messages.push(Message::received(id, reply.text));
                changed = true;
            }
        }
        self.update_typing();
        self.typing.tick(now) || changed
    }

    /// Apply a dispatcher outcome. Events for another session are ignored.
    pub fn handle_dispatch(&mut self, event: DispatchEvent) -> bool {
        if event.session_id() != self.session_id {
            tracing::debug!("Dropping dispatch result for session {}", event.session_id());
            return false;
        }

        let (message_id, status, reply) = match event {
            DispatchEvent::Delivered { message_id, reply, .. } => (message_id, DeliveryStatus::Delivered, reply),
            DispatchEvent::Failed { message_id, .. } => (message_id, DeliveryStatus::Failed, None),
        };

        if let Some(message) = self.messages.iter_mut().find(|m| m.id == message_id) {
            message.status = Some(status);
        }
        if let Some(reply) = reply {
            let id = self.next_id();
            self.messages.push(Message::received(id, reply));
            self.scroll = 0;
        }
        self.awaiting_api = self.awaiting_api.saturating_sub(1);
        self.update_typing();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Attributes, ThemeResolver, WidgetConfig};
    use crate::theme::ThemeCatalog;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::time::Duration;

    fn props(attrs: &[(&str, &str)]) -> WidgetProps {
        let attributes: Attributes = attrs.iter().copied().collect();
        ThemeResolver::new(Arc::new(ThemeCatalog::builtin())).props(&WidgetConfig::parse(&attributes))
    }

    fn open_widget(attrs: &[(&str, &str)]) -> ChatWidget {
        let mut widget = ChatWidget::new(props(attrs), &WidgetContext::default()).unwrap();
        widget.set_open(true);
        widget
    }

    fn type_text(widget: &mut ChatWidget, text: &str, now: Instant) {
        for c in text.chars() {
            widget.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), now);
        }
    }

    #[test]
    fn test_new_widget_starts_closed_with_sample_conversation() {
        let widget = ChatWidget::new(props(&[]), &WidgetContext::default()).unwrap();
        assert!(!widget.is_open());
        assert_eq!(widget.messages().len(), 5);
        assert!(!widget.is_typing());
    }

    #[test]
    fn test_sample_conversation_can_be_disabled() {
        let context = WidgetContext {
            settings: WidgetSettings {
                sample_conversation: false,
                start_open: true,
                ..Default::default()
            },
            dispatch_events: None,
        };
        let widget = ChatWidget::new(props(&[]), &context).unwrap();
        assert!(widget.messages().is_empty());
        assert!(widget.is_open());
    }

    #[test]
    fn test_blank_draft_is_not_sent() {
        let now = Instant::now();
        let mut widget = open_widget(&[]);
        type_text(&mut widget, "   ", now);
        assert_eq!(widget.send(now), None);
        assert_eq!(widget.messages().len(), 5);
        assert_eq!(widget.composer().text(), "   ");
    }

    #[test]
    fn test_send_trims_and_auto_replies_after_delay() {
        let now = Instant::now();
        let mut widget = open_widget(&[]);
        type_text(&mut widget, "  hello  ", now);

        let action = widget.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), now);
        assert_eq!(action, Some(WidgetAction::MessageSent("hello".to_string())));
        assert!(widget.composer().is_empty());
        let sent = widget.messages().last().unwrap();
        assert_eq!(sent.message, "hello");
        assert_eq!(sent.status, Some(DeliveryStatus::Sent));
        assert!(widget.is_typing());

        widget.tick(now + Duration::from_millis(999));
        assert_eq!(widget.messages().len(), 6);

        assert!(widget.tick(now + Duration::from_millis(1000)));
        let reply = widget.messages().last().unwrap();
        assert_eq!(reply.kind, MessageKind::Received);
        assert_eq!(
            reply.message,
            "Thank you for your message. Our team will get back to you shortly!"
        );
        assert!(!widget.is_typing());
    }

    #[test]
    fn test_replies_are_delivered_in_order() {
        let now = Instant::now();
        let mut widget = open_widget(&[]);
        type_text(&mut widget, "one", now);
        widget.send(now);
        type_text(&mut widget, "two", now);
        widget.send(now + Duration::from_millis(10));

        widget.tick(now + Duration::from_secs(2));
        let kinds: Vec<_> = widget.messages()[5..].iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![MessageKind::Sent, MessageKind::Sent, MessageKind::Received, MessageKind::Received]
        );
    }

    #[test]
    fn test_api_endpoint_without_runtime_marks_failed_and_skips_auto_reply() {
        let now = Instant::now();
        let mut widget = open_widget(&[("api-endpoint", "https://example.com/chat")]);
        type_text(&mut widget, "hello", now);
        widget.send(now);

        assert_eq!(widget.messages().last().unwrap().status, Some(DeliveryStatus::Failed));
        widget.tick(now + Duration::from_secs(5));
        assert_eq!(widget.messages().len(), 6);
    }

    #[test]
    fn test_dispatch_events_update_status_and_append_reply() {
        let mut widget = open_widget(&[]);
        widget.messages.push(Message::sent(42, "question", DeliveryStatus::Sending));
        widget.awaiting_api = 1;

        let foreign = DispatchEvent::Failed {
            session_id: "session_other0000".to_string(),
            message_id: 42,
            error: "nope".to_string(),
        };
        assert!(!widget.handle_dispatch(foreign));

        let delivered = DispatchEvent::Delivered {
            session_id: widget.session_id().to_string(),
            message_id: 42,
            reply: Some("answer".to_string()),
        };
        assert!(widget.handle_dispatch(delivered));
        let question = widget.messages().iter().find(|m| m.id == 42).unwrap();
        assert_eq!(question.status, Some(DeliveryStatus::Delivered));
        assert_eq!(widget.messages().last().unwrap().message, "answer");
        assert!(!widget.is_typing());
    }

    #[test]
    fn test_escape_closes_and_set_props_keeps_conversation() {
        let now = Instant::now();
        let mut widget = open_widget(&[]);
        type_text(&mut widget, "draft", now);
        assert_eq!(
            widget.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), now),
            Some(WidgetAction::Toggled(false))
        );

        widget.set_props(props(&[("theme", "gaming"), ("position", "top-left")])).unwrap();
        assert_eq!(widget.theme().name, "gaming");
        assert_eq!(widget.position(), Position::TopLeft);
        assert_eq!(widget.composer().text(), "draft");
        assert_eq!(widget.messages().len(), 5);
    }

    #[test]
    fn test_relative_endpoint_keeps_widget_and_fails_message() {
        let now = Instant::now();
        let mut widget = open_widget(&[("api-endpoint", "/api/chat")]);
        type_text(&mut widget, "hello", now);
        widget.send(now);
        assert_eq!(widget.messages().last().unwrap().status, Some(DeliveryStatus::Failed));

        widget.set_props(props(&[("webhook-url", "not a url")])).unwrap();
        assert!(widget.is_open());
        assert_eq!(widget.messages().len(), 6);
    }

    #[test]
    fn test_endpoint_base_resolves_relative_endpoints() {
        let context = WidgetContext {
            settings: WidgetSettings {
                endpoint_base: Some("https://shop.example.com/".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let widget = ChatWidget::new(props(&[("api-endpoint", "/api/chat")]), &context).unwrap();
        assert!(widget.dispatcher.is_some());
    }
}
