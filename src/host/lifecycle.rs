//! The `<chat-widget>` element as an explicit state machine:
//! `Disconnected -> Connected -> (attribute changed)* -> Disconnected`.
//!
//! Every effective change re-parses the whole attribute list and re-renders;
//! there is no incremental patching.

use serde::Serialize;

use super::attributes::{is_observed, Attributes, WidgetConfig};
use super::position::Position;
use super::resolver::{ThemeResolver, WidgetProps};
use super::style::HostStyle;
use crate::error::Result;
use crate::widget::view::ERROR_PLACEHOLDER;
use crate::widget::{ChatWidget, WidgetContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostState {
    #[default]
    Disconnected,
    Connected,
}

/// What the render root currently displays.
pub enum RootContent {
    Empty,
    Widget(Box<ChatWidget>),
    /// Visible placeholder after a failed render.
    Error(String),
}

/// Mount point for the presentation tree, created on first render and
/// dropped on unmount.
pub struct RenderRoot {
    content: RootContent,
}

impl Default for RenderRoot {
    fn default() -> Self {
        Self {
            content: RootContent::Empty,
        }
    }
}

impl RenderRoot {
    pub fn content(&self) -> &RootContent {
        &self.content
    }

    pub fn widget(&self) -> Option<&ChatWidget> {
        match &self.content {
            RootContent::Widget(widget) => Some(widget),
            _ => None,
        }
    }

    pub fn widget_mut(&mut self) -> Option<&mut ChatWidget> {
        match &mut self.content {
            RootContent::Widget(widget) => Some(widget),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.content {
            RootContent::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Hand new props to the mounted widget, mounting one if needed.
    fn render(&mut self, props: WidgetProps, context: &WidgetContext) -> Result<()> {
        match &mut self.content {
            RootContent::Widget(widget) => widget.set_props(props),
            _ => {
                let widget = ChatWidget::new(props, context)?;
                self.content = RootContent::Widget(Box::new(widget));
                Ok(())
            }
        }
    }

    fn show_error(&mut self) {
        self.content = RootContent::Error(ERROR_PLACEHOLDER.to_string());
    }
}

pub struct WidgetHost {
    state: HostState,
    attributes: Attributes,
    config: WidgetConfig,
    style: HostStyle,
    position: Position,
    root: Option<RenderRoot>,
    resolver: ThemeResolver,
    context: WidgetContext,
    render_count: u64,
}

impl WidgetHost {
    pub fn new(resolver: ThemeResolver, context: WidgetContext) -> Self {
        Self {
            state: HostState::Disconnected,
            attributes: Attributes::new(),
            config: WidgetConfig::default(),
            style: HostStyle::default(),
            position: Position::default(),
            root: None,
            resolver,
            context,
            render_count: 0,
        }
    }

    pub fn state(&self) -> HostState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == HostState::Connected
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn style(&self) -> &HostStyle {
        &self.style
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn root(&self) -> Option<&RenderRoot> {
        self.root.as_ref()
    }

    pub fn widget(&self) -> Option<&ChatWidget> {
        self.root.as_ref().and_then(RenderRoot::widget)
    }

    pub fn widget_mut(&mut self) -> Option<&mut ChatWidget> {
        self.root.as_mut().and_then(RenderRoot::widget_mut)
    }

    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    pub fn resolver(&self) -> &ThemeResolver {
        &self.resolver
    }

    /// Props for the current configuration, as the presentation tree would
    /// receive them.
    pub fn props(&self) -> WidgetProps {
        self.resolver.props(&self.config)
    }

    /// Element inserted into the document. `attributes` are merged over any
    /// recorded while disconnected.
    pub fn mount(&mut self, attributes: Attributes) {
        for (name, value) in attributes.iter() {
            self.attributes.set(name, value);
        }
        if self.is_connected() {
            tracing::debug!("Widget already connected, ignoring mount");
            return;
        }
        self.state = HostState::Connected;
        tracing::debug!("Widget connected with {} attributes", self.attributes.len());
        self.reparse();
        self.render();
    }

    /// Element removed from the document: the render root is dropped.
    pub fn unmount(&mut self) {
        if self.root.take().is_some() {
            tracing::debug!("Unmounted render root");
        }
        self.state = HostState::Disconnected;
        tracing::debug!("Widget disconnected");
    }

    /// Set one attribute. Returns whether the widget re-rendered.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> bool {
        let name = name.to_ascii_lowercase();
        let old = self.attributes.set(name.as_str(), value);
        self.attribute_changed(&name, old.as_deref(), Some(value))
    }

    pub fn remove_attribute(&mut self, name: &str) -> bool {
        let name = name.to_ascii_lowercase();
        let old = self.attributes.remove(&name);
        self.attribute_changed(&name, old.as_deref(), None)
    }

    fn attribute_changed(&mut self, name: &str, old: Option<&str>, new: Option<&str>) -> bool {
        if !is_observed(name) {
            return false;
        }
        if !self.is_connected() {
            tracing::debug!("Recorded '{}' while disconnected", name);
            return false;
        }
        if old == new {
            return false;
        }
        tracing::debug!("Attribute '{}' changed: {:?} -> {:?}", name, old, new);
        self.reparse();
        self.render();
        true
    }

    /// Replace the whole attribute list, as when the host document is
    /// reloaded. Renders once if any observed attribute changed.
    pub fn configure(&mut self, attributes: Attributes) -> bool {
        let changed: Vec<&str> = super::attributes::OBSERVED_ATTRIBUTES
            .iter()
            .copied()
            .filter(|name| self.attributes.get(name) != attributes.get(name))
            .collect();
        self.attributes = attributes;

        if changed.is_empty() || !self.is_connected() {
            return false;
        }
        tracing::debug!("Reconfigured widget, changed: {}", changed.join(", "));
        self.reparse();
        self.render();
        true
    }

    /// Re-parse and re-render regardless of state or changes.
    pub fn force_update(&mut self) {
        tracing::debug!("Force updating widget");
        self.reparse();
        self.render();
    }

    fn reparse(&mut self) {
        self.config = WidgetConfig::parse(&self.attributes);
    }

    fn render(&mut self) {
        self.position = self.style.apply(&self.config);
        tracing::trace!("Host style: {}", self.style.to_css());
        let props = self.resolver.props(&self.config);

        let root = self.root.get_or_insert_with(|| {
            tracing::debug!("Created render root");
            RenderRoot::default()
        });
        if let Err(e) = root.render(props, &self.context) {
            tracing::error!("Error in render: {}", e);
            root.show_error();
        }
        self.render_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeCatalog;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn host() -> WidgetHost {
        WidgetHost::new(
            ThemeResolver::new(Arc::new(ThemeCatalog::builtin())),
            WidgetContext::default(),
        )
    }

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_changes_before_mount_do_not_render() {
        let mut host = host();
        assert!(!host.set_attribute("theme", "zen"));
        assert_eq!(host.render_count(), 0);
        assert!(host.root().is_none());

        host.mount(Attributes::new());
        assert_eq!(host.state(), HostState::Connected);
        assert_eq!(host.render_count(), 1);
        assert_eq!(host.widget().unwrap().theme().name, "zen");
    }

    #[test]
    fn test_effective_changes_rerender() {
        let mut host = host();
        host.mount(attrs(&[("theme", "zen")]));

        assert!(host.set_attribute("theme", "gaming"));
        assert_eq!(host.render_count(), 2);
        assert_eq!(host.widget().unwrap().theme().name, "gaming");

        assert!(!host.set_attribute("theme", "gaming"));
        assert!(!host.set_attribute("data-id", "42"));
        assert_eq!(host.render_count(), 2);

        assert!(host.remove_attribute("theme"));
        assert_eq!(host.widget().unwrap().theme().name, "forest-green");
        assert!(!host.remove_attribute("theme"));
        assert_eq!(host.render_count(), 3);
    }

    #[test]
    fn test_theme_names_match_exactly() {
        let mut host = host();
        host.mount(attrs(&[("theme", "Modern-Dark")]));
        assert_eq!(host.widget().unwrap().theme().name, "forest-green");

        host.set_attribute("theme", "modern-dark");
        assert_eq!(host.widget().unwrap().theme().name, "modern-dark");
    }

    #[test]
    fn test_unmount_drops_root() {
        let mut host = host();
        host.mount(Attributes::new());
        host.unmount();
        assert_eq!(host.state(), HostState::Disconnected);
        assert!(host.root().is_none());
        assert!(!host.set_attribute("theme", "zen"));
        assert!(host.root().is_none());
    }

    #[test]
    fn test_conversation_survives_rerender() {
        let mut host = host();
        host.mount(Attributes::new());
        let session = host.widget().unwrap().session_id().to_string();
        host.widget_mut().unwrap().set_open(true);

        host.set_attribute("primary-color", "#112233");
        let widget = host.widget().unwrap();
        assert_eq!(widget.session_id(), session);
        assert!(widget.is_open());
        assert_eq!(widget.theme().colors.primary.as_str(), "#112233");
    }

    #[test]
    fn test_host_style_follows_attributes() {
        let mut host = host();
        host.mount(attrs(&[
            ("theme", "modern-dark"),
            ("primary-color", "#ff0000"),
            ("position", "bottom-left"),
        ]));

        assert_eq!(host.position(), Position::BottomLeft);
        assert_eq!(host.style().get("bottom"), Some("20px"));
        assert_eq!(host.style().get("left"), Some("20px"));
        assert_eq!(host.style().get("right"), None);
        assert_eq!(host.widget().unwrap().theme().colors.sent.as_str(), "#ff0000");

        host.set_attribute("position", "top-right");
        assert_eq!(host.style().get("bottom"), None);
        assert_eq!(host.style().get("top"), Some("20px"));
    }

    #[test]
    fn test_unresolvable_endpoints_keep_widget_mounted() {
        let mut host = host();
        host.mount(attrs(&[("api-endpoint", "/api/chat")]));
        assert!(host.widget().is_some());
        assert!(host.root().unwrap().error().is_none());

        host.widget_mut().unwrap().set_open(true);
        let session = host.widget().unwrap().session_id().to_string();
        assert!(host.set_attribute("webhook-url", "hooks/widget"));
        let widget = host.widget().unwrap();
        assert!(widget.is_open());
        assert_eq!(widget.session_id(), session);
    }

    #[test]
    fn test_error_placeholder_is_replaced_on_next_render() {
        let mut root = RenderRoot::default();
        root.show_error();
        assert_eq!(root.error(), Some(ERROR_PLACEHOLDER));
        assert!(root.widget().is_none());

        let props = ThemeResolver::new(Arc::new(ThemeCatalog::builtin())).props(&WidgetConfig::default());
        root.render(props, &WidgetContext::default()).unwrap();
        assert!(root.widget().is_some());
        assert!(root.error().is_none());
    }

    #[test]
    fn test_configure_renders_once_per_effective_change() {
        let mut host = host();
        host.mount(attrs(&[("theme", "zen"), ("company-name", "Acme")]));

        assert!(host.configure(attrs(&[("theme", "retro"), ("company-name", "Beta")])));
        assert_eq!(host.render_count(), 2);
        assert_eq!(host.widget().unwrap().theme().branding.company_name, "Beta");

        assert!(!host.configure(attrs(&[("theme", "retro"), ("company-name", "Beta"), ("id", "x")])));
        assert_eq!(host.render_count(), 2);
        assert_eq!(host.attributes().get("id"), Some("x"));
    }

    #[test]
    fn test_force_update_always_renders() {
        let mut host = host();
        host.mount(Attributes::new());
        host.force_update();
        host.force_update();
        assert_eq!(host.render_count(), 3);
    }
}
