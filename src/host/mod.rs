// Host module - the <chat-widget> element: attributes, resolution, host style and lifecycle

mod attributes;
mod document;
mod lifecycle;
mod position;
mod resolver;
mod style;

pub use attributes::{Attributes, WidgetConfig};
pub use document::element_attributes;
pub use lifecycle::{HostState, RootContent, WidgetHost};
pub use position::Position;
pub use resolver::{ThemeResolver, WidgetProps};
pub use style::HostStyle;
