use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::attributes::WidgetConfig;
use super::position::Position;

pub const DEFAULT_Z_INDEX: &str = "1000";

const INSET_PROPERTIES: [&str; 4] = ["top", "bottom", "left", "right"];

/// Inline style of the host element, property name -> value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HostStyle(BTreeMap<String, String>);

impl HostStyle {
    /// The style a freshly created host element gets for `config`.
    pub fn from_config(config: &WidgetConfig) -> (Self, Position) {
        let mut style = HostStyle::default();
        let position = style.apply(config);
        (style, position)
    }

    /// Update the style in place for `config`.
    ///
    /// Only the four insets are cleared first. Then `position: fixed`,
    /// `z-index`, the insets of the resolved position, `border-radius` and
    /// `animation` when given, and every property of the `custom-styles` JSON
    /// object on top. Properties from earlier renders that are not set again
    /// stay in place.
    pub fn apply(&mut self, config: &WidgetConfig) -> Position {
        for inset in INSET_PROPERTIES {
            self.0.remove(inset);
        }

        let position = Position::resolve(WidgetConfig::value(&config.position));
        self.set_property("position", "fixed");
        self.set_property(
            "z-index",
            WidgetConfig::value(&config.z_index).unwrap_or(DEFAULT_Z_INDEX),
        );
        for (property, value) in position.insets().properties() {
            self.set_property(property, value);
        }

        if let Some(radius) = WidgetConfig::value(&config.border_radius) {
            self.set_property("border-radius", radius);
        }
        if let Some(animation) = WidgetConfig::value(&config.animation) {
            self.set_property("animation", animation);
        }
        if let Some(custom) = WidgetConfig::value(&config.custom_styles) {
            self.apply_custom_styles(custom);
        }

        position
    }

    /// Apply a JSON object of style properties. Malformed JSON is logged and
    /// ignored; nothing already set is touched in that case.
    pub fn apply_custom_styles(&mut self, json: &str) -> usize {
        let properties = match serde_json::from_str::<Value>(json) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                tracing::warn!("custom-styles must be a JSON object, got: {}", other);
                return 0;
            }
            Err(e) => {
                tracing::warn!("Invalid custom styles JSON {:?}: {}", json, e);
                return 0;
            }
        };

        let mut applied = 0;
        for (property, value) in properties {
            let value = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => {
                    tracing::warn!("Ignoring non-scalar custom style {}: {}", property, other);
                    continue;
                }
            };
            self.set_property(&property, &value);
            applied += 1;
        }
        applied
    }

    /// Set a property; an empty value removes it, as the DOM does.
    pub fn set_property(&mut self, property: &str, value: &str) {
        if value.is_empty() {
            self.0.remove(property);
        } else {
            self.0.insert(property.to_string(), value.to_string());
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `prop: value; prop: value` in property order.
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::attributes::Attributes;
    use pretty_assertions::assert_eq;

    fn style_for(attrs: &[(&str, &str)]) -> HostStyle {
        let attributes: Attributes = attrs.iter().copied().collect();
        HostStyle::from_config(&WidgetConfig::parse(&attributes)).0
    }

    #[test]
    fn test_default_style() {
        assert_eq!(style_for(&[]).to_css(), "bottom: 20px; position: fixed; right: 20px; z-index: 1000");
    }

    #[test]
    fn test_position_and_extras() {
        let style = style_for(&[
            ("position", "top-left"),
            ("z-index", "50"),
            ("border-radius", "12px"),
            ("animation", "fade-in 0.3s"),
        ]);
        assert_eq!(style.get("top"), Some("20px"));
        assert_eq!(style.get("left"), Some("20px"));
        assert_eq!(style.get("bottom"), None);
        assert_eq!(style.get("right"), None);
        assert_eq!(style.get("z-index"), Some("50"));
        assert_eq!(style.get("border-radius"), Some("12px"));
        assert_eq!(style.get("animation"), Some("fade-in 0.3s"));
    }

    #[test]
    fn test_custom_styles_override_and_stringify() {
        let style = style_for(&[(
            "custom-styles",
            r#"{"box-shadow": "0 0 4px #000", "opacity": 0.9, "z-index": 7, "nested": {"a": 1}}"#,
        )]);
        assert_eq!(style.get("box-shadow"), Some("0 0 4px #000"));
        assert_eq!(style.get("opacity"), Some("0.9"));
        assert_eq!(style.get("z-index"), Some("7"));
        assert_eq!(style.get("nested"), None);
    }

    #[test]
    fn test_invalid_custom_styles_leave_other_properties_alone() {
        let base = style_for(&[("position", "bottom-left"), ("border-radius", "8px")]);
        let with_bad_json = style_for(&[
            ("position", "bottom-left"),
            ("border-radius", "8px"),
            ("custom-styles", "{invalid json"),
        ]);
        assert_eq!(with_bad_json, base);
    }

    #[test]
    fn test_apply_clears_only_insets() {
        let mut style = HostStyle::default();
        let first: Attributes = [
            ("position", "top-left"),
            ("border-radius", "12px"),
            ("custom-styles", r#"{"opacity": "0.5"}"#),
        ]
        .into_iter()
        .collect();
        style.apply(&WidgetConfig::parse(&first));

        let position = style.apply(&WidgetConfig::parse(&Attributes::new()));
        assert_eq!(position, Position::BottomRight);
        assert_eq!(style.get("top"), None);
        assert_eq!(style.get("left"), None);
        assert_eq!(style.get("bottom"), Some("20px"));
        assert_eq!(style.get("right"), Some("20px"));
        assert_eq!(style.get("border-radius"), Some("12px"));
        assert_eq!(style.get("opacity"), Some("0.5"));
    }

    #[test]
    fn test_non_object_json_is_ignored() {
        let mut style = HostStyle::default();
        assert_eq!(style.apply_custom_styles("[1, 2]"), 0);
        assert!(style.is_empty());
    }

    #[test]
    fn test_empty_value_removes_property() {
        let mut style = HostStyle::default();
        style.set_property("color", "red");
        style.set_property("color", "");
        assert_eq!(style.get("color"), None);
    }
}
