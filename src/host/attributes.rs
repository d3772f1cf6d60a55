//! The `<chat-widget>` attribute surface and its normalization into a
//! [`WidgetConfig`].

use std::collections::BTreeMap;

use serde::Serialize;

/// Attributes whose changes trigger a full re-resolve of the widget.
pub const OBSERVED_ATTRIBUTES: [&str; 18] = [
    "theme",
    "company-name",
    "support-title",
    "support-subtitle",
    "placeholder",
    "footer-text",
    "position",
    "width",
    "height",
    "z-index",
    "api-endpoint",
    "webhook-url",
    "custom-styles",
    "primary-color",
    "secondary-color",
    "text-color",
    "border-radius",
    "animation",
];

pub fn is_observed(name: &str) -> bool {
    OBSERVED_ATTRIBUTES.contains(&name)
}

/// `support-title` -> `supportTitle`. Only a hyphen followed by a lowercase
/// ASCII letter is folded; anything else is kept as written.
pub fn normalize_attribute(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }

    out
}

/// An ordered attribute list, as an element carries it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names are ASCII case-insensitive, as HTML attribute names are.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Set `name`, returning the previous value. New names keep insertion
    /// order; existing ones are updated in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into().to_ascii_lowercase();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.0.push((name, value));
                None
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.0.iter().position(|(n, _)| n.eq_ignore_ascii_case(name))?;
        Some(self.0.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.set(name, value);
        }
        attributes
    }
}

/// Flat configuration parsed from an element's attributes. Keys are the
/// camelCase forms of the attribute names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_styles: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<String>,
    /// Attributes outside the observed set, keyed by normalized name.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl WidgetConfig {
    /// Rebuild the configuration from the full attribute list.
    pub fn parse(attributes: &Attributes) -> Self {
        let mut config = WidgetConfig::default();
        for (name, value) in attributes.iter() {
            config.set(&normalize_attribute(name), value.to_string());
        }
        tracing::debug!(?config, "Parsed widget configuration");
        config
    }

    fn set(&mut self, key: &str, value: String) {
        let slot = match key {
            "theme" => &mut self.theme,
            "companyName" => &mut self.company_name,
            "supportTitle" => &mut self.support_title,
            "supportSubtitle" => &mut self.support_subtitle,
            "placeholder" => &mut self.placeholder,
            "footerText" => &mut self.footer_text,
            "position" => &mut self.position,
            "width" => &mut self.width,
            "height" => &mut self.height,
            "zIndex" => &mut self.z_index,
            "apiEndpoint" => &mut self.api_endpoint,
            "webhookUrl" => &mut self.webhook_url,
            "customStyles" => &mut self.custom_styles,
            "primaryColor" => &mut self.primary_color,
            "secondaryColor" => &mut self.secondary_color,
            "textColor" => &mut self.text_color,
            "borderRadius" => &mut self.border_radius,
            "animation" => &mut self.animation,
            _ => {
                self.extra.insert(key.to_string(), value);
                return;
            }
        };
        *slot = Some(value);
    }

    /// Non-empty value of an override; empty attributes count as absent.
    pub fn value<'a>(field: &'a Option<String>) -> Option<&'a str> {
        field.as_deref().filter(|v| !v.is_empty())
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits; trailing
/// text such as `px` is ignored. `None` when no digits lead.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());

    if end == 0 {
        return None;
    }

    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("theme", "theme")]
    #[case("company-name", "companyName")]
    #[case("z-index", "zIndex")]
    #[case("data-foo-bar", "dataFooBar")]
    #[case("trailing-", "trailing-")]
    #[case("double--dash", "double-Dash")]
    #[case("x-1", "x-1")]
    fn test_normalize_attribute(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_attribute(input), expected);
    }

    #[test]
    fn test_parse_maps_every_observed_attribute() {
        let attributes: Attributes = OBSERVED_ATTRIBUTES.iter().map(|name| (*name, *name)).collect();
        let config = WidgetConfig::parse(&attributes);
        assert_eq!(config.theme.as_deref(), Some("theme"));
        assert_eq!(config.z_index.as_deref(), Some("z-index"));
        assert_eq!(config.custom_styles.as_deref(), Some("custom-styles"));
        assert_eq!(config.animation.as_deref(), Some("animation"));
        assert!(config.extra.is_empty());
    }

    #[test]
    fn test_unobserved_attributes_land_in_extra() {
        let attributes: Attributes = [("id", "support"), ("data-locale", "en")].into_iter().collect();
        let config = WidgetConfig::parse(&attributes);
        assert_eq!(config.extra.get("id").map(String::as_str), Some("support"));
        assert_eq!(config.extra.get("dataLocale").map(String::as_str), Some("en"));
    }

    #[test]
    fn test_config_serializes_as_flat_props() {
        let attributes: Attributes = [("primary-color", "#112233"), ("id", "w1")].into_iter().collect();
        let json = serde_json::to_value(WidgetConfig::parse(&attributes)).unwrap();
        assert_eq!(json, serde_json::json!({"primaryColor": "#112233", "id": "w1"}));
    }

    #[test]
    fn test_attribute_set_and_remove() {
        let mut attributes = Attributes::new();
        assert_eq!(attributes.set("Theme", "zen"), None);
        assert_eq!(attributes.set("theme", "gaming"), Some("zen".to_string()));
        assert_eq!(attributes.get("theme"), Some("gaming"));
        assert_eq!(attributes.get("THEME"), Some("gaming"));
        assert_eq!(attributes.remove("Theme"), Some("gaming".to_string()));
        assert!(attributes.is_empty());
        assert_eq!(attributes.get("theme"), None);
    }

    #[rstest]
    #[case("420", Some(420))]
    #[case("420px", Some(420))]
    #[case("  12.5", Some(12))]
    #[case("-30", Some(-30))]
    #[case("+7", Some(7))]
    #[case("wide", None)]
    #[case("", None)]
    #[case("px42", None)]
    fn test_parse_leading_int(#[case] input: &str, #[case] expected: Option<i64>) {
        assert_eq!(parse_leading_int(input), expected);
    }

    #[test]
    fn test_empty_values_count_as_absent() {
        assert_eq!(WidgetConfig::value(&Some(String::new())), None);
        assert_eq!(WidgetConfig::value(&Some("x".to_string())), Some("x"));
        assert_eq!(WidgetConfig::value(&None), None);
    }
}
