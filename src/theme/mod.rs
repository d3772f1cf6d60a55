mod builtins;
mod catalog;
pub mod color;
mod custom;
mod validation;

pub use builtins::{ThemeCategory, BUILTIN_THEMES};
pub use catalog::{ThemeCatalog, DEFAULT_THEME};
pub use color::ColorError;
pub use custom::load_custom_themes;
pub use validation::{validate, ThemeIssue};

use std::sync::LazyLock;

use ratatui::style::Color;
use regex::Regex;
use serde::{Deserialize, Serialize};

use color::Rgb;

static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*[\d.]+\s*)?\)$")
        .expect("static regex is valid")
});

/// A CSS color as written in a theme or attribute (`#rrggbb`, `#rgb`,
/// `rgb(..)`, `rgba(..)` or a basic color keyword).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorValue(String);

impl ColorValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn rgb(&self) -> Option<Rgb> {
        let value = self.0.trim();
        if let Ok(rgb) = Rgb::parse_hex(value) {
            return Some(rgb);
        }

        if let Some(caps) = RGB_FUNCTION.captures(value) {
            let channel = |i: usize| caps[i].parse::<u16>().ok().map(|v| v.min(255) as u8);
            return Some(Rgb::new(channel(1)?, channel(2)?, channel(3)?));
        }

        match value.to_ascii_lowercase().as_str() {
            "white" => Some(Rgb::new(255, 255, 255)),
            "black" => Some(Rgb::new(0, 0, 0)),
            "red" => Some(Rgb::new(255, 0, 0)),
            "green" => Some(Rgb::new(0, 128, 0)),
            "blue" => Some(Rgb::new(0, 0, 255)),
            "gray" | "grey" => Some(Rgb::new(128, 128, 128)),
            _ => None,
        }
    }

    /// Terminal color for this value. Alpha is dropped; unknown values map to
    /// the terminal default.
    pub fn to_color(&self) -> Color {
        self.rgb()
            .map(|Rgb { r, g, b }| Color::Rgb(r, g, b))
            .unwrap_or(Color::Reset)
    }
}

impl From<&str> for ColorValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for ColorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: ColorValue,
    pub primary_hover: ColorValue,
    pub secondary: ColorValue,
    pub text: ColorValue,
    pub text_secondary: ColorValue,
    pub border: ColorValue,
    pub background: ColorValue,
    pub received: ColorValue,
    pub sent: ColorValue,
    pub accent: ColorValue,
    pub surface: ColorValue,
}

impl ThemeColors {
    /// Every color slot with its attribute-facing (camelCase) key.
    pub fn entries(&self) -> [(&'static str, &ColorValue); 11] {
        [
            ("primary", &self.primary),
            ("primaryHover", &self.primary_hover),
            ("secondary", &self.secondary),
            ("text", &self.text),
            ("textSecondary", &self.text_secondary),
            ("border", &self.border),
            ("background", &self.background),
            ("received", &self.received),
            ("sent", &self.sent),
            ("accent", &self.accent),
            ("surface", &self.surface),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    pub company_name: String,
    pub support_title: String,
    pub support_subtitle: String,
    pub placeholder: String,
    pub footer_text: String,
}

impl Branding {
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("companyName", &self.company_name),
            ("supportTitle", &self.support_title),
            ("supportSubtitle", &self.support_subtitle),
            ("placeholder", &self.placeholder),
            ("footerText", &self.footer_text),
        ]
    }
}

/// A complete, owned theme record. Resolved per widget instance; never shared
/// mutably.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
    pub branding: Branding,
    pub width: u32,
    pub height: u32,
}

impl Theme {
    /// Hard-coded theme substituted for malformed records.
    pub fn fallback(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: ThemeColors {
                primary: ColorValue::new(FALLBACK_PRIMARY),
                primary_hover: ColorValue::new("#007c4f"),
                secondary: ColorValue::new("#f0fdf4"),
                text: ColorValue::new("#1f2937"),
                text_secondary: ColorValue::new("#6b7280"),
                border: ColorValue::new("#d1d5db"),
                background: ColorValue::new("#ffffff"),
                received: ColorValue::new("#f3f4f6"),
                sent: ColorValue::new(FALLBACK_PRIMARY),
                accent: ColorValue::new("#f59e0b"),
                surface: ColorValue::new("#fefefe"),
            },
            branding: Branding {
                company_name: "Your Company".to_string(),
                support_title: "Customer Support".to_string(),
                support_subtitle: "We're here to help".to_string(),
                placeholder: "Type your message...".to_string(),
                footer_text: "We typically reply in a few minutes".to_string(),
            },
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

pub const FALLBACK_PRIMARY: &str = "#059669";
pub const DEFAULT_WIDTH: u32 = 360;
pub const DEFAULT_HEIGHT: u32 = 500;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("#ff0000", Color::Rgb(255, 0, 0))]
    #[case("#0f0", Color::Rgb(0, 255, 0))]
    #[case("rgba(255, 255, 255, 0.1)", Color::Rgb(255, 255, 255))]
    #[case("rgb(10,20,30)", Color::Rgb(10, 20, 30))]
    #[case("White", Color::Rgb(255, 255, 255))]
    #[case("linear-gradient(red, blue)", Color::Reset)]
    fn test_color_value_to_terminal_color(#[case] input: &str, #[case] expected: Color) {
        assert_eq!(ColorValue::new(input).to_color(), expected);
    }

    #[test]
    fn test_theme_serializes_with_camel_case_keys() {
        let theme = ThemeCatalog::builtin().resolve_or_default("forest-green");
        let json = serde_json::to_value(&theme).unwrap();
        assert_eq!(json["colors"]["primaryHover"], "#047857");
        assert_eq!(json["branding"]["companyName"], "EcoTech");
        assert_eq!(json["width"], 360);
    }

    #[test]
    fn test_fallback_theme_is_complete_and_hover_is_darkened_primary() {
        let theme = Theme::fallback("fallback");
        assert!(validate(&theme).is_empty());
        assert_eq!(
            color::darken(FALLBACK_PRIMARY, 10.0).unwrap(),
            theme.colors.primary_hover.as_str()
        );
    }

    #[test]
    fn test_theme_toml_round_trip() {
        let theme = ThemeCatalog::builtin().resolve_or_default("modern-dark");
        let toml_str = toml::to_string_pretty(&theme).unwrap();
        let parsed: Theme = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, theme);
    }
}
