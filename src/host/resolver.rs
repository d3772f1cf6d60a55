//! Turns a [`WidgetConfig`] into the theme and props handed to the
//! presentation tree.

use std::sync::Arc;

use serde::Serialize;

use super::attributes::{parse_leading_int, WidgetConfig};
use crate::error::{Result, WidgetError};
use crate::theme::color::darken;
use crate::theme::{validate, ColorValue, Theme, ThemeCatalog, DEFAULT_THEME, FALLBACK_PRIMARY};

/// Darkening applied to a custom primary color to derive its hover color.
pub const HOVER_DARKEN_PERCENT: f64 = 10.0;

/// Everything the presentation tree receives: the resolved theme plus every
/// configuration value, flattened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetProps {
    pub theme: Theme,
    #[serde(flatten)]
    pub config: WidgetConfig,
}

impl WidgetProps {
    pub fn api_endpoint(&self) -> Option<&str> {
        WidgetConfig::value(&self.config.api_endpoint)
    }

    pub fn webhook_url(&self) -> Option<&str> {
        WidgetConfig::value(&self.config.webhook_url)
    }
}

#[derive(Debug, Clone)]
pub struct ThemeResolver {
    catalog: Arc<ThemeCatalog>,
}

impl ThemeResolver {
    pub fn new(catalog: Arc<ThemeCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    /// Resolve the theme for `config`, substituting the fallback theme (with
    /// the same overrides) when the base theme cannot be used.
    pub fn resolve(&self, config: &WidgetConfig) -> Theme {
        match self.try_resolve(config) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!("Error creating custom theme: {}, using fallback theme", e);
                fallback_theme(config)
            }
        }
    }

    pub fn props(&self, config: &WidgetConfig) -> WidgetProps {
        WidgetProps {
            theme: self.resolve(config),
            config: config.clone(),
        }
    }

    /// Base theme lookup, deep copy, then overrides in a fixed order.
    pub fn try_resolve(&self, config: &WidgetConfig) -> Result<Theme> {
        let name = WidgetConfig::value(&config.theme).unwrap_or(DEFAULT_THEME);
        let mut theme = self.catalog.resolve_or_default(name);
        tracing::debug!("Resolving widget theme from base '{}'", theme.name);

        let issues = validate(&theme);
        if !issues.is_empty() {
            let summary: Vec<String> = issues.iter().map(ToString::to_string).collect();
            return Err(WidgetError::Theme(format!(
                "invalid theme structure for '{}': {}",
                theme.name,
                summary.join("; ")
            )));
        }

        apply_overrides(&mut theme, config);
        Ok(theme)
    }
}

fn apply_overrides(theme: &mut Theme, config: &WidgetConfig) {
    if let Some(primary) = WidgetConfig::value(&config.primary_color) {
        theme.colors.primary = ColorValue::new(primary);
        theme.colors.sent = ColorValue::new(primary);
        theme.colors.primary_hover = ColorValue::new(hover_for(primary));
        tracing::debug!("Applied custom primary color: {}", primary);
    }

    if let Some(secondary) = WidgetConfig::value(&config.secondary_color) {
        theme.colors.secondary = ColorValue::new(secondary);
        theme.colors.background = ColorValue::new(secondary);
    }

    if let Some(text) = WidgetConfig::value(&config.text_color) {
        theme.colors.text = ColorValue::new(text);
    }

    let branding = &mut theme.branding;
    for (slot, value) in [
        (&mut branding.company_name, &config.company_name),
        (&mut branding.support_title, &config.support_title),
        (&mut branding.support_subtitle, &config.support_subtitle),
        (&mut branding.placeholder, &config.placeholder),
        (&mut branding.footer_text, &config.footer_text),
    ] {
        if let Some(value) = WidgetConfig::value(value) {
            *slot = value.to_string();
        }
    }

    if let Some(width) = dimension(&config.width) {
        theme.width = width;
    }
    if let Some(height) = dimension(&config.height) {
        theme.height = height;
    }
}

/// Hover color for a custom primary. Values that are not hex colors cannot be
/// darkened and are used as-is.
fn hover_for(primary: &str) -> String {
    match darken(primary, HOVER_DARKEN_PERCENT) {
        Ok(hover) => hover,
        Err(e) => {
            tracing::warn!("Cannot derive hover color: {}, keeping {}", e, primary);
            primary.to_string()
        }
    }
}

/// Positive leading integer of a dimension attribute; anything else is
/// ignored. Unlike a bare `parseInt`, zero and negative sizes are not applied.
fn dimension(value: &Option<String>) -> Option<u32> {
    let raw = WidgetConfig::value(value)?;
    match parse_leading_int(raw).and_then(|n| u32::try_from(n).ok()) {
        Some(n) if n > 0 => Some(n),
        _ => {
            tracing::debug!("Ignoring non-numeric dimension '{}'", raw);
            None
        }
    }
}

/// Hard-coded theme carrying the configuration's overrides.
pub fn fallback_theme(config: &WidgetConfig) -> Theme {
    let mut theme = Theme::fallback("fallback");
    let primary = WidgetConfig::value(&config.primary_color).unwrap_or(FALLBACK_PRIMARY);
    theme.colors.primary_hover = ColorValue::new(hover_for(primary));
    apply_overrides(&mut theme, config);
    theme
}
