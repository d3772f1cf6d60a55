use std::collections::BTreeMap;

use super::builtins::{ThemeCategory, ThemeDefinition, BUILTIN_THEMES};
use super::Theme;

/// Theme used when the `theme` attribute is absent or unknown.
pub const DEFAULT_THEME: &str = "forest-green";

/// Immutable theme lookup table: the built-in definitions plus any custom
/// themes loaded at startup. Built once, then shared read-only.
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    builtins: &'static [ThemeDefinition],
    custom: BTreeMap<String, Theme>,
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ThemeCatalog {
    pub fn builtin() -> Self {
        Self {
            builtins: BUILTIN_THEMES,
            custom: BTreeMap::new(),
        }
    }

    /// Catalog with additional themes, registered under their trimmed,
    /// lowercased names. A custom theme may not reuse a built-in name; such
    /// themes are skipped with a warning.
    pub fn with_custom(themes: impl IntoIterator<Item = Theme>) -> Self {
        let mut catalog = Self::builtin();

        for mut theme in themes {
            let key = normalize_name(&theme.name);
            if catalog.definition(&key).is_some() {
                tracing::warn!("Custom theme '{}' collides with a built-in theme, skipping", theme.name);
                continue;
            }
            if catalog.custom.contains_key(&key) {
                tracing::warn!("Duplicate custom theme '{}', keeping the first one", theme.name);
                continue;
            }
            tracing::debug!("Registered custom theme '{}'", key);
            theme.name = key.clone();
            catalog.custom.insert(key, theme);
        }

        catalog
    }

    fn definition(&self, key: &str) -> Option<&'static ThemeDefinition> {
        self.builtins.iter().find(|d| d.key == key)
    }

    /// Look up a theme by its exact key, returning an owned copy.
    pub fn get(&self, name: &str) -> Option<Theme> {
        self.definition(name)
            .map(ThemeDefinition::to_theme)
            .or_else(|| self.custom.get(name).cloned())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Look up `name`, falling back to [`DEFAULT_THEME`].
    pub fn resolve_or_default(&self, name: &str) -> Theme {
        match self.get(name) {
            Some(theme) => theme,
            None => {
                tracing::debug!("Unknown theme '{}', using {}", name, DEFAULT_THEME);
                self.default_theme()
            }
        }
    }

    pub fn default_theme(&self) -> Theme {
        self.definition(DEFAULT_THEME)
            .map(ThemeDefinition::to_theme)
            .unwrap_or_else(|| BUILTIN_THEMES[0].to_theme())
    }

    /// Built-in names in table order, then custom names alphabetically.
    pub fn names(&self) -> Vec<String> {
        self.builtins
            .iter()
            .map(|d| d.key.to_string())
            .chain(self.custom.keys().cloned())
            .collect()
    }

    /// Names grouped by category; empty categories are omitted.
    pub fn categories(&self) -> Vec<(ThemeCategory, Vec<String>)> {
        let mut groups: BTreeMap<ThemeCategory, Vec<String>> = BTreeMap::new();
        for definition in self.builtins {
            groups
                .entry(definition.category)
                .or_default()
                .push(definition.key.to_string());
        }
        if !self.custom.is_empty() {
            groups
                .entry(ThemeCategory::Custom)
                .or_default()
                .extend(self.custom.keys().cloned());
        }
        groups.into_iter().collect()
    }

    /// Every theme in the catalog, in [`Self::names`] order.
    pub fn themes(&self) -> Vec<Theme> {
        self.builtins
            .iter()
            .map(ThemeDefinition::to_theme)
            .chain(self.custom.values().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.builtins.len() + self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}
