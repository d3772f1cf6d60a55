//! User-defined themes loaded from `<config-dir>/themes/*.toml`.
//!
//! A theme file must populate every color and branding key. Files that do
//! not (or that fail to parse) are replaced by [`Theme::fallback`] under the
//! file's name so a host page referencing them still gets a usable widget.

use std::path::Path;

use serde::Deserialize;

use super::{validate, Branding, ColorValue, Theme, ThemeColors, ThemeIssue, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialColors {
    pub primary: Option<String>,
    pub primary_hover: Option<String>,
    pub secondary: Option<String>,
    pub text: Option<String>,
    pub text_secondary: Option<String>,
    pub border: Option<String>,
    pub background: Option<String>,
    pub received: Option<String>,
    pub sent: Option<String>,
    pub accent: Option<String>,
    pub surface: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialBranding {
    pub company_name: Option<String>,
    pub support_title: Option<String>,
    pub support_subtitle: Option<String>,
    pub placeholder: Option<String>,
    pub footer_text: Option<String>,
}

/// A theme record as written by hand; every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialTheme {
    pub name: Option<String>,
    pub colors: PartialColors,
    pub branding: PartialBranding,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl PartialTheme {
    /// Assemble a complete theme, or report what is missing.
    pub fn into_theme(self, default_name: &str) -> Result<Theme, Vec<ThemeIssue>> {
        let color = |v: Option<String>| ColorValue::new(v.unwrap_or_default());
        let text = |v: Option<String>| v.unwrap_or_default();
        let c = self.colors;
        let b = self.branding;

        let theme = Theme {
            name: self.name.unwrap_or_else(|| default_name.to_string()),
            colors: ThemeColors {
                primary: color(c.primary),
                primary_hover: color(c.primary_hover),
                secondary: color(c.secondary),
                text: color(c.text),
                text_secondary: color(c.text_secondary),
                border: color(c.border),
                background: color(c.background),
                received: color(c.received),
                sent: color(c.sent),
                accent: color(c.accent),
                surface: color(c.surface),
            },
            branding: Branding {
                company_name: text(b.company_name),
                support_title: text(b.support_title),
                support_subtitle: text(b.support_subtitle),
                placeholder: text(b.placeholder),
                footer_text: text(b.footer_text),
            },
            width: self.width.unwrap_or(DEFAULT_WIDTH),
            height: self.height.unwrap_or(DEFAULT_HEIGHT),
        };

        let issues = validate(&theme);
        if issues.is_empty() {
            Ok(theme)
        } else {
            Err(issues)
        }
    }
}

/// Parse one theme file. Malformed content yields the fallback theme.
pub fn load_theme_file(path: &Path) -> Theme {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("custom")
        .to_string();

    let partial = match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<PartialTheme>(&content) {
            Ok(partial) => partial,
            Err(e) => {
                tracing::warn!("Failed to parse theme {}: {}", path.display(), e);
                return Theme::fallback(stem);
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read theme {}: {}", path.display(), e);
            return Theme::fallback(stem);
        }
    };

    let name = partial.name.clone().unwrap_or_else(|| stem.clone());
    match partial.into_theme(&stem) {
        Ok(theme) => theme,
        Err(issues) => {
            let summary: Vec<String> = issues.iter().map(ToString::to_string).collect();
            tracing::warn!(
                "Theme {} is malformed ({}), substituting fallback theme",
                path.display(),
                summary.join("; ")
            );
            Theme::fallback(name)
        }
    }
}

/// Load every `*.toml` theme in `dir`, sorted by file name. A missing
/// directory is not an error.
pub fn load_custom_themes(dir: &Path) -> Vec<Theme> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => {
            tracing::debug!("No custom theme directory at {}", dir.display());
            return Vec::new();
        }
    };

    let mut paths: Vec<_> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("toml"))
        .collect();
    paths.sort();

    paths.iter().map(|path| load_theme_file(path)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const COMPLETE: &str = r##"
name = "acme"
width = 400
height = 600

[colors]
primary = "#ff5500"
primaryHover = "#dd3300"
secondary = "#fff7ed"
text = "#111111"
textSecondary = "#666666"
border = "#dddddd"
background = "#ffffff"
received = "#eeeeee"
sent = "#ff5500"
accent = "#00aaff"
surface = "#fafafa"

[branding]
companyName = "Acme"
supportTitle = "Acme Help"
supportSubtitle = "Beep beep"
placeholder = "Ask away..."
footerText = "Fast replies"
"##;

    #[test]
    fn test_complete_theme_file_loads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("acme.toml");
        fs::write(&path, COMPLETE).unwrap();

        let theme = load_theme_file(&path);
        assert_eq!(theme.name, "acme");
        assert_eq!(theme.colors.primary.as_str(), "#ff5500");
        assert_eq!(theme.branding.company_name, "Acme");
        assert_eq!((theme.width, theme.height), (400, 600));
    }

    #[test]
    fn test_partial_theme_is_substituted_with_fallback() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("half.toml");
        fs::write(&path, "[colors]\nprimary = \"#ff0000\"\n").unwrap();

        let theme = load_theme_file(&path);
        assert_eq!(theme, Theme::fallback("half"));
    }

    #[test]
    fn test_invalid_toml_is_substituted_with_fallback() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[colors\nprimary = ").unwrap();

        assert_eq!(load_theme_file(&path), Theme::fallback("broken"));
    }

    #[test]
    fn test_partial_reports_missing_keys() {
        let partial: PartialTheme = toml::from_str("[branding]\ncompanyName = \"X\"\n").unwrap();
        let issues = partial.into_theme("x").unwrap_err();
        assert!(issues.contains(&ThemeIssue::MissingColor("primary")));
        assert!(issues.contains(&ThemeIssue::MissingBranding("footerText")));
        assert!(!issues.contains(&ThemeIssue::MissingBranding("companyName")));
    }

    #[test]
    fn test_directory_loading_ignores_other_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.toml"), COMPLETE.replace("acme", "bravo")).unwrap();
        fs::write(dir.path().join("a.toml"), COMPLETE).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a theme").unwrap();

        let names: Vec<_> = load_custom_themes(dir.path()).into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["acme".to_string(), "bravo".to_string()]);
    }

    #[test]
    fn test_missing_directory_yields_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(load_custom_themes(&dir.path().join("absent")).is_empty());
    }
}
