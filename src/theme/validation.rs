use std::fmt;

use super::Theme;

/// A structural problem with a theme record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeIssue {
    MissingColor(&'static str),
    MissingBranding(&'static str),
    InvalidDimension { field: &'static str, value: u32 },
    MissingName,
}

impl fmt::Display for ThemeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeIssue::MissingColor(key) => write!(f, "colors.{} is missing or empty", key),
            ThemeIssue::MissingBranding(key) => write!(f, "branding.{} is missing or empty", key),
            ThemeIssue::InvalidDimension { field, value } => {
                write!(f, "{} must be positive (got {})", field, value)
            }
            ThemeIssue::MissingName => write!(f, "theme has no name"),
        }
    }
}

/// Check that every color and branding slot is populated and both
/// dimensions are positive. An empty result means the theme is usable.
pub fn validate(theme: &Theme) -> Vec<ThemeIssue> {
    let mut issues = Vec::new();

    if theme.name.trim().is_empty() {
        issues.push(ThemeIssue::MissingName);
    }

    for (key, value) in theme.colors.entries() {
        if value.is_empty() {
            issues.push(ThemeIssue::MissingColor(key));
        }
    }

    for (key, value) in theme.branding.entries() {
        if value.trim().is_empty() {
            issues.push(ThemeIssue::MissingBranding(key));
        }
    }

    if theme.width == 0 {
        issues.push(ThemeIssue::InvalidDimension { field: "width", value: theme.width });
    }
    if theme.height == 0 {
        issues.push(ThemeIssue::InvalidDimension { field: "height", value: theme.height });
    }

    issues
}
