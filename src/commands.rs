//! Non-interactive subcommands. Each returns the text to print so it can be
//! tested without a terminal.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::ConfigManager;
use crate::error::{Result, WidgetError};
use crate::host::{Attributes, HostStyle, ThemeResolver, WidgetConfig, WidgetProps};
use crate::theme::{validate, Theme, ThemeCatalog, ThemeCategory};

/// `themes`: names grouped by category.
pub fn themes(catalog: &ThemeCatalog, json: bool, category: Option<&str>) -> Result<String> {
    let filter = match category {
        Some(name) => Some(
            ThemeCategory::from_name(name)
                .ok_or_else(|| WidgetError::Theme(format!("unknown theme category '{}'", name)))?,
        ),
        None => None,
    };

    let groups: Vec<(ThemeCategory, Vec<String>)> = catalog
        .categories()
        .into_iter()
        .filter(|(c, _)| filter.map_or(true, |f| f == *c))
        .collect();

    if json {
        let map: BTreeMap<&str, &Vec<String>> = groups.iter().map(|(c, names)| (c.name(), names)).collect();
        return serde_json::to_string_pretty(&map).map_err(|e| WidgetError::Render(e.to_string()));
    }

    let mut out = String::new();
    for (category, names) in &groups {
        let _ = writeln!(out, "{} ({})", category.name(), names.len());
        for name in names {
            let _ = writeln!(out, "  {}", name);
        }
    }
    Ok(out)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub theme: Theme,
    pub host_style: HostStyle,
    pub props: WidgetProps,
}

/// What a `<chat-widget>` with `attributes` resolves to.
pub fn resolve_attributes(catalog: std::sync::Arc<ThemeCatalog>, attributes: &Attributes) -> Resolution {
    let config = WidgetConfig::parse(attributes);
    let (host_style, _) = HostStyle::from_config(&config);
    let props = ThemeResolver::new(catalog).props(&config);
    Resolution {
        theme: props.theme.clone(),
        host_style,
        props,
    }
}

/// `resolve`: the resolution serialized as JSON or TOML.
pub fn resolve(
    catalog: std::sync::Arc<ThemeCatalog>,
    attributes: &Attributes,
    format: OutputFormat,
) -> Result<String> {
    let resolution = resolve_attributes(catalog, attributes);
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&resolution).map_err(|e| WidgetError::Render(e.to_string()))
        }
        OutputFormat::Toml => toml::to_string_pretty(&resolution).map_err(|e| WidgetError::Render(e.to_string())),
    }
}

/// `check`: one line per invalid theme. Returns the report and whether every
/// theme passed.
pub fn check(catalog: &ThemeCatalog) -> (String, bool) {
    let mut out = String::new();
    let mut invalid = 0;

    for theme in catalog.themes() {
        let issues = validate(&theme);
        if issues.is_empty() {
            continue;
        }
        invalid += 1;
        for issue in issues {
            let _ = writeln!(out, "{}: {}", theme.name, issue);
        }
    }

    let _ = writeln!(out, "{} themes checked, {} invalid", catalog.len(), invalid);
    (out, invalid == 0)
}

/// `init`: write default files into the config directory.
pub fn init(config: &ConfigManager, overwrite: bool) -> Result<String> {
    let written = config.write_default_configs(overwrite)?;
    let mut out = String::new();
    if written.is_empty() {
        let _ = writeln!(
            out,
            "Nothing to do, {} already initialized (use --force to overwrite)",
            config.config_dir().display()
        );
    }
    for path in written {
        let _ = writeln!(out, "Wrote {}", path.display());
    }
    Ok(out)
}
