//! Host documents: the page (or TOML stand-in) that carries `<chat-widget>`
//! elements and their attributes.

use std::path::{Path, PathBuf};

use scraper::{Html, Selector};
use serde::Deserialize;

use super::attributes::Attributes;
use crate::error::{Result, WidgetError};

pub const ELEMENT_NAME: &str = "chat-widget";

#[derive(Debug, Clone, PartialEq)]
pub struct HostDocument {
    path: PathBuf,
    elements: Vec<Attributes>,
}

/// TOML form: a single `[attributes]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TomlDocument {
    attributes: toml::Table,
}

impl HostDocument {
    /// Load `path`. `.toml` files are read as an attribute table, anything
    /// else is parsed as HTML.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(WidgetError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("toml"));

        let elements = if is_toml {
            vec![Self::parse_toml(path, &content)?]
        } else {
            Self::parse_html(&content)
        };
        tracing::debug!("Loaded {} widget element(s) from {:?}", elements.len(), path);

        Ok(Self {
            path: path.to_path_buf(),
            elements,
        })
    }

    /// Every `<chat-widget>` element in document order.
    pub fn parse_html(content: &str) -> Vec<Attributes> {
        let document = Html::parse_document(content);
        let selector = match Selector::parse(ELEMENT_NAME) {
            Ok(selector) => selector,
            Err(e) => {
                tracing::error!("Invalid element selector: {}", e);
                return Vec::new();
            }
        };
        document
            .select(&selector)
            .map(|element| element.value().attrs().collect())
            .collect()
    }

    fn parse_toml(path: &Path, content: &str) -> Result<Attributes> {
        let doc: TomlDocument = toml::from_str(content).map_err(|e| WidgetError::HostDocument {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(doc
            .attributes
            .into_iter()
            .map(|(name, value)| {
                let value = match value {
                    toml::Value::String(s) => s,
                    other => other.to_string(),
                };
                (name, value)
            })
            .collect())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn elements(&self) -> &[Attributes] {
        &self.elements
    }

    /// The `index`th element, or a document error naming how many there are.
    pub fn element(&self, index: usize) -> Result<Attributes> {
        self.elements
            .get(index)
            .cloned()
            .ok_or_else(|| WidgetError::HostDocument {
                path: self.path.clone(),
                message: format!(
                    "no <{}> element at index {} ({} found)",
                    ELEMENT_NAME,
                    index,
                    self.elements.len()
                ),
            })
    }
}

/// Attributes for one element: the document's (if any) with `overrides`
/// applied on top, in order.
pub fn element_attributes(
    document: Option<&Path>,
    index: usize,
    overrides: &[(String, String)],
) -> Result<Attributes> {
    let mut attributes = match document {
        Some(path) => HostDocument::load(path)?.element(index)?,
        None => Attributes::new(),
    };
    for (name, value) in overrides {
        attributes.set(name.as_str(), value.as_str());
    }
    Ok(attributes)
}
