// Config module - settings.toml, custom theme directory and host document watching

mod watcher;

pub use watcher::{ConfigEvent, ConfigWatcherMode};

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, WidgetError};
use crate::theme::{load_custom_themes, ThemeCatalog};

const CONFIG_DIR: &str = "chat-widget";
const SETTINGS_FILE: &str = "settings.toml";
const THEMES_DIR: &str = "themes";
const LOGS_DIR: &str = "logs";
const EXAMPLE_DOCUMENT_FILE: &str = "widget.html";

pub const DEFAULT_AUTO_REPLY: &str = "Thank you for your message. Our team will get back to you shortly!";

const EXAMPLE_DOCUMENT: &str = r##"<!DOCTYPE html>
<html>
  <body>
    <chat-widget
      theme="forest-green"
      company-name="Your Company"
      position="bottom-right"
      z-index="1000"
      custom-styles='{"box-shadow": "0 8px 24px rgba(0, 0, 0, 0.15)"}'>
    </chat-widget>
  </body>
</html>
"##;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralConfig,
    pub widget: WidgetSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub watch_host_document: bool,
    pub watch_debounce_ms: u64,
    pub tick_interval_ms: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
            watch_host_document: true,
            watch_debounce_ms: 250,
            tick_interval_ms: 100,
        }
    }
}

/// Behaviour of the widget itself, independent of any host attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    pub reply_delay_ms: u64,
    pub auto_reply: String,
    pub sample_conversation: bool,
    pub start_open: bool,
    pub request_timeout_ms: u64,
    /// Base URL that relative `api-endpoint`/`webhook-url` values are joined
    /// onto, like a page's own origin.
    pub endpoint_base: Option<String>,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            auto_reply: DEFAULT_AUTO_REPLY.to_string(),
            sample_conversation: true,
            start_open: false,
            request_timeout_ms: 10_000,
            endpoint_base: None,
        }
    }
}

impl WidgetSettings {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn endpoint_base(&self) -> Option<Url> {
        let base = self.endpoint_base.as_deref()?;
        match Url::parse(base) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!("Ignoring endpoint_base '{}': {}", base, e);
                None
            }
        }
    }
}

pub struct ConfigManager {
    config_dir: PathBuf,
    settings: Settings,
    catalog: Arc<ThemeCatalog>,
}

impl ConfigManager {
    /// Load settings and custom themes from `config_dir`, or from the
    /// platform config directory when none is given.
    pub fn new(config_dir: Option<PathBuf>) -> Result<Self> {
        let config_dir = match config_dir {
            Some(dir) => dir,
            None => Self::default_config_dir()?,
        };

        let settings = Self::load_settings(&config_dir);
        let catalog = Arc::new(ThemeCatalog::with_custom(load_custom_themes(
            &config_dir.join(THEMES_DIR),
        )));
        tracing::debug!(
            "Loaded configuration from {} ({} themes)",
            config_dir.display(),
            catalog.len()
        );

        Ok(Self {
            config_dir,
            settings,
            catalog,
        })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn general(&self) -> &GeneralConfig {
        &self.settings.general
    }

    pub fn widget(&self) -> &WidgetSettings {
        &self.settings.widget
    }

    /// Shared, read-only theme catalog (built-ins plus custom themes).
    pub fn catalog(&self) -> Arc<ThemeCatalog> {
        Arc::clone(&self.catalog)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    pub fn themes_dir(&self) -> PathBuf {
        self.config_dir.join(THEMES_DIR)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.config_dir.join(LOGS_DIR)
    }

    pub fn example_document_path(&self) -> PathBuf {
        self.config_dir.join(EXAMPLE_DOCUMENT_FILE)
    }

    fn default_config_dir() -> Result<PathBuf> {
        BaseDirs::new()
            .map(|dirs| dirs.config_dir().join(CONFIG_DIR))
            .ok_or_else(|| WidgetError::Config("Could not determine config directory".to_string()))
    }

    fn load_settings(config_dir: &Path) -> Settings {
        let path = config_dir.join(SETTINGS_FILE);
        Self::load_toml_file(&path).unwrap_or_default()
    }

    fn load_toml_file<T: for<'de> Deserialize<'de> + Default>(path: &Path) -> Option<T> {
        if !path.exists() {
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn ensure_config_dir(&self) -> Result<()> {
        for dir in [self.config_dir.clone(), self.themes_dir()] {
            if !dir.exists() {
                std::fs::create_dir_all(&dir)
                    .map_err(|e| WidgetError::Config(format!("Failed to create {}: {}", dir.display(), e)))?;
            }
        }
        Ok(())
    }

    /// Write `settings.toml` and an example host document. Existing files are
    /// left alone unless `overwrite`; the paths actually written are returned.
    pub fn write_default_configs(&self, overwrite: bool) -> Result<Vec<PathBuf>> {
        self.ensure_config_dir()?;
        let mut written = Vec::new();

        let settings_path = self.settings_path();
        if overwrite || !settings_path.exists() {
            let content = toml::to_string_pretty(&Settings::default())
                .map_err(|e| WidgetError::Config(format!("Failed to serialize settings: {}", e)))?;
            std::fs::write(&settings_path, content)
                .map_err(|e| WidgetError::Config(format!("Failed to write settings: {}", e)))?;
            written.push(settings_path);
        }

        let document_path = self.example_document_path();
        if overwrite || !document_path.exists() {
            std::fs::write(&document_path, EXAMPLE_DOCUMENT)
                .map_err(|e| WidgetError::Config(format!("Failed to write example document: {}", e)))?;
            written.push(document_path);
        }

        Ok(written)
    }
}
