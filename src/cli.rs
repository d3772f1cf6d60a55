use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// chatwidget: theme catalog, attribute resolver and terminal preview for the embeddable chat widget
#[derive(Parser, Debug, Clone)]
#[command(name = "chatwidget")]
#[command(author = "RidgetopAI")]
#[command(version)]
#[command(about = "Resolve and preview <chat-widget> configurations", long_about = None)]
pub struct Cli {
    /// Configuration directory (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "DIR", env = "CHATWIDGET_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Log level or filter directive (trace, debug, info, warn, error)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List theme names grouped by category
    Themes {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Only list one category
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,
    },

    /// Print the resolved theme, host style and props for an element
    Resolve {
        #[command(flatten)]
        element: ElementArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Validate every theme in the catalog
    Check,

    /// Interactive terminal preview of one widget
    Preview {
        #[command(flatten)]
        element: ElementArgs,

        /// Do not reload the host document when it changes
        #[arg(long)]
        no_watch: bool,
    },

    /// Write default settings and an example host document
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

/// Which element to use, and attribute overrides on top of it.
#[derive(Args, Debug, Clone, Default)]
pub struct ElementArgs {
    /// Host document (.html or .toml)
    #[arg(value_name = "DOC")]
    pub document: Option<PathBuf>,

    /// Index of the <chat-widget> element in the document
    #[arg(long, default_value_t = 0)]
    pub element: usize,

    /// Attribute override, repeatable
    #[arg(long = "attr", value_name = "NAME=VALUE", value_parser = parse_attr)]
    pub attrs: Vec<(String, String)>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

fn parse_attr(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing attribute name in '{}'", s));
    }
    Ok((name.to_ascii_lowercase(), value.to_string()))
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
