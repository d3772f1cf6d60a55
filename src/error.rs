use std::path::PathBuf;
use thiserror::Error;

use crate::theme::ColorError;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Host document error in {path}: {message}")]
    HostDocument { path: PathBuf, message: String },

    #[error("Theme error: {0}")]
    Theme(String),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Dispatch failed: {0}")]
    Dispatch(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WidgetError>;
