use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::error::{Result, WidgetError};

const LOG_FILE_PREFIX: &str = "chatwidget.log";

/// Where log lines go. The preview owns the terminal, so it logs to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Daily rolling files in a directory.
    Directory(PathBuf),
    /// One fixed file.
    File(PathBuf),
}

/// Filter precedence: `--log-level`, then `RUST_LOG`, then the settings file.
pub fn build_filter(cli_level: Option<&str>, settings_level: &str) -> EnvFilter {
    if let Some(level) = cli_level {
        match EnvFilter::try_new(level) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("Warning: invalid --log-level '{}': {}", level, e),
        }
    }
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. The returned guard must live as long as
/// file logging is wanted; dropping it flushes the writer.
pub fn init(filter: EnvFilter, target: &LogTarget) -> Result<Option<WorkerGuard>> {
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let (result, guard) = match target {
        LogTarget::Stderr => (builder.with_writer(std::io::stderr).try_init(), None),
        LogTarget::Directory(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                builder.with_ansi(false).with_writer(writer).try_init(),
                Some(guard),
            )
        }
        LogTarget::File(path) => {
            let (dir, name) = split_log_path(path);
            std::fs::create_dir_all(&dir)?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                builder.with_ansi(false).with_writer(writer).try_init(),
                Some(guard),
            )
        }
    };

    result.map_err(|e| WidgetError::Config(format!("failed to initialize logging: {}", e)))?;
    tracing::debug!("Logging initialized ({:?})", target);
    Ok(guard)
}

fn split_log_path(path: &Path) -> (PathBuf, String) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| LOG_FILE_PREFIX.to_string());
    (dir, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_level_wins() {
        let filter = build_filter(Some("debug"), "warn");
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_split_log_path() {
        assert_eq!(
            split_log_path(Path::new("/var/log/widget.log")),
            (PathBuf::from("/var/log"), "widget.log".to_string())
        );
        assert_eq!(
            split_log_path(Path::new("widget.log")),
            (PathBuf::from("."), "widget.log".to_string())
        );
    }
}
