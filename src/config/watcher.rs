use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::{Duration, Instant, SystemTime};

use notify::{RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::{Result, WidgetError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigEvent {
    Changed(PathBuf),
    Error(String),
}

/// Watches a single file through its parent directory, so editors that
/// replace the file on save are still picked up. Bursts of change
/// notifications are collapsed into one event per debounce window.
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<ConfigEvent>,
    debounce: Duration,
    pending: Option<(PathBuf, Instant)>,
}

impl ConfigWatcher {
    pub fn new(file: &Path, debounce_ms: u64) -> Result<Self> {
        let (tx, rx) = channel::<ConfigEvent>();

        let watcher = Self::setup_watcher(file, tx)?;

        Ok(Self {
            _watcher: watcher,
            rx,
            debounce: Duration::from_millis(debounce_ms),
            pending: None,
        })
    }

    fn setup_watcher(file: &Path, tx: Sender<ConfigEvent>) -> Result<RecommendedWatcher> {
        let target = file.to_path_buf();
        let target_name = file.file_name().map(|n| n.to_os_string());

        let mut watcher = notify::recommended_watcher(move |result: notify::Result<notify::Event>| {
            match result {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        let touches_target = event
                            .paths
                            .iter()
                            .any(|path| path.file_name().map(|n| n.to_os_string()) == target_name);
                        if touches_target {
                            let _ = tx.send(ConfigEvent::Changed(target.clone()));
                        }
                    }
                }
                Err(e) => {
                    let _ = tx.send(ConfigEvent::Error(e.to_string()));
                }
            }
        })
        .map_err(|e| WidgetError::Config(format!("Failed to create watcher: {}", e)))?;

        let dir = match file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .map_err(|e| WidgetError::Config(format!("Failed to watch {}: {}", dir.display(), e)))?;

        Ok(watcher)
    }

    pub fn poll_events(&mut self) -> Vec<ConfigEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            match event {
                ConfigEvent::Changed(path) => self.pending = Some((path, Instant::now())),
                error => events.push(error),
            }
        }

        if let Some((_, last_seen)) = &self.pending {
            if last_seen.elapsed() >= self.debounce {
                if let Some((path, _)) = self.pending.take() {
                    events.push(ConfigEvent::Changed(path));
                }
            }
        }
        events
    }
}

/// Polls the file's modification time on a fixed interval. Used when no
/// native watcher can be created.
pub struct TickBasedWatcher {
    file: PathBuf,
    last_check: Instant,
    check_interval: Duration,
    mtime: Option<SystemTime>,
}

impl TickBasedWatcher {
    pub fn new(file: PathBuf, check_interval_ms: u64) -> Self {
        let mtime = Self::modified(&file);
        Self {
            file,
            last_check: Instant::now(),
            check_interval: Duration::from_millis(check_interval_ms),
            mtime,
        }
    }

    fn modified(path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path).and_then(|m| m.modified()).ok()
    }

    pub fn check(&mut self) -> Vec<ConfigEvent> {
        if self.last_check.elapsed() < self.check_interval {
            return Vec::new();
        }
        self.last_check = Instant::now();

        let mtime = Self::modified(&self.file);
        if mtime.is_some() && mtime != self.mtime {
            self.mtime = mtime;
            return vec![ConfigEvent::Changed(self.file.clone())];
        }
        Vec::new()
    }
}

pub enum ConfigWatcherMode {
    Notify(ConfigWatcher),
    Tick(TickBasedWatcher),
}

impl ConfigWatcherMode {
    pub fn notify(file: &Path, debounce_ms: u64) -> Result<Self> {
        Ok(Self::Notify(ConfigWatcher::new(file, debounce_ms)?))
    }

    pub fn tick(file: PathBuf, check_interval_ms: u64) -> Self {
        Self::Tick(TickBasedWatcher::new(file, check_interval_ms))
    }

    /// Native watcher if possible, mtime polling otherwise.
    pub fn for_file(file: &Path, debounce_ms: u64) -> Self {
        match Self::notify(file, debounce_ms) {
            Ok(mode) => mode,
            Err(e) => {
                tracing::warn!("{}; falling back to polling {}", e, file.display());
                Self::tick(file.to_path_buf(), debounce_ms.max(100))
            }
        }
    }

    pub fn poll_events(&mut self) -> Vec<ConfigEvent> {
        match self {
            Self::Notify(watcher) => watcher.poll_events(),
            Self::Tick(watcher) => watcher.check(),
        }
    }
}
