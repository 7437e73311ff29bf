//! Schema file watcher for `generate --watch`.
//!
//! The schema's parent directory is watched (editors often replace files
//! instead of modifying them in place) and only events for the schema file
//! itself are forwarded.

use crate::error::{CliResult, WatchError};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use notify_debouncer_mini::{new_debouncer, DebouncedEvent, Debouncer};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

/// Event types for schema changes.
#[derive(Debug, Clone)]
pub enum WatchEvent {
    /// The schema was written or replaced.
    Modified(PathBuf),
    /// The schema was removed.
    Deleted(PathBuf),
    /// The watcher backend reported an error.
    Error(String),
}

/// Watches a single schema file.
pub struct FileWatcher {
    schema: PathBuf,
    debounce_ms: u64,
}

impl FileWatcher {
    /// Create a watcher for the given schema file.
    pub fn new(schema: impl Into<PathBuf>) -> Self {
        Self {
            schema: schema.into(),
            debounce_ms: 300,
        }
    }

    /// Set the debounce duration in milliseconds.
    pub fn with_debounce(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Start watching.
    ///
    /// The returned debouncer must be kept alive for events to arrive.
    pub fn watch(&self) -> CliResult<(Debouncer<RecommendedWatcher>, Receiver<WatchEvent>)> {
        let target = std::fs::canonicalize(&self.schema)
            .map_err(|e| WatchError::Init(format!("{}: {}", self.schema.display(), e)))?;
        let dir = target
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| WatchError::Init(format!("{} has no parent", target.display())))?;

        let (tx, rx) = channel::<WatchEvent>();
        let filter_target = target.clone();

        let mut debouncer = new_debouncer(
            Duration::from_millis(self.debounce_ms),
            move |result: Result<Vec<DebouncedEvent>, notify::Error>| match result {
                Ok(events) => {
                    let touched = events.iter().any(|event| is_same_file(&event.path, &filter_target));
                    if touched {
                        let event = if filter_target.exists() {
                            WatchEvent::Modified(filter_target.clone())
                        } else {
                            WatchEvent::Deleted(filter_target.clone())
                        };
                        let _ = tx.send(event);
                    }
                }
                Err(e) => {
                    let _ = tx.send(WatchEvent::Error(e.to_string()));
                }
            },
        )
        .map_err(|e| WatchError::Init(e.to_string()))?;

        debouncer
            .watcher()
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| WatchError::Init(e.to_string()))?;

        tracing::debug!(schema = %target.display(), dir = %dir.display(), "watching schema");
        Ok((debouncer, rx))
    }

    /// The schema file being watched.
    pub fn schema(&self) -> &Path {
        &self.schema
    }
}

/// Compare an event path with the watched file.
fn is_same_file(event_path: &Path, target: &Path) -> bool {
    event_path == target
        || std::fs::canonicalize(event_path).is_ok_and(|p| p == target)
}

impl WatchEvent {
    /// Get the path associated with this event.
    pub fn path(&self) -> Option<&Path> {
        match self {
            WatchEvent::Modified(p) | WatchEvent::Deleted(p) => Some(p),
            WatchEvent::Error(_) => None,
        }
    }

    /// Convert a backend error event into a [`WatchError`].
    pub fn into_error(self) -> Option<WatchError> {
        match self {
            WatchEvent::Error(msg) => Some(WatchError::Notify(msg)),
            _ => None,
        }
    }
}
