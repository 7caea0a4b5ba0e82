//! Observer hooks for dataset loading.
//!
//! The table is loaded once per process, so the interesting events are few: one
//! success (with shape stats) or one failure (with the error). Hosts that want the
//! outcome logged or recorded pass a [`LoadObserver`] through
//! [`super::LoadOptions`].

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::error::DataError;

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// The source path used for loading.
    pub path: PathBuf,
}

/// Shape stats reported on successful loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Number of delivery rows in the enriched table.
    pub deliveries: usize,
    /// Number of distinct seasons.
    pub seasons: usize,
    /// Number of distinct (canonical) team names.
    pub teams: usize,
}

/// Observer interface for load outcomes.
pub trait LoadObserver: Send + Sync {
    /// Called when the table loads successfully.
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when loading fails.
    fn on_failure(&self, _ctx: &LoadContext, _error: &DataError) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl LoadObserver for CompositeObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &LoadContext, error: &DataError) {
        for o in &self.observers {
            o.on_failure(ctx, error);
        }
    }
}

/// Logs load events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl LoadObserver for StdErrObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        eprintln!(
            "[load][ok] path={} deliveries={} seasons={} teams={}",
            ctx.path.display(),
            stats.deliveries,
            stats.seasons,
            stats.teams
        );
    }

    fn on_failure(&self, ctx: &LoadContext, error: &DataError) {
        eprintln!("[load][err] path={} err={}", ctx.path.display(), error);
    }
}

#[derive(Serialize)]
struct LogLine<'a> {
    ts: u64,
    outcome: &'static str,
    path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<LoadStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Appends load events to a local log file as JSON lines.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append(&self, line: &LogLine<'_>) {
        let Ok(json) = serde_json::to_string(line) else {
            return;
        };
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{json}");
        }
    }
}

impl LoadObserver for FileObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        let path = ctx.path.display().to_string();
        self.append(&LogLine {
            ts: unix_ts(),
            outcome: "ok",
            path: &path,
            stats: Some(stats),
            error: None,
        });
    }

    fn on_failure(&self, ctx: &LoadContext, error: &DataError) {
        let path = ctx.path.display().to_string();
        self.append(&LogLine {
            ts: unix_ts(),
            outcome: "fail",
            path: &path,
            stats: None,
            error: Some(error.to_string()),
        });
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
