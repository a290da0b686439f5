//! Activity log sink: persists one flat record per invocation as JSON lines.
//!
//! The engine hands over an `ActivityRecord`; the sink wraps it in an
//! invocation-level envelope (severity, timestamp, username, pid) and
//! appends the flattened result to the configured log file.

use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::debug;

use crate::errors::{OpsError, OpsResult};
use crate::ops::ActivityRecord;

/// Record severity as persisted by the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    #[serde(rename = "INFO")]
    Info,
    #[serde(rename = "ERROR")]
    Error,
}

/// Envelope around an operation's record.
#[derive(Debug, Serialize)]
struct LogRecord<'a> {
    severity: Severity,
    timestamp: DateTime<Local>,
    username: String,
    process_id: u32,
    #[serde(flatten)]
    activity: &'a ActivityRecord,
}

/// Appends activity records to a JSON-lines log file.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    path: PathBuf,
}

impl ActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record. Records that captured an operation failure are
    /// persisted with ERROR severity, everything else with INFO.
    pub fn append(&self, record: &ActivityRecord) -> OpsResult<()> {
        let entry = LogRecord {
            severity: if record.is_failure() {
                Severity::Error
            } else {
                Severity::Info
            },
            timestamp: Local::now(),
            username: current_username(),
            process_id: std::process::id(),
            activity: record,
        };
        let line = serde_json::to_string(&entry)?;
        debug!("appending record to {}", self.path.display());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| OpsError::Sink {
                path: self.path.clone(),
                source,
            })?;
        writeln!(file, "{line}").map_err(|source| OpsError::Sink {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

fn current_username() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}
