//! Operation engine: request and record types plus the five host operations.
//!
//! Every operation is a one-shot, stateless transaction against the OS. The
//! engine never checks arguments for plausibility beyond what the resolver
//! guarantees; it only checks the OS-level preconditions (file exists, parent
//! directory exists) that have a defined failure record.

pub mod fs;
pub mod net;
pub mod process;

use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::Serialize;

pub use fs::{create_file, delete_file, detect_format, encode_payload, modify_file, PAYLOAD};
pub use net::transmit_data;
pub use process::execute_file;

/// What the user asked to do, resolved and validated once per invocation.
///
/// Exactly one variant is active per run. `Execute.args` stays empty unless
/// the raw arguments contained a `--` separator, in which case it holds every
/// token after it, order preserved. File paths are opaque here; existence
/// checks belong to the engine, not the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationRequest {
    /// No action: empty argument list, help request, or validation failure.
    None,
    Execute {
        file_path: PathBuf,
        args: Vec<String>,
    },
    Create {
        file_path: PathBuf,
        file_type: FileType,
    },
    Delete {
        file_path: PathBuf,
    },
    Modify {
        file_path: PathBuf,
    },
    Transmit {
        destination: String,
        port: u16,
        data: Vec<u8>,
    },
}

/// On-disk encoding of files produced by create and appended to by modify.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileType {
    #[default]
    Text,
    Binary,
}

/// Tag identifying which simulated behavior a record corresponds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityKind {
    #[serde(rename = "PROCESS_START")]
    ProcessStart,
    #[serde(rename = "CREATE_FILE")]
    CreateFile,
    #[serde(rename = "DELETE_FILE")]
    DeleteFile,
    #[serde(rename = "MODIFY_FILE")]
    ModifyFile,
    #[serde(rename = "TRANSMIT_DATA")]
    TransmitData,
}

/// Result record for a single executed operation.
///
/// Created fresh per invocation, passed by value, never mutated after
/// construction. Serializes flat: the activity tag next to the operation's
/// own fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRecord {
    pub activity_descriptor: ActivityKind,
    #[serde(flatten)]
    pub fields: ActivityFields,
}

/// Operation-specific record fields.
///
/// Failure variants replace the success fields with a single `error` message
/// but keep what does not depend on success: the attempted command line for
/// process starts, the destination for transmissions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ActivityFields {
    ProcessStart {
        start_time: DateTime<Local>,
        process_command_line: String,
        spawned_process_id: u32,
    },
    ProcessFailed {
        process_command_line: String,
        error: String,
    },
    FileTarget {
        file_path: PathBuf,
    },
    Transmit {
        destination_address: String,
        destination_port: u16,
        source_address: String,
        source_port: u16,
        amount_of_data_sent: usize,
        protocol: &'static str,
    },
    TransmitFailed {
        destination_address: String,
        destination_port: u16,
        error: String,
    },
    Failed {
        error: String,
    },
}

impl ActivityRecord {
    pub fn new(activity_descriptor: ActivityKind, fields: ActivityFields) -> Self {
        Self {
            activity_descriptor,
            fields,
        }
    }

    /// Whether this record captured an expected operation failure.
    pub fn is_failure(&self) -> bool {
        matches!(
            self.fields,
            ActivityFields::ProcessFailed { .. }
                | ActivityFields::TransmitFailed { .. }
                | ActivityFields::Failed { .. }
        )
    }
}
