use std::path::PathBuf;
use thiserror::Error;

/// Failures the operation engine does not capture into activity records.
///
/// Expected conditions (missing target file, absent parent directory,
/// unreachable peer) are represented in-band in the record; everything here
/// surfaces at the process boundary as fatal.
#[derive(Error, Debug)]
pub enum OpsError {
    #[error("Failed to spawn process '{command_line}'")]
    Spawn {
        command_line: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove file: {path}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to append activity record to: {path}")]
    Sink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode binary payload: {0}")]
    BinaryEncode(#[from] Box<bincode::ErrorKind>),

    #[error("Failed to serialize activity record: {0}")]
    RecordEncode(#[from] serde_json::Error),
}

pub type OpsResult<T> = Result<T, OpsError>;
