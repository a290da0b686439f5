//! File operations: create, delete, modify, and payload format detection.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use tracing::debug;

use super::{ActivityFields, ActivityKind, ActivityRecord, FileType};
use crate::errors::{OpsError, OpsResult};

/// Fixed content written by create and appended by modify.
pub const PAYLOAD: &str = "Lorem ipsum dolor sit amet";

/// Encode the payload for the given on-disk format.
///
/// The binary form is the bincode encoding of the payload string: an 8-byte
/// little-endian length prefix followed by the UTF-8 bytes. The prefix is
/// what makes the format recoverable from content alone.
pub fn encode_payload(file_type: FileType) -> OpsResult<Vec<u8>> {
    match file_type {
        FileType::Text => Ok(PAYLOAD.as_bytes().to_vec()),
        FileType::Binary => Ok(bincode::serialize(PAYLOAD)?),
    }
}

/// Determine a file's format from its leading bytes.
///
/// Binary files start with the payload's length prefix; anything else is
/// text. Pure content sniffing, the file name plays no part.
pub fn detect_format(content: &[u8]) -> FileType {
    let prefix = (PAYLOAD.len() as u64).to_le_bytes();
    if content.starts_with(&prefix) {
        FileType::Binary
    } else {
        FileType::Text
    }
}

/// Write a new payload file, overwriting any previous one at the path.
pub fn create_file(file_path: &Path, file_type: FileType) -> OpsResult<ActivityRecord> {
    debug!("create: {} as {:?}", file_path.display(), file_type);
    let dir = parent_dir(file_path);
    if !dir.exists() {
        return Ok(ActivityRecord::new(
            ActivityKind::CreateFile,
            ActivityFields::Failed {
                error: format!("Path '{}' does not exist", dir.display()),
            },
        ));
    }

    let content = encode_payload(file_type)?;
    fs::write(file_path, content).map_err(|source| OpsError::Write {
        path: file_path.to_path_buf(),
        source,
    })?;

    Ok(file_target(ActivityKind::CreateFile, file_path))
}

/// Remove the file at the path.
pub fn delete_file(file_path: &Path) -> OpsResult<ActivityRecord> {
    debug!("delete: {}", file_path.display());
    if !file_path.exists() {
        return Ok(missing_file(ActivityKind::DeleteFile, file_path));
    }

    fs::remove_file(file_path).map_err(|source| OpsError::Remove {
        path: file_path.to_path_buf(),
        source,
    })?;

    Ok(file_target(ActivityKind::DeleteFile, file_path))
}

/// Append one more copy of the payload, in whichever encoding the file
/// already uses.
pub fn modify_file(file_path: &Path) -> OpsResult<ActivityRecord> {
    debug!("modify: {}", file_path.display());
    if !file_path.exists() {
        return Ok(missing_file(ActivityKind::ModifyFile, file_path));
    }

    let content = fs::read(file_path).map_err(|source| OpsError::Read {
        path: file_path.to_path_buf(),
        source,
    })?;
    let addition = encode_payload(detect_format(&content))?;

    let mut file = OpenOptions::new()
        .append(true)
        .open(file_path)
        .map_err(|source| OpsError::Write {
            path: file_path.to_path_buf(),
            source,
        })?;
    file.write_all(&addition).map_err(|source| OpsError::Write {
        path: file_path.to_path_buf(),
        source,
    })?;

    Ok(file_target(ActivityKind::ModifyFile, file_path))
}

/// Containing directory for the existence pre-check. A bare file name lives
/// in the current directory, which exists by definition.
fn parent_dir(file_path: &Path) -> &Path {
    match file_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

fn file_target(kind: ActivityKind, file_path: &Path) -> ActivityRecord {
    ActivityRecord::new(
        kind,
        ActivityFields::FileTarget {
            file_path: file_path.to_path_buf(),
        },
    )
}

fn missing_file(kind: ActivityKind, file_path: &Path) -> ActivityRecord {
    ActivityRecord::new(
        kind,
        ActivityFields::Failed {
            error: format!("File '{}' does not exist", file_path.display()),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_binary_encodings_are_byte_distinct() {
        let text = encode_payload(FileType::Text).unwrap();
        let binary = encode_payload(FileType::Binary).unwrap();
        assert_ne!(text, binary);
        assert_eq!(text, PAYLOAD.as_bytes());
        assert!(binary.starts_with(&(PAYLOAD.len() as u64).to_le_bytes()));
    }

    #[test]
    fn detect_format_distinguishes_the_two_encodings() {
        let text = encode_payload(FileType::Text).unwrap();
        let binary = encode_payload(FileType::Binary).unwrap();
        assert_eq!(detect_format(&text), FileType::Text);
        assert_eq!(detect_format(&binary), FileType::Binary);
        assert_eq!(detect_format(b""), FileType::Text);
    }

    #[test]
    fn parent_dir_of_bare_file_name_is_current_directory() {
        assert_eq!(parent_dir(Path::new("file.txt")), Path::new("."));
        assert_eq!(parent_dir(Path::new("/tmp/file.txt")), Path::new("/tmp"));
    }
}
