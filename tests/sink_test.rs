//! Activity log sink: JSON-lines envelope and severity mapping.

use std::fs;
use std::path::PathBuf;

use rsedr::ops::{ActivityFields, ActivityKind, ActivityRecord};
use rsedr::sink::ActivityLog;
use rsedr::util::testing;
use serde_json::Value;
use tempfile::TempDir;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn success_record() -> ActivityRecord {
    ActivityRecord::new(
        ActivityKind::CreateFile,
        ActivityFields::FileTarget {
            file_path: PathBuf::from("/tmp/file.txt"),
        },
    )
}

#[test]
fn given_success_record_when_appending_then_flat_info_entry_written() {
    let temp = TempDir::new().unwrap();
    let log_path = temp.path().join("activity.log");

    ActivityLog::new(&log_path).append(&success_record()).unwrap();

    let content = fs::read_to_string(&log_path).unwrap();
    let entry: Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
    assert_eq!(entry["severity"], "INFO");
    assert_eq!(entry["activity_descriptor"], "CREATE_FILE");
    assert_eq!(entry["file_path"], "/tmp/file.txt");
    assert!(entry["timestamp"].is_string());
    assert!(entry["username"].is_string());
    assert!(entry["process_id"].is_u64());
}

#[test]
fn given_failure_record_when_appending_then_error_severity() {
    let temp = TempDir::new().unwrap();
    let log_path = temp.path().join("activity.log");
    let record = ActivityRecord::new(
        ActivityKind::DeleteFile,
        ActivityFields::Failed {
            error: "File '/tmp/missing' does not exist".to_string(),
        },
    );

    ActivityLog::new(&log_path).append(&record).unwrap();

    let content = fs::read_to_string(&log_path).unwrap();
    let entry: Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
    assert_eq!(entry["severity"], "ERROR");
    assert_eq!(entry["error"], "File '/tmp/missing' does not exist");
}

#[test]
fn given_two_records_when_appending_then_one_line_each() {
    let temp = TempDir::new().unwrap();
    let log_path = temp.path().join("activity.log");
    let log = ActivityLog::new(&log_path);

    log.append(&success_record()).unwrap();
    log.append(&success_record()).unwrap();

    let content = fs::read_to_string(&log_path).unwrap();
    assert_eq!(content.lines().count(), 2);
}
