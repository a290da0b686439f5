//! Dispatch: a resolved request runs exactly one engine operation.

use std::fs;

use rsedr::cli::execute_request;
use rsedr::ops::{ActivityKind, FileType, OperationRequest, PAYLOAD};
use rsedr::util::testing;
use tempfile::TempDir;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_none_request_when_dispatching_then_no_record_and_no_side_effects() {
    let record = execute_request(&OperationRequest::None).unwrap();
    assert!(record.is_none());
}

#[test]
fn given_create_request_when_dispatching_then_file_created_and_record_returned() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dispatched.txt");

    let record = execute_request(&OperationRequest::Create {
        file_path: path.clone(),
        file_type: FileType::Text,
    })
    .unwrap()
    .expect("create produces a record");

    assert_eq!(record.activity_descriptor, ActivityKind::CreateFile);
    assert_eq!(fs::read(&path).unwrap(), PAYLOAD.as_bytes());
}
