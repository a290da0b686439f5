//! Dispatch: run the resolved operation through the engine.

use anyhow::{Context, Result};
use tracing::debug;

use crate::ops::{self, ActivityRecord, OperationRequest};

/// Execute exactly one resolved operation. `None` produces no record.
pub fn execute_request(request: &OperationRequest) -> Result<Option<ActivityRecord>> {
    debug!("request: {:?}", request);
    match request {
        OperationRequest::None => Ok(None),
        OperationRequest::Execute { file_path, args } => ops::execute_file(file_path, args)
            .context("execute operation failed")
            .map(Some),
        OperationRequest::Create {
            file_path,
            file_type,
        } => ops::create_file(file_path, *file_type)
            .context("create operation failed")
            .map(Some),
        OperationRequest::Delete { file_path } => ops::delete_file(file_path)
            .context("delete operation failed")
            .map(Some),
        OperationRequest::Modify { file_path } => ops::modify_file(file_path)
            .context("modify operation failed")
            .map(Some),
        OperationRequest::Transmit {
            destination,
            port,
            data,
        } => ops::transmit_data(destination, *port, data)
            .context("transmit operation failed")
            .map(Some),
    }
}
