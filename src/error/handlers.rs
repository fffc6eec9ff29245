//! Error handlers
//!
//! Turns operation errors into the boolean results scripts receive.

use crate::error::types::{StorageError, ValidationError};
use log::{error, warn};

/// Log a failed operation and return the value handed back to Lua
pub fn report_failure(operation: &str, err: &StorageError) -> bool {
    match err {
        StorageError::Validation(ValidationError::MissingPath) => {
            warn!("{}: {}", operation, err)
        }
        StorageError::Validation(_) => warn!("{} rejected: {}", operation, err),
        _ => error!("{} failed: {}", operation, err),
    }
    false
}

/// Collapse an operation result into a script-facing boolean
pub fn to_script_result(operation: &str, result: Result<(), StorageError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => report_failure(operation, &e),
    }
}
