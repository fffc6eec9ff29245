//! Error types
//!
//! Defines domain-specific error types for each module of the plugin.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Path validation errors
#[derive(Debug)]
pub enum ValidationError {
    MissingPath,
    Canonicalize(String, io::Error),
    OutsideSandbox(PathBuf),
    MissingMarker { path: PathBuf, marker: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingPath => write!(f, "No path provided"),
            ValidationError::Canonicalize(p, e) => {
                write!(f, "Failed to canonicalize {}: {}", p, e)
            }
            ValidationError::OutsideSandbox(p) => {
                write!(f, "Path escapes sandbox: {}", p.display())
            }
            ValidationError::MissingMarker { path, marker } => {
                write!(f, "Path {} is outside the {} namespace", path.display(), marker)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    Validation(ValidationError),
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
    TrashFailed(PathBuf, trash::Error),
    IoError(PathBuf, io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Validation(e) => write!(f, "{}", e),
            StorageError::RenameFailed { from, to, source } => write!(
                f,
                "Failed to rename {} to {}: {}",
                from.display(),
                to.display(),
                source
            ),
            StorageError::TrashFailed(p, e) => {
                write!(f, "Failed to move {} to the recycle bin: {}", p.display(), e)
            }
            StorageError::IoError(p, e) => write!(f, "IO error on {}: {}", p.display(), e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<ValidationError> for StorageError {
    fn from(error: ValidationError) -> Self {
        StorageError::Validation(error)
    }
}

/// Host integration errors
#[derive(Debug)]
pub enum HostError {
    NullParam,
    NullFunctions,
    NullState,
    Rejected(&'static str),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::NullParam => write!(f, "Host passed a null initialize parameter"),
            HostError::NullFunctions => write!(f, "Host passed a null function table"),
            HostError::NullState => write!(f, "Host passed a null Lua state"),
            HostError::Rejected(cb) => write!(f, "Host rejected {} callback", cb),
        }
    }
}

impl std::error::Error for HostError {}

/// Top-level plugin error that encompasses all error types
#[derive(Debug)]
pub enum BridgeError {
    Host(HostError),
    Lua(mlua::Error),
    IoError(io::Error),
    AlreadyInitialized,
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::Host(e) => write!(f, "Host error: {}", e),
            BridgeError::Lua(e) => write!(f, "Lua error: {}", e),
            BridgeError::IoError(e) => write!(f, "I/O error: {}", e),
            BridgeError::AlreadyInitialized => write!(f, "Plugin already initialized"),
        }
    }
}

impl std::error::Error for BridgeError {}

impl From<HostError> for BridgeError {
    fn from(error: HostError) -> Self {
        BridgeError::Host(error)
    }
}

impl From<mlua::Error> for BridgeError {
    fn from(error: mlua::Error) -> Self {
        BridgeError::Lua(error)
    }
}

impl From<io::Error> for BridgeError {
    fn from(error: io::Error) -> Self {
        BridgeError::IoError(error)
    }
}
