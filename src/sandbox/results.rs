//! Sandbox result types

use std::path::PathBuf;

/// A request path that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Sandbox root joined with the request, as the caller spelled it
    pub joined: PathBuf,
    /// Weakly canonical form the checks ran against
    pub canonical: PathBuf,
}
