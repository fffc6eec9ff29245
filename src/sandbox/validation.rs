//! Path validation
//!
//! Confines script-supplied paths to the sandbox root and to this mod's
//! namespace before any filesystem call is made.

use log::debug;
use std::path::{Path, PathBuf};

use crate::config::PluginConfig;
use crate::error::ValidationError;
use crate::sandbox::canonical::weakly_canonical;
use crate::sandbox::results::ResolvedPath;

/// The directory subtree scripts may touch
#[derive(Debug, Clone)]
pub struct Sandbox {
    root: PathBuf,
    canonical_root: PathBuf,
    marker: String,
}

impl Sandbox {
    /// Create a sandbox; the root is canonicalized once here and never again
    pub fn new(root: impl Into<PathBuf>, marker: impl Into<String>) -> std::io::Result<Self> {
        let root = root.into();
        let canonical_root = weakly_canonical(&root)?;
        Ok(Self {
            root,
            canonical_root,
            marker: marker.into(),
        })
    }

    /// Build the sandbox from the process working directory
    pub fn from_current_dir(config: &PluginConfig) -> std::io::Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::new(config.sandbox_root(&cwd), config.mod_name.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn canonical_root(&self) -> &Path {
        &self.canonical_root
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Resolve `relative` against the root and check it stays inside this mod's subtree
    pub fn resolve(&self, relative: &str) -> Result<ResolvedPath, ValidationError> {
        let joined = self.root.join(relative);

        let canonical = weakly_canonical(&joined)
            .map_err(|e| ValidationError::Canonicalize(relative.to_string(), e))?;
        if !canonical.starts_with(&self.canonical_root) {
            return Err(ValidationError::OutsideSandbox(canonical));
        }

        if !canonical.to_string_lossy().contains(self.marker.as_str()) {
            return Err(ValidationError::MissingMarker {
                path: canonical,
                marker: self.marker.clone(),
            });
        }

        debug!("Resolved {} to {}", relative, canonical.display());
        Ok(ResolvedPath { joined, canonical })
    }

    /// Validate an optional request path, treating `None` as a missing argument
    pub fn resolve_arg(&self, relative: Option<&str>) -> Result<ResolvedPath, ValidationError> {
        match relative {
            Some(path) => self.resolve(path),
            None => Err(ValidationError::MissingPath),
        }
    }

    pub fn is_valid(&self, relative: &str) -> bool {
        self.resolve(relative).is_ok()
    }
}
