//! Weak canonicalization
//!
//! Resolves symlinks for the part of a path that exists and normalizes the
//! rest lexically, so paths that are about to be created can still be checked.

use path_clean::PathClean;
use std::io::{self, ErrorKind};
use std::path::{Component, Path, PathBuf};

/// Canonicalize `path` without requiring it to exist
pub fn weakly_canonical(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let components: Vec<Component<'_>> = absolute.components().collect();

    // Longest existing prefix wins; everything after it is appended as-is.
    for split in (1..=components.len()).rev() {
        let head: PathBuf = components[..split].iter().collect();

        match head.canonicalize() {
            Ok(canonical) => {
                let mut resolved = canonical;
                for component in &components[split..] {
                    resolved.push(component.as_os_str());
                }
                return Ok(resolved.clean());
            }
            Err(e) if is_missing(&e) => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(absolute.clean())
}

fn is_missing(e: &io::Error) -> bool {
    matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory)
}
