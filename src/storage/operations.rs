//! Storage operations
//!
//! Rename and recoverable delete for paths inside the sandbox. Every request
//! is validated first; nothing touches the filesystem if validation fails.

use log::info;
use std::fs;

use crate::error::StorageError;
use crate::sandbox::Sandbox;

/// Renames `old` to `new`, both relative to the sandbox root
pub fn rename_file(
    sandbox: &Sandbox,
    old: Option<&str>,
    new: Option<&str>,
) -> Result<(), StorageError> {
    let from = sandbox.resolve_arg(old)?;
    let to = sandbox.resolve_arg(new)?;

    fs::rename(&from.joined, &to.joined).map_err(|source| StorageError::RenameFailed {
        from: from.joined.clone(),
        to: to.joined.clone(),
        source,
    })?;

    info!(
        "Renamed {} to {}",
        from.canonical.display(),
        to.canonical.display()
    );
    Ok(())
}

/// Moves `path` (file or directory) to the system recycle bin
pub fn remove_file(sandbox: &Sandbox, path: Option<&str>) -> Result<(), StorageError> {
    let target = sandbox.resolve_arg(path)?;
    let absolute = std::path::absolute(&target.joined)
        .map_err(|e| StorageError::IoError(target.joined.clone(), e))?;

    trash::delete(&absolute).map_err(|e| StorageError::TrashFailed(absolute.clone(), e))?;

    info!("Moved {} to the recycle bin", absolute.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn sandbox() -> (tempfile::TempDir, Sandbox) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("data");
        fs::create_dir_all(root.join("HudController")).unwrap();
        (dir, Sandbox::new(root, "HudController").unwrap())
    }

    #[test]
    fn test_rename_moves_content() {
        let (_dir, sandbox) = sandbox();
        let old = sandbox.root().join("HudController/old.txt");
        fs::write(&old, "layout").unwrap();

        rename_file(
            &sandbox,
            Some("HudController/old.txt"),
            Some("HudController/new.txt"),
        )
        .unwrap();

        assert!(!old.exists());
        let new = sandbox.root().join("HudController/new.txt");
        assert_eq!(fs::read_to_string(new).unwrap(), "layout");
    }

    #[test]
    fn test_rename_missing_argument() {
        let (_dir, sandbox) = sandbox();
        assert!(matches!(
            rename_file(&sandbox, None, Some("HudController/x")),
            Err(StorageError::Validation(ValidationError::MissingPath))
        ));
        assert!(matches!(
            rename_file(&sandbox, Some("HudController/x"), None),
            Err(StorageError::Validation(ValidationError::MissingPath))
        ));
    }

    #[test]
    fn test_rename_out_of_sandbox_leaves_file() {
        let (dir, sandbox) = sandbox();
        let old = sandbox.root().join("HudController/keep.txt");
        fs::write(&old, "keep").unwrap();

        let result = rename_file(
            &sandbox,
            Some("HudController/keep.txt"),
            Some("../HudController_stolen.txt"),
        );

        assert!(matches!(result, Err(StorageError::Validation(_))));
        assert!(old.exists());
        assert!(!dir.path().join("HudController_stolen.txt").exists());
    }

    #[test]
    fn test_rename_missing_source_fails() {
        let (_dir, sandbox) = sandbox();
        assert!(matches!(
            rename_file(
                &sandbox,
                Some("HudController/ghost.txt"),
                Some("HudController/other.txt")
            ),
            Err(StorageError::RenameFailed { .. })
        ));
    }

    #[test]
    fn test_remove_missing_file_fails() {
        let (_dir, sandbox) = sandbox();
        assert!(matches!(
            remove_file(&sandbox, Some("HudController/missing.txt")),
            Err(StorageError::TrashFailed(..))
        ));
    }

    #[test]
    fn test_remove_rejects_escape() {
        let (_dir, sandbox) = sandbox();
        assert!(matches!(
            remove_file(&sandbox, Some("../../etc/passwd")),
            Err(StorageError::Validation(ValidationError::OutsideSandbox(_)))
        ));
        assert!(matches!(
            remove_file(&sandbox, None),
            Err(StorageError::Validation(ValidationError::MissingPath))
        ));
    }

    #[test]
    fn test_remove_moves_file_to_trash() {
        let (_dir, sandbox) = sandbox();
        let target = sandbox.root().join("HudController/gone.txt");
        fs::write(&target, "bye").unwrap();

        remove_file(&sandbox, Some("HudController/gone.txt")).unwrap();

        assert!(!target.exists());
        assert!(sandbox.root().join("HudController").is_dir());
    }

    #[test]
    fn test_remove_directory_with_contents() {
        let (_dir, sandbox) = sandbox();
        let folder = sandbox.root().join("HudController/presets");
        fs::create_dir_all(folder.join("nested")).unwrap();
        fs::write(folder.join("a.json"), "{}").unwrap();
        fs::write(folder.join("nested/b.json"), "{}").unwrap();

        remove_file(&sandbox, Some("HudController/presets")).unwrap();

        assert!(!folder.exists());
        assert!(sandbox.root().join("HudController").is_dir());
    }
}
