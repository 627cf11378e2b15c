use crate::{
    errors::{FileOperation, FilesystemError},
    vfs::VirtualFS,
};
use colored::Colorize;
use std::{fs, path::Path};

/// Counts of what a run ensured on disk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub directories: usize,
    pub files: usize,
}

/// Creates the directory and any missing ancestors.
///
/// An existing directory is left untouched. Fails when some component of `path`
/// exists as something other than a directory, or when permissions are insufficient.
///
/// # Errors
///
/// Returns a [`FilesystemError`] with [`FileOperation::CreateDir`].
pub fn ensure_directory(path: &Path) -> Result<(), FilesystemError> {
    fs::create_dir_all(path)
        .map_err(|error| FilesystemError::new(FileOperation::CreateDir, path.into(), error))?;

    log::debug!("ensured dir: {}", path.display());

    Ok(())
}
/// Creates an empty file, truncating whatever was there before.
///
/// Existing content is discarded without warning.
///
/// # Errors
///
/// Returns a [`FilesystemError`] with [`FileOperation::CreateFile`] if the parent
/// directory is missing, the path is a directory, or permissions are insufficient.
pub fn ensure_empty_file(path: &Path) -> Result<(), FilesystemError> {
    fs::File::create(path)
        .map_err(|error| FilesystemError::new(FileOperation::CreateFile, path.into(), error))?;

    log::debug!("ensured empty file: {}", path.display());

    Ok(())
}
/// Applies every entry of a [`VirtualFS`] under `destination_root`, front to back.
///
/// The first failure stops the run. Nothing created before it is removed.
pub fn apply_vfs(
    vfs: &VirtualFS,
    destination_root: &Path,
    echo: bool,
) -> Result<ScaffoldReport, FilesystemError> {
    let mut report = ScaffoldReport::default();

    ensure_directory(destination_root)?;

    for entry in &vfs.entries {
        let final_path = destination_root.join(&entry.destination);

        if entry.is_file {
            ensure_empty_file(&final_path)?;
            report.files += 1;

            if echo {
                println!("{} {}", "create".green(), final_path.display());
            }
        } else {
            ensure_directory(&final_path)?;
            report.directories += 1;

            if echo {
                println!("{} {}", "mkdir".blue(), final_path.display());
            }
        }
    }

    log::info!(
        "scaffolded {} directories and {} files under {}",
        report.directories,
        report.files,
        destination_root.display()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Manifest;

    #[test]
    fn ensure_directory_creates_ancestors_and_tolerates_existing() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("src/views/components");

        ensure_directory(&nested).unwrap();
        ensure_directory(&nested).unwrap();

        assert!(nested.is_dir());
    }

    #[test]
    fn ensure_directory_fails_when_component_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("css"), "not a dir").unwrap();

        let error = ensure_directory(&dir.path().join("css/components")).unwrap_err();

        assert_eq!(error.operation, FileOperation::CreateDir);
        assert_eq!(error.path, dir.path().join("css/components"));
    }

    #[test]
    fn ensure_empty_file_truncates_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("main.js");
        std::fs::write(&file, "console.log('oink');").unwrap();

        ensure_empty_file(&file).unwrap();

        assert_eq!(std::fs::metadata(&file).unwrap().len(), 0);
    }

    #[test]
    fn ensure_empty_file_fails_without_parent() {
        let dir = tempfile::tempdir().unwrap();
        let error = ensure_empty_file(&dir.path().join("missing/main.css")).unwrap_err();

        assert_eq!(error.operation, FileOperation::CreateFile);
    }

    #[test]
    fn ensure_empty_file_fails_on_directory() {
        let dir = tempfile::tempdir().unwrap();

        assert!(ensure_empty_file(dir.path()).is_err());
    }

    #[test]
    fn apply_vfs_reports_counts() {
        let dir = tempfile::tempdir().unwrap();
        let vfs = VirtualFS::from_manifest(&Manifest::builtin());

        let report = apply_vfs(&vfs, dir.path(), false).unwrap();

        assert_eq!(
            report,
            ScaffoldReport {
                directories: 14,
                files: 68
            }
        );
        assert!(dir.path().join("src/views/ui/SoundManager.js").is_file());
    }

    #[test]
    fn apply_vfs_stops_at_first_failure_and_keeps_partial_tree() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("css")).unwrap();
        std::fs::write(dir.path().join("css/layouts"), "in the way").unwrap();
        let vfs = VirtualFS::from_manifest(&Manifest::builtin());

        let error = apply_vfs(&vfs, dir.path(), false).unwrap_err();

        assert_eq!(error.path, dir.path().join("css/layouts"));
        assert!(dir.path().join("index.html").is_file());
        assert!(dir.path().join("css/components").is_dir());
        assert!(!dir.path().join("css/animations").exists());
    }
}
