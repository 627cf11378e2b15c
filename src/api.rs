use crate::{
    errors::ScaffoldError,
    manifest::Manifest,
    preview::preview_as_tree,
    scaffold::{apply_vfs, ScaffoldReport},
    vfs::VirtualFS,
};
use std::path::Path;

/// Lays out the built-in game skeleton in the current working directory.
///
/// Every manifest directory exists and every listed file exists and is empty on
/// return. Placeholder files that already held content are truncated.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] on the first directory or file that cannot be created.
/// Whatever was created before the failure stays on disk.
pub fn create_folder_structure() -> Result<ScaffoldReport, ScaffoldError> {
    create_folder_structure_in(Path::new("."))
}

/// Same as [`create_folder_structure`], rooted at `destination` instead of the
/// current directory. `destination` itself is created if missing.
pub fn create_folder_structure_in(destination: &Path) -> Result<ScaffoldReport, ScaffoldError> {
    scaffold(&Manifest::builtin(), destination, false)
}

/// Applies `manifest` under `destination`, printing one line per entry when `echo` is set.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if the manifest is invalid or a directory or file
/// cannot be created.
pub fn scaffold(
    manifest: &Manifest,
    destination: &Path,
    echo: bool,
) -> Result<ScaffoldReport, ScaffoldError> {
    manifest.validate()?;

    let vfs = VirtualFS::from_manifest(manifest);

    log::debug!(
        "planned {} entries under {}",
        vfs.entries.len(),
        destination.display()
    );

    let report = apply_vfs(&vfs, destination, echo)?;

    Ok(report)
}

/// Prints what [`scaffold`] would create, without touching the filesystem.
pub fn preview(manifest: &Manifest, destination: &Path) -> Result<(), ScaffoldError> {
    manifest.validate()?;

    let vfs = VirtualFS::from_manifest(manifest);

    preview_as_tree(&vfs, destination);

    Ok(())
}
