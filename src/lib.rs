pub mod api;
pub mod errors;
pub mod manifest;
pub mod preview;
pub mod scaffold;
pub mod vfs;

pub use api::{create_folder_structure, create_folder_structure_in, preview, scaffold};
pub use errors::{FileOperation, FilesystemError, ManifestError, ScaffoldError};
pub use manifest::{Group, Manifest};
pub use scaffold::{ensure_directory, ensure_empty_file, ScaffoldReport};
