use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq, Clone, Copy)]
pub enum FileOperation {
    #[error("creating a directory")]
    CreateDir,
    #[error("creating an empty file")]
    CreateFile,
    #[error("reading a file")]
    Read,
}
/// The single failure kind of a scaffolding run: the filesystem refused an operation.
///
/// Covers permission denial, path-type conflicts (a regular file where a directory is
/// expected, or the reverse) and out-of-space conditions.
#[derive(Debug, Error, Diagnostic)]
#[error("I/O error: {operation} on path '{}'", .path.display())]
#[diagnostic(
    code(truffle_scaffold::io),
    help("Check file permissions, disk space, or that no file sits where a directory belongs.")
)]
pub struct FilesystemError {
    pub operation: FileOperation,
    pub path: std::path::PathBuf,
    #[source]
    pub source: std::io::Error,
}
impl FilesystemError {
    pub fn new(operation: FileOperation, path: std::path::PathBuf, error: std::io::Error) -> Self {
        Self {
            operation,
            path,
            source: error,
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum ManifestError {
    #[error("Unable to parse manifest at '{}'", .path.display())]
    #[diagnostic(
        code(truffle_scaffold::manifest::parse),
        help("Groups are declared as [groups.\"<dir>\"] with `dirs` and `files` arrays")
    )]
    Parse {
        path: std::path::PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid manifest entry '{entry}' in group '{group}': {reason}")]
    #[diagnostic(
        code(truffle_scaffold::manifest::invalid_entry),
        help("Entries must be non-empty relative paths without '..' or root components")
    )]
    InvalidEntry {
        group: String,
        entry: String,
        reason: &'static str,
    },
}

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Filesystem(#[from] FilesystemError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Manifest(#[from] ManifestError),
}
