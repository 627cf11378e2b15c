use crate::manifest::Manifest;
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

/// A directory or placeholder file staged for creation, relative to the destination root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualEntry {
    pub destination: PathBuf,
    /// `true` for an empty placeholder file, `false` for a directory.
    pub is_file: bool,
}
/// An ordered plan of [`VirtualEntry`] values built from a [`Manifest`].
///
/// Every directory appears once, and always before anything placed inside it, so
/// applying the entries front to back never writes into a missing parent.
#[derive(Debug, Clone, Default)]
pub struct VirtualFS {
    pub entries: Vec<VirtualEntry>,
    seen_dirs: HashSet<PathBuf>,
}
impl VirtualFS {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut vfs = Self::new();

        for (group_path, group) in &manifest.groups {
            let base = PathBuf::from(group_path);

            vfs.push_dir(&base);

            for dir in &group.dirs {
                vfs.push_dir(&base.join(dir));
            }

            for file in &group.files {
                vfs.push_file(base.join(file));
            }
        }

        vfs
    }

    /// Stages a directory and any of its ancestors not yet staged.
    pub fn push_dir(&mut self, path: &Path) {
        let path = strip_cur_dir(path);
        if path.as_os_str().is_empty() || self.seen_dirs.contains(&path) {
            return;
        }

        if let Some(parent) = path.parent() {
            self.push_dir(parent);
        }

        self.seen_dirs.insert(path.clone());
        self.entries.push(VirtualEntry {
            destination: path,
            is_file: false,
        });
    }

    pub fn push_file(&mut self, path: PathBuf) {
        let path = strip_cur_dir(&path);

        if let Some(parent) = path.parent() {
            self.push_dir(parent);
        }

        self.entries.push(VirtualEntry {
            destination: path,
            is_file: true,
        });
    }

    pub fn directories(&self) -> impl Iterator<Item = &VirtualEntry> {
        self.entries.iter().filter(|e| !e.is_file)
    }

    pub fn files(&self) -> impl Iterator<Item = &VirtualEntry> {
        self.entries.iter().filter(|e| e.is_file)
    }
}

fn strip_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .collect()
}
