//! TreeEntry - A single path discovered under the bundled source tree

use std::path::PathBuf;

/// Kind of filesystem entry found while walking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

/// Represents one entry of a source tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Relative path from the walk root (empty for the root itself)
    pub path: PathBuf,

    pub kind: EntryKind,

    /// File size in bytes (0 for directories)
    pub size: u64,
}

impl TreeEntry {
    /// Create a directory entry
    pub fn dir(path: PathBuf) -> Self {
        Self {
            path,
            kind: EntryKind::Dir,
            size: 0,
        }
    }

    /// Create a file entry
    pub fn file(path: PathBuf, size: u64) -> Self {
        Self {
            path,
            kind: EntryKind::File,
            size,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// True for the entry describing the walk root
    pub fn is_root(&self) -> bool {
        self.path.as_os_str().is_empty()
    }
}
