//! SourceTree - Ordered listing of a directory tree

use super::{EntryKind, TreeEntry};
use std::path::PathBuf;

/// Pre-order listing of everything under `root_path`.
///
/// Parents always precede their children, so replaying the entries in order
/// never writes a file before its directory exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTree {
    pub root_path: PathBuf,
    pub entries: Vec<TreeEntry>,

    /// Aggregate statistics
    pub total_files: usize,
    pub total_dirs: usize,
    pub total_size: u64,
}

impl SourceTree {
    /// Create a new empty SourceTree
    pub fn new(root_path: PathBuf) -> Self {
        Self {
            root_path,
            entries: Vec::new(),
            total_files: 0,
            total_dirs: 0,
            total_size: 0,
        }
    }

    /// Append an entry, updating aggregate statistics
    pub fn push(&mut self, entry: TreeEntry) {
        match entry.kind {
            EntryKind::Dir => self.total_dirs += 1,
            EntryKind::File => {
                self.total_files += 1;
                self.total_size += entry.size;
            }
        }
        self.entries.push(entry);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over file entries only
    pub fn files(&self) -> impl Iterator<Item = &TreeEntry> {
        self.entries.iter().filter(|entry| !entry.is_dir())
    }
}
