//! Executor module for file operations

pub mod copy;

use crate::scanner::scan_tree;
use crate::types::{EntryKind, InstallError, SourceTree, SyncStats};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub use copy::copy_file_atomic;

/// Mirror `source` onto `destination`
///
/// Directories are created as needed and files are copied byte-for-byte,
/// overwriting whatever is already at the destination. Files that exist only
/// at the destination are left alone. A missing `source` is a no-op.
///
/// Running this twice against an unchanged source produces the same
/// destination content. It is not atomic across files: an error partway
/// through leaves whatever was already copied in place.
pub fn mirror_tree(source: &Path, destination: &Path) -> Result<SyncStats, InstallError> {
    let tree = scan_tree(source)?;
    apply_tree(&tree, destination)
}

/// Replay a scanned tree at `destination`
///
/// Entries are applied in listing order, which puts every directory before
/// its contents.
pub fn apply_tree(tree: &SourceTree, destination: &Path) -> Result<SyncStats, InstallError> {
    let mut stats = SyncStats::default();

    for entry in &tree.entries {
        let target = path_under(destination, &entry.path);
        match entry.kind {
            EntryKind::Dir => {
                fs::create_dir_all(&target)
                    .map_err(InstallError::fs("create directory", &target))?;
                debug!(path = %target.display(), "directory ready");
                stats.dirs_ensured += 1;
            }
            EntryKind::File => {
                let src = path_under(&tree.root_path, &entry.path);
                let bytes = copy_file_atomic(&src, &target)?;
                debug!(from = %src.display(), to = %target.display(), bytes, "copied");
                stats.files_copied += 1;
                stats.bytes_copied += bytes;
            }
        }
    }

    Ok(stats)
}

/// The root entry maps onto `base` itself; joining an empty path would add a
/// trailing separator, which breaks file roots.
fn path_under(base: &Path, relative: &Path) -> PathBuf {
    if relative.as_os_str().is_empty() {
        base.to_path_buf()
    } else {
        base.join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_under_root_is_base() {
        let dest = Path::new("/project/.claude/commands");
        assert_eq!(path_under(dest, Path::new("")), dest);
        assert_eq!(
            path_under(Path::new("/bundle/one.md"), Path::new("")).as_os_str(),
            "/bundle/one.md"
        );
        assert_eq!(
            path_under(dest, Path::new("mc-explode.md")),
            dest.join("mc-explode.md")
        );
    }

    #[test]
    fn test_apply_empty_tree_touches_nothing() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let dest = temp_dir.path().join("never-created");
        let tree = SourceTree::new(temp_dir.path().join("missing"));

        let stats = apply_tree(&tree, &dest).expect("empty tree should apply");
        assert_eq!(stats, SyncStats::default());
        assert!(!dest.exists());
    }

    #[test]
    fn test_mirror_single_file_source() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let src = temp_dir.path().join("one.md");
        fs::write(&src, b"single").expect("write source");
        let dest = temp_dir.path().join("out/one-copy.md");

        let stats = mirror_tree(&src, &dest).expect("mirror should succeed");
        assert_eq!(stats.files_copied, 1);
        assert_eq!(stats.dirs_ensured, 0);
        assert_eq!(fs::read(&dest).expect("read copy"), b"single");
    }
}
