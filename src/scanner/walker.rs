//! Sequential directory walker

use crate::types::{InstallError, SourceTree, TreeEntry};
use std::path::Path;
use tracing::{debug, warn};

/// Walk a source path and list every directory and file beneath it
///
/// Unlike a sync scan, nothing is filtered: hidden files, `.gitignore`d files
/// and ignore-file rules are all disabled so the listing is a faithful copy
/// of what is on disk. Symlinks are followed.
///
/// Entries come back in pre-order, siblings sorted by file name. The root
/// itself is the first entry and carries an empty relative path.
///
/// # Arguments
/// * `root_path` - Directory (or single file) to list
///
/// # Returns
/// * `Ok(SourceTree)` - Listing of the tree; empty if `root_path` does not exist
/// * `Err(InstallError)` - IO error while reading the tree
pub fn scan_tree(root_path: &Path) -> Result<SourceTree, InstallError> {
    let mut tree = SourceTree::new(root_path.to_path_buf());

    if !root_path.exists() {
        debug!(path = %root_path.display(), "scan root missing, nothing to list");
        return Ok(tree);
    }

    let walker = ignore::WalkBuilder::new(root_path)
        .standard_filters(false)
        .follow_links(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for result in walker {
        let entry = result?;

        let Some(file_type) = entry.file_type() else {
            continue;
        };

        let relative_path = entry
            .path()
            .strip_prefix(root_path)
            .map_err(|_| {
                InstallError::Walk(format!(
                    "{} escaped the walk root {}",
                    entry.path().display(),
                    root_path.display()
                ))
            })?
            .to_path_buf();

        if file_type.is_dir() {
            tree.push(TreeEntry::dir(relative_path));
        } else if file_type.is_file() {
            let size = entry.metadata()?.len();
            tree.push(TreeEntry::file(relative_path, size));
        } else {
            // Pipes, sockets, devices
            warn!(path = %entry.path().display(), "skipping special file");
        }
    }

    Ok(tree)
}
