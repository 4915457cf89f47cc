//! Atomic file copy implementation

use crate::types::InstallError;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Copy a file atomically using the write-then-rename strategy
///
/// 1. Write to a sibling `.part` file
/// 2. Flush and sync to disk
/// 3. Preserve metadata (permissions, mtime)
/// 4. Rename over the destination, replacing any existing file
///
/// A failed copy never leaves a truncated file at `dest`; the `.part` file is
/// removed on a best-effort basis.
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
/// * `Err(InstallError)` - IO error naming the path that failed
///
/// # Example
/// ```no_run
/// use micro_claude::executor::copy_file_atomic;
/// use std::path::Path;
///
/// let bytes = copy_file_atomic(
///     Path::new("bundle/mc-explode.md"),
///     Path::new(".claude/commands/mc-explode.md"),
/// )?;
/// # Ok::<(), micro_claude::InstallError>(())
/// ```
pub fn copy_file_atomic(src: &Path, dest: &Path) -> Result<u64, InstallError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(InstallError::fs("create directory", parent))?;
    }

    let part_path = part_path_for(dest);
    let result = write_part_then_rename(src, &part_path, dest);
    if result.is_err() && part_path.exists() {
        let _ = fs::remove_file(&part_path);
    }
    result
}

/// `name.md` -> `name.md.part`, keeping the original extension visible
fn part_path_for(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".part");
    dest.with_file_name(name)
}

fn write_part_then_rename(src: &Path, part_path: &Path, dest: &Path) -> Result<u64, InstallError> {
    let mut src_file = File::open(src).map_err(InstallError::fs("open", src))?;
    let mut part_file = File::create(part_path).map_err(InstallError::fs("create", part_path))?;

    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file
            .read(&mut buffer)
            .map_err(InstallError::fs("read", src))?;
        if bytes_read == 0 {
            break;
        }
        part_file
            .write_all(&buffer[..bytes_read])
            .map_err(InstallError::fs("write", part_path))?;
        total_bytes += bytes_read as u64;
    }

    part_file
        .sync_all()
        .map_err(InstallError::fs("sync", part_path))?;

    // Drop the file handle before rename (required on Windows)
    drop(part_file);

    let src_metadata = fs::metadata(src).map_err(InstallError::fs("stat", src))?;
    fs::set_permissions(part_path, src_metadata.permissions())
        .map_err(InstallError::fs("set permissions on", part_path))?;

    let mtime = src_metadata
        .modified()
        .map_err(InstallError::fs("read mtime of", src))?;
    filetime::set_file_mtime(part_path, filetime::FileTime::from_system_time(mtime))
        .map_err(InstallError::fs("set mtime on", part_path))?;

    fs::rename(part_path, dest).map_err(InstallError::fs("replace", dest))?;

    Ok(total_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_path_keeps_extension() {
        assert_eq!(
            part_path_for(Path::new("/x/.claude/commands/mc-explode.md")),
            PathBuf::from("/x/.claude/commands/mc-explode.md.part")
        );
        assert_eq!(
            part_path_for(Path::new("README")),
            PathBuf::from("README.part")
        );
    }
}
