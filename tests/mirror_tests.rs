//! Mirroring a command bundle onto a destination directory

use micro_claude::{mirror_tree, SyncStats};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Relative path -> bytes for every file under `root`
fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    fn walk(root: &Path, dir: &Path, files: &mut BTreeMap<PathBuf, Vec<u8>>) {
        for entry in fs::read_dir(dir).expect("read_dir") {
            let path = entry.expect("dir entry").path();
            if path.is_dir() {
                walk(root, &path, files);
            } else {
                let rel = path.strip_prefix(root).expect("under root").to_path_buf();
                files.insert(rel, fs::read(&path).expect("read file"));
            }
        }
    }

    let mut files = BTreeMap::new();
    walk(root, root, &mut files);
    files
}

fn sample_bundle(root: &Path) {
    fs::create_dir_all(root.join("templates/nested")).expect("create bundle dirs");
    fs::create_dir_all(root.join("empty")).expect("create empty dir");
    fs::write(root.join("mc-interrogate.md"), b"interrogate").expect("write");
    fs::write(root.join("mc-explode.md"), b"explode").expect("write");
    fs::write(root.join(".hidden.md"), b"hidden").expect("write");
    fs::write(root.join("templates/prd.json"), br#"{"tasks":[]}"#).expect("write");
    fs::write(root.join("templates/nested/notes.md"), [0u8, 159, 146, 150]).expect("write");
}

#[test]
fn test_mirror_reproduces_structure_and_bytes() {
    let src = TempDir::new().expect("create src tempdir");
    let dst = TempDir::new().expect("create dst tempdir");
    sample_bundle(src.path());
    let dest = dst.path().join(".claude/commands");

    let stats = mirror_tree(src.path(), &dest).expect("mirror should succeed");

    assert_eq!(snapshot(src.path()), snapshot(&dest));
    assert!(dest.join("empty").is_dir(), "empty directories are mirrored");
    assert_eq!(stats.files_copied, 5);
    assert_eq!(stats.dirs_ensured, 4, "root, empty, templates, templates/nested");
}

#[test]
fn test_mirror_is_idempotent() {
    let src = TempDir::new().expect("create src tempdir");
    let dst = TempDir::new().expect("create dst tempdir");
    sample_bundle(src.path());

    let first_stats = mirror_tree(src.path(), dst.path()).expect("first run");
    let first = snapshot(dst.path());
    let second_stats = mirror_tree(src.path(), dst.path()).expect("second run");
    let second = snapshot(dst.path());

    assert_eq!(first, second);
    assert_eq!(first_stats, second_stats);
}

#[test]
fn test_mirror_missing_source_is_noop() {
    let src = TempDir::new().expect("create src tempdir");
    let dst = TempDir::new().expect("create dst tempdir");
    fs::write(dst.path().join("keep.md"), b"untouched").expect("write existing file");
    let before = snapshot(dst.path());

    let stats = mirror_tree(&src.path().join("does-not-exist"), dst.path())
        .expect("missing source must not be an error");

    assert_eq!(stats, SyncStats::default());
    assert_eq!(snapshot(dst.path()), before);
}

#[test]
fn test_mirror_missing_source_does_not_create_destination() {
    let src = TempDir::new().expect("create src tempdir");
    let dst = TempDir::new().expect("create dst tempdir");
    let dest = dst.path().join("commands");

    mirror_tree(&src.path().join("gone"), &dest).expect("no-op");

    assert!(!dest.exists());
}

#[test]
fn test_mirror_overwrites_and_keeps_extra_destination_files() {
    let src = TempDir::new().expect("create src tempdir");
    let dst = TempDir::new().expect("create dst tempdir");
    fs::write(src.path().join("mc-implement.md"), b"new version").expect("write source");
    fs::write(dst.path().join("mc-implement.md"), b"old").expect("write stale copy");
    fs::write(dst.path().join("user-command.md"), b"mine").expect("write user file");

    mirror_tree(src.path(), dst.path()).expect("mirror should succeed");

    assert_eq!(
        fs::read(dst.path().join("mc-implement.md")).expect("read"),
        b"new version"
    );
    assert_eq!(fs::read(dst.path().join("user-command.md")).expect("read"), b"mine");
}

#[test]
fn test_mirror_fails_when_directory_is_blocked_by_file() {
    let src = TempDir::new().expect("create src tempdir");
    let dst = TempDir::new().expect("create dst tempdir");
    fs::create_dir(src.path().join("templates")).expect("create dir");
    fs::write(src.path().join("templates/a.md"), b"a").expect("write");
    fs::write(dst.path().join("templates"), b"i am a file").expect("write blocker");

    let err = mirror_tree(src.path(), dst.path()).expect_err("blocked directory must fail");

    assert_eq!(err.path(), Some(dst.path().join("templates").as_path()));
}

#[test]
fn test_mirror_single_file_source_copies_to_destination() {
    let src = TempDir::new().expect("create src tempdir");
    let dst = TempDir::new().expect("create dst tempdir");
    let file = src.path().join("mc-interrogate.md");
    fs::write(&file, b"interrogate").expect("write");
    let target = dst.path().join("commands/mc-interrogate.md");

    let stats = mirror_tree(&file, &target).expect("file source should mirror");

    assert_eq!(fs::read(&target).expect("read copy"), b"interrogate");
    assert_eq!(
        stats,
        SyncStats {
            files_copied: 1,
            dirs_ensured: 0,
            bytes_copied: 11,
        }
    );
    assert!(!dst.path().join("commands/mc-interrogate.md.part").exists());
}
