use super::*;
use std::time::{Duration, SystemTime};
use tempfile::tempdir;

#[test]
fn duplicate_file_copies_bytes_and_mtime() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.bin");
    fs::write(&source, [0u8, 1, 2, 255]).unwrap();
    let old = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);
    File::options()
        .write(true)
        .open(&source)
        .unwrap()
        .set_times(FileTimes::new().set_modified(old))
        .unwrap();

    let destination = dir.path().join("a (Copy).bin");
    let is_dir = duplicate_path(&source, &destination, false).unwrap();

    assert!(!is_dir);
    assert_eq!(fs::read(&destination).unwrap(), vec![0u8, 1, 2, 255]);
    assert_eq!(fs::metadata(&destination).unwrap().modified().unwrap(), old);
    assert!(source.exists());
}

#[test]
fn duplicate_dir_copies_tree() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("src");
    fs::create_dir_all(source.join("nested/deep")).unwrap();
    fs::write(source.join("top.txt"), "top").unwrap();
    fs::write(source.join("nested/deep/leaf.txt"), "leaf").unwrap();

    let destination = dir.path().join("copy");
    let is_dir = duplicate_path(&source, &destination, false).unwrap();

    assert!(is_dir);
    assert_eq!(fs::read_to_string(destination.join("top.txt")).unwrap(), "top");
    assert_eq!(
        fs::read_to_string(destination.join("nested/deep/leaf.txt")).unwrap(),
        "leaf"
    );
    assert!(source.join("top.txt").exists());
}

#[test]
fn duplicate_creates_missing_parent_dirs() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.txt");
    fs::write(&source, "x").unwrap();

    let destination = dir.path().join("x/y/z/a.txt");
    duplicate_path(&source, &destination, false).unwrap();
    assert_eq!(fs::read_to_string(&destination).unwrap(), "x");
}

#[test]
fn duplicate_refuses_existing_destination_without_overwrite() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.txt");
    let destination = dir.path().join("b.txt");
    fs::write(&source, "new").unwrap();
    fs::write(&destination, "old").unwrap();

    let err = duplicate_path(&source, &destination, false).unwrap_err();
    assert!(matches!(err, TransferError::AlreadyExists(_)));
    assert_eq!(fs::read_to_string(&destination).unwrap(), "old");

    duplicate_path(&source, &destination, true).unwrap();
    assert_eq!(fs::read_to_string(&destination).unwrap(), "new");
}

#[test]
fn duplicate_dir_into_itself_is_rejected() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("src");
    fs::create_dir(&source).unwrap();

    let err = duplicate_path(&source, &source.join("inner"), false).unwrap_err();
    assert!(matches!(err, TransferError::IntoItself(_)));
}

#[test]
fn duplicate_missing_source_reports_it() {
    let dir = tempdir().unwrap();
    let err = duplicate_path(&dir.path().join("nope"), &dir.path().join("b"), false).unwrap_err();
    assert!(matches!(err, TransferError::SourceMissing(_)));
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn move_file_renames_and_keeps_content() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.txt");
    fs::write(&source, "content").unwrap();

    let destination = dir.path().join("moved/b.txt");
    let is_dir = move_path(&source, &destination, false).unwrap();

    assert!(!is_dir);
    assert!(!source.exists());
    assert_eq!(fs::read_to_string(&destination).unwrap(), "content");
}

#[test]
fn move_dir_moves_whole_tree() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("src");
    fs::create_dir_all(source.join("inner")).unwrap();
    fs::write(source.join("inner/f.txt"), "f").unwrap();

    let destination = dir.path().join("lib");
    assert!(move_path(&source, &destination, false).unwrap());
    assert!(!source.exists());
    assert_eq!(fs::read_to_string(destination.join("inner/f.txt")).unwrap(), "f");
}

#[test]
fn move_refuses_existing_destination_without_overwrite() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.txt");
    let destination = dir.path().join("b.txt");
    fs::write(&source, "a").unwrap();
    fs::write(&destination, "b").unwrap();

    assert!(matches!(
        move_path(&source, &destination, false),
        Err(TransferError::AlreadyExists(_))
    ));
    assert!(source.exists());
}

#[test]
fn create_file_makes_parents_and_rejects_existing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("new/dir/file.txt");

    create_file(&path).unwrap();
    assert!(path.is_file());
    assert!(matches!(create_file(&path), Err(TransferError::AlreadyExists(_))));
}

#[test]
fn delete_path_removes_files_and_trees() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.txt");
    let tree = dir.path().join("tree");
    fs::write(&file, "a").unwrap();
    fs::create_dir_all(tree.join("x")).unwrap();
    fs::write(tree.join("x/y.txt"), "y").unwrap();

    delete_path(&file).unwrap();
    delete_path(&tree).unwrap();
    assert!(!file.exists());
    assert!(!tree.exists());
    assert!(matches!(delete_path(&file), Err(TransferError::SourceMissing(_))));
}

#[test]
fn ensure_parent_dirs_ignores_failures() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "file, not dir").unwrap();

    ensure_parent_dirs(&blocker.join("child/a.txt"));
    assert!(blocker.is_file());
}

#[test]
fn move_with_overwrite_replaces_existing_destination() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.txt");
    let destination = dir.path().join("b.txt");
    fs::write(&source, "a").unwrap();
    fs::write(&destination, "b").unwrap();

    assert!(!move_path(&source, &destination, true).unwrap());
    assert!(!source.exists());
    assert_eq!(fs::read_to_string(&destination).unwrap(), "a");
}

#[test]
fn move_with_overwrite_onto_ancestor_keeps_everything() {
    let dir = tempdir().unwrap();
    let parent = dir.path().join("p");
    fs::create_dir(&parent).unwrap();
    let source = parent.join("f.txt");
    let sibling = parent.join("sibling.txt");
    fs::write(&source, "f").unwrap();
    fs::write(&sibling, "s").unwrap();

    let err = move_path(&source, &parent, true).unwrap_err();
    assert!(matches!(err, TransferError::ContainsSource(_)));
    let err = move_path(&source, &parent.join(".."), true).unwrap_err();
    assert!(matches!(err, TransferError::ContainsSource(_)));

    assert_eq!(fs::read_to_string(&source).unwrap(), "f");
    assert!(sibling.exists());
}

#[test]
fn duplicate_with_overwrite_onto_ancestor_keeps_everything() {
    let dir = tempdir().unwrap();
    let parent = dir.path().join("q");
    fs::create_dir(&parent).unwrap();
    let source = parent.join("g.txt");
    fs::write(&source, "g").unwrap();

    let err = duplicate_path(&source, &parent, true).unwrap_err();
    assert!(matches!(err, TransferError::ContainsSource(_)));
    assert_eq!(fs::read_to_string(&source).unwrap(), "g");
}

#[test]
fn transfer_onto_same_path_is_rejected_even_with_overwrite() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.txt");
    fs::write(&source, "a").unwrap();
    let dotted = dir.path().join("sub/../a.txt");
    fs::create_dir(dir.path().join("sub")).unwrap();

    assert!(matches!(
        move_path(&source, &dotted, true),
        Err(TransferError::SamePath(_))
    ));
    assert!(matches!(
        duplicate_path(&source, &source, true),
        Err(TransferError::SamePath(_))
    ));
    assert_eq!(fs::read_to_string(&source).unwrap(), "a");
}

#[test]
fn check_transfer_allows_siblings_with_common_prefix() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("src");
    fs::create_dir(&source).unwrap();

    check_transfer(&source, &dir.path().join("src2")).unwrap();
    check_transfer(&source, &dir.path().join("new/dir/src")).unwrap();
}

#[test]
fn copy_then_remove_moves_single_file() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.txt");
    fs::write(&source, "payload").unwrap();

    let destination = dir.path().join("other/a.txt");
    copy_then_remove(&source, &destination).unwrap();

    assert!(!source.exists());
    assert_eq!(fs::read_to_string(&destination).unwrap(), "payload");
}

#[test]
fn copy_then_remove_moves_directory_tree() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("tree");
    fs::create_dir_all(source.join("a/b")).unwrap();
    fs::write(source.join("root.txt"), "r").unwrap();
    fs::write(source.join("a/b/leaf.txt"), "l").unwrap();

    let destination = dir.path().join("moved");
    copy_then_remove(&source, &destination).unwrap();

    assert!(!source.exists());
    assert_eq!(fs::read_to_string(destination.join("root.txt")).unwrap(), "r");
    assert_eq!(fs::read_to_string(destination.join("a/b/leaf.txt")).unwrap(), "l");
}
