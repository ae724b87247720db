use super::*;
use std::sync::mpsc;
use tempfile::tempdir;

fn runtime() -> (TransferRuntime, mpsc::Receiver<TransferMessage>) {
    let (tx, rx) = mpsc::channel();
    let runtime = TransferRuntime::new(tx, &Settings::default()).expect("build runtime");
    (runtime, rx)
}

#[test]
fn duplicate_reports_success_after_join() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.txt");
    std::fs::write(&source, "hello").unwrap();
    let destination = dir.path().join("b.txt");
    let (runtime, rx) = runtime();

    let handle = runtime.duplicate(source.clone(), destination.clone(), false);
    assert!(handle.join());

    assert_eq!(
        rx.try_recv().unwrap(),
        TransferMessage::PathDuplicated {
            source,
            destination: destination.clone(),
        }
    );
    assert_eq!(std::fs::read_to_string(destination).unwrap(), "hello");
}

#[test]
fn move_reports_kind_of_moved_path() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("tree");
    std::fs::create_dir(&source).unwrap();
    let destination = dir.path().join("moved");
    let (runtime, rx) = runtime();

    assert!(runtime
        .move_path(source.clone(), destination.clone(), false)
        .join());

    assert_eq!(
        rx.try_recv().unwrap(),
        TransferMessage::PathMoved {
            source,
            destination,
            is_dir: true,
        }
    );
}

#[test]
fn failures_become_op_error_messages() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("missing.txt");
    let destination = dir.path().join("b.txt");
    let (runtime, rx) = runtime();

    assert!(runtime
        .duplicate(source.clone(), destination.clone(), false)
        .join());

    match rx.try_recv().unwrap() {
        TransferMessage::OpError {
            op,
            path,
            to,
            error,
        } => {
            assert_eq!(op, TransferOp::Duplicate);
            assert_eq!(path, source);
            assert_eq!(to, Some(destination));
            assert!(error.contains("does not exist"));
        }
        other => panic!("unexpected message: {other:?}"),
    }
}

#[test]
fn delete_paths_reports_each_path() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    std::fs::write(&a, "a").unwrap();
    let (runtime, rx) = runtime();

    assert!(runtime.delete_paths(vec![a.clone(), b.clone()]).join());

    assert_eq!(rx.try_recv().unwrap(), TransferMessage::PathDeleted { path: a });
    assert!(matches!(
        rx.try_recv().unwrap(),
        TransferMessage::OpError { op: TransferOp::Delete, path, .. } if path == b
    ));
}

#[test]
fn compare_with_missing_program_reports_failure() {
    let dir = tempdir().unwrap();
    let (runtime, rx) = runtime();
    let tool = DiffTool {
        name: "ghost".to_string(),
        program: dir.path().join("no-such-diff-tool").to_string_lossy().to_string(),
        args: Vec::new(),
        extensions: Vec::new(),
    };

    assert!(runtime
        .launch_compare(tool, dir.path().join("l"), dir.path().join("r"))
        .join());

    assert!(matches!(
        rx.try_recv().unwrap(),
        TransferMessage::CompareFailed { tool, .. } if tool == "ghost"
    ));
}
