//! Blocking filesystem transfers on the local disk.
//!
//! These run inside `spawn_blocking`; nothing here touches the host.

use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::kernel::paths::fold_case;

pub type Result<T> = std::result::Result<T, TransferError>;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("\"{}\" does not exist", .0.display())]
    SourceMissing(PathBuf),

    #[error("\"{}\" already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("cannot copy \"{}\" into itself", .0.display())]
    IntoItself(PathBuf),

    #[error("source and destination are the same")]
    SamePath(PathBuf),

    #[error("cannot replace \"{}\": it contains the source", .0.display())]
    ContainsSource(PathBuf),

    #[error("{op} \"{}\": {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn io_err<'a>(op: &'static str, path: &'a Path) -> impl FnOnce(io::Error) -> TransferError + 'a {
    move |source| TransferError::Io {
        op,
        path: path.to_path_buf(),
        source,
    }
}

/// Creates the parent directories of `destination`.
///
/// Best-effort: a failure is only logged and left for the dependent
/// copy/move/create call to report.
pub fn ensure_parent_dirs(destination: &Path) {
    let Some(parent) = destination.parent() else {
        return;
    };
    if parent.as_os_str().is_empty() || parent.is_dir() {
        return;
    }
    if let Err(e) = fs::create_dir_all(parent) {
        tracing::debug!(
            parent = %parent.display(),
            error = %e,
            "create parent dirs failed, continuing"
        );
    }
}

/// Copies a file or a whole directory tree. Returns whether `source` is a directory.
///
/// Partial copies are left in place when a nested entry fails.
pub fn duplicate_path(source: &Path, destination: &Path, overwrite: bool) -> Result<bool> {
    let meta =
        fs::metadata(source).map_err(|_| TransferError::SourceMissing(source.to_path_buf()))?;
    check_transfer(source, destination)?;
    prepare_destination(destination, overwrite)?;
    ensure_parent_dirs(destination);

    if meta.is_dir() {
        copy_dir_recursive(source, destination)?;
        Ok(true)
    } else {
        copy_file_with_metadata(source, destination)?;
        Ok(false)
    }
}

/// Moves a file or directory, copying then deleting across devices.
/// Returns whether `source` is a directory.
pub fn move_path(source: &Path, destination: &Path, overwrite: bool) -> Result<bool> {
    let meta = fs::symlink_metadata(source)
        .map_err(|_| TransferError::SourceMissing(source.to_path_buf()))?;
    let is_dir = meta.is_dir();
    check_transfer(source, destination)?;
    prepare_destination(destination, overwrite)?;
    ensure_parent_dirs(destination);

    match fs::rename(source, destination) {
        Ok(()) => Ok(is_dir),
        Err(e) if is_cross_device(&e) => {
            tracing::info!(
                source = %source.display(),
                destination = %destination.display(),
                "rename crosses devices, falling back to copy"
            );
            copy_then_remove(source, destination)?;
            Ok(is_dir)
        }
        Err(e) => Err(io_err("rename", source)(e)),
    }
}

/// Fails when `source` and `destination` overlap, equal or nested either way.
///
/// Paths are compared with their parent directory resolved, so `..` and
/// symlinked parents are accounted for while the leaf itself is not followed.
pub fn check_transfer(source: &Path, destination: &Path) -> Result<()> {
    let src = resolve_parent(source);
    let dst = resolve_parent(destination);
    if src == dst {
        return Err(TransferError::SamePath(source.to_path_buf()));
    }
    if src.starts_with(&dst) {
        return Err(TransferError::ContainsSource(destination.to_path_buf()));
    }
    if dst.starts_with(&src) {
        return Err(TransferError::IntoItself(source.to_path_buf()));
    }
    Ok(())
}

/// Cross-device move: copy everything, then remove the source.
fn copy_then_remove(source: &Path, destination: &Path) -> Result<()> {
    duplicate_path(source, destination, false)?;
    remove_path(source)
}

/// Creates an empty file, including missing parent directories.
pub fn create_file(path: &Path) -> Result<()> {
    if fs::symlink_metadata(path).is_ok() {
        return Err(TransferError::AlreadyExists(path.to_path_buf()));
    }
    ensure_parent_dirs(path);
    fs::OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(path)
        .map(|_| ())
        .map_err(io_err("create", path))
}

/// Removes a file or a directory tree.
pub fn delete_path(path: &Path) -> Result<()> {
    if fs::symlink_metadata(path).is_err() {
        return Err(TransferError::SourceMissing(path.to_path_buf()));
    }
    remove_path(path)
}

fn remove_path(path: &Path) -> Result<()> {
    let meta = fs::symlink_metadata(path).map_err(io_err("stat", path))?;
    if meta.is_dir() {
        fs::remove_dir_all(path).map_err(io_err("remove_dir_all", path))
    } else {
        fs::remove_file(path).map_err(io_err("remove_file", path))
    }
}

fn prepare_destination(destination: &Path, overwrite: bool) -> Result<()> {
    if fs::symlink_metadata(destination).is_err() {
        return Ok(());
    }
    if !overwrite {
        return Err(TransferError::AlreadyExists(destination.to_path_buf()));
    }
    remove_path(destination)
}

fn copy_dir_recursive(source: &Path, destination: &Path) -> Result<()> {
    fs::create_dir_all(destination).map_err(io_err("create_dir", destination))?;

    for entry in fs::read_dir(source).map_err(io_err("read_dir", source))? {
        let entry = entry.map_err(io_err("read_dir", source))?;
        let from = entry.path();
        let to = destination.join(entry.file_name());
        // Follows symlinks, so linked trees are copied by content.
        let meta = fs::metadata(&from).map_err(io_err("stat", &from))?;
        if meta.is_dir() {
            copy_dir_recursive(&from, &to)?;
        } else {
            copy_file_with_metadata(&from, &to)?;
        }
    }

    let perms = fs::metadata(source)
        .map_err(io_err("stat", source))?
        .permissions();
    fs::set_permissions(destination, perms).map_err(io_err("set_permissions", destination))
}

fn copy_file_with_metadata(source: &Path, destination: &Path) -> Result<()> {
    let mut reader = File::open(source).map_err(io_err("open", source))?;
    let meta = reader.metadata().map_err(io_err("stat", source))?;
    let mut writer = File::create(destination).map_err(io_err("create", destination))?;
    io::copy(&mut reader, &mut writer).map_err(io_err("copy", destination))?;

    let mut times = FileTimes::new();
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    writer
        .set_times(times)
        .map_err(io_err("set_times", destination))?;
    drop(writer);

    fs::set_permissions(destination, meta.permissions())
        .map_err(io_err("set_permissions", destination))
}

fn resolve_parent(path: &Path) -> PathBuf {
    let resolved = match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => fs::canonicalize(parent)
            .map(|parent| parent.join(name))
            .or_else(|_| std::path::absolute(path)),
        _ => fs::canonicalize(path).or_else(|_| std::path::absolute(path)),
    };
    fold_case(resolved.unwrap_or_else(|_| path.to_path_buf()))
}

fn is_cross_device(e: &io::Error) -> bool {
    #[cfg(unix)]
    {
        e.raw_os_error() == Some(libc::EXDEV)
    }

    #[cfg(windows)]
    {
        // ERROR_NOT_SAME_DEVICE
        e.raw_os_error() == Some(17)
    }

    #[cfg(not(any(unix, windows)))]
    {
        let _ = e;
        false
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/file/local.rs"]
mod tests;
