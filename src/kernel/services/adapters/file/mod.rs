//! Local filesystem transfers: duplicate, move, create and delete.

pub mod local;

pub use local::{
    check_transfer, create_file, delete_path, duplicate_path, ensure_parent_dirs, move_path,
    TransferError,
};
