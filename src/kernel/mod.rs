//! Headless side-bar core: path helpers, retarget planning, pending state.

pub mod paths;
pub mod retarget;
pub mod services;
pub mod state;

pub use paths::{basename, duplicate_name, name_selection, resolve_relative, split_extension};
pub use retarget::plan_retarget;
pub use state::{PendingConfirm, PendingInput, TransferOp};
