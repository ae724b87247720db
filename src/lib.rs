//! zsidebar - file-management commands for an editor's project side bar
//!
//! Module layout:
//! - core: command names and invocation arguments
//! - kernel: path helpers, retarget planning, host ports, transfer adapters
//! - app: `Sidebar`, which dispatches commands against a `SidebarHost`

pub mod app;
pub mod core;
pub mod kernel;

pub use app::Sidebar;
pub use crate::core::{CommandArgs, SidebarCommand};
pub use kernel::services::adapters::{TaskHandle, TransferError};
pub use kernel::services::ports::{
    ClipboardError, ConfirmRequest, DiffTool, InputRequest, Settings, SidebarHost, ViewId,
    ViewRef,
};
pub use kernel::{PendingConfirm, PendingInput, TransferOp};
