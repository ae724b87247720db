//! Service ports: traits + data contracts.

pub mod host;
pub mod settings;

pub use host::{ClipboardError, ConfirmRequest, InputRequest, SidebarHost, ViewId, ViewRef};
pub use settings::{DiffTool, Settings};
