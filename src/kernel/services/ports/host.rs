//! Host-facing contract: everything the side bar reads from or asks of the editor.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::kernel::state::{PendingConfirm, PendingInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub u64);

/// An open buffer as seen by the side bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRef {
    pub id: ViewId,
    pub path: Option<PathBuf>,
}

impl ViewRef {
    pub fn new(id: u64, path: impl Into<PathBuf>) -> Self {
        Self {
            id: ViewId(id),
            path: Some(path.into()),
        }
    }

    pub fn scratch(id: u64) -> Self {
        Self {
            id: ViewId(id),
            path: None,
        }
    }
}

/// Single-line prompt. `selection` is a char range into `initial_text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRequest {
    pub caption: String,
    pub initial_text: String,
    pub selection: (usize, usize),
    pub on_done: PendingInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub message: String,
    pub ok_title: String,
    pub on_confirm: PendingConfirm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    NotAvailable,
    SetFailed(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::NotAvailable => write!(f, "clipboard not available"),
            ClipboardError::SetFailed(e) => write!(f, "clipboard write failed: {}", e),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Editor APIs consumed by the side-bar commands.
///
/// Prompts and dialogs are asynchronous from the side bar's point of view:
/// the host shows them and later answers through `Sidebar::complete_input`
/// or `Sidebar::complete_confirm` with the carried pending value.
pub trait SidebarHost {
    /// Project roots in configured order.
    fn project_folders(&self) -> Vec<PathBuf>;

    /// Backing file of the active view, if any.
    fn active_file(&self) -> Option<PathBuf>;

    /// Backing file of the tab at `index` in editor `group`.
    fn view_at(&self, group: usize, index: usize) -> Option<PathBuf>;

    fn views(&self) -> Vec<ViewRef>;

    fn retarget_view(&mut self, view: ViewId, path: PathBuf);

    fn open_file(&mut self, path: &Path);

    fn show_input_panel(&mut self, request: InputRequest);

    fn show_confirm(&mut self, request: ConfirmRequest);

    fn status_message(&mut self, message: &str);

    fn set_clipboard(&mut self, text: &str) -> Result<(), ClipboardError>;

    fn refresh_folder_list(&mut self);
}
