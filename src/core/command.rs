//! Side-bar commands as exposed to the host's command dispatcher.

use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SidebarCommand {
    // ==================== clipboard ====================
    CopyName,
    CopyAbsolutePath,
    CopyRelativePath,

    // ==================== transfers ====================
    Duplicate,
    Move,
    NewFile,
    Delete,

    // ==================== tools ====================
    Compare,
}

impl SidebarCommand {
    pub const ALL: [SidebarCommand; 8] = [
        SidebarCommand::CopyName,
        SidebarCommand::CopyAbsolutePath,
        SidebarCommand::CopyRelativePath,
        SidebarCommand::Duplicate,
        SidebarCommand::Move,
        SidebarCommand::NewFile,
        SidebarCommand::Delete,
        SidebarCommand::Compare,
    ];

    /// Name the host binds menu entries and key bindings to.
    pub fn name(self) -> &'static str {
        match self {
            SidebarCommand::CopyName => "side_bar_copy_name",
            SidebarCommand::CopyAbsolutePath => "side_bar_copy_absolute_path",
            SidebarCommand::CopyRelativePath => "side_bar_copy_relative_path",
            SidebarCommand::Duplicate => "side_bar_duplicate",
            SidebarCommand::Move => "side_bar_move",
            SidebarCommand::NewFile => "side_bar_new_file",
            SidebarCommand::Delete => "side_bar_delete",
            SidebarCommand::Compare => "side_bar_compare",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.name() == name)
    }

    /// Menu caption.
    pub fn description(self) -> &'static str {
        match self {
            SidebarCommand::CopyName => "Copy Filename",
            SidebarCommand::CopyAbsolutePath => "Copy Absolute Path",
            SidebarCommand::CopyRelativePath => "Copy Relative Path",
            SidebarCommand::Duplicate => "Duplicate…",
            SidebarCommand::Move => "Move…",
            SidebarCommand::NewFile => "New File…",
            SidebarCommand::Delete => "Delete",
            SidebarCommand::Compare => "Compare",
        }
    }

    /// Whether the command changes the filesystem.
    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            SidebarCommand::Duplicate
                | SidebarCommand::Move
                | SidebarCommand::NewFile
                | SidebarCommand::Delete
        )
    }
}

/// Arguments of one command invocation.
///
/// Side-bar menus pass `paths`; tab context menus pass `group`/`index`
/// instead. With neither, the active view's file is the target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
    pub paths: Vec<PathBuf>,
    pub group: Option<usize>,
    pub index: Option<usize>,
}

impl CommandArgs {
    pub fn paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn tab(group: usize, index: usize) -> Self {
        Self {
            paths: Vec::new(),
            group: Some(group),
            index: Some(index),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
