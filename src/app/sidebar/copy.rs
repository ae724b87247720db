use super::Sidebar;
use crate::kernel::paths::{basename, resolve_relative};
use crate::kernel::services::ports::SidebarHost;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyKind {
    Name,
    Absolute,
    Relative,
}

impl<H: SidebarHost> Sidebar<H> {
    /// One line per target, written to the clipboard.
    pub(super) fn copy_paths(&mut self, kind: CopyKind, targets: &[PathBuf]) {
        let roots = match kind {
            CopyKind::Relative => self.host.project_folders(),
            _ => Vec::new(),
        };
        let lines: Vec<String> = targets
            .iter()
            .map(|path| match kind {
                CopyKind::Name => basename(path),
                CopyKind::Absolute => path.display().to_string(),
                CopyKind::Relative => resolve_relative(path, &roots).display().to_string(),
            })
            .collect();
        self.copy_to_clipboard_and_inform(&lines.join("\n"));
    }

    fn copy_to_clipboard_and_inform(&mut self, text: &str) {
        match self.host.set_clipboard(text) {
            Ok(()) => self
                .host
                .status_message(&format!("copied \"{text}\" to clipboard")),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed");
                self.host.status_message(&e.to_string());
            }
        }
    }
}
