use super::Sidebar;
use crate::kernel::paths::basename;
use crate::kernel::services::adapters::TaskHandle;
use crate::kernel::services::ports::SidebarHost;
use std::path::PathBuf;

impl<H: SidebarHost> Sidebar<H> {
    /// Compares the two selected paths, or the selection with the active file.
    pub(super) fn compare(&mut self, targets: &[PathBuf]) -> Option<TaskHandle> {
        let pair = match targets {
            [left, right, ..] => Some((left.clone(), right.clone())),
            [left] => self
                .host
                .active_file()
                .filter(|active| active != left)
                .map(|active| (left.clone(), active)),
            [] => None,
        };
        let Some((left, right)) = pair else {
            self.host.status_message("select two files to compare");
            return None;
        };

        let name = basename(&left);
        let Some(tool) = self.settings.diff_tool_for(&name).cloned() else {
            self.host
                .status_message(&format!("no diff tool configured for \"{name}\""));
            return None;
        };

        tracing::info!(
            tool = %tool.name,
            left = %left.display(),
            right = %right.display(),
            "launch compare"
        );
        Some(self.runtime.launch_compare(tool, left, right))
    }
}
