use serde::{Deserialize, Serialize};

use crate::kernel::paths::split_extension;

/// User settings, passed explicitly into `Sidebar::new`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Async worker threads of the transfer pool.
    #[serde(default = "default_worker_threads")]
    pub worker_threads: usize,
    /// Upper bound on concurrent blocking filesystem jobs.
    #[serde(default = "default_max_blocking_threads")]
    pub max_blocking_threads: usize,
    #[serde(default = "default_duplicate_suffix")]
    pub duplicate_suffix: String,
    #[serde(default = "default_true")]
    pub confirm_delete: bool,
    #[serde(default = "default_true")]
    pub open_created_files: bool,
    #[serde(default)]
    pub diff_tools: Vec<DiffTool>,
}

/// External compare program.
///
/// `$left` and `$right` in `args` are replaced with the compared paths; when
/// neither placeholder is present both paths are appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffTool {
    pub name: String,
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Extensions (with leading dot) this tool handles; empty means any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,
}

impl DiffTool {
    pub fn matches(&self, file_name: &str) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        let (_, ext) = split_extension(file_name);
        self.extensions
            .iter()
            .any(|want| !want.is_empty() && ext.to_lowercase().ends_with(&want.to_lowercase()))
    }

    pub fn command_args(&self, left: &str, right: &str) -> Vec<String> {
        let has_placeholder = self
            .args
            .iter()
            .any(|arg| arg.contains("$left") || arg.contains("$right"));
        let mut out: Vec<String> = self
            .args
            .iter()
            .map(|arg| arg.replace("$left", left).replace("$right", right))
            .collect();
        if !has_placeholder {
            out.push(left.to_string());
            out.push(right.to_string());
        }
        out
    }
}

fn default_worker_threads() -> usize {
    2
}

fn default_max_blocking_threads() -> usize {
    8
}

fn default_duplicate_suffix() -> String {
    " (Copy)".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            worker_threads: default_worker_threads(),
            max_blocking_threads: default_max_blocking_threads(),
            duplicate_suffix: default_duplicate_suffix(),
            confirm_delete: true,
            open_created_files: true,
            diff_tools: Vec::new(),
        }
    }
}

impl Settings {
    /// First configured diff tool willing to compare `file_name`.
    pub fn diff_tool_for(&self, file_name: &str) -> Option<&DiffTool> {
        self.diff_tools.iter().find(|tool| tool.matches(file_name))
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
