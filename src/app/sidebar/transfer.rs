use super::{resolve_answer, Sidebar};
use crate::kernel::paths::{basename, duplicate_name, name_selection};
use crate::kernel::services::adapters::{file, TaskHandle};
use crate::kernel::services::ports::{ConfirmRequest, InputRequest, SidebarHost};
use crate::kernel::state::{PendingConfirm, PendingInput, TransferOp};
use std::path::{Path, PathBuf};

impl<H: SidebarHost> Sidebar<H> {
    pub(super) fn prompt_duplicate(&mut self, source: &Path) {
        if !self.require_existing(source) {
            return;
        }
        let initial_text = duplicate_name(&basename(source), &self.settings.duplicate_suffix);
        let selection = name_selection(&initial_text);
        self.host.show_input_panel(InputRequest {
            caption: "Duplicate As:".to_string(),
            initial_text,
            selection,
            on_done: PendingInput::Duplicate {
                source: source.to_path_buf(),
            },
        });
    }

    pub(super) fn prompt_move(&mut self, source: &Path) {
        if !self.require_existing(source) {
            return;
        }
        let initial_text = source.display().to_string();
        let selection = name_selection(&initial_text);
        self.host.show_input_panel(InputRequest {
            caption: "Move To:".to_string(),
            initial_text,
            selection,
            on_done: PendingInput::Move {
                source: source.to_path_buf(),
            },
        });
    }

    /// New files go next to a selected file or into a selected directory;
    /// with nothing selected the first project folder is used.
    pub(super) fn prompt_new_file(&mut self, target: Option<PathBuf>) {
        let target = target.or_else(|| self.host.project_folders().into_iter().next());
        let Some(target) = target else {
            self.host.status_message("no folder to create the file in");
            return;
        };
        if !self.require_existing(&target) {
            return;
        }
        let parent_dir = if target.is_dir() {
            target
        } else {
            target
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| target.clone())
        };
        self.host.show_input_panel(InputRequest {
            caption: "File Name:".to_string(),
            initial_text: String::new(),
            selection: (0, 0),
            on_done: PendingInput::NewFile { parent_dir },
        });
    }

    pub(super) fn request_delete(&mut self, paths: Vec<PathBuf>) -> Option<TaskHandle> {
        if !self.settings.confirm_delete {
            return Some(self.schedule_delete(paths));
        }
        let message = match paths.as_slice() {
            [single] => format!("Delete \"{}\"?", single.display()),
            many => format!("Delete {} items?", many.len()),
        };
        self.host.show_confirm(ConfirmRequest {
            message,
            ok_title: "Delete".to_string(),
            on_confirm: PendingConfirm::Delete { paths },
        });
        None
    }

    /// Continues a prompt shown by duplicate, move or new file. Blank text cancels.
    pub fn complete_input(&mut self, pending: PendingInput, text: &str) -> Option<TaskHandle> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!(?pending, "input cancelled");
            return None;
        }

        match pending {
            PendingInput::Duplicate { source } => {
                let destination = resolve_answer(source.parent(), text);
                self.request_transfer(TransferOp::Duplicate, source, destination)
            }
            PendingInput::Move { source } => {
                let destination = resolve_answer(source.parent(), text);
                self.request_transfer(TransferOp::Move, source, destination)
            }
            PendingInput::NewFile { parent_dir } => {
                let path = resolve_answer(Some(&parent_dir), text);
                if std::fs::symlink_metadata(&path).is_ok() {
                    self.host
                        .status_message(&format!("\"{}\" already exists", path.display()));
                    return None;
                }
                tracing::info!(path = %path.display(), "schedule create_file");
                Some(self.runtime.create_file(path))
            }
        }
    }

    /// Continues an overwrite or delete confirmation.
    pub fn complete_confirm(&mut self, pending: PendingConfirm, accepted: bool) -> Option<TaskHandle> {
        match pending {
            PendingConfirm::Overwrite {
                op,
                source,
                destination,
            } => {
                if !accepted {
                    self.host.status_message(&format!(
                        "{op} cancelled: \"{}\" already exists",
                        destination.display()
                    ));
                    return None;
                }
                Some(self.schedule_transfer(op, source, destination, true))
            }
            PendingConfirm::Delete { paths } => {
                if !accepted {
                    return None;
                }
                Some(self.schedule_delete(paths))
            }
        }
    }

    fn request_transfer(
        &mut self,
        op: TransferOp,
        source: PathBuf,
        destination: PathBuf,
    ) -> Option<TaskHandle> {
        if let Err(e) = file::check_transfer(&source, &destination) {
            tracing::warn!(%op, error = %e, "transfer refused");
            self.host.status_message(&e.to_string());
            return None;
        }
        if std::fs::symlink_metadata(&destination).is_ok() {
            self.host.show_confirm(ConfirmRequest {
                message: format!("\"{}\" already exists. Overwrite?", destination.display()),
                ok_title: "Overwrite".to_string(),
                on_confirm: PendingConfirm::Overwrite {
                    op,
                    source,
                    destination,
                },
            });
            return None;
        }
        Some(self.schedule_transfer(op, source, destination, false))
    }

    fn schedule_transfer(
        &mut self,
        op: TransferOp,
        source: PathBuf,
        destination: PathBuf,
        overwrite: bool,
    ) -> TaskHandle {
        self.host.status_message(&format!(
            "{} \"{}\" to \"{}\"",
            op.progress_verb(),
            source.display(),
            destination.display()
        ));
        tracing::info!(
            %op,
            source = %source.display(),
            destination = %destination.display(),
            overwrite,
            "schedule transfer"
        );
        match op {
            TransferOp::Move => self.runtime.move_path(source, destination, overwrite),
            _ => self.runtime.duplicate(source, destination, overwrite),
        }
    }

    fn schedule_delete(&mut self, paths: Vec<PathBuf>) -> TaskHandle {
        self.host
            .status_message(&format!("deleting {} item(s)", paths.len()));
        tracing::info!(count = paths.len(), "schedule delete");
        self.runtime.delete_paths(paths)
    }

    fn require_existing(&mut self, path: &Path) -> bool {
        if std::fs::symlink_metadata(path).is_ok() {
            return true;
        }
        self.host
            .status_message(&format!("\"{}\" does not exist", path.display()));
        false
    }
}
