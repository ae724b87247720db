//! Side-bar command surface: dispatches host commands and applies results
//! of background transfers on the host thread.

use crate::core::{CommandArgs, SidebarCommand};
use crate::kernel::retarget::plan_retarget;
use crate::kernel::services::adapters::{TaskHandle, TransferMessage, TransferRuntime};
use crate::kernel::services::ports::{Settings, SidebarHost};
use crate::kernel::TransferOp;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};

mod compare;
mod copy;
mod transfer;

pub use copy::CopyKind;

pub struct Sidebar<H: SidebarHost> {
    host: H,
    settings: Settings,
    runtime: TransferRuntime,
    rx: Receiver<TransferMessage>,
}

impl<H: SidebarHost> Sidebar<H> {
    pub fn new(host: H, settings: Settings) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let runtime = TransferRuntime::new(tx, &settings)?;
        Ok(Self {
            host,
            settings,
            runtime,
            rx,
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs `command`. Work scheduled right away (delete without
    /// confirmation, compare) returns its handle; prompting commands
    /// continue in `complete_input` / `complete_confirm`.
    pub fn run(&mut self, command: SidebarCommand, args: CommandArgs) -> Option<TaskHandle> {
        let targets = self.targets(&args);
        tracing::debug!(command = command.name(), targets = targets.len(), "run command");

        if targets.is_empty() && command != SidebarCommand::NewFile {
            self.host.status_message("no file selected");
            return None;
        }

        match command {
            SidebarCommand::CopyName => self.copy_paths(CopyKind::Name, &targets),
            SidebarCommand::CopyAbsolutePath => self.copy_paths(CopyKind::Absolute, &targets),
            SidebarCommand::CopyRelativePath => self.copy_paths(CopyKind::Relative, &targets),
            SidebarCommand::Duplicate => self.prompt_duplicate(&targets[0]),
            SidebarCommand::Move => self.prompt_move(&targets[0]),
            SidebarCommand::NewFile => self.prompt_new_file(targets.first().cloned()),
            SidebarCommand::Delete => return self.request_delete(targets),
            SidebarCommand::Compare => return self.compare(&targets),
        }
        None
    }

    pub fn run_named(&mut self, name: &str, args: CommandArgs) -> Option<TaskHandle> {
        match SidebarCommand::from_name(name) {
            Some(command) => self.run(command, args),
            None => {
                tracing::warn!(name, "unknown side bar command");
                self.host.status_message(&format!("unknown command \"{name}\""));
                None
            }
        }
    }

    /// Applies every finished background result. Returns how many were handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
            handled += 1;
        }
        handled
    }

    fn handle_message(&mut self, msg: TransferMessage) {
        match msg {
            TransferMessage::PathDuplicated {
                source,
                destination,
            } => {
                self.host.status_message(&format!(
                    "duplicated \"{}\" to \"{}\"",
                    source.display(),
                    destination.display()
                ));
                self.host.refresh_folder_list();
            }
            TransferMessage::PathMoved {
                source,
                destination,
                is_dir,
            } => {
                let plan = plan_retarget(&self.host.views(), &source, &destination, is_dir);
                tracing::info!(
                    source = %source.display(),
                    destination = %destination.display(),
                    views = plan.len(),
                    "retarget views after move"
                );
                for (view, path) in plan {
                    self.host.retarget_view(view, path);
                }
                self.host.status_message(&format!(
                    "moved \"{}\" to \"{}\"",
                    source.display(),
                    destination.display()
                ));
                self.host.refresh_folder_list();
            }
            TransferMessage::PathCreated { path } => {
                if self.settings.open_created_files {
                    self.host.open_file(&path);
                }
                self.host
                    .status_message(&format!("created \"{}\"", path.display()));
                self.host.refresh_folder_list();
            }
            TransferMessage::PathDeleted { path } => {
                self.host
                    .status_message(&format!("deleted \"{}\"", path.display()));
                self.host.refresh_folder_list();
            }
            TransferMessage::CompareLaunched { tool } => {
                self.host.status_message(&format!("comparing with {tool}"));
            }
            TransferMessage::CompareFailed { tool, error } => {
                self.host
                    .status_message(&format!("could not start {tool}: {error}"));
            }
            TransferMessage::OpError {
                op,
                path,
                to,
                error,
            } => {
                let message = match to {
                    Some(to) => format!(
                        "{op} failed: \"{}\" -> \"{}\": {error}",
                        path.display(),
                        to.display()
                    ),
                    None => format!("{op} failed: \"{}\": {error}", path.display()),
                };
                self.host.status_message(&message);
                if op == TransferOp::Move {
                    self.host.refresh_folder_list();
                }
            }
        }
    }

    fn targets(&self, args: &CommandArgs) -> Vec<PathBuf> {
        if !args.paths.is_empty() {
            return args.paths.clone();
        }
        let from_tab = match (args.group, args.index) {
            (Some(group), Some(index)) => self.host.view_at(group, index),
            _ => None,
        };
        from_tab
            .or_else(|| self.host.active_file())
            .into_iter()
            .collect()
    }
}

/// Resolves prompt text against `base`; absolute answers are taken as is.
fn resolve_answer(base: Option<&Path>, text: &str) -> PathBuf {
    let answer = Path::new(text);
    match base {
        Some(base) if answer.is_relative() => base.join(answer),
        _ => answer.to_path_buf(),
    }
}
