use super::message::TransferMessage;
use crate::kernel::services::adapters::file::{self, TransferError};
use crate::kernel::services::ports::{DiffTool, Settings};
use crate::kernel::state::TransferOp;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use tokio::task::JoinHandle;

/// Bounded worker pool for filesystem mutations.
pub struct TransferRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<TransferMessage>,
}

/// Handle to scheduled work. Dropping it does not cancel anything.
pub struct TaskHandle {
    runtime: tokio::runtime::Handle,
    join: JoinHandle<()>,
}

impl TaskHandle {
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Blocks until the work finished and its message was sent.
    ///
    /// Returns `false` when the task panicked. Must not be called from
    /// inside the transfer runtime.
    pub fn join(self) -> bool {
        self.runtime.block_on(self.join).is_ok()
    }
}

impl TransferRuntime {
    pub fn new(tx: Sender<TransferMessage>, settings: &Settings) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(settings.worker_threads.max(1))
            .max_blocking_threads(settings.max_blocking_threads.max(1))
            .thread_name("zsidebar-transfer")
            .enable_all()
            .build()
            .inspect_err(|e| {
                tracing::error!(error = %e, "Failed to create transfer runtime");
            })?;
        Ok(Self { runtime, tx })
    }

    pub fn duplicate(&self, source: PathBuf, destination: PathBuf, overwrite: bool) -> TaskHandle {
        let (from, to) = (source.clone(), destination.clone());
        self.run_blocking(
            TransferOp::Duplicate,
            source.clone(),
            Some(destination.clone()),
            move || file::duplicate_path(&from, &to, overwrite),
            move |_| TransferMessage::PathDuplicated {
                source,
                destination,
            },
        )
    }

    pub fn move_path(&self, source: PathBuf, destination: PathBuf, overwrite: bool) -> TaskHandle {
        let (from, to) = (source.clone(), destination.clone());
        self.run_blocking(
            TransferOp::Move,
            source.clone(),
            Some(destination.clone()),
            move || file::move_path(&from, &to, overwrite),
            move |is_dir| TransferMessage::PathMoved {
                source,
                destination,
                is_dir,
            },
        )
    }

    pub fn create_file(&self, path: PathBuf) -> TaskHandle {
        let target = path.clone();
        self.run_blocking(
            TransferOp::CreateFile,
            path.clone(),
            None,
            move || file::create_file(&target),
            move |()| TransferMessage::PathCreated { path },
        )
    }

    /// Deletes `paths` one after another; each path reports on its own.
    pub fn delete_paths(&self, paths: Vec<PathBuf>) -> TaskHandle {
        let tx = self.tx.clone();
        let join = self.runtime.spawn(async move {
            for path in paths {
                let target = path.clone();
                let result = tokio::task::spawn_blocking(move || file::delete_path(&target)).await;
                let msg = match result {
                    Ok(Ok(())) => TransferMessage::PathDeleted { path },
                    Ok(Err(e)) => op_error(TransferOp::Delete, path, None, e.to_string()),
                    Err(e) => op_error(TransferOp::Delete, path, None, e.to_string()),
                };
                let _ = tx.send(msg);
            }
        });
        self.handle(join)
    }

    /// Starts the external diff tool and reaps it in the background.
    pub fn launch_compare(&self, tool: DiffTool, left: PathBuf, right: PathBuf) -> TaskHandle {
        let tx = self.tx.clone();
        let join = self.runtime.spawn(async move {
            let args = tool.command_args(&left.to_string_lossy(), &right.to_string_lossy());
            let spawned = tokio::process::Command::new(&tool.program)
                .args(&args)
                .kill_on_drop(false)
                .spawn();
            let mut child = match spawned {
                Ok(child) => child,
                Err(e) => {
                    tracing::warn!(tool = %tool.name, error = %e, "spawn diff tool failed");
                    let _ = tx.send(TransferMessage::CompareFailed {
                        tool: tool.name,
                        error: e.to_string(),
                    });
                    return;
                }
            };
            let _ = tx.send(TransferMessage::CompareLaunched {
                tool: tool.name.clone(),
            });
            match child.wait().await {
                Ok(status) => tracing::debug!(tool = %tool.name, %status, "diff tool exited"),
                Err(e) => tracing::warn!(tool = %tool.name, error = %e, "wait diff tool failed"),
            }
        });
        self.handle(join)
    }

    fn run_blocking<T, W, D>(
        &self,
        op: TransferOp,
        path: PathBuf,
        to: Option<PathBuf>,
        work: W,
        done: D,
    ) -> TaskHandle
    where
        T: Send + 'static,
        W: FnOnce() -> Result<T, TransferError> + Send + 'static,
        D: FnOnce(T) -> TransferMessage + Send + 'static,
    {
        let tx = self.tx.clone();
        let join = self.runtime.spawn(async move {
            let msg = match tokio::task::spawn_blocking(work).await {
                Ok(Ok(value)) => {
                    tracing::info!(%op, path = %path.display(), "transfer finished");
                    done(value)
                }
                Ok(Err(e)) => op_error(op, path, to, e.to_string()),
                Err(e) => op_error(op, path, to, e.to_string()),
            };
            let _ = tx.send(msg);
        });
        self.handle(join)
    }

    fn handle(&self, join: JoinHandle<()>) -> TaskHandle {
        TaskHandle {
            runtime: self.runtime.handle().clone(),
            join,
        }
    }
}

fn op_error(op: TransferOp, path: PathBuf, to: Option<PathBuf>, error: String) -> TransferMessage {
    tracing::warn!(%op, path = %path.display(), error = %error, "transfer failed");
    TransferMessage::OpError {
        op,
        path,
        to,
        error,
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/runtime.rs"]
mod tests;
