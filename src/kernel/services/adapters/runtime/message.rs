use crate::kernel::state::TransferOp;
use std::path::PathBuf;

/// Result of background work, drained on the host thread by `Sidebar::pump`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferMessage {
    PathDuplicated {
        source: PathBuf,
        destination: PathBuf,
    },
    PathMoved {
        source: PathBuf,
        destination: PathBuf,
        is_dir: bool,
    },
    PathCreated {
        path: PathBuf,
    },
    PathDeleted {
        path: PathBuf,
    },
    CompareLaunched {
        tool: String,
    },
    CompareFailed {
        tool: String,
        error: String,
    },
    OpError {
        op: TransferOp,
        path: PathBuf,
        to: Option<PathBuf>,
        error: String,
    },
}
