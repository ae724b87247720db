use std::fmt;
use std::path::PathBuf;

/// Filesystem mutation carried out on the worker pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferOp {
    Duplicate,
    Move,
    CreateFile,
    Delete,
}

impl TransferOp {
    pub fn name(self) -> &'static str {
        match self {
            TransferOp::Duplicate => "duplicate",
            TransferOp::Move => "move",
            TransferOp::CreateFile => "create_file",
            TransferOp::Delete => "delete",
        }
    }

    /// Progressive verb for in-flight status messages.
    pub fn progress_verb(self) -> &'static str {
        match self {
            TransferOp::Duplicate => "copying",
            TransferOp::Move => "moving",
            TransferOp::CreateFile => "creating",
            TransferOp::Delete => "deleting",
        }
    }
}

impl fmt::Display for TransferOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a completed input prompt should do with the entered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingInput {
    Duplicate { source: PathBuf },
    Move { source: PathBuf },
    NewFile { parent_dir: PathBuf },
}

/// What an accepted confirmation dialog should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingConfirm {
    Overwrite {
        op: TransferOp,
        source: PathBuf,
        destination: PathBuf,
    },
    Delete {
        paths: Vec<PathBuf>,
    },
}
