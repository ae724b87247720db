//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod file;
pub mod runtime;
pub mod settings;

pub use file::TransferError;
pub use runtime::{TaskHandle, TransferMessage, TransferRuntime};
pub use settings::{
    ensure_log_dir, ensure_settings_file, get_log_dir, get_settings_path, load_default_settings,
    load_settings, SettingsError,
};
