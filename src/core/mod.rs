//! Command surface shared with the host.

pub mod command;

pub use command::{CommandArgs, SidebarCommand};
