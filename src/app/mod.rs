//! Application layer: the side-bar command surface.

pub mod sidebar;

pub use sidebar::{CopyKind, Sidebar};
