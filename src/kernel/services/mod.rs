//! Services layer (ports + adapters).
//!
//! - `ports`: host contract and settings types (kernel-facing).
//! - `adapters`: filesystem, settings storage and the transfer worker pool.

pub mod adapters;
pub mod ports;
