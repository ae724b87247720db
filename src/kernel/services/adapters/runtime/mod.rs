//! Transfer runtime adapter: runs filesystem work off the host thread and
//! sends results back as messages.

mod message;
mod runtime;

pub use message::TransferMessage;
pub use runtime::{TaskHandle, TransferRuntime};
