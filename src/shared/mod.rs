/// Shared kernel - error types, exit codes and filesystem guards used by every layer
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
