/// Type alias for Result with anyhow::Error as the error type.
/// Typed failures are raised as `DtrackError` and travel inside the anyhow chain.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
