/// Application layer - Use cases, factories and DTOs
///
/// This layer orchestrates the tracking policies and talks to the
/// Dependency-Track platform and the file system only through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
