use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI pipelines to tell a clean run from a run that
/// needs attention without scraping the log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The action completed without any failure
    Success = 0,
    /// The cleanup finished but at least one deletion was rejected by the platform
    PartialFailure = 1,
    /// Invalid command-line arguments or configuration (detected before any network call)
    InvalidArguments = 2,
    /// Remote API error, network error, file I/O error, etc.
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps an error that reached the process boundary to its exit code.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<DtrackError>() {
            Some(DtrackError::Configuration { .. }) => ExitCode::InvalidArguments,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PartialFailure => write!(f, "Partial Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors.
///
/// Uses thiserror to derive Display and Error; the variants are carried
/// through `anyhow::Error` and recovered with `downcast_ref` where the
/// caller needs to branch on the kind.
#[derive(Debug, Error)]
pub enum DtrackError {
    /// Unknown action or writer, invalid argument combination, unusable config.
    #[error("Configuration error: {message}\n\n💡 Hint: Run with --help to list the supported actions and options")]
    Configuration { message: String },

    #[error("Dependency-Track API returned status {status} for {url}\nResponse: {body}")]
    Api {
        status: u16,
        url: String,
        body: String,
    },

    #[error("Unexpected response from {url}\nDetails: {details}")]
    InvalidResponse { url: String, details: String },

    #[error("Project {project} has no identifier; its dependencies cannot be listed")]
    MissingIdentifier { project: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

impl DtrackError {
    pub fn configuration(message: impl Into<String>) -> Self {
        DtrackError::Configuration {
            message: message.into(),
        }
    }
}
