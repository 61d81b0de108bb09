use std::io;

use thiserror::Error;

/// Library-wide error type for kbmod operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Module name is missing, empty, or not a safe path segment.
    #[error("Invalid module name '{0}': must be non-empty, alphanumeric with hyphens or underscores")]
    InvalidModuleName(String),

    /// Module directory already exists at the target location.
    #[error("Module directory '{0}' already exists")]
    ModuleExists(String),

    /// Scaffold asset is missing or failed to render.
    #[error("Template error: {0}")]
    Template(String),
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidModuleName(_) => io::ErrorKind::InvalidInput,
            AppError::ModuleExists(_) => io::ErrorKind::AlreadyExists,
            AppError::Template(_) => io::ErrorKind::InvalidData,
        }
    }
}
