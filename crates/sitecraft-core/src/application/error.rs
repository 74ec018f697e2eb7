//! Application layer errors.
//!
//! These errors represent failures while driving the outside world (disk,
//! network, archive decoding), not invalid options. Option problems are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running the scaffold.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The project directory is already there; nothing was written.
    #[error("Target already exists: {path}")]
    TargetExists { path: PathBuf },

    /// Remote asset could not be fetched (connection, TLS, non-2xx status).
    #[error("Network failure fetching {url}: {reason}")]
    NetworkFailure { url: String, reason: String },

    /// The fetched archive is malformed or truncated.
    #[error("Archive could not be read: {reason}")]
    ArchiveParseFailure { reason: String },

    /// A directory or file could not be created or written.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemFailure { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TargetExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                "Or remove/rename the existing directory first".into(),
            ],
            Self::NetworkFailure { url, .. } => vec![
                format!("Could not download {}", url),
                "Check your internet connection and proxy settings".into(),
                "Files created before the failure were kept; remove the project directory and run again".into(),
            ],
            Self::ArchiveParseFailure { .. } => vec![
                "The downloaded archive looks corrupted or incomplete".into(),
                "Remove the project directory and run again".into(),
            ],
            Self::FilesystemFailure { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TargetExists { .. } => ErrorCategory::Validation,
            Self::NetworkFailure { .. } => ErrorCategory::Network,
            Self::ArchiveParseFailure { .. } => ErrorCategory::Network,
            Self::FilesystemFailure { .. } => ErrorCategory::Internal,
        }
    }

    /// Shorthand for the filesystem variant from an `io::Error`.
    pub fn filesystem(path: impl Into<PathBuf>, operation: &str, err: &std::io::Error) -> Self {
        Self::FilesystemFailure {
            path: path.into(),
            reason: format!("Failed to {}: {}", operation, err),
        }
    }
}
