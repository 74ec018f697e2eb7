//! Unified error handling for Sitecraft Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, tags failures with the pipeline step they came from,
//! and carries user-actionable suggestions.

use thiserror::Error;

use crate::application::{ApplicationError, StepName};
use crate::domain::DomainError;

/// Root error type for Sitecraft Core operations.
#[derive(Debug, Error, Clone)]
pub enum SitecraftError {
    /// Invalid options (business rule violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Disk, network or archive failures.
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// A pipeline step failed; `source` is the underlying cause.
    #[error("Step '{step}' failed: {source}")]
    Step {
        step: StepName,
        #[source]
        source: Box<SitecraftError>,
    },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

/// The failure kinds callers branch on, independent of step wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidOptions,
    TargetExists,
    NetworkFailure,
    ArchiveParseFailure,
    FilesystemFailure,
    Internal,
}

impl SitecraftError {
    /// Attach the failing step's name.
    pub fn in_step(self, step: StepName) -> Self {
        Self::Step {
            step,
            source: Box::new(self),
        }
    }

    /// Name of the step that failed, if the error came from the pipeline.
    pub fn step(&self) -> Option<StepName> {
        match self {
            Self::Step { step, .. } => Some(*step),
            _ => None,
        }
    }

    /// The innermost error (step wrappers removed).
    pub fn root_cause(&self) -> &SitecraftError {
        match self {
            Self::Step { source, .. } => source.root_cause(),
            other => other,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.root_cause() {
            Self::Domain(_) => ErrorKind::InvalidOptions,
            Self::Application(e) => match e {
                ApplicationError::TargetExists { .. } => ErrorKind::TargetExists,
                ApplicationError::NetworkFailure { .. } => ErrorKind::NetworkFailure,
                ApplicationError::ArchiveParseFailure { .. } => ErrorKind::ArchiveParseFailure,
                ApplicationError::FilesystemFailure { .. } => ErrorKind::FilesystemFailure,
            },
            Self::Step { .. } | Self::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Step { source, .. } => source.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Sitecraft".into(),
                "Please report this issue at: https://github.com/cosecruz/sitecraft/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Step { source, .. } => source.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Whether running again unchanged might succeed.
    ///
    /// Informational only: nothing in the pipeline retries.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::NetworkFailure
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Network,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type SitecraftResult<T> = Result<T, SitecraftError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn network() -> SitecraftError {
        ApplicationError::NetworkFailure {
            url: "https://example.com/a.zip".into(),
            reason: "HTTP 503".into(),
        }
        .into()
    }

    #[test]
    fn step_wrapper_keeps_kind_and_category() {
        let err = network().in_step(StepName::RetrieveFramework);

        assert_eq!(err.step(), Some(StepName::RetrieveFramework));
        assert_eq!(err.kind(), ErrorKind::NetworkFailure);
        assert_eq!(err.category(), ErrorCategory::Network);
        assert!(err.is_retryable());
        assert!(err.to_string().contains("retrieve-framework"));
        assert!(err.to_string().contains("HTTP 503"));
    }

    #[test]
    fn target_exists_is_a_validation_error() {
        let err: SitecraftError = ApplicationError::TargetExists {
            path: PathBuf::from("demo"),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::TargetExists);
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.is_retryable());
        assert!(err.suggestions().iter().any(|s| s.contains("different project name")));
    }

    #[test]
    fn domain_errors_are_invalid_options() {
        let err: SitecraftError = DomainError::InvalidColor {
            value: "x".into(),
            reason: "bad".into(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::InvalidOptions);
        assert!(!err.suggestions().is_empty());
    }
}
