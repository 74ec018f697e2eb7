// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so they can travel inside step failures)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    #[error("Color '{value}' is listed more than once")]
    DuplicateColor { value: String },

    #[error("Invalid section '{name}': {reason}")]
    InvalidSection { name: String, reason: String },

    #[error("Section '{name}' is listed more than once")]
    DuplicateSection { name: String },

    #[error("Invalid URL '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("Invalid language code '{value}'")]
    InvalidLanguage { value: String },

    #[error("Invalid reading direction '{value}' (expected ltr or rtl)")]
    InvalidDirection { value: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use letters, digits, hyphens, underscores and dots".into(),
                "Examples: my-site, portfolio_2024, landing".into(),
            ],
            Self::InvalidColor { value, .. } => vec![
                format!("'{}' is not a hex color", value),
                "Colors are written as #rgb or #rrggbb, e.g. #ff0000 or #f00".into(),
            ],
            Self::DuplicateColor { value } => vec![
                format!("Remove the repeated color {}", value),
            ],
            Self::InvalidSection { .. } => vec![
                "Section names become HTML ids and CSS selectors".into(),
                "Use letters, digits, '-' and '_', starting with a letter".into(),
            ],
            Self::DuplicateSection { name } => vec![
                format!("Remove the repeated section '{}'", name),
            ],
            Self::InvalidUrl { .. } => vec![
                "Provide the site address, e.g. www.example.com or https://example.com".into(),
                "Leave out query strings, fragments, quotes and angle brackets".into(),
            ],
            Self::InvalidLanguage { .. } => vec![
                "Use an ISO language code such as en, fr or pt-BR".into(),
            ],
            Self::InvalidDirection { .. } => vec!["Use --direction ltr or --direction rtl".into()],
            Self::MissingRequiredField { field } => {
                vec![format!("Provide a value for '{}'", field)]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredField { .. } => ErrorCategory::Internal,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
