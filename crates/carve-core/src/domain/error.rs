// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Name validation
    // ========================================================================
    #[error("Component name is required")]
    MissingName,

    #[error("Invalid component name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingName => vec![
                "Pass the component name as the first argument".into(),
                "Example: carve new Button".into(),
            ],
            Self::InvalidName { name, .. } => vec![
                format!("'{name}' must be PascalCase"),
                "Start with an uppercase letter, then letters or digits only".into(),
                "Examples: Button, NavBar, Card2".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingName | Self::InvalidName { .. } => ErrorCategory::Validation,
        }
    }
}
