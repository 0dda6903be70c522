//! Unified error handling for Carve Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Carve Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CarveError {
    /// Errors from the domain layer (invalid names, unknown values).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (config, templates, filesystem).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl CarveError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type CarveResult<T> = Result<T, CarveError>;
