//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::events::ScaffoldStage;
use crate::domain::Language;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// An override file exists but could not be read or parsed.
    #[error("Failed to load configuration from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    /// The template for a language could not be located or read.
    #[error("Failed to load {language} template: {reason}")]
    TemplateLoad { language: Language, reason: String },

    /// The target component directory is already there.
    #[error("Component already exists at {path}")]
    ComponentExists { path: PathBuf },

    /// A directory or file could not be created while scaffolding.
    #[error("Failed while {stage} at {path}: {reason}")]
    WriteFailed {
        stage: ScaffoldStage,
        path: PathBuf,
        reason: String,
    },

    /// Raw filesystem adapter failure, before a stage is attached.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigLoad { path, .. } => vec![
                format!("Fix or remove the override file: {}", path.display()),
                "Override files must be a JSON object with optional keys lang, dir, fileNameCase"
                    .into(),
                "Valid values: lang = js | ts, fileNameCase = pascal | kebab".into(),
            ],
            Self::TemplateLoad { language, .. } => vec![
                format!("No readable template for '{language}'"),
                "Check CARVE_TEMPLATES_DIR / --templates, or unset it to use built-ins".into(),
            ],
            Self::ComponentExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Choose a different component name".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::WriteFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files created before the failure were left in place".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigLoad { .. } => ErrorCategory::Configuration,
            Self::TemplateLoad { .. } => ErrorCategory::NotFound,
            Self::ComponentExists { .. } => ErrorCategory::Validation,
            Self::WriteFailed { .. } | Self::Filesystem { .. } => ErrorCategory::Internal,
        }
    }
}
