//! Application layer for Carve.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ConfigResolver, TemplateEngine, ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Events**: Pipeline stages and the step-completion events observers receive
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod events;
pub mod ports;
pub mod services;

pub use services::{ConfigResolver, ScaffoldReport, ScaffoldService, TemplateEngine};

pub use events::{FileKind, NoopObserver, ScaffoldEvent, ScaffoldStage};

pub use ports::{ConfigSource, Filesystem, OverrideLoad, ScaffoldObserver, TemplateStore};

pub use error::ApplicationError;
