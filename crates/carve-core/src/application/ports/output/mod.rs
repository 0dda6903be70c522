//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `carve-adapters` crate provides implementations.

use std::path::Path;

use crate::application::events::ScaffoldEvent;
use crate::domain::{ConfigOverride, Language};
use crate::error::CarveResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `carve_adapters::filesystem::LocalFilesystem` (production)
/// - `carve_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Failures are reported as `ApplicationError::Filesystem`; the scaffold
/// service attaches the pipeline stage.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> CarveResult<()>;

    /// Create a single directory. Fails if it exists or its parent is missing.
    fn create_dir(&self, path: &Path) -> CarveResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> CarveResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template retrieval.
///
/// Implemented by:
/// - `carve_adapters::template_store::BuiltinTemplates` (compiled in)
/// - `carve_adapters::template_store::DirectoryTemplates` (user directory)
pub trait TemplateStore: Send + Sync {
    /// Raw template text for a language, placeholders intact.
    fn load(&self, language: Language) -> CarveResult<String>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// Outcome of reading one optional override layer.
///
/// A missing source is not an error; it simply contributes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideLoad {
    Absent,
    Loaded(ConfigOverride),
}

/// Port for one configuration override layer.
///
/// Implemented by `carve_adapters::config_source::JsonFileSource`.
pub trait ConfigSource: Send + Sync {
    /// Read the layer. Anything other than "not present" that prevents a
    /// clean read is an error.
    fn load(&self) -> CarveResult<OverrideLoad>;

    /// Where this layer comes from, for logs and `config path`.
    fn describe(&self) -> String;
}

/// Port for presentation of pipeline progress.
///
/// The core never prints. Observers decide how (or whether) to show events.
pub trait ScaffoldObserver {
    fn on_event(&self, event: &ScaffoldEvent);
}
