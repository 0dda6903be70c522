//! Infrastructure adapters for Carve.
//!
//! This crate implements the ports defined in `carve-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod config_source;
pub mod filesystem;
pub mod template_store;

// Re-export commonly used adapters
pub use config_source::JsonFileSource;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_store::{BuiltinTemplates, DirectoryTemplates};
