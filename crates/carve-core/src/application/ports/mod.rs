//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `carve-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory and file operations
//!   - `TemplateStore`: Raw template text per language
//!   - `ConfigSource`: One optional override layer
//!   - `ScaffoldObserver`: Receives step-completion events (presentation)

pub mod output;

pub use output::{ConfigSource, Filesystem, OverrideLoad, ScaffoldObserver, TemplateStore};
