//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "resolve configuration" or "scaffold a component".

pub mod config_resolver;
pub mod scaffold_service;
pub mod template_engine;

pub use config_resolver::ConfigResolver;
pub use scaffold_service::{ScaffoldReport, ScaffoldService};
pub use template_engine::TemplateEngine;
