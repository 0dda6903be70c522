//! Carve Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Carve
//! component scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            carve-cli (CLI)              │
//! │   (argument parsing, output, logging)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ConfigResolver, TemplateEngine,        │
//! │  ScaffoldService)                       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateStore,             │
//! │  ConfigSource, ScaffoldObserver)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     carve-adapters (Infrastructure)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use carve_core::prelude::*;
//!
//! # fn run(sources: Vec<Box<dyn ConfigSource>>, store: Box<dyn TemplateStore>, fs: Box<dyn Filesystem>) -> CarveResult<()> {
//! // 1. Validate the requested name
//! let name = ComponentName::parse("NavBar")?;
//!
//! // 2. Resolve configuration from override files
//! let config = ConfigResolver::new(sources).resolve()?;
//!
//! // 3. Scaffold
//! let service = ScaffoldService::new(store, fs);
//! service.scaffold(&name, &config, &NoopObserver)?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ConfigResolver, NoopObserver, ScaffoldEvent, ScaffoldReport, ScaffoldService,
        ScaffoldStage, TemplateEngine,
        ports::{ConfigSource, Filesystem, OverrideLoad, ScaffoldObserver, TemplateStore},
    };
    pub use crate::domain::{
        ComponentName, ConfigOverride, EffectiveConfig, FileNameCase, FormattedName, Language,
        RenderedTemplate, ScaffoldPlan,
    };
    pub use crate::error::{CarveError, CarveResult};
}
