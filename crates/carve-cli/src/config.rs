//! Configuration layering for the CLI.
//!
//! The CLI owns the decision of *which* override files are read; the core
//! crate only folds whatever sources it is handed.
//!
//! # Resolution order (lowest precedence first)
//!
//! 1. Built-in defaults (`js`, `src/components`, `pascal`)
//! 2. `~/.carve.json`, skipped when the home directory is unknown
//! 3. `./.carve.json`
//! 4. `--config FILE`, which must exist
//! 5. CLI flags (`--lang`, `--dir`, `--case`)

use std::path::{Path, PathBuf};

use tracing::debug;

use carve_adapters::JsonFileSource;
use carve_core::{
    application::{ConfigResolver, ports::ConfigSource},
    domain::{ConfigOverride, EffectiveConfig},
};

use crate::{cli::global::GlobalArgs, error::CliResult};

/// Where override files live for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLayers {
    pub global: Option<PathBuf>,
    pub local: PathBuf,
    pub explicit: Option<PathBuf>,
}

impl ConfigLayers {
    /// Layers for a run rooted at `cwd`.
    pub fn discover(global: &GlobalArgs, cwd: &Path) -> Self {
        Self {
            global: JsonFileSource::global().map(|s| s.path().to_path_buf()),
            local: JsonFileSource::local(cwd).path().to_path_buf(),
            explicit: global.config.clone(),
        }
    }

    /// One resolver source per layer, in increasing precedence.
    pub fn resolver(&self) -> ConfigResolver {
        let mut sources: Vec<Box<dyn ConfigSource>> = Vec::new();
        if let Some(path) = &self.global {
            sources.push(Box::new(JsonFileSource::optional(path)));
        }
        sources.push(Box::new(JsonFileSource::optional(&self.local)));
        if let Some(path) = &self.explicit {
            sources.push(Box::new(JsonFileSource::required(path)));
        }
        ConfigResolver::new(sources)
    }

    /// Resolve the file layers, then apply the flag layer on top.
    pub fn effective(&self, flags: ConfigOverride) -> CliResult<EffectiveConfig> {
        let config = self.resolver().resolve()?;
        if flags.is_empty() {
            return Ok(config);
        }
        debug!(?flags, "Applying command line overrides");
        Ok(config.apply(flags))
    }
}

/// The process working directory.
pub fn current_dir() -> CliResult<PathBuf> {
    Ok(std::env::current_dir()?)
}
