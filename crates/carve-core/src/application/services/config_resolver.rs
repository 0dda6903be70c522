//! Config Resolver - merges override layers into one effective configuration.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{ConfigSource, OverrideLoad},
    domain::EffectiveConfig,
    error::CarveResult,
};

/// Folds built-in defaults through every configured override layer.
///
/// Sources are held in increasing precedence: a key set by a later source
/// replaces the same key from an earlier one.
pub struct ConfigResolver {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigResolver {
    pub fn new(sources: Vec<Box<dyn ConfigSource>>) -> Self {
        Self { sources }
    }

    /// Compute the file-based configuration.
    ///
    /// A source that is absent contributes nothing. The first source that
    /// fails aborts resolution; later sources are not read.
    #[instrument(skip_all, fields(sources = self.sources.len()))]
    pub fn resolve(&self) -> CarveResult<EffectiveConfig> {
        let mut config = EffectiveConfig::default();

        for source in &self.sources {
            match source.load()? {
                OverrideLoad::Absent => {
                    debug!(source = %source.describe(), "Override not present");
                }
                OverrideLoad::Loaded(layer) => {
                    debug!(source = %source.describe(), ?layer, "Override applied");
                    config = config.apply(layer);
                }
            }
        }

        info!(
            lang = %config.lang,
            dir = %config.dir.display(),
            case = %config.file_name_case,
            "Configuration resolved"
        );
        Ok(config)
    }

    /// Descriptions of every source, lowest precedence first.
    pub fn describe_sources(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.describe()).collect()
    }
}
