//! Effective configuration and the override layers merged into it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{FileNameCase, Language};

/// Directory components are generated under when nothing overrides it.
pub const DEFAULT_COMPONENT_DIR: &str = "src/components";

/// The configuration a single invocation runs with.
///
/// Every field always holds exactly one value. Built once, then passed by
/// reference to every stage; nothing reads configuration from global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveConfig {
    pub lang: Language,
    pub dir: PathBuf,
    pub file_name_case: FileNameCase,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            lang: Language::Js,
            dir: PathBuf::from(DEFAULT_COMPONENT_DIR),
            file_name_case: FileNameCase::Pascal,
        }
    }
}

impl EffectiveConfig {
    /// Shallow merge: every key set in `layer` replaces the current value.
    #[must_use]
    pub fn apply(self, layer: ConfigOverride) -> Self {
        Self {
            lang: layer.lang.unwrap_or(self.lang),
            dir: layer.dir.unwrap_or(self.dir),
            file_name_case: layer.file_name_case.unwrap_or(self.file_name_case),
        }
    }
}

/// One partial configuration layer (override file or command line flags).
///
/// Unknown keys are ignored when deserializing; known keys must hold values
/// from their domain or deserialization fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name_case: Option<FileNameCase>,
}

impl ConfigOverride {
    pub fn is_empty(&self) -> bool {
        self.lang.is_none() && self.dir.is_none() && self.file_name_case.is_none()
    }
}
