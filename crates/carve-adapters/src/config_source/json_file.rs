//! JSON override files.
//!
//! ```json
//! { "lang": "ts", "dir": "src/ui", "fileNameCase": "kebab" }
//! ```
//!
//! Every key is optional and unknown keys are ignored.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use carve_core::{
    application::{
        ApplicationError,
        ports::{ConfigSource, OverrideLoad},
    },
    domain::ConfigOverride,
    error::{CarveError, CarveResult},
};

/// File name used for both the per-user and the per-project override.
pub const OVERRIDE_FILE_NAME: &str = ".carve.json";

/// One JSON override layer on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileSource {
    path: PathBuf,
    required: bool,
}

impl JsonFileSource {
    /// A file that may legitimately be missing.
    pub fn optional(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: false,
        }
    }

    /// A file the user asked for explicitly; missing is an error.
    pub fn required(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    /// `<home>/.carve.json`, or `None` when no home directory is known.
    pub fn global() -> Option<Self> {
        dirs::home_dir().map(|home| Self::optional(home.join(OVERRIDE_FILE_NAME)))
    }

    /// `<project>/.carve.json`.
    pub fn local(project_root: &Path) -> Self {
        Self::optional(project_root.join(OVERRIDE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn error(&self, reason: String) -> CarveError {
        ApplicationError::ConfigLoad {
            path: self.path.clone(),
            reason,
        }
        .into()
    }
}

impl ConfigSource for JsonFileSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> CarveResult<OverrideLoad> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !self.required => {
                debug!("Override file not found");
                return Ok(OverrideLoad::Absent);
            }
            Err(e) => return Err(self.error(format!("cannot read file: {e}"))),
        };

        let value: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| self.error(format!("invalid override file: {e}")))?;
        // Derived struct deserializers also take sequences; only objects are overrides.
        if !value.is_object() {
            return Err(self.error("override file must be a JSON object".into()));
        }
        let layer: ConfigOverride = serde_json::from_value(value)
            .map_err(|e| self.error(format!("invalid override file: {e}")))?;

        Ok(OverrideLoad::Loaded(layer))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
