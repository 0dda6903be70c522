//! Templates read from a user-provided directory.
//!
//! The directory holds one file per language:
//!
//! ```text
//! <root>/component.jsx
//! <root>/component.tsx
//! ```

use std::path::PathBuf;

use tracing::{debug, instrument};

use carve_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::Language,
    error::CarveResult,
};

/// File name a language's template is expected under.
pub fn template_file_name(language: Language) -> String {
    format!("component.{}", language.component_extension())
}

/// Template store backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
}

impl DirectoryTemplates {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateStore for DirectoryTemplates {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn load(&self, language: Language) -> CarveResult<String> {
        let path = self.root.join(template_file_name(language));
        debug!(path = %path.display(), "Reading template");

        std::fs::read_to_string(&path).map_err(|e| {
            ApplicationError::TemplateLoad {
                language,
                reason: format!("cannot read {}: {}", path.display(), e),
            }
            .into()
        })
    }

    fn describe(&self) -> String {
        format!("templates in {}", self.root.display())
    }
}
