use std::path::{Path, PathBuf};

use crate::domain::{config::EffectiveConfig, name::FormattedName};

/// Every path a scaffold run touches, computed up front.
///
/// ```text
/// <dir>/<F>/<F>.<jsx|tsx>
/// <dir>/<F>/index.<js|ts>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    parent_dir: PathBuf,
    component_dir: PathBuf,
    component_file: PathBuf,
    index_file: PathBuf,
}

impl ScaffoldPlan {
    pub fn new(config: &EffectiveConfig, name: &FormattedName) -> Self {
        let component_dir = config.dir.join(name.as_str());
        let component_file =
            component_dir.join(format!("{name}.{}", config.lang.component_extension()));
        let index_file = component_dir.join(format!("index.{}", config.lang.index_extension()));

        Self {
            parent_dir: config.dir.clone(),
            component_dir,
            component_file,
            index_file,
        }
    }

    /// The configured root directory components live under.
    pub fn parent_dir(&self) -> &Path {
        &self.parent_dir
    }

    pub fn component_dir(&self) -> &Path {
        &self.component_dir
    }

    pub fn component_file(&self) -> &Path {
        &self.component_file
    }

    pub fn index_file(&self) -> &Path {
        &self.index_file
    }
}
