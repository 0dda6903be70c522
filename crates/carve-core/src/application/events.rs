//! Pipeline stages and step events.
//!
//! ```text
//! RenderingTemplates → EnsuringParent → CheckingCollision
//!   → CreatingDirectory → WritingComponentFile → WritingIndexFile
//! ```
//!
//! Name validation and config resolution happen in the caller before the
//! first stage. Any stage may end in failure; nothing is retried.

use std::fmt;
use std::path::PathBuf;

use crate::application::ports::ScaffoldObserver;

/// One step of the scaffold pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaffoldStage {
    RenderingTemplates,
    EnsuringParent,
    CheckingCollision,
    CreatingDirectory,
    WritingComponentFile,
    WritingIndexFile,
}

impl ScaffoldStage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RenderingTemplates => "rendering templates",
            Self::EnsuringParent => "creating parent directory",
            Self::CheckingCollision => "checking for existing component",
            Self::CreatingDirectory => "creating component directory",
            Self::WritingComponentFile => "writing component file",
            Self::WritingIndexFile => "writing index file",
        }
    }
}

impl fmt::Display for ScaffoldStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the two generated files an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Component,
    Index,
}

/// A discrete, completed (or failed) pipeline step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    ParentEnsured { path: PathBuf },
    DirectoryCreated { path: PathBuf },
    FileWritten { kind: FileKind, path: PathBuf },
    Failed { stage: ScaffoldStage },
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ScaffoldObserver for NoopObserver {
    fn on_event(&self, _event: &ScaffoldEvent) {}
}
