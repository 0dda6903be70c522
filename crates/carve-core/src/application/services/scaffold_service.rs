//! Scaffold Service - main application orchestrator.
//!
//! Given a validated name and an effective configuration, this service:
//! 1. Plans every path
//! 2. Renders the component and index templates
//! 3. Ensures the configured root directory exists
//! 4. Refuses to continue if the component directory already exists
//! 5. Creates the component directory
//! 6. Writes the component file, then the index file
//!
//! Every step either succeeds or ends the run. Nothing is rolled back:
//! whatever was created before a failure stays on disk.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        events::{FileKind, ScaffoldEvent, ScaffoldStage},
        ports::{Filesystem, ScaffoldObserver, TemplateStore},
        services::TemplateEngine,
    },
    domain::{ComponentName, EffectiveConfig, ScaffoldPlan},
    error::{CarveError, CarveResult},
};

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub plan: ScaffoldPlan,
    pub events: Vec<ScaffoldEvent>,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    templates: TemplateEngine,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(store: Box<dyn TemplateStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            templates: TemplateEngine::new(store),
            filesystem,
        }
    }

    /// Compute the paths a run would touch, without touching anything.
    pub fn plan(&self, name: &ComponentName, config: &EffectiveConfig) -> ScaffoldPlan {
        ScaffoldPlan::new(config, &name.formatted(config.file_name_case))
    }

    /// Scaffold a new component.
    ///
    /// `observer` receives one event per completed mutation, and a
    /// `Failed` event naming the stage if the run stops early.
    #[instrument(
        skip_all,
        fields(
            component = %name,
            lang = %config.lang,
            dir = %config.dir.display(),
            case = %config.file_name_case
        )
    )]
    pub fn scaffold(
        &self,
        name: &ComponentName,
        config: &EffectiveConfig,
        observer: &dyn ScaffoldObserver,
    ) -> CarveResult<ScaffoldReport> {
        let mut run = Run {
            observer,
            events: Vec::new(),
        };

        // 1. Plan
        let formatted = name.formatted(config.file_name_case);
        let plan = ScaffoldPlan::new(config, &formatted);
        debug!(component_dir = %plan.component_dir().display(), "Scaffold planned");

        // 2. Render before any mutation so a missing template leaves no trace
        let component = run.step(
            ScaffoldStage::RenderingTemplates,
            self.templates.render(config.lang, name),
        )?;
        let index = self.templates.render_index(&formatted);

        // 3. Ensure parent
        run.step(
            ScaffoldStage::EnsuringParent,
            self.filesystem.create_dir_all(plan.parent_dir()),
        )?;
        run.emit(ScaffoldEvent::ParentEnsured {
            path: plan.parent_dir().to_path_buf(),
        });

        // 4. Collision check
        if self.filesystem.exists(plan.component_dir()) {
            return run.step(
                ScaffoldStage::CheckingCollision,
                Err(ApplicationError::ComponentExists {
                    path: plan.component_dir().to_path_buf(),
                }
                .into()),
            );
        }

        // 5. Create component directory
        run.step(
            ScaffoldStage::CreatingDirectory,
            self.filesystem.create_dir(plan.component_dir()),
        )?;
        run.emit(ScaffoldEvent::DirectoryCreated {
            path: plan.component_dir().to_path_buf(),
        });

        // 6. Component file, then index file
        self.write(
            &mut run,
            ScaffoldStage::WritingComponentFile,
            FileKind::Component,
            plan.component_file(),
            component.as_str(),
        )?;
        self.write(
            &mut run,
            ScaffoldStage::WritingIndexFile,
            FileKind::Index,
            plan.index_file(),
            index.as_str(),
        )?;

        info!(path = %plan.component_dir().display(), "Scaffold completed successfully");
        Ok(ScaffoldReport {
            plan,
            events: run.events,
        })
    }

    fn write(
        &self,
        run: &mut Run<'_>,
        stage: ScaffoldStage,
        kind: FileKind,
        path: &Path,
        content: &str,
    ) -> CarveResult<()> {
        run.step(stage, self.filesystem.write_file(path, content))?;
        run.emit(ScaffoldEvent::FileWritten {
            kind,
            path: path.to_path_buf(),
        });
        Ok(())
    }
}

/// Per-invocation bookkeeping: forwards events and tags failures with their stage.
struct Run<'a> {
    observer: &'a dyn ScaffoldObserver,
    events: Vec<ScaffoldEvent>,
}

impl Run<'_> {
    fn emit(&mut self, event: ScaffoldEvent) {
        self.observer.on_event(&event);
        self.events.push(event);
    }

    fn step<T>(&mut self, stage: ScaffoldStage, result: CarveResult<T>) -> CarveResult<T> {
        result.map_err(|err| {
            warn!(%stage, error = %err, "Scaffold step failed");
            self.emit(ScaffoldEvent::Failed { stage });
            attach_stage(stage, err)
        })
    }
}

fn attach_stage(stage: ScaffoldStage, err: CarveError) -> CarveError {
    match err {
        CarveError::Application(ApplicationError::Filesystem { path, reason }) => {
            ApplicationError::WriteFailed {
                stage,
                path,
                reason,
            }
            .into()
        }
        other => other,
    }
}
