//! Implementation of the `carve new` command.
//!
//! Translates CLI arguments into a validated name and an effective
//! configuration, then hands both to the core scaffold service.

use tracing::{debug, info, instrument};

use carve_adapters::{BuiltinTemplates, DirectoryTemplates, LocalFilesystem};
use carve_core::{
    application::{ScaffoldService, ports::TemplateStore},
    domain::{ComponentName, EffectiveConfig},
    error::CarveError,
};

use crate::{cli::NewArgs, config::ConfigLayers, error::CliResult, output::OutputManager};

/// Execute the `carve new` command.
///
/// 1. Validate the component name
/// 2. Resolve configuration (files, then flags)
/// 3. Early-exit with the plan if `--dry-run`
/// 4. Scaffold, reporting each step through `output`
#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("")))]
pub fn execute(args: NewArgs, layers: ConfigLayers, output: OutputManager) -> CliResult<()> {
    let name = ComponentName::parse(args.name.as_deref().unwrap_or_default())
        .map_err(CarveError::from)?;
    let config = layers.effective(args.overrides())?;

    let service = ScaffoldService::new(template_store(&args), Box::new(LocalFilesystem::new()));

    if args.dry_run {
        return preview(&service, &name, &config, &output);
    }

    output.header(&format!("Creating '{name}'..."))?;
    let report = service.scaffold(&name, &config, &output)?;
    info!(
        component = %name,
        path = %report.plan.component_dir().display(),
        steps = report.events.len(),
        "Scaffold completed"
    );

    output.success(&format!(
        "Component '{name}' created in {}",
        report.plan.component_dir().display()
    ))?;
    Ok(())
}

fn template_store(args: &NewArgs) -> Box<dyn TemplateStore> {
    match &args.templates {
        Some(dir) => {
            debug!(dir = %dir.display(), "Using template directory");
            Box::new(DirectoryTemplates::new(dir))
        }
        None => Box::new(BuiltinTemplates::new()),
    }
}

fn preview(
    service: &ScaffoldService,
    name: &ComponentName,
    config: &EffectiveConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let plan = service.plan(name, config);

    output.info(&format!("Dry run: would create '{name}'"))?;
    output.print(&format!("  Directory: {}", plan.component_dir().display()))?;
    output.print(&format!("  Component: {}", plan.component_file().display()))?;
    output.print(&format!("  Index:     {}", plan.index_file().display()))?;
    if plan.component_dir().exists() {
        output.error(&format!(
            "{} already exists; a real run would stop there",
            plan.component_dir().display()
        ))?;
    }
    Ok(())
}
