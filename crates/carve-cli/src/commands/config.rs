//! `carve config` - inspect the layered configuration.

use carve_core::domain::EffectiveConfig;

use crate::{
    cli::ConfigCommands,
    config::ConfigLayers,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, layers: ConfigLayers, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show => {
            let config = layers.effective(Default::default())?;
            output.data(&render_json(&config)?)?;
        }

        ConfigCommands::Path => {
            for source in layers.resolver().describe_sources() {
                output.data(&source)?;
            }
        }
    }

    Ok(())
}

fn render_json(config: &EffectiveConfig) -> CliResult<String> {
    serde_json::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}
