//! Global arguments that apply to every subcommand.
//!
//! Declared here and flattened into [`super::Cli`] so that `-v`, `-q`, etc.
//! are available on any invocation without repetition

use clap::Args;
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Only warnings and errors
    -v      - Info level (progress messages)
    -vv     - Debug level (detailed diagnostics)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Extra override file applied after the global and local ones.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Additional JSON override file (highest file precedence)"
    )]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Whether a stream should carry ANSI colours.
    ///
    /// `--no-color` always wins; `auto` follows the stream's terminal status.
    pub fn use_color(&self, is_terminal: bool) -> bool {
        if self.no_color {
            return false;
        }
        match self.output_format {
            OutputFormat::Auto => is_terminal,
            OutputFormat::Human => true,
            OutputFormat::Plain => false,
        }
    }
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Human-readable with colors.
    Human,
    /// Plain text without colors.
    Plain,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(no_color: bool, output_format: OutputFormat) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color,
            config: None,
            output_format,
        }
    }

    #[test]
    fn auto_follows_terminal() {
        assert!(args(false, OutputFormat::Auto).use_color(true));
        assert!(!args(false, OutputFormat::Auto).use_color(false));
    }

    #[test]
    fn explicit_formats_ignore_terminal() {
        assert!(args(false, OutputFormat::Human).use_color(false));
        assert!(!args(false, OutputFormat::Plain).use_color(true));
    }

    #[test]
    fn no_color_always_wins() {
        for format in [OutputFormat::Auto, OutputFormat::Human, OutputFormat::Plain] {
            assert!(!args(true, format).use_color(true));
        }
    }
}
