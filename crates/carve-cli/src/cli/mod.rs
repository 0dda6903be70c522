//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use carve_core::domain::{ConfigOverride, FileNameCase, Language};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "carve",
    bin_name = "carve",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Instant component scaffolding",
    long_about = "Carve generates a component source file and its index \
                  re-export from a PascalCase name.",
    after_help = "EXAMPLES:\n\
        \x20 carve new Button\n\
        \x20 carve new NavBar --lang ts --case kebab\n\
        \x20 carve new Card --dir src/ui --dry-run\n\
        \x20 carve completions bash > /usr/share/bash-completion/completions/carve",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new component.
    #[command(
        visible_alias = "n",
        about = "Create a new component",
        after_help = "EXAMPLES:\n\
            \x20 carve new Button\n\
            \x20 carve new NavBar --lang ts --case kebab\n\
            \x20 carve new Card   --dir src/ui"
    )]
    New(NewArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 carve completions bash > ~/.local/share/bash-completion/completions/carve\n\
            \x20 carve completions zsh  > ~/.zfunc/_carve\n\
            \x20 carve completions fish > ~/.config/fish/completions/carve.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 carve config show\n\
            \x20 carve config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `carve new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// PascalCase component name.
    ///
    /// Optional here so that a missing name is reported by the validation
    /// step like any other bad name.
    #[arg(value_name = "NAME", help = "Component name (PascalCase)")]
    pub name: Option<String>,

    /// Component language.
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANGUAGE",
        value_enum,
        help = "Component language"
    )]
    pub language: Option<LangArg>,

    /// Directory components are created under.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Target directory (default: src/components)"
    )]
    pub dir: Option<PathBuf>,

    /// Case used for the generated directory and file names.
    #[arg(
        long = "case",
        value_name = "CASE",
        value_enum,
        help = "File name case"
    )]
    pub case: Option<CaseArg>,

    /// Read templates from a directory instead of the built-ins.
    #[arg(
        long = "templates",
        value_name = "DIR",
        env = "CARVE_TEMPLATES_DIR",
        help = "Template directory (component.jsx / component.tsx)"
    )]
    pub templates: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

impl NewArgs {
    /// The override layer formed by command line flags.
    pub fn overrides(&self) -> ConfigOverride {
        ConfigOverride {
            lang: self.language.map(Language::from),
            dir: self.dir.clone(),
            file_name_case: self.case.map(FileNameCase::from),
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `carve completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `carve config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as JSON.
    Show,
    /// Print the override file locations, lowest precedence first.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported component languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LangArg {
    /// JavaScript (.jsx). Also accepted as `javascript`.
    #[value(alias = "javascript")]
    Js,
    /// TypeScript (.tsx). Also accepted as `typescript`.
    #[value(alias = "typescript")]
    Ts,
}

impl From<LangArg> for Language {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::Js => Language::Js,
            LangArg::Ts => Language::Ts,
        }
    }
}

/// Supported file name cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CaseArg {
    Pascal,
    Kebab,
}

impl From<CaseArg> for FileNameCase {
    fn from(arg: CaseArg) -> Self {
        match arg {
            CaseArg::Pascal => FileNameCase::Pascal,
            CaseArg::Kebab => FileNameCase::Kebab,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
