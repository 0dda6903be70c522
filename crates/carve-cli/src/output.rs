//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::path::Path;

use console::Term;
use owo_colors::OwoColorize;

use carve_core::application::{FileKind, ScaffoldEvent, ScaffoldObserver};

use crate::cli::global::GlobalArgs;

/// Writes user-facing lines to stdout.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from the parsed global flags.
    pub fn new(args: &GlobalArgs) -> Self {
        Self {
            quiet: args.quiet,
            no_color: !args.use_color(io::stdout().is_terminal()),
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Machine-readable data (JSON, paths). Never suppressed.
    pub fn data(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`. Shown even in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }
}

/// Text shown for one pipeline event.
pub fn describe_event(event: &ScaffoldEvent) -> String {
    match event {
        ScaffoldEvent::ParentEnsured { path } => format!("Using {}", shown(path)),
        ScaffoldEvent::DirectoryCreated { path } => format!("Created {}", shown(path)),
        ScaffoldEvent::FileWritten {
            kind: FileKind::Component,
            path,
        } => format!("Wrote component {}", shown(path)),
        ScaffoldEvent::FileWritten {
            kind: FileKind::Index,
            path,
        } => format!("Wrote index {}", shown(path)),
        ScaffoldEvent::Failed { stage } => format!("Failed while {stage}"),
    }
}

/// An empty relative path is the working directory.
fn shown(path: &Path) -> String {
    if path.as_os_str().is_empty() {
        ".".to_string()
    } else {
        path.display().to_string()
    }
}

impl ScaffoldObserver for OutputManager {
    fn on_event(&self, event: &ScaffoldEvent) {
        let line = describe_event(event);
        // Progress lines are best effort; a closed stdout must not mask the
        // scaffold result.
        let written = match event {
            ScaffoldEvent::ParentEnsured { .. } => self.info(&line),
            ScaffoldEvent::Failed { .. } => self.error(&line),
            _ => self.success(&line),
        };
        if let Err(e) = written {
            tracing::debug!("Could not write progress line: {e}");
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
