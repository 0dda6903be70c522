//! Domain value objects: Language, FileNameCase.
//!
//! These are pure value types: `Copy`, compared by value, without identity.
//! Parsing from text is left to serde (override files) and clap (flags).

use serde::{Deserialize, Serialize};
use std::fmt;

// ── Language ─────────────────────────────────────────────────────────────────

/// The language a component is generated in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Js,
    Ts,
}

impl Language {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Js => "js",
            Self::Ts => "ts",
        }
    }

    /// Extension of the component source file.
    pub const fn component_extension(&self) -> &'static str {
        match self {
            Self::Js => "jsx",
            Self::Ts => "tsx",
        }
    }

    /// Extension of the barrel file.
    pub const fn index_extension(&self) -> &'static str {
        match self {
            Self::Js => "js",
            Self::Ts => "ts",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── FileNameCase ──────────────────────────────────────────────────────────────

/// Case policy applied to generated directory and file names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileNameCase {
    #[default]
    Pascal,
    Kebab,
}

impl FileNameCase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pascal => "pascal",
            Self::Kebab => "kebab",
        }
    }
}

impl fmt::Display for FileNameCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
