//! Component names: validation and case transformation.

use std::fmt;

use crate::domain::{error::DomainError, value_objects::FileNameCase};

/// A validated PascalCase component name.
///
/// This is the single source of truth for a component's identity. Every
/// derived name is computed from it and never re-validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName(String);

impl ComponentName {
    /// Validate a raw, user-supplied name.
    ///
    /// Accepts an uppercase ASCII letter followed by any number of ASCII
    /// letters or digits.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = raw.as_ref();

        if raw.trim().is_empty() {
            return Err(DomainError::MissingName);
        }

        let mut chars = raw.chars();
        let starts_upper = chars.next().is_some_and(|c| c.is_ascii_uppercase());
        if !starts_upper {
            return Err(DomainError::InvalidName {
                name: raw.to_string(),
                reason: "must start with an uppercase letter".into(),
            });
        }

        if let Some(bad) = chars.find(|c| !c.is_ascii_alphanumeric()) {
            return Err(DomainError::InvalidName {
                name: raw.to_string(),
                reason: format!("contains invalid character '{bad}'"),
            });
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name as it appears on disk under the given case policy.
    pub fn formatted(&self, case: FileNameCase) -> FormattedName {
        format_name(&self.0, case)
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ComponentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A component name after the file name case policy was applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormattedName(String);

impl FormattedName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormattedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FormattedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Apply a case policy to a PascalCase name.
///
/// The input is assumed valid; nothing is checked here.
///
/// Kebab inserts a hyphen only where a lowercase letter or digit is directly
/// followed by an uppercase letter, so acronym runs stay joined:
/// `HTTPServer` becomes `httpserver`.
pub fn format_name(raw: &str, case: FileNameCase) -> FormattedName {
    match case {
        FileNameCase::Pascal => FormattedName(raw.to_string()),
        FileNameCase::Kebab => FormattedName(to_kebab_case(raw)),
    }
}

fn to_kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if let Some(p) = prev {
            if (p.is_ascii_lowercase() || p.is_ascii_digit()) && c.is_ascii_uppercase() {
                out.push('-');
            }
        }
        out.push(c);
        prev = Some(c);
    }

    out.to_lowercase()
}
