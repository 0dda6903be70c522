//! Literal placeholder substitution.
//!
//! Templates are plain text containing the token [`PLACEHOLDER`]. There is
//! no expression language: every occurrence is replaced verbatim.

use std::fmt;

use crate::domain::name::{ComponentName, FormattedName};

/// Token replaced by the component name. Case-sensitive.
pub const PLACEHOLDER: &str = "COMPONENT_NAME";

/// Rendered file content, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTemplate(String);

impl RenderedTemplate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RenderedTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Replace every placeholder with the original PascalCase name.
///
/// The raw name is used even when file names are kebab-cased, since the
/// rendered source needs a valid identifier.
pub fn substitute(template: &str, name: &ComponentName) -> RenderedTemplate {
    RenderedTemplate(template.replace(PLACEHOLDER, name.as_str()))
}

/// Barrel file re-exporting the component module as it is named on disk.
pub fn index_source(name: &FormattedName) -> RenderedTemplate {
    RenderedTemplate(format!("export * from './{name}';\n"))
}
