//! Template store adapters.

mod builtin;
mod directory;

pub use builtin::BuiltinTemplates;
pub use directory::{DirectoryTemplates, template_file_name};
