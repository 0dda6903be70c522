//! Configuration override sources.

mod json_file;

pub use json_file::{JsonFileSource, OVERRIDE_FILE_NAME};
