//! Templates compiled into the binary.

use carve_core::{application::ports::TemplateStore, domain::Language, error::CarveResult};

const JS_COMPONENT: &str = include_str!("../../templates/component.jsx");
const TS_COMPONENT: &str = include_str!("../../templates/component.tsx");

/// The templates that ship with Carve.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for BuiltinTemplates {
    fn load(&self, language: Language) -> CarveResult<String> {
        let source = match language {
            Language::Js => JS_COMPONENT,
            Language::Ts => TS_COMPONENT,
        };
        Ok(source.to_string())
    }

    fn describe(&self) -> String {
        "built-in templates".into()
    }
}
