//! Template Engine - loads language templates and fills in names.

use tracing::{debug, instrument};

use crate::{
    application::ports::TemplateStore,
    domain::{ComponentName, FormattedName, Language, RenderedTemplate, index_source, substitute},
    error::CarveResult,
};

/// Renders the component source and its barrel file.
pub struct TemplateEngine {
    store: Box<dyn TemplateStore>,
}

impl TemplateEngine {
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Render the component template for `lang` using the raw name.
    #[instrument(skip_all, fields(lang = %lang, component = %name))]
    pub fn render(&self, lang: Language, name: &ComponentName) -> CarveResult<RenderedTemplate> {
        let template = self.store.load(lang)?;
        debug!(store = %self.store.describe(), bytes = template.len(), "Template loaded");
        Ok(substitute(&template, name))
    }

    /// Render the barrel file pointing at the on-disk module name.
    pub fn render_index(&self, name: &FormattedName) -> RenderedTemplate {
        index_source(name)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::{FileNameCase, PLACEHOLDER};

    mock! {
        pub Store {}
        impl TemplateStore for Store {
            fn load(&self, language: Language) -> CarveResult<String>;
            fn describe(&self) -> String;
        }
    }

    fn engine_with(template: &'static str) -> TemplateEngine {
        let mut store = MockStore::new();
        store
            .expect_load()
            .returning(move |_| Ok(template.to_string()));
        store.expect_describe().return_const("mock".to_string());
        TemplateEngine::new(Box::new(store))
    }

    #[test]
    fn render_uses_original_name() {
        let engine = engine_with("export const COMPONENT_NAME = () => <COMPONENT_NAME />;");
        let name = ComponentName::parse("NavBar").unwrap();

        let out = engine.render(Language::Js, &name).unwrap();

        assert_eq!(out.as_str(), "export const NavBar = () => <NavBar />;");
        assert!(!out.as_str().contains(PLACEHOLDER));
    }

    #[test]
    fn render_requests_configured_language() {
        let mut store = MockStore::new();
        store
            .expect_load()
            .withf(|lang| *lang == Language::Ts)
            .times(1)
            .returning(|_| Ok("COMPONENT_NAME".into()));
        store.expect_describe().return_const("mock".to_string());
        let engine = TemplateEngine::new(Box::new(store));

        let name = ComponentName::parse("Card").unwrap();
        assert_eq!(engine.render(Language::Ts, &name).unwrap().as_str(), "Card");
    }

    #[test]
    fn render_index_uses_formatted_name() {
        let engine = engine_with("");
        let name = ComponentName::parse("NavBar").unwrap();

        let index = engine.render_index(&name.formatted(FileNameCase::Kebab));
        assert_eq!(index.as_str(), "export * from './nav-bar';\n");
    }

    #[test]
    fn store_failure_propagates() {
        let mut store = MockStore::new();
        store.expect_load().returning(|lang| {
            Err(ApplicationError::TemplateLoad {
                language: lang,
                reason: "missing".into(),
            }
            .into())
        });
        store.expect_describe().return_const("mock".to_string());
        let engine = TemplateEngine::new(Box::new(store));

        let name = ComponentName::parse("Card").unwrap();
        assert!(engine.render(Language::Js, &name).is_err());
    }
}
