//! Core domain layer for Carve.
//!
//! This module contains pure business logic with no I/O. Filesystem access,
//! template storage and override files are reached through ports defined in
//! the application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: names, configs and plans are never mutated in place

pub mod config;
pub mod error;
pub mod name;
pub mod plan;
pub mod template;
pub mod value_objects;

pub use config::{ConfigOverride, DEFAULT_COMPONENT_DIR, EffectiveConfig};
pub use error::DomainError;
pub use name::{ComponentName, FormattedName, format_name};
pub use plan::ScaffoldPlan;
pub use template::{PLACEHOLDER, RenderedTemplate, index_source, substitute};
pub use value_objects::{FileNameCase, Language};

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn values_display_as_file_keys() {
        assert_eq!(Language::Ts.to_string(), "ts");
        assert_eq!(FileNameCase::Kebab.to_string(), "kebab");
    }

    #[test]
    fn language_extensions() {
        assert_eq!(Language::Js.component_extension(), "jsx");
        assert_eq!(Language::Js.index_extension(), "js");
        assert_eq!(Language::Ts.component_extension(), "tsx");
        assert_eq!(Language::Ts.index_extension(), "ts");
    }

    // ========================================================================
    // Name Tests
    // ========================================================================

    #[test]
    fn accepts_pascal_case_names() {
        for name in ["Button", "NavBar", "Card2", "X", "HTTPServer"] {
            assert!(ComponentName::parse(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn empty_name_is_missing() {
        assert_eq!(ComponentName::parse(""), Err(DomainError::MissingName));
        assert_eq!(ComponentName::parse("   "), Err(DomainError::MissingName));
    }

    #[test]
    fn lowercase_first_letter_is_rejected() {
        let err = ComponentName::parse("myComponent").unwrap_err();
        assert!(matches!(err, DomainError::InvalidName { .. }));
    }

    #[test]
    fn separators_are_rejected() {
        for name in ["My-Component", "My_Component", "My Component", "Ünicode"] {
            assert!(
                matches!(
                    ComponentName::parse(name),
                    Err(DomainError::InvalidName { .. })
                ),
                "{name} should be invalid"
            );
        }
    }

    #[test]
    fn pascal_format_is_identity() {
        for name in ["Button", "NavBar", "HTTPServer", "Card2Deck"] {
            assert_eq!(format_name(name, FileNameCase::Pascal).as_str(), name);
        }
    }

    #[test]
    fn kebab_format() {
        assert_eq!(
            format_name("MyComponent", FileNameCase::Kebab).as_str(),
            "my-component"
        );
        assert_eq!(format_name("Button", FileNameCase::Kebab).as_str(), "button");
        assert_eq!(format_name("NavBar", FileNameCase::Kebab).as_str(), "nav-bar");
        assert_eq!(
            format_name("Card2Deck", FileNameCase::Kebab).as_str(),
            "card2-deck"
        );
    }

    #[test]
    fn kebab_keeps_acronym_runs_joined() {
        assert_eq!(
            format_name("HTTPServer", FileNameCase::Kebab).as_str(),
            "httpserver"
        );
        assert_eq!(
            format_name("MyHTTPServer", FileNameCase::Kebab).as_str(),
            "my-httpserver"
        );
    }

    // ========================================================================
    // Config Tests
    // ========================================================================

    #[test]
    fn defaults() {
        let cfg = EffectiveConfig::default();
        assert_eq!(cfg.lang, Language::Js);
        assert_eq!(cfg.dir, PathBuf::from("src/components"));
        assert_eq!(cfg.file_name_case, FileNameCase::Pascal);
    }

    #[test]
    fn later_layers_win_per_key() {
        let global = ConfigOverride {
            lang: Some(Language::Ts),
            ..Default::default()
        };
        let local = ConfigOverride {
            dir: Some(PathBuf::from("lib")),
            ..Default::default()
        };

        let cfg = EffectiveConfig::default().apply(global).apply(local);

        assert_eq!(
            cfg,
            EffectiveConfig {
                lang: Language::Ts,
                dir: PathBuf::from("lib"),
                file_name_case: FileNameCase::Pascal,
            }
        );
    }

    #[test]
    fn override_deserializes_known_keys_and_ignores_unknown() {
        let layer: ConfigOverride =
            serde_json::from_str(r#"{"lang":"ts","fileNameCase":"kebab","theme":"dark"}"#)
                .unwrap();
        assert_eq!(layer.lang, Some(Language::Ts));
        assert_eq!(layer.file_name_case, Some(FileNameCase::Kebab));
        assert_eq!(layer.dir, None);
    }

    #[test]
    fn override_rejects_out_of_domain_values() {
        assert!(serde_json::from_str::<ConfigOverride>(r#"{"lang":"py"}"#).is_err());
        assert!(serde_json::from_str::<ConfigOverride>(r#"{"fileNameCase":"snake"}"#).is_err());
    }

    #[test]
    fn empty_object_is_empty_override() {
        let layer: ConfigOverride = serde_json::from_str("{}").unwrap();
        assert!(layer.is_empty());
    }

    // ========================================================================
    // Plan Tests
    // ========================================================================

    #[test]
    fn plan_pascal_js() {
        let cfg = EffectiveConfig::default();
        let name = ComponentName::parse("Button").unwrap();
        let plan = ScaffoldPlan::new(&cfg, &name.formatted(cfg.file_name_case));

        assert_eq!(plan.parent_dir(), Path::new("src/components"));
        assert_eq!(plan.component_dir(), Path::new("src/components/Button"));
        assert_eq!(
            plan.component_file(),
            Path::new("src/components/Button/Button.jsx")
        );
        assert_eq!(plan.index_file(), Path::new("src/components/Button/index.js"));
    }

    #[test]
    fn plan_kebab_ts() {
        let cfg = EffectiveConfig {
            lang: Language::Ts,
            dir: PathBuf::from("app/ui"),
            file_name_case: FileNameCase::Kebab,
        };
        let name = ComponentName::parse("NavBar").unwrap();
        let plan = ScaffoldPlan::new(&cfg, &name.formatted(cfg.file_name_case));

        assert_eq!(
            plan.component_file(),
            Path::new("app/ui/nav-bar/nav-bar.tsx")
        );
        assert_eq!(plan.index_file(), Path::new("app/ui/nav-bar/index.ts"));
        assert_eq!(plan.parent_dir(), Path::new("app/ui"));
    }

    // ========================================================================
    // Template Tests
    // ========================================================================

    #[test]
    fn substitution_replaces_every_placeholder() {
        let name = ComponentName::parse("Button").unwrap();
        let out = substitute("const COMPONENT_NAME = 1; export { COMPONENT_NAME };", &name);

        assert!(!out.as_str().contains(PLACEHOLDER));
        assert_eq!(out.as_str(), "const Button = 1; export { Button };");
    }

    #[test]
    fn substitution_is_case_sensitive() {
        let name = ComponentName::parse("Button").unwrap();
        let out = substitute("component_name COMPONENT_NAME", &name);
        assert_eq!(out.as_str(), "component_name Button");
    }

    #[test]
    fn index_uses_formatted_name() {
        let name = ComponentName::parse("NavBar").unwrap();
        let out = index_source(&name.formatted(FileNameCase::Kebab));
        assert_eq!(out.as_str(), "export * from './nav-bar';\n");
    }
}
