//! End-to-end pipeline tests over real adapters.

use std::fs;
use std::path::{Path, PathBuf};

use carve_adapters::{
    BuiltinTemplates, JsonFileSource, LocalFilesystem, MemoryFilesystem,
    config_source::OVERRIDE_FILE_NAME,
};
use carve_core::{
    application::{ApplicationError, ScaffoldStage},
    prelude::*,
};
use tempfile::TempDir;

fn config_in(root: &Path, lang: Language, case: FileNameCase) -> EffectiveConfig {
    EffectiveConfig {
        lang,
        dir: root.join("src/components"),
        file_name_case: case,
    }
}

fn local_service() -> ScaffoldService {
    ScaffoldService::new(Box::new(BuiltinTemplates::new()), Box::new(LocalFilesystem::new()))
}

#[test]
fn pascal_js_component() {
    let tmp = TempDir::new().unwrap();
    let cfg = config_in(tmp.path(), Language::Js, FileNameCase::Pascal);
    let name = ComponentName::parse("Button").unwrap();

    local_service().scaffold(&name, &cfg, &NoopObserver).unwrap();

    let dir = tmp.path().join("src/components/Button");
    let component = fs::read_to_string(dir.join("Button.jsx")).unwrap();
    let index = fs::read_to_string(dir.join("index.js")).unwrap();

    assert!(component.contains("export const Button"));
    assert!(!component.contains("COMPONENT_NAME"));
    assert_eq!(index.trim_end(), "export * from './Button';");
}

#[test]
fn kebab_js_component_keeps_pascal_identifier() {
    let tmp = TempDir::new().unwrap();
    let cfg = config_in(tmp.path(), Language::Js, FileNameCase::Kebab);
    let name = ComponentName::parse("NavBar").unwrap();

    local_service().scaffold(&name, &cfg, &NoopObserver).unwrap();

    let dir = tmp.path().join("src/components/nav-bar");
    let component = fs::read_to_string(dir.join("nav-bar.jsx")).unwrap();
    let index = fs::read_to_string(dir.join("index.js")).unwrap();

    assert!(component.contains("export const NavBar"));
    assert_eq!(index.trim_end(), "export * from './nav-bar';");
}

#[test]
fn typescript_component() {
    let tmp = TempDir::new().unwrap();
    let cfg = config_in(tmp.path(), Language::Ts, FileNameCase::Pascal);
    let name = ComponentName::parse("Card").unwrap();

    let report = local_service().scaffold(&name, &cfg, &NoopObserver).unwrap();

    assert!(report.plan.component_file().ends_with("Card/Card.tsx"));
    assert!(tmp.path().join("src/components/Card/Card.tsx").is_file());
    assert!(tmp.path().join("src/components/Card/index.ts").is_file());
}

#[test]
fn existing_directory_is_left_untouched() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("src/components/Button");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("Button.jsx"), "// hand written").unwrap();

    let cfg = config_in(tmp.path(), Language::Js, FileNameCase::Pascal);
    let name = ComponentName::parse("Button").unwrap();

    let err = local_service()
        .scaffold(&name, &cfg, &NoopObserver)
        .unwrap_err();

    assert_eq!(
        err,
        CarveError::Application(ApplicationError::ComponentExists { path: dir.clone() })
    );
    assert_eq!(
        fs::read_to_string(dir.join("Button.jsx")).unwrap(),
        "// hand written"
    );
    assert!(!dir.join("index.js").exists());
}

#[test]
fn override_files_merge_global_then_local() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    fs::write(home.path().join(OVERRIDE_FILE_NAME), r#"{"lang":"ts"}"#).unwrap();
    fs::write(project.path().join(OVERRIDE_FILE_NAME), r#"{"dir":"lib"}"#).unwrap();

    let sources: Vec<Box<dyn ConfigSource>> = vec![
        Box::new(JsonFileSource::optional(home.path().join(OVERRIDE_FILE_NAME))),
        Box::new(JsonFileSource::local(project.path())),
    ];
    let resolver = ConfigResolver::new(sources);

    assert_eq!(
        resolver.resolve().unwrap(),
        EffectiveConfig {
            lang: Language::Ts,
            dir: PathBuf::from("lib"),
            file_name_case: FileNameCase::Pascal,
        }
    );
}

#[test]
fn broken_global_override_aborts_resolution() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    fs::write(home.path().join(OVERRIDE_FILE_NAME), "not json").unwrap();

    let sources: Vec<Box<dyn ConfigSource>> = vec![
        Box::new(JsonFileSource::optional(home.path().join(OVERRIDE_FILE_NAME))),
        Box::new(JsonFileSource::local(project.path())),
    ];
    let resolver = ConfigResolver::new(sources);

    assert!(matches!(
        resolver.resolve(),
        Err(CarveError::Application(ApplicationError::ConfigLoad { .. }))
    ));
}

#[test]
fn partial_failure_is_not_rolled_back() {
    let memory = MemoryFilesystem::new();
    memory.fail_on("src/components/Button/index.js");

    let service = ScaffoldService::new(Box::new(BuiltinTemplates::new()), Box::new(memory.clone()));
    let name = ComponentName::parse("Button").unwrap();

    let err = service
        .scaffold(&name, &EffectiveConfig::default(), &NoopObserver)
        .unwrap_err();

    assert!(matches!(
        err,
        CarveError::Application(ApplicationError::WriteFailed {
            stage: ScaffoldStage::WritingIndexFile,
            ..
        })
    ));
    assert!(memory.exists(Path::new("src/components/Button")));
    assert_eq!(
        memory.list_files(),
        vec![PathBuf::from("src/components/Button/Button.jsx")]
    );
    let component = memory
        .read_file(Path::new("src/components/Button/Button.jsx"))
        .unwrap();
    assert!(component.contains("export const Button"));

    // A re-run is now blocked by the leftover directory.
    let rerun = service
        .scaffold(&name, &EffectiveConfig::default(), &NoopObserver)
        .unwrap_err();
    assert!(matches!(
        rerun,
        CarveError::Application(ApplicationError::ComponentExists { .. })
    ));
}
