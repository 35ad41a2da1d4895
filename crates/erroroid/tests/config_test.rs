//! Tests for annotator configuration.

use erroroid::{
    Annotator, AnnotatorConfig, ConfigErrorKind, DEFAULT_FORMAT, ErroroidErrorKind, FormatWarning,
    Placeholder,
};
use std::io::Write;

#[test]
fn defaults_match_documented_values() {
    let config = AnnotatorConfig::default();
    assert_eq!(config.format(), DEFAULT_FORMAT);
    assert_eq!(config.format(), "ERROR: [#file:#line @#func] -> #err");
    assert!(*config.log_emission());
}

#[test]
fn builder_fills_unset_fields_with_defaults() {
    let config = AnnotatorConfig::builder().log_emission(false).build().unwrap();
    assert_eq!(config.format(), DEFAULT_FORMAT);
    assert!(!*config.log_emission());

    let config = AnnotatorConfig::builder().format("#err").build().unwrap();
    assert_eq!(config.format(), "#err");
    assert!(*config.log_emission());
}

#[test]
fn later_settings_override_earlier_ones() {
    let config = AnnotatorConfig::builder()
        .format("first #err")
        .format("second #err")
        .log_emission(false)
        .log_emission(true)
        .build()
        .unwrap();
    assert_eq!(config.format(), "second #err");
    assert!(*config.log_emission());
}

#[test]
fn setters_return_updated_copies() {
    let config = AnnotatorConfig::default()
        .with_format("#line".to_string())
        .with_log_emission(false);
    assert_eq!(config.format(), "#line");
    assert!(!*config.log_emission());
}

#[test]
fn annotator_compiles_configured_format() {
    let annotator = Annotator::new(AnnotatorConfig::builder().format("#func/#err").build().unwrap());
    assert_eq!(annotator.compiled().template(), "{0:s}/{1}");
    assert_eq!(annotator.config().format(), "#func/#err");
    assert!(annotator.log_emission());
}

#[test]
fn default_annotator_uses_default_config() {
    let annotator = Annotator::default();
    assert_eq!(annotator.config(), &AnnotatorConfig::default());
    assert_eq!(
        annotator.compiled().template(),
        "ERROR: [{0:s}:{1:d} @{2:s}] -> {3}"
    );
}

#[test]
fn toml_missing_keys_take_defaults() {
    let config = AnnotatorConfig::from_toml_str("log_emission = false").unwrap();
    assert_eq!(config.format(), DEFAULT_FORMAT);
    assert!(!*config.log_emission());

    let config = AnnotatorConfig::from_toml_str("").unwrap();
    assert_eq!(config, AnnotatorConfig::default());
}

#[test]
fn toml_unknown_keys_are_rejected() {
    let err = AnnotatorConfig::from_toml_str("fromat = \"#err\"").unwrap_err();
    match err.kind() {
        ErroroidErrorKind::Config(inner) => {
            assert!(matches!(inner.kind(), ConfigErrorKind::Parse(_)));
        }
        other => panic!("unexpected kind: {other:?}"),
    }
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn invalid_file_contents_are_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_emission = \"yes\"").unwrap();

    let err = AnnotatorConfig::from_file(file.path()).unwrap_err();
    match err.kind() {
        ErroroidErrorKind::Config(inner) => {
            assert!(matches!(inner.kind(), ConfigErrorKind::Parse(_)));
        }
        other => panic!("unexpected kind: {other:?}"),
    }
}

#[test]
fn config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "format = \"[#line] #err at #file\"").unwrap();
    writeln!(file, "log_emission = false").unwrap();

    let config = AnnotatorConfig::from_file(file.path()).unwrap();
    assert_eq!(config.format(), "[#line] #err at #file");
    assert!(!*config.log_emission());
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = AnnotatorConfig::from_file(&path).unwrap_err();
    match err.kind() {
        ErroroidErrorKind::Config(inner) => match inner.kind() {
            ConfigErrorKind::Read { path: read, .. } => {
                assert_eq!(read, &path.display().to_string());
            }
            other => panic!("unexpected config kind: {other:?}"),
        },
        other => panic!("unexpected kind: {other:?}"),
    }
}

#[test]
fn config_round_trips_through_toml() {
    let config = AnnotatorConfig::default()
        .with_format("#func: #err".to_string())
        .with_log_emission(false);
    let text = toml::to_string(&config).unwrap();
    assert_eq!(AnnotatorConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn warnings_flag_suspicious_templates() {
    assert!(AnnotatorConfig::default().warnings().is_empty());

    let none = AnnotatorConfig::default().with_format("nothing here".to_string());
    assert_eq!(none.warnings(), vec![FormatWarning::NoPlaceholders]);

    let repeated = AnnotatorConfig::default().with_format("#err #line #err".to_string());
    assert_eq!(
        repeated.warnings(),
        vec![FormatWarning::Repeated(Placeholder::Error)]
    );
    assert_eq!(
        repeated.warnings()[0].to_string(),
        "placeholder #err appears more than once"
    );
}
