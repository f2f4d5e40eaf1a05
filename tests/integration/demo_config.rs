use samplecalc::config::DemoConfig;
use samplecalc::demo::{report_lines, DemoReport};
use samplecalc::diagnostics::ConfigError;
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn load_overrides_samples() {
    let file = write_config(
        r#"
a = 7
b = 2
words = ["cargo", "test"]
separator = "+"
reverse = "Rust"
email = "nobody"
"#,
    );
    let config = DemoConfig::load(file.path()).unwrap();
    let lines = report_lines(&config).unwrap();

    assert!(lines.contains(&"Add(7, 2) = 9".to_string()));
    assert!(lines.contains(&"Divide(7, 2) = 3.50".to_string()));
    assert!(lines.contains(&"JoinStrings([cargo test]) = \"cargo+test\"".to_string()));
    assert!(lines.contains(&"ReverseString(\"Rust\") = \"tsuR\"".to_string()));
    assert!(lines.contains(&"IsValidEmail(\"nobody\") = false".to_string()));
}

#[test]
fn load_with_extras() {
    let file = write_config("fibonacci = 10\nprime = 9\nsum = \"5, 5\"\n");
    let config = DemoConfig::load(file.path()).unwrap();
    let report = DemoReport::build(&config).unwrap();
    assert_eq!(report.fibonacci, Some(55));
    assert_eq!(report.prime, Some(false));
    assert_eq!(report.sum, Some(10));
}

#[test]
fn load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = DemoConfig::load(&path).unwrap_err();
    match err {
        ConfigError::Read { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn load_invalid_toml_carries_path() {
    let file = write_config("a = [");
    let err = DemoConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Toml { .. }));
    assert_eq!(err.path(), Some(&file.path().to_path_buf()));
}

#[test]
fn load_bad_sum_surfaces_parse_error() {
    let file = write_config("sum = \"1,,2\"\n");
    let config = DemoConfig::load(file.path()).unwrap();
    let err = DemoReport::build(&config).unwrap_err();
    assert_eq!(err.segment, "");
    assert_eq!(err.span.range(), 2..2);
}
