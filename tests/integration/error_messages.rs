//! Snapshot tests for error message formatting.
//!
//! Uses insta inline snapshots. Run `cargo insta review` to review changes.

use insta::assert_snapshot;
use samplecalc::config::DemoConfig;
use samplecalc::diagnostics::render_config_error;
use samplecalc::parse_and_sum;

#[test]
fn invalid_word_error() {
    let err = parse_and_sum("1,abc,3").unwrap_err();
    assert_snapshot!(err.to_string(), @"invalid number: abc");
}

#[test]
fn untrimmed_segment_error() {
    let err = parse_and_sum("1,  two ,3").unwrap_err();
    assert_snapshot!(format!("[{}]", err.segment), @"[  two ]");
}

#[test]
fn empty_input_error() {
    let err = parse_and_sum("").unwrap_err();
    assert_snapshot!(format!("{err:?}"), @r#"ParseError { segment: "", span: Span { start: 0, end: 0 } }"#);
}

#[test]
fn overflow_error() {
    let err = parse_and_sum("9223372036854775808").unwrap_err();
    assert_snapshot!(err.to_string(), @"invalid number: 9223372036854775808");
}

#[test]
fn config_parse_error_without_path() {
    let err = DemoConfig::from_toml("a = \"ten\"").unwrap_err();
    let rendered = render_config_error(&err);
    assert!(rendered.starts_with("error[config]: invalid demo config: "), "{rendered}");
    assert!(!rendered.contains("-->"), "{rendered}");
}
