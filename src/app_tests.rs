//! Tests for application utilities.

use std::collections::BTreeMap;

use ooinstall::config::ConfigError;

use super::render_json;

#[test]
fn render_json_pretty_prints() {
    let value = BTreeMap::from([("masters", vec!["10.0.0.1"])]);

    let json = render_json(&value).unwrap();

    assert_eq!(json, "{\n  \"masters\": [\n    \"10.0.0.1\"\n  ]\n}");
}

#[test]
fn render_json_failure_is_returned() {
    // JSON object keys must be strings.
    let value = BTreeMap::from([((1u8, 2u8), "pair")]);

    let err = render_json(&value).unwrap_err();

    assert!(matches!(err, ConfigError::Json(_)));
    assert!(!err.is_write_error());
}
