//! Format selection through the default registry.

use richtext_babel::{convert, FormatError, FormatRegistry};
use std::collections::HashMap;

fn options(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_default_formats() {
    let registry = FormatRegistry::default();
    assert_eq!(registry.list_formats(), vec!["json", "text", "treeviz"]);
}

#[test]
fn test_detect_format_from_output_path() {
    let registry = FormatRegistry::default();
    assert_eq!(
        registry.detect_format_from_filename("out/post.json"),
        Some("json".to_string())
    );
    assert_eq!(
        registry.detect_format_from_filename("post.tree"),
        Some("treeviz".to_string())
    );
    assert_eq!(
        registry.detect_format_from_filename("post.txt"),
        Some("text".to_string())
    );
    assert_eq!(registry.detect_format_from_filename("post.html"), None);
    assert_eq!(registry.detect_format_from_filename("post"), None);
}

#[test]
fn test_unknown_format() {
    let registry = FormatRegistry::default();
    let doc = convert("<p>x</p>");
    let err = registry.serialize(&doc, "docx").unwrap_err();
    assert_eq!(err, FormatError::FormatNotFound("docx".to_string()));
    assert_eq!(err.to_string(), "Format 'docx' not found");
}

#[test]
fn test_options_reach_the_format() {
    let registry = FormatRegistry::default();
    let doc = convert("<p>x</p><img src='a.png'>");
    let out = registry
        .serialize_with_options(&doc, "json", &options(&[("images", "false"), ("pretty", "no")]))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert!(value.is_array());
    assert_eq!(value.as_array().map(Vec::len), Some(1));
}

#[test]
fn test_formats_without_parameters_reject_options() {
    let registry = FormatRegistry::default();
    let doc = convert("<p>x</p>");
    let err = registry
        .serialize_with_options(&doc, "text", &options(&[("width", "80")]))
        .unwrap_err();
    assert!(matches!(err, FormatError::NotSupported(_)));

    // an empty option map is the same as no options
    let out = registry
        .serialize_with_options(&doc, "text", &HashMap::new())
        .unwrap();
    assert_eq!(out, "x\n");
}

#[test]
fn test_json_rejects_unknown_parameter() {
    let registry = FormatRegistry::default();
    let doc = convert("<p>x</p>");
    let err = registry
        .serialize_with_options(&doc, "json", &options(&[("indent", "4")]))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Operation not supported: Format 'json' does not support parameter(s): indent"
    );
}
