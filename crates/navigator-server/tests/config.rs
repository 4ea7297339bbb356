use std::collections::HashMap;

use navigator_llm::groq::DEFAULT_MODEL;
use navigator_server::config::{ConfigError, NavigatorConfig};
use navigator_workflow::FailurePolicy;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_apply_with_only_api_key() {
    let config = NavigatorConfig::from_lookup(lookup(&[("GROQ_API_KEY", "gsk_test")])).unwrap();

    assert_eq!(config.groq.api_key, "gsk_test");
    assert_eq!(config.groq.model, DEFAULT_MODEL);
    assert_eq!(config.addr.to_string(), "0.0.0.0:3000");
    assert_eq!(config.failure_policy, FailurePolicy::Propagate);
}

#[test]
fn overrides_are_read() {
    let config = NavigatorConfig::from_lookup(lookup(&[
        ("GROQ_API_KEY", "gsk_test"),
        ("GROQ_MODEL", "llama"),
        ("NAVIGATOR_ADDR", "127.0.0.1:8080"),
        ("NAVIGATOR_FAILURE_POLICY", "record_placeholder"),
    ]))
    .unwrap();

    assert_eq!(config.groq.model, "llama-3.3-70b-versatile");
    assert_eq!(config.addr.port(), 8080);
    assert_eq!(config.failure_policy, FailurePolicy::RecordPlaceholder);
}

#[test]
fn missing_api_key_fails() {
    let err = NavigatorConfig::from_lookup(lookup(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::Groq(_)));
}

#[test]
fn bad_values_are_rejected() {
    let err = NavigatorConfig::from_lookup(lookup(&[
        ("GROQ_API_KEY", "gsk_test"),
        ("NAVIGATOR_ADDR", "not-an-address"),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::Addr { .. }));

    let err = NavigatorConfig::from_lookup(lookup(&[
        ("GROQ_API_KEY", "gsk_test"),
        ("NAVIGATOR_FAILURE_POLICY", "ignore"),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::FailurePolicy(_)));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = NavigatorConfig::from_lookup(lookup(&[
        ("GROQ_API_KEY", "gsk_test"),
        ("NAVIGATOR_ADDR", "  "),
        ("NAVIGATOR_FAILURE_POLICY", ""),
    ]))
    .unwrap();
    assert_eq!(config.addr.port(), 3000);
    assert_eq!(config.failure_policy, FailurePolicy::Propagate);
}
