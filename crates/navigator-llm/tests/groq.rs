//! Groq request/response handling.
//!
//! The live test calls the real API and needs `GROQ_API_KEY`.
//! Run with: `cargo test -p navigator-llm --test groq -- --ignored`

use std::collections::HashMap;

use navigator_llm::GenerationError;
use navigator_llm::TextGenerator;
use navigator_llm::groq::{
    ChatRequest, DEFAULT_BASE_URL, DEFAULT_MODEL, GroqClient, GroqConfig, parse_completion,
    resolve_model,
};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn request_puts_system_message_first() {
    let request =
        ChatRequest::new("llama-3.3-70b-versatile", "Patient info", Some("You are triage"));
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["model"], "llama-3.3-70b-versatile");
    assert_eq!(value["messages"][0]["role"], "system");
    assert_eq!(value["messages"][0]["content"], "You are triage");
    assert_eq!(value["messages"][1]["role"], "user");
    assert_eq!(value["max_tokens"], 1000);
    assert!((value["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
}

#[test]
fn request_without_system_prompt_has_only_user_message() {
    let request = ChatRequest::new(DEFAULT_MODEL, "hi", None);
    assert_eq!(request.messages.len(), 1);
}

#[test]
fn completion_content_is_cleaned() {
    let body = r#"{"choices":[{"message":{"role":"assistant","content":"<think>hmm</think>\n## Initial Risk Assessment"}}]}"#;
    assert_eq!(parse_completion(body).unwrap(), "## Initial Risk Assessment");
}

#[test]
fn completion_without_choices_is_empty() {
    let err = parse_completion(r#"{"choices":[]}"#).unwrap_err();
    assert!(matches!(err, GenerationError::EmptyResponse));
}

#[test]
fn completion_that_cleans_to_nothing_is_empty() {
    let body = r#"{"choices":[{"message":{"content":"<think>only thoughts</think>"}}]}"#;
    assert!(matches!(
        parse_completion(body).unwrap_err(),
        GenerationError::EmptyResponse
    ));
}

#[test]
fn malformed_body_is_a_parse_error() {
    assert!(matches!(
        parse_completion("<html>bad gateway</html>").unwrap_err(),
        GenerationError::ResponseParse(_)
    ));
}

#[test]
fn config_requires_api_key() {
    let err = GroqConfig::from_lookup(lookup(&[])).unwrap_err();
    assert!(err.to_string().contains("GROQ_API_KEY"));
}

#[test]
fn config_defaults_model_and_base_url() {
    let config = GroqConfig::from_lookup(lookup(&[("GROQ_API_KEY", "gsk_test")])).unwrap();
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
}

#[test]
fn config_resolves_model_keys_and_trims_base_url() {
    let config = GroqConfig::from_lookup(lookup(&[
        ("GROQ_API_KEY", "gsk_test"),
        ("GROQ_MODEL", "llama"),
        ("GROQ_BASE_URL", "http://localhost:8080/v1/"),
    ]))
    .unwrap();
    assert_eq!(config.model, "llama-3.3-70b-versatile");
    assert_eq!(config.base_url, "http://localhost:8080/v1");
    assert_eq!(GroqClient::new(config).model(), "llama-3.3-70b-versatile");
}

#[test]
fn unknown_model_is_rejected() {
    assert!(matches!(
        resolve_model("gpt-2").unwrap_err(),
        GenerationError::UnsupportedModel(_)
    ));
}

#[test]
fn unreachable_endpoint_is_a_transport_error() {
    let config = GroqConfig::from_lookup(lookup(&[
        ("GROQ_API_KEY", "gsk_test"),
        ("GROQ_BASE_URL", "http://127.0.0.1:9"),
    ]))
    .unwrap();
    let client = GroqClient::new(config);

    let err = client.generate("hello", None).unwrap_err();
    assert!(matches!(err, GenerationError::Transport(_)));
}

#[test]
#[ignore]
fn live_generation_returns_clean_text() {
    let config = GroqConfig::from_lookup(|k| std::env::var(k).ok()).expect("GROQ_API_KEY set");
    let client = GroqClient::new(config);

    let text = client
        .generate("Reply with the single word: ready", Some("Answer tersely."))
        .expect("generation should succeed");
    assert!(!text.contains("<think>"));
    assert!(!text.is_empty());
}
