//! Groq chat-completions client.
//!
//! Groq serves an OpenAI-compatible API. One blocking `POST
//! {base_url}/chat/completions` per call: an optional system message, then
//! the user prompt. The first choice's content is cleaned before it is
//! returned.
//!
//! ```text
//! GROQ_API_KEY   required, sent as a bearer token
//! GROQ_MODEL     model key or id (default: deepseek)
//! GROQ_BASE_URL  default https://api.groq.com/openai/v1
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::clean::clean_response;
use crate::error::GenerationError;
use crate::generator::{MAX_TOKENS, TEMPERATURE, TextGenerator};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

// ── Models ───────────────────────────────────────────────────────────────────

/// A model offered for stage generation and comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownModel {
    /// Short key, e.g. `"llama"`.
    pub key: &'static str,
    /// Groq model id.
    pub id: &'static str,
}

pub const KNOWN_MODELS: [KnownModel; 2] = [
    KnownModel {
        key: "deepseek",
        id: "deepseek-r1-distill-qwen-32b",
    },
    KnownModel {
        key: "llama",
        id: "llama-3.3-70b-versatile",
    },
];

pub const DEFAULT_MODEL: &str = "deepseek-r1-distill-qwen-32b";

/// Resolve a short key or full id to a known model id.
pub fn resolve_model(name: &str) -> Result<&'static str, GenerationError> {
    KNOWN_MODELS
        .iter()
        .find(|m| m.key == name || m.id == name)
        .map(|m| m.id)
        .ok_or_else(|| GenerationError::UnsupportedModel(name.to_string()))
}

// ── Config ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl GroqConfig {
    /// Build from a variable lookup such as `|k| std::env::var(k).ok()`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GenerationError> {
        let api_key = lookup("GROQ_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                GenerationError::Config("GROQ_API_KEY not found in environment".to_string())
            })?;

        let model = match lookup("GROQ_MODEL") {
            Some(name) if !name.trim().is_empty() => resolve_model(name.trim())?.to_string(),
            _ => DEFAULT_MODEL.to_string(),
        };

        let base_url = lookup("GROQ_BASE_URL")
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

// ── Wire types ───────────────────────────────────────────────────────────────

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    System,
    User,
}

/// A single message in a chat request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl ChatRequest {
    pub fn new(model: &str, prompt: &str, system_prompt: Option<&str>) -> Self {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system_prompt {
            messages.push(ChatMessage {
                role: ChatRole::System,
                content: system.to_string(),
            });
        }
        messages.push(ChatMessage {
            role: ChatRole::User,
            content: prompt.to_string(),
        });

        Self {
            model: model.to_string(),
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Extract and clean the first choice of a chat-completions response body.
pub fn parse_completion(body: &str) -> Result<String, GenerationError> {
    let completion: ChatCompletion = serde_json::from_str(body)
        .map_err(|e| GenerationError::ResponseParse(format!("{e}. Response: {body}")))?;

    let content = completion
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or(GenerationError::EmptyResponse)?;

    let cleaned = clean_response(&content);
    if cleaned.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    Ok(cleaned)
}

// ── Client ───────────────────────────────────────────────────────────────────

pub struct GroqClient {
    agent: ureq::Agent,
    config: GroqConfig,
}

impl GroqClient {
    pub fn new(config: GroqConfig) -> Self {
        let agent_config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build();

        Self {
            agent: ureq::Agent::new_with_config(agent_config),
            config,
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Generate with an explicit model id, bypassing the configured default.
    pub fn generate_with_model(
        &self,
        model_id: &str,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Result<String, GenerationError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let request = ChatRequest::new(model_id, prompt, system_prompt);
        let payload = serde_json::to_string(&request)?;

        info!(model = model_id, prompt_len = prompt.len(), "sending chat completion");

        let mut response = self
            .agent
            .post(&url)
            .header("Authorization", &format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .send(payload.as_str())?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;

        if !(200..300).contains(&status) {
            warn!(model = model_id, status, "chat completion rejected");
            return Err(GenerationError::Status { status, body });
        }

        let text = parse_completion(&body)?;
        info!(model = model_id, text_len = text.len(), "chat completion received");
        Ok(text)
    }
}

impl TextGenerator for GroqClient {
    fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Result<String, GenerationError> {
        self.generate_with_model(&self.config.model, prompt, system_prompt)
    }
}
