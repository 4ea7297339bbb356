//! Server configuration from environment variables.
//!
//! ```text
//! GROQ_API_KEY              required
//! GROQ_MODEL                deepseek | llama | full model id (default deepseek)
//! GROQ_BASE_URL             default https://api.groq.com/openai/v1
//! NAVIGATOR_ADDR            listen address (default 0.0.0.0:3000)
//! NAVIGATOR_FAILURE_POLICY  propagate | record_placeholder (default propagate)
//! ```

use std::net::SocketAddr;

use thiserror::Error;

use navigator_llm::GenerationError;
use navigator_llm::groq::GroqConfig;
use navigator_workflow::FailurePolicy;

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Groq(#[from] GenerationError),

    #[error("invalid NAVIGATOR_ADDR '{value}': {reason}")]
    Addr { value: String, reason: String },

    #[error("invalid NAVIGATOR_FAILURE_POLICY: {0}")]
    FailurePolicy(String),
}

#[derive(Debug, Clone)]
pub struct NavigatorConfig {
    pub groq: GroqConfig,
    pub addr: SocketAddr,
    pub failure_policy: FailurePolicy,
}

impl NavigatorConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let groq = GroqConfig::from_lookup(&lookup)?;

        let addr_value = get("NAVIGATOR_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Addr {
                value: addr_value.clone(),
                reason: e.to_string(),
            })?;

        let failure_policy = match get("NAVIGATOR_FAILURE_POLICY") {
            Some(value) => value
                .trim()
                .parse::<FailurePolicy>()
                .map_err(ConfigError::FailurePolicy)?,
            None => FailurePolicy::default(),
        };

        Ok(Self {
            groq,
            addr,
            failure_policy,
        })
    }
}
