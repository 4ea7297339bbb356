use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("model API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("model returned no content")]
    EmptyResponse,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("model not supported: {0}")]
    UnsupportedModel(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<ureq::Error> for GenerationError {
    fn from(e: ureq::Error) -> Self {
        GenerationError::Transport(e.to_string())
    }
}
