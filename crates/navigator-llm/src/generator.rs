use std::sync::Arc;

use crate::error::GenerationError;

/// Sampling temperature sent with every stage request.
pub const TEMPERATURE: f32 = 0.7;

/// Upper bound on generated tokens per request.
pub const MAX_TOKENS: u32 = 1000;

/// Blocking text generation.
///
/// Implementations return cleaned, user-facing text. One call is one request;
/// retries and timeouts belong to the implementation, and any failure is a
/// single `GenerationError` to the caller.
pub trait TextGenerator: Send + Sync {
    fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Result<String, GenerationError>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for &T {
    fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Result<String, GenerationError> {
        (**self).generate(prompt, system_prompt)
    }
}

impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Result<String, GenerationError> {
        (**self).generate(prompt, system_prompt)
    }
}

impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Result<String, GenerationError> {
        (**self).generate(prompt, system_prompt)
    }
}
