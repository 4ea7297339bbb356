//! navigator-llm
//!
//! Text generation for the workflow stages: the `TextGenerator` contract,
//! reply cleaning, a Groq chat-completions client and model comparison.

pub mod clean;
pub mod compare;
pub mod error;
pub mod generator;
pub mod groq;

pub use crate::error::GenerationError;
pub use crate::generator::TextGenerator;
