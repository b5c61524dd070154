//! grove-openai
//!
//! OpenAI chat-completions client used to generate coaching messages.

mod client;
mod error;
pub mod models;

pub use client::{ChatRequest, OpenAiClient};
pub use error::OpenAiError;
