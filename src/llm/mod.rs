//! # Generation transport
//!
//! Everything between a finished prompt and the raw reply text:
//! - `schema`: the response-schema description sent with structured requests
//! - `gemini`: HTTP client for the hosted `generateContent` endpoint
//!
//! ## Architecture
//!
//! ```text
//! PromptBuilder → GenerationRequest → TextGenerator::generate → Option<String>
//! ```
//!
//! A single attempt is made per call. There are no retries, timeouts or backoff.

pub mod gemini;
pub mod schema;

pub use gemini::GeminiClient;
pub use schema::{Schema, SchemaType};

use crate::config::ApiKey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Не е пронајден API Key. Ве молиме додадете 'API_KEY' или 'VITE_API_KEY' во променливите на околината.")]
    MissingCredential,
    #[error("{message}")]
    Api { message: String },
    #[error("Нема содржина во одговорот од AI.")]
    EmptyResponse,
    #[error("Неуспешно читање на одговорот од AI (Invalid JSON). Ве молиме обидете се повторно.")]
    InvalidResponse { source: serde_json::Error },
    #[error("Не е избрана тема.")]
    EmptyTopic,
}

pub type Result<T> = std::result::Result<T, GenerationError>;

/// How the reply should be shaped.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseFormat {
    /// Free-form text, usually Markdown.
    Text,
    /// `application/json` without a declared schema.
    Json,
    /// `application/json` constrained to the given schema.
    JsonSchema(Schema),
}

impl ResponseFormat {
    pub fn is_structured(&self) -> bool {
        !matches!(self, ResponseFormat::Text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub system_instruction: String,
    pub prompt: String,
    pub format: ResponseFormat,
}

/// Sends one request and returns the reply text, or `None` if the service
/// answered without any.
///
/// The key is a parameter so that no request can be made without one.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, api_key: &ApiKey, request: &GenerationRequest)
        -> Result<Option<String>>;
}
