use crate::config::ApiKey;
use crate::llm::{GenerationError, GenerationRequest, ResponseFormat, Result, Schema, TextGenerator};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const JSON_MIME_TYPE: &str = "application/json";

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Serialize, Debug)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize, Debug)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<&'a Schema>,
}

impl<'a> From<&'a GenerationRequest> for GenerateContentRequest<'a> {
    fn from(request: &'a GenerationRequest) -> Self {
        let generation_config = match &request.format {
            ResponseFormat::Text => None,
            ResponseFormat::Json => Some(GenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
                response_schema: None,
            }),
            ResponseFormat::JsonSchema(schema) => Some(GenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
                response_schema: Some(schema),
            }),
        };

        Self {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: &request.prompt }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: &request.system_instruction,
                }],
            },
            generation_config,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
struct CandidatePart {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

impl GenerateContentResponse {
    /// Text of the first candidate, skipping thought parts.
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .filter(|p| !p.thought)
            .filter_map(|p| p.text)
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize, Debug)]
struct ApiErrorDetail {
    message: String,
}

/// Pulls `error.message` out of a JSON error body, if there is one.
fn api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|b| b.error.message)
}

/// Client for `POST {base_url}/v1beta/models/{model}:generateContent`.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("mathprep/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GenerationError::Api {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip_all, fields(model = %request.model, structured = request.format.is_structured()))]
    async fn generate(
        &self,
        api_key: &ApiKey,
        request: &GenerationRequest,
    ) -> Result<Option<String>> {
        let body = GenerateContentRequest::from(request);

        let response = self
            .client
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Api {
                message: if e.is_connect() {
                    format!("Connection error - unable to reach the API: {}", e)
                } else {
                    format!("Network error: {}", e)
                },
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let detail = api_error_message(&error_text).unwrap_or(error_text);
            return Err(GenerationError::Api {
                message: match status.as_u16() {
                    401 | 403 => format!("Authentication failed ({}): {}", status, detail),
                    429 => format!("Rate limit exceeded ({}): {}", status, detail),
                    _ => format!("HTTP error {}: {}", status, detail),
                },
            });
        }

        let reply: GenerateContentResponse =
            response.json().await.map_err(|e| GenerationError::Api {
                message: format!("Failed to parse API response as JSON: {}", e),
            })?;

        let text = reply.text();
        debug!(chars = text.as_ref().map_or(0, |t| t.chars().count()), "Received reply");
        Ok(text)
    }
}
