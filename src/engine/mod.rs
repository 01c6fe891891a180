//! Public façade for the generation layer: one async function per document type.

pub mod output;
pub mod types;

use crate::config::{ApiKey, AppConfig};
use crate::curriculum::GradeLevel;
use crate::llm::{GeminiClient, GenerationError, GenerationRequest, Result, TextGenerator};
use crate::postprocessing::{decode_structured, normalize_text, strip_script_fences};
use output::PromptBuilder;
use std::sync::Arc;
use tracing::{error, info, instrument};
use types::{GeneratedLesson, GeneratedScenario, QuizQuestion};


/// Request builder plus transport, sharing one resolved [`AppConfig`].
pub struct ContentGenerator<G = GeminiClient> {
    config: Arc<AppConfig>,
    transport: G,
}

impl ContentGenerator<GeminiClient> {
    pub fn from_config(config: Arc<AppConfig>) -> Result<Self> {
        let transport = GeminiClient::new(config.api_url.clone())?;
        Ok(Self::new(config, transport))
    }
}

impl<G: TextGenerator> ContentGenerator<G> {
    pub fn new(config: Arc<AppConfig>, transport: G) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn transport(&self) -> &G {
        &self.transport
    }

    fn credential(&self) -> Result<&ApiKey> {
        self.config.api_key.as_ref().ok_or_else(|| {
            error!("API_KEY is missing. Ensure it is set in the environment variables.");
            GenerationError::MissingCredential
        })
    }

    fn builder(&self) -> PromptBuilder {
        PromptBuilder::new(&self.config.model)
    }

    /// Checks the credential, builds the request and sends it. Nothing goes
    /// out if either step fails.
    async fn submit<F>(&self, build: F) -> Result<Option<String>>
    where
        F: FnOnce(&PromptBuilder) -> Result<GenerationRequest>,
    {
        let key = self.credential()?;
        let request = build(&self.builder())?;
        self.transport.generate(key, &request).await
    }

    #[instrument(skip(self))]
    pub async fn generate_lesson(&self, topic: &str, grade: GradeLevel) -> Result<GeneratedLesson> {
        let outcome = async {
            let reply = self.submit(|b| b.lesson(topic, grade)).await?;
            decode_structured::<GeneratedLesson>(reply.as_deref())
        }
        .await;

        match outcome {
            Ok(decoded) => {
                info!(method = ?decoded.method, objectives = decoded.value.objectives.len(), "Lesson generated");
                Ok(decoded.value)
            }
            Err(e) => {
                error!(error = %e, "Lesson generation error");
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn generate_scenario(&self, topic: &str) -> Result<GeneratedScenario> {
        let outcome = async {
            let reply = self.submit(|b| b.scenario(topic)).await?;
            decode_structured::<GeneratedScenario>(reply.as_deref())
        }
        .await;

        match outcome {
            Ok(decoded) => {
                info!(method = ?decoded.method, "Scenario generated");
                Ok(decoded.value)
            }
            Err(e) => {
                error!(error = %e, "Scenario generation error");
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn generate_quiz(&self, topic: &str, grade: GradeLevel) -> Result<Vec<QuizQuestion>> {
        let outcome = async {
            let reply = self.submit(|b| b.quiz(topic, grade)).await?;
            decode_structured::<Vec<QuizQuestion>>(reply.as_deref())
        }
        .await;

        match outcome {
            Ok(decoded) => {
                info!(method = ?decoded.method, questions = decoded.value.len(), "Quiz generated");
                Ok(decoded.value)
            }
            Err(e) => {
                error!(error = %e, "Quiz generation error");
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn generate_worksheet(&self, topic: &str) -> Result<String> {
        let outcome = async {
            let reply = self.submit(|b| b.worksheet(topic)).await?;
            normalize_text(reply.as_deref())
        }
        .await;

        if let Err(e) = &outcome {
            error!(error = %e, "Worksheet generation error");
        }
        outcome
    }

    /// Body of `draw(ctx, width, height, frame)`. An empty reply gives an
    /// empty string.
    #[instrument(skip(self))]
    pub async fn generate_canvas_animation(&self, description: &str) -> Result<String> {
        let outcome = self.submit(|b| b.animation(description)).await;

        match outcome {
            Ok(reply) => Ok(strip_script_fences(reply.as_deref().unwrap_or_default())),
            Err(e) => {
                error!(error = %e, "Canvas generation error");
                Err(e)
            }
        }
    }
}
