//! Teaching-content generator for grade VII mathematics.
//!
//! A topic from [`curriculum`] goes through [`engine::ContentGenerator`], which
//! builds the prompt, calls the hosted model and normalizes the reply into the
//! records in [`engine::types`]. [`document`] turns those into print-ready
//! Markdown.

#[cfg(feature = "desktop")]
mod commands;
pub mod config;
pub mod curriculum;
pub mod document;
pub mod engine;
pub mod llm;
pub mod postprocessing;

pub use config::AppConfig;
pub use curriculum::GradeLevel;
pub use engine::types::{Difficulty, GeneratedLesson, GeneratedScenario, QuizQuestion};
pub use engine::ContentGenerator;
pub use llm::GenerationError;

/// Starts the desktop shell. The front end calls the commands in `commands.rs`.
#[cfg(feature = "desktop")]
pub fn run(config: AppConfig) -> anyhow::Result<()> {
    use crate::commands::*;
    use std::sync::Arc;

    let generator = ContentGenerator::from_config(Arc::new(config))?;

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(generator)
        .invoke_handler(tauri::generate_handler![
            list_themes,
            list_topics,
            generate_lesson,
            generate_scenario,
            generate_quiz,
            generate_worksheet,
            generate_canvas_animation
        ])
        .run(tauri::generate_context!())?;
    Ok(())
}
