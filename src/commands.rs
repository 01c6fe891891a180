// Learn more about Tauri commands at https://tauri.app/develop/calling-rust/

use crate::curriculum::{self, CurriculumTopic, GradeLevel, Theme};
use crate::engine::types::{GeneratedLesson, GeneratedScenario, QuizQuestion};
use crate::engine::ContentGenerator;
use tauri::{command, State};

/* ---------- 1.  CURRICULUM ---------- */

#[command]
pub fn list_themes() -> Vec<Theme> {
    curriculum::themes().to_vec()
}

#[command]
pub fn list_topics(theme_id: String) -> Vec<CurriculumTopic> {
    curriculum::topics_for(&theme_id).copied().collect()
}

/* ---------- 2.  GENERATION ---------- */

// Errors go back to the front end as display text.

#[command]
pub async fn generate_lesson(
    topic: String,
    generator: State<'_, ContentGenerator>,
) -> Result<GeneratedLesson, String> {
    generator
        .generate_lesson(&topic, GradeLevel::VII)
        .await
        .map_err(|e| e.to_string())
}

#[command]
pub async fn generate_scenario(
    topic: String,
    generator: State<'_, ContentGenerator>,
) -> Result<GeneratedScenario, String> {
    generator
        .generate_scenario(&topic)
        .await
        .map_err(|e| e.to_string())
}

#[command]
pub async fn generate_quiz(
    topic: String,
    generator: State<'_, ContentGenerator>,
) -> Result<Vec<QuizQuestion>, String> {
    generator
        .generate_quiz(&topic, GradeLevel::VII)
        .await
        .map_err(|e| e.to_string())
}

#[command]
pub async fn generate_worksheet(
    topic: String,
    generator: State<'_, ContentGenerator>,
) -> Result<String, String> {
    generator
        .generate_worksheet(&topic)
        .await
        .map_err(|e| e.to_string())
}

#[command]
pub async fn generate_canvas_animation(
    description: String,
    generator: State<'_, ContentGenerator>,
) -> Result<String, String> {
    generator
        .generate_canvas_animation(&description)
        .await
        .map_err(|e| e.to_string())
}
