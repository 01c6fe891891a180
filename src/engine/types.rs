//! Records produced by one generation request. Nothing here is persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLesson {
    pub title: String,
    /// Three by convention; not enforced.
    pub objectives: Vec<String>,
    /// Markdown with Unicode math.
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedScenario {
    pub topic: String,
    pub standards: String,
    pub content: String,
    pub intro_activity: String,
    pub main_activity: String,
    pub final_activity: String,
    pub resources: String,
    pub assessment: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    #[serde(rename = "Лесно")]
    Easy,
    #[serde(rename = "Средно")]
    Medium,
    #[serde(rename = "Тешко")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The literal value used on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Лесно",
            Difficulty::Medium => "Средно",
            Difficulty::Hard => "Тешко",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Expected to index into `options`, but the generator is trusted and
    /// nothing checks it. Signed so that any integer decodes.
    pub correct_answer_index: i64,
    pub explanation: String,
    pub difficulty: Difficulty,
}

impl QuizQuestion {
    /// The correct option, or `None` when the index is out of range.
    pub fn correct_option(&self) -> Option<&str> {
        usize::try_from(self.correct_answer_index)
            .ok()
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }
}
