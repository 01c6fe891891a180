//! Declared reply shapes for structured requests.

use crate::engine::types::Difficulty;
use crate::llm::Schema;

/// Fields every quiz question must carry.
pub const QUIZ_REQUIRED_FIELDS: [&str; 5] = [
    "question",
    "options",
    "correctAnswerIndex",
    "explanation",
    "difficulty",
];

/// Array of quiz questions, matching [`QuizQuestion`](crate::engine::types::QuizQuestion).
pub fn quiz_schema() -> Schema {
    Schema::array(
        Schema::object([
            ("question", Schema::string()),
            ("options", Schema::array(Schema::string())),
            ("correctAnswerIndex", Schema::integer()),
            ("explanation", Schema::string()),
            (
                "difficulty",
                Schema::string_enum(Difficulty::ALL.iter().map(Difficulty::label)),
            ),
        ])
        .require(QUIZ_REQUIRED_FIELDS),
    )
}
