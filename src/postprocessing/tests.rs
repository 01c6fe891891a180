//! Unit tests for fence stripping, the repair pass and structured decoding.

use super::*;
use crate::engine::types::{Difficulty, GeneratedLesson, GeneratedScenario, QuizQuestion};
use crate::llm::GenerationError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::cell::Cell;

const SAMPLES: &[&str] = &[
    "",
    "plain text",
    "```json\n{\"a\":1}\n```",
    "```\nhello\n```",
    "  ```json```json``` ",
    "`````",
    "``````json",
    "``x``",
    "# Наслов\n\n**bold** and `code`",
    "a ``` b ```json c",
];

#[test]
fn clean_works() {
    assert_eq!(strip_code_fences("```\nhello\n```"), "hello");
    assert_eq!(strip_code_fences("```json\n[1, 2]\n```"), "[1, 2]");
}

#[test]
fn stripping_is_idempotent() {
    for sample in SAMPLES {
        let once = strip_code_fences(sample);
        assert_eq!(strip_code_fences(&once), once, "input {:?}", sample);
    }
}

#[test]
fn stripping_leaves_unfenced_text_alone() {
    let text = "# Работен лист\n\n1. Пресметај P = a·b";
    assert_eq!(strip_code_fences(text), text);
}

#[test]
fn repair_is_identity_without_backslashes() {
    for sample in SAMPLES {
        assert_eq!(repair_backslashes(sample), *sample);
    }
}

#[test]
fn repair_rewrites_every_backslash() {
    assert_eq!(repair_backslashes(r"\frac{1}{2} \pi"), "/frac{1}{2} /pi");
}

#[test]
fn fenced_lesson_decodes() {
    let reply = "```json\n{\"title\":\"T\",\"objectives\":[\"a\",\"b\",\"c\"],\"content\":\"x\"}\n```";
    let decoded = decode_structured::<GeneratedLesson>(Some(reply)).unwrap();
    assert_eq!(decoded.method, DecodeMethod::Strict);
    assert_eq!(
        decoded.value,
        GeneratedLesson {
            title: "T".into(),
            objectives: vec!["a".into(), "b".into(), "c".into()],
            content: "x".into(),
        }
    );
}

#[test]
fn latex_reply_is_repaired() {
    let reply = r#"{"title":"Круг","objectives":[],"content":"P = r² \pi"}"#;
    let decoded = decode_structured::<GeneratedLesson>(Some(reply)).unwrap();
    assert_eq!(decoded.method, DecodeMethod::Repaired);
    assert_eq!(decoded.value.content, "P = r² /pi");
}

#[test]
fn repair_corrupts_valid_escapes() {
    // `\n` is legal JSON, but the stray `\s` forces the repair, which turns
    // the newline escape into a literal "/n".
    let reply = r#"{"title":"T","objectives":[],"content":"a\nb \sqrt"}"#;
    let decoded = decode_structured::<GeneratedLesson>(Some(reply)).unwrap();
    assert_eq!(decoded.value.content, "a/nb /sqrt");
}

#[test]
fn repair_breaks_escaped_quotes() {
    let reply = r#"{"title":"T","objectives":[],"content":"say \"hi\" \pi"}"#;
    let err = decode_structured::<GeneratedLesson>(Some(reply)).unwrap_err();
    assert!(matches!(err, GenerationError::InvalidResponse { .. }));
}

#[test]
fn out_of_range_answer_index_is_kept() {
    let reply = r#"[{"question":"Колку е 2+2?","options":["3","4"],"correctAnswerIndex":7,"explanation":"2+2=4","difficulty":"Лесно"}]"#;
    let questions = decode_structured::<Vec<QuizQuestion>>(Some(reply))
        .unwrap()
        .value;
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].correct_answer_index, 7);
    assert_eq!(questions[0].difficulty, Difficulty::Easy);
    assert_eq!(questions[0].correct_option(), None);
}

#[test]
fn negative_answer_index_is_kept() {
    let reply = r#"[{"question":"Агол?","options":["30°","60°"],"correctAnswerIndex":-1,"explanation":"-","difficulty":"Средно"}]"#;
    let decoded = decode_structured::<Vec<QuizQuestion>>(Some(reply)).unwrap();
    assert_eq!(decoded.method, DecodeMethod::Strict);
    assert_eq!(decoded.value[0].correct_answer_index, -1);
    assert_eq!(decoded.value[0].correct_option(), None);
}

#[test]
fn unknown_difficulty_rejects_the_quiz() {
    let reply = r#"[{"question":"Агол?","options":["30°","60°"],"correctAnswerIndex":0,"explanation":"-","difficulty":"Easy"}]"#;
    let err = decode_structured::<Vec<QuizQuestion>>(Some(reply)).unwrap_err();
    assert!(matches!(err, GenerationError::InvalidResponse { .. }));
}

#[test]
fn scenario_uses_camel_case_fields() {
    let reply = r#"{"topic":"t","standards":"s","content":"c","introActivity":"i","mainActivity":"m","finalActivity":"f","resources":"r","assessment":"a"}"#;
    let scenario = decode_structured::<GeneratedScenario>(Some(reply))
        .unwrap()
        .value;
    assert_eq!(scenario.intro_activity, "i");
    assert_eq!(scenario.final_activity, "f");
}

#[test]
fn empty_reply_is_an_error() {
    for reply in [None, Some(""), Some("  \n ")] {
        assert!(matches!(
            decode_structured::<GeneratedLesson>(reply),
            Err(GenerationError::EmptyResponse)
        ));
        assert!(matches!(normalize_text(reply), Err(GenerationError::EmptyResponse)));
    }
}

#[test]
fn normalize_text_strips_fences_only() {
    let reply = "```\n# Работен лист\n\n1. Задача\n```";
    assert_eq!(normalize_text(Some(reply)).unwrap(), "# Работен лист\n\n1. Задача");
}

#[test]
fn script_fences_are_removed() {
    let reply = "```javascript\nctx.clearRect(0, 0, width, height);\n```";
    assert_eq!(
        strip_script_fences(reply),
        "\nctx.clearRect(0, 0, width, height);\n"
    );
    assert_eq!(strip_script_fences("```js\nx()```"), "\nx()");
}

thread_local! {
    static ATTEMPTS: Cell<usize> = Cell::new(0);
}

/// Counts decode attempts and never succeeds.
#[derive(Debug)]
struct NeverDecodes;

impl<'de> Deserialize<'de> for NeverDecodes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ATTEMPTS.with(|a| a.set(a.get() + 1));
        serde_json::Value::deserialize(deserializer)?;
        Err(D::Error::custom("rejected"))
    }
}

#[test]
fn invalid_reply_gets_exactly_one_retry() {
    ATTEMPTS.with(|a| a.set(0));
    let err = decode_structured::<NeverDecodes>(Some(r#"{"title": \x"#)).unwrap_err();
    assert!(matches!(err, GenerationError::InvalidResponse { .. }));
    assert_eq!(ATTEMPTS.with(Cell::get), 2);
}
