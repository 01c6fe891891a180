//! Print-ready Markdown documents built from generated content.
//!
//! Every document opens with the same header table (subject, theme, topic,
//! teacher, school) and closes with date and signature lines.

use crate::curriculum::{GradeLevel, FALLBACK_THEME_TITLE, SUBJECT};
use crate::engine::types::{GeneratedLesson, GeneratedScenario, QuizQuestion};
use chrono::NaiveDate;
use std::fmt::Write;


const BLANK: &str = "__________________";
const OPTION_LETTERS: [char; 8] = ['А', 'Б', 'В', 'Г', 'Д', 'Ѓ', 'Е', 'Ж'];
pub const LESSON_DURATION: &str = "1 Училишен час (40 мин.)";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentHeader {
    pub grade: GradeLevel,
    pub theme: Option<String>,
    pub topic: String,
    pub teacher: Option<String>,
    pub school: Option<String>,
    pub generated_on: Option<NaiveDate>,
}

impl DocumentHeader {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Default::default()
        }
    }

    pub fn with_theme(mut self, theme: Option<impl Into<String>>) -> Self {
        self.theme = theme.map(Into::into);
        self
    }

    pub fn with_teacher(mut self, teacher: Option<impl Into<String>>) -> Self {
        self.teacher = non_blank(teacher.map(Into::into));
        self
    }

    pub fn with_school(mut self, school: Option<impl Into<String>>) -> Self {
        self.school = non_blank(school.map(Into::into));
        self
    }

    pub fn generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = Some(date);
        self
    }

    fn table(&self, rows: &[(&str, String)]) -> String {
        let mut out = String::from("| | |\n|---|---|\n");
        for (label, value) in rows {
            let _ = writeln!(out, "| **{}** | {} |", label, cell(value));
        }
        out.push('\n');
        out
    }

    fn common_rows(&self, topic_label: &'static str) -> Vec<(&'static str, String)> {
        vec![
            ("Предмет:", format!("{} за {} одделение", SUBJECT, self.grade)),
            (
                "Тема:",
                self.theme
                    .as_deref()
                    .unwrap_or(FALLBACK_THEME_TITLE)
                    .to_uppercase(),
            ),
            (topic_label, self.topic.clone()),
        ]
    }

    fn author_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Изготвил/-а:", self.teacher.clone().unwrap_or_else(|| BLANK.to_string())),
            ("ООУ:", self.school.clone().unwrap_or_else(|| BLANK.to_string())),
        ]
    }

    fn render(&self, topic_label: &'static str) -> String {
        let mut rows = self.common_rows(topic_label);
        rows.extend(self.author_rows());
        self.table(&rows)
    }

    fn footer(&self) -> String {
        let mut out = format!("\n---\n\nДатум: {}\n\nПотпис: {}\n", BLANK, BLANK);
        if let Some(date) = self.generated_on {
            let _ = write!(out, "\n_Генерирано: {}_\n", date.format("%d.%m.%Y"));
        }
        out
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Escapes text for a single Markdown table cell.
fn cell(text: &str) -> String {
    text.trim().replace('|', "\\|").replace('\n', "<br>")
}

fn option_label(index: usize) -> String {
    OPTION_LETTERS
        .get(index)
        .map(char::to_string)
        .unwrap_or_else(|| (index + 1).to_string())
}

pub fn render_lesson(header: &DocumentHeader, lesson: &GeneratedLesson) -> String {
    let mut out = header.render("Лекција:");
    let _ = writeln!(out, "# {}\n", lesson.title.trim());

    if !lesson.objectives.is_empty() {
        out.push_str("**Цели на часот:**\n\n");
        for (i, objective) in lesson.objectives.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, objective.trim());
        }
        out.push('\n');
    }

    out.push_str(lesson.content.trim());
    out.push('\n');
    out.push_str(&header.footer());
    out
}

pub fn render_scenario(header: &DocumentHeader, scenario: &GeneratedScenario) -> String {
    let topic = if scenario.topic.trim().is_empty() {
        header.topic.clone()
    } else {
        scenario.topic.trim().to_string()
    };

    let mut rows = header.common_rows("Наставна Единица:");
    rows[2].1 = topic;
    rows.push(("Време за реализација:", LESSON_DURATION.to_string()));
    rows.extend(header.author_rows());

    let mut out = header.table(&rows);
    let sections: [(&str, &str); 8] = [
        ("## Содржина (и поими)", scenario.content.as_str()),
        ("## Стандарди за оценување", scenario.standards.as_str()),
        ("## Сценарио за часот", ""),
        ("### Воведна активност (10 мин.)", scenario.intro_activity.as_str()),
        ("### Главни активности (20 мин.)", scenario.main_activity.as_str()),
        ("### Завршна активност (10 мин.)", scenario.final_activity.as_str()),
        ("## Средства", scenario.resources.as_str()),
        ("## Следење на напредокот", scenario.assessment.as_str()),
    ];
    for (heading, body) in sections {
        let _ = writeln!(out, "{}\n", heading);
        if !body.trim().is_empty() {
            let _ = writeln!(out, "{}\n", body.trim());
        }
    }

    out.push_str(&header.footer());
    out
}

/// Questions with lettered options, followed by an answer key. An answer
/// index outside the options is printed as-is.
pub fn render_quiz(header: &DocumentHeader, questions: &[QuizQuestion]) -> String {
    let mut out = header.render("Лекција:");
    out.push_str("# Квиз\n\n");

    for (i, question) in questions.iter().enumerate() {
        let _ = writeln!(
            out,
            "### {}. {}\n\n_Тежина: {}_\n",
            i + 1,
            question.question.trim(),
            question.difficulty
        );
        for (j, option) in question.options.iter().enumerate() {
            let _ = writeln!(out, "- {}) {}", option_label(j), option.trim());
        }
        out.push('\n');
    }

    out.push_str("## Клуч за одговори\n\n");
    for (i, question) in questions.iter().enumerate() {
        let answer = match (question.correct_option(), usize::try_from(question.correct_answer_index)) {
            (Some(option), Ok(index)) => format!("{}) {}", option_label(index), option.trim()),
            _ => format!("? (индекс {})", question.correct_answer_index),
        };
        let _ = writeln!(out, "{}. {}. {}", i + 1, answer, question.explanation.trim());
    }

    out.push_str(&header.footer());
    out
}

pub fn render_worksheet(header: &DocumentHeader, worksheet: &str) -> String {
    let mut out = header.render("Лекција:");
    out.push_str("# РАБОТЕН ЛИСТ\n\n");
    let _ = writeln!(out, "Име и презиме: {}\n", BLANK);
    out.push_str(worksheet.trim());
    out.push('\n');
    out.push_str(&header.footer());
    out
}
