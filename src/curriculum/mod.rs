//! Static grade VII mathematics curriculum: themes and the topics under them.

use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(test)]
mod tests;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradeLevel {
    #[default]
    #[serde(rename = "VII")]
    VII,
}

impl GradeLevel {
    pub fn roman(&self) -> &'static str {
        match self {
            GradeLevel::VII => "VII",
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.roman())
    }
}

pub const SUBJECT: &str = "Математика";

/// Printed when a document has no theme to show.
pub const FALLBACK_THEME_TITLE: &str = "ГЕОМЕТРИЈА";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub title: &'static str,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurriculumTopic {
    pub id: &'static str,
    #[serde(rename = "themeId")]
    pub theme_id: &'static str,
    pub name: &'static str,
}

pub const THEMES: &[Theme] = &[
    Theme { id: "triangle", title: "Триаголник" },
    Theme { id: "quadrilateral", title: "Четириаголник" },
    Theme { id: "circle", title: "Круг и кружница" },
    Theme { id: "area", title: "Плоштина на многуаголници" },
];

pub const CURRICULUM: &[CurriculumTopic] = &[
    CurriculumTopic { id: "t1", theme_id: "triangle", name: "Видови триаголници" },
    CurriculumTopic { id: "t2", theme_id: "triangle", name: "Збир на внатрешни агли во триаголник" },
    CurriculumTopic { id: "t3", theme_id: "triangle", name: "Надворешни агли на триаголник" },
    CurriculumTopic { id: "t4", theme_id: "triangle", name: "Складност на триаголници" },
    CurriculumTopic { id: "t5", theme_id: "triangle", name: "Конструкција на триаголник" },
    CurriculumTopic { id: "q1", theme_id: "quadrilateral", name: "Видови четириаголници" },
    CurriculumTopic { id: "q2", theme_id: "quadrilateral", name: "Паралелограм и неговите својства" },
    CurriculumTopic { id: "q3", theme_id: "quadrilateral", name: "Трапез" },
    CurriculumTopic { id: "q4", theme_id: "quadrilateral", name: "Збир на агли во четириаголник" },
    CurriculumTopic { id: "c1", theme_id: "circle", name: "Кружница и круг" },
    CurriculumTopic { id: "c2", theme_id: "circle", name: "Периметар на круг и бројот π" },
    CurriculumTopic { id: "c3", theme_id: "circle", name: "Плоштина на круг" },
    CurriculumTopic { id: "c4", theme_id: "circle", name: "Централен и периферен агол" },
    CurriculumTopic { id: "a1", theme_id: "area", name: "Плоштина на правоаголник и квадрат" },
    CurriculumTopic { id: "a2", theme_id: "area", name: "Плоштина на паралелограм" },
    CurriculumTopic { id: "a3", theme_id: "area", name: "Плоштина на триаголник" },
    CurriculumTopic { id: "a4", theme_id: "area", name: "Плоштина на трапез" },
];

pub fn themes() -> &'static [Theme] {
    THEMES
}

pub fn theme(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.id == id)
}

pub fn topics_for(theme_id: &str) -> impl Iterator<Item = &'static CurriculumTopic> + '_ {
    CURRICULUM.iter().filter(move |t| t.theme_id == theme_id)
}

/// The topic selected when a theme is first chosen: its first entry.
pub fn default_topic(theme_id: &str) -> Option<&'static CurriculumTopic> {
    topics_for(theme_id).next()
}

/// Finds a topic by id, or by name ignoring case and surrounding whitespace.
pub fn find_topic(query: &str) -> Option<&'static CurriculumTopic> {
    let query = query.trim();
    CURRICULUM
        .iter()
        .find(|t| t.id == query)
        .or_else(|| {
            let lowered = query.to_lowercase();
            CURRICULUM.iter().find(|t| t.name.to_lowercase() == lowered)
        })
}

impl CurriculumTopic {
    pub fn theme(&self) -> Option<&'static Theme> {
        theme(self.theme_id)
    }
}
