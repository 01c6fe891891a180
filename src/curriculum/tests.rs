//! Curriculum lookup tests.

use super::*;

#[test]
fn every_topic_belongs_to_a_theme() {
    for topic in CURRICULUM {
        assert!(topic.theme().is_some(), "orphan topic {}", topic.id);
    }
}

#[test]
fn topic_ids_are_unique() {
    let mut ids: Vec<_> = CURRICULUM.iter().map(|t| t.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), CURRICULUM.len());
}

#[test]
fn default_topic_is_first_of_theme() {
    let first = default_topic("circle").unwrap();
    assert_eq!(first.id, "c1");
    assert!(default_topic("unknown-theme").is_none());
}

#[test]
fn topics_are_filtered_by_theme() {
    let names: Vec<_> = topics_for("quadrilateral").map(|t| t.id).collect();
    assert_eq!(names, vec!["q1", "q2", "q3", "q4"]);
}

#[test]
fn find_by_id_or_name() {
    assert_eq!(find_topic("a3").unwrap().name, "Плоштина на триаголник");
    assert_eq!(find_topic("  трапез ").unwrap().id, "q3");
    assert!(find_topic("Алгебра").is_none());
}

#[test]
fn grade_displays_as_roman() {
    assert_eq!(GradeLevel::VII.to_string(), "VII");
    assert_eq!(serde_json::to_string(&GradeLevel::VII).unwrap(), "\"VII\"");
}
