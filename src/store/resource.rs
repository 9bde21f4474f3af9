use crate::catalog;
use crate::clock::unix_millis;
use crate::storage::{self, Storage};
use crate::types::{Assessment, Quiz, Resource};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Persisted quiz outcome, last write wins per quiz id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    /// Percentage 0-100.
    pub score: u32,
    /// Unix milliseconds.
    pub date: i64,
}

/// Persisted assessment outcome, last write wins per assessment id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub score: u32,
    pub date: i64,
    pub areas: BTreeMap<String, u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ResourceState {
    bookmarks: Vec<String>,
    quiz_results: BTreeMap<String, QuizResult>,
    assessment_results: BTreeMap<String, AssessmentOutcome>,
}

/// Bookmarks and quiz/assessment results layered over the static catalog.
///
/// The catalog itself is load-time configuration and is not serialized into
/// the blob; only the mutable layer persists.
pub struct ResourceStore {
    state: ResourceState,
    storage: Storage,
}

impl ResourceStore {
    pub fn new(storage: Storage) -> Self {
        let state = storage.load(storage::RESOURCE_STORE).unwrap_or_default();
        Self { state, storage }
    }

    pub fn resources(&self) -> &'static [Resource] {
        catalog::resources()
    }

    pub fn quizzes(&self) -> &'static [Quiz] {
        catalog::quizzes()
    }

    pub fn assessments(&self) -> &'static [Assessment] {
        catalog::assessments()
    }

    pub fn bookmarks(&self) -> &[String] {
        &self.state.bookmarks
    }

    pub fn is_bookmarked(&self, resource_id: &str) -> bool {
        self.state.bookmarks.iter().any(|id| id == resource_id)
    }

    /// Add a bookmark. Duplicate adds are no-ops (set semantics).
    pub fn add_bookmark(&mut self, resource_id: &str) {
        if self.is_bookmarked(resource_id) {
            return;
        }
        self.state.bookmarks.push(resource_id.to_string());
        self.persist();
    }

    pub fn remove_bookmark(&mut self, resource_id: &str) {
        self.state.bookmarks.retain(|id| id != resource_id);
        self.persist();
    }

    /// Bookmarked catalog entries, in catalog order (not bookmark insertion
    /// order). Bookmarks pointing outside the catalog contribute nothing.
    pub fn get_bookmarked_resources(&self) -> Vec<&'static Resource> {
        catalog::resources()
            .iter()
            .filter(|resource| self.is_bookmarked(&resource.id))
            .collect()
    }

    pub fn quiz_result(&self, quiz_id: &str) -> Option<&QuizResult> {
        self.state.quiz_results.get(quiz_id)
    }

    pub fn assessment_result(&self, assessment_id: &str) -> Option<&AssessmentOutcome> {
        self.state.assessment_results.get(assessment_id)
    }

    /// Upsert a quiz score; retakes overwrite.
    pub fn save_quiz_result(&mut self, quiz_id: &str, score: u32) {
        self.state.quiz_results.insert(
            quiz_id.to_string(),
            QuizResult {
                score,
                date: unix_millis(),
            },
        );
        self.persist();
    }

    /// Upsert an assessment score with its area breakdown; retakes overwrite.
    pub fn save_assessment_result(
        &mut self,
        assessment_id: &str,
        score: u32,
        areas: BTreeMap<String, u32>,
    ) {
        self.state.assessment_results.insert(
            assessment_id.to_string(),
            AssessmentOutcome {
                score,
                date: unix_millis(),
                areas,
            },
        );
        self.persist();
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(storage::RESOURCE_STORE, &self.state) {
            tracing::warn!(error = %err, "failed to persist resource store");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ResourceStore {
        ResourceStore::new(Storage::in_memory())
    }

    #[test]
    fn test_bookmarked_resources_follow_catalog_order() {
        let mut store = store();
        store.add_bookmark("15");
        store.add_bookmark("2");
        let bookmarked = store.get_bookmarked_resources();
        let ids: Vec<&str> = bookmarked.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "15"]);
    }

    #[test]
    fn test_duplicate_bookmark_is_a_noop() {
        let mut store = store();
        store.add_bookmark("4");
        store.add_bookmark("4");
        assert_eq!(store.bookmarks().len(), 1);
        assert_eq!(store.get_bookmarked_resources().len(), 1);
    }

    #[test]
    fn test_unknown_bookmark_contributes_nothing() {
        let mut store = store();
        store.add_bookmark("999");
        assert!(store.get_bookmarked_resources().is_empty());
        // The raw bookmark list still records it.
        assert_eq!(store.bookmarks(), ["999".to_string()]);
    }

    #[test]
    fn test_remove_bookmark() {
        let mut store = store();
        store.add_bookmark("7");
        store.remove_bookmark("7");
        assert!(store.bookmarks().is_empty());
    }

    #[test]
    fn test_quiz_retake_overwrites_score() {
        let mut store = store();
        store.save_quiz_result("1", 33);
        store.save_quiz_result("1", 67);
        assert_eq!(store.quiz_result("1").unwrap().score, 67);
        assert_eq!(store.quiz_result("2"), None);
    }

    #[test]
    fn test_assessment_result_upsert_keeps_areas() {
        let mut store = store();
        let areas: BTreeMap<String, u32> =
            [("policy".to_string(), 3), ("worklife".to_string(), 1)].into();
        store.save_assessment_result("1", 60, areas.clone());
        let result = store.assessment_result("1").unwrap();
        assert_eq!(result.score, 60);
        assert_eq!(result.areas, areas);
    }

    #[test]
    fn test_state_survives_reload_through_shared_storage() {
        let storage = Storage::in_memory();
        let mut store = ResourceStore::new(storage.clone());
        store.add_bookmark("3");
        store.save_quiz_result("1", 100);

        let reloaded = ResourceStore::new(storage);
        assert!(reloaded.is_bookmarked("3"));
        assert_eq!(reloaded.quiz_result("1").unwrap().score, 100);
    }
}
