use crate::clock::{next_id, unix_millis};
use crate::storage::{self, Storage};
use crate::types::{AssessmentResult, FontSize, ThemeMode, UserProfile, UserSettings};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const GUEST_NAME: &str = "Guest User";

/// Field-level profile merge; unset fields are left alone.
#[derive(Clone, Debug, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub interests: Option<Vec<String>>,
}

/// Field-level settings merge; unset fields are left alone.
#[derive(Clone, Debug, Default)]
pub struct SettingsUpdate {
    pub theme: Option<ThemeMode>,
    pub notifications: Option<bool>,
    pub language: Option<String>,
    pub font_size: Option<FontSize>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct UserState {
    profile: Option<UserProfile>,
    is_onboarded: bool,
}

/// Owns the single local user profile and the onboarding flag.
///
/// Profile mutations are no-ops while no profile exists; `logout` clears the
/// profile but leaves the onboarding flag untouched.
pub struct UserStore {
    state: UserState,
    storage: Storage,
}

impl UserStore {
    pub fn new(storage: Storage) -> Self {
        let state = storage.load(storage::USER_STORE).unwrap_or_default();
        Self { state, storage }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.state.profile.as_ref()
    }

    pub fn is_onboarded(&self) -> bool {
        self.state.is_onboarded
    }

    /// Create the default Guest profile when none exists. Idempotent.
    pub fn initialize_profile(&mut self) {
        if self.state.profile.is_some() {
            return;
        }
        tracing::debug!("creating default guest profile");
        self.set_profile(UserProfile {
            id: next_id(),
            name: GUEST_NAME.to_string(),
            avatar: None,
            interests: Vec::new(),
            completed_quizzes: Vec::new(),
            saved_resources: Vec::new(),
            assessment_results: Vec::new(),
            settings: UserSettings::default(),
        });
    }

    pub fn set_profile(&mut self, profile: UserProfile) {
        self.state.profile = Some(profile);
        self.persist();
    }

    pub fn update_profile(&mut self, updates: ProfileUpdate) {
        self.with_profile(|profile| {
            if let Some(name) = updates.name {
                profile.name = name;
            }
            if let Some(avatar) = updates.avatar {
                profile.avatar = Some(avatar);
            }
            if let Some(interests) = updates.interests {
                profile.interests = interests;
            }
        });
    }

    pub fn update_settings(&mut self, updates: SettingsUpdate) {
        self.with_profile(|profile| {
            if let Some(theme) = updates.theme {
                profile.settings.theme = theme;
            }
            if let Some(notifications) = updates.notifications {
                profile.settings.notifications = notifications;
            }
            if let Some(language) = updates.language {
                profile.settings.language = language;
            }
            if let Some(font_size) = updates.font_size {
                profile.settings.font_size = font_size;
            }
        });
    }

    pub fn add_interest(&mut self, interest: &str) {
        self.with_profile(|profile| {
            if !profile.interests.iter().any(|i| i == interest) {
                profile.interests.push(interest.to_string());
            }
        });
    }

    pub fn remove_interest(&mut self, interest: &str) {
        self.with_profile(|profile| {
            profile.interests.retain(|i| i != interest);
        });
    }

    /// Profile-side saved list, independent of the resource store's
    /// bookmarks.
    pub fn save_resource(&mut self, resource_id: &str) {
        self.with_profile(|profile| {
            if !profile.saved_resources.iter().any(|id| id == resource_id) {
                profile.saved_resources.push(resource_id.to_string());
            }
        });
    }

    pub fn unsave_resource(&mut self, resource_id: &str) {
        self.with_profile(|profile| {
            profile.saved_resources.retain(|id| id != resource_id);
        });
    }

    /// Record quiz membership. Retakes do not duplicate the entry.
    pub fn complete_quiz(&mut self, quiz_id: &str) {
        self.with_profile(|profile| {
            if !profile.completed_quizzes.iter().any(|id| id == quiz_id) {
                profile.completed_quizzes.push(quiz_id.to_string());
            }
        });
    }

    /// Record an assessment outcome in the profile history; retaking the
    /// same assessment replaces the previous entry.
    pub fn record_assessment(
        &mut self,
        assessment_id: &str,
        score: u32,
        areas: BTreeMap<String, u32>,
    ) {
        self.with_profile(|profile| {
            let result = AssessmentResult {
                assessment_id: assessment_id.to_string(),
                date: unix_millis(),
                score,
                areas,
            };
            match profile
                .assessment_results
                .iter_mut()
                .find(|r| r.assessment_id == assessment_id)
            {
                Some(existing) => *existing = result,
                None => profile.assessment_results.push(result),
            }
        });
    }

    pub fn set_onboarded(&mut self, is_onboarded: bool) {
        self.state.is_onboarded = is_onboarded;
        self.persist();
    }

    /// Clear the profile only; the onboarding flag survives logout.
    pub fn logout(&mut self) {
        self.state.profile = None;
        self.persist();
    }

    fn with_profile(&mut self, apply: impl FnOnce(&mut UserProfile)) {
        if let Some(profile) = self.state.profile.as_mut() {
            apply(profile);
            self.persist();
        }
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(storage::USER_STORE, &self.state) {
            tracing::warn!(error = %err, "failed to persist user store");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> UserStore {
        UserStore::new(Storage::in_memory())
    }

    #[test]
    fn test_initialize_creates_guest_profile_once() {
        let mut store = store();
        store.initialize_profile();
        let first_id = store.profile().unwrap().id.clone();
        assert_eq!(store.profile().unwrap().name, GUEST_NAME);

        store.initialize_profile();
        assert_eq!(store.profile().unwrap().id, first_id);
    }

    #[test]
    fn test_guest_profile_has_default_settings() {
        let mut store = store();
        store.initialize_profile();
        let settings = &store.profile().unwrap().settings;
        assert_eq!(settings.theme, ThemeMode::Light);
        assert!(settings.notifications);
        assert_eq!(settings.language, "en");
        assert_eq!(settings.font_size, FontSize::Medium);
    }

    #[test]
    fn test_update_profile_merges_only_given_fields() {
        let mut store = store();
        store.initialize_profile();
        store.update_profile(ProfileUpdate {
            name: Some("Amina".to_string()),
            ..Default::default()
        });
        let profile = store.profile().unwrap();
        assert_eq!(profile.name, "Amina");
        assert_eq!(profile.avatar, None);
    }

    #[test]
    fn test_update_settings_merges_only_given_fields() {
        let mut store = store();
        store.initialize_profile();
        store.update_settings(SettingsUpdate {
            theme: Some(ThemeMode::Dark),
            ..Default::default()
        });
        let settings = &store.profile().unwrap().settings;
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert_eq!(settings.language, "en");
    }

    #[test]
    fn test_mutations_without_profile_are_noops() {
        let mut store = store();
        store.add_interest("ai ethics");
        store.complete_quiz("1");
        assert!(store.profile().is_none());
    }

    #[test]
    fn test_interest_membership() {
        let mut store = store();
        store.initialize_profile();
        store.add_interest("pay gap");
        store.add_interest("pay gap");
        assert_eq!(store.profile().unwrap().interests, ["pay gap".to_string()]);
        store.remove_interest("pay gap");
        assert!(store.profile().unwrap().interests.is_empty());
    }

    #[test]
    fn test_complete_quiz_records_id_exactly_once() {
        let mut store = store();
        store.initialize_profile();
        store.complete_quiz("1");
        store.complete_quiz("1");
        assert_eq!(
            store.profile().unwrap().completed_quizzes,
            ["1".to_string()]
        );
    }

    #[test]
    fn test_record_assessment_replaces_on_retake() {
        let mut store = store();
        store.initialize_profile();
        store.record_assessment("1", 40, BTreeMap::new());
        store.record_assessment("1", 73, BTreeMap::new());
        let results = &store.profile().unwrap().assessment_results;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 73);
    }

    #[test]
    fn test_logout_clears_profile_but_keeps_onboarding() {
        let mut store = store();
        store.initialize_profile();
        store.set_onboarded(true);
        store.logout();
        assert!(store.profile().is_none());
        assert!(store.is_onboarded());
    }

    #[test]
    fn test_state_survives_reload_through_shared_storage() {
        let storage = Storage::in_memory();
        let mut store = UserStore::new(storage.clone());
        store.initialize_profile();
        store.add_interest("mentorship");
        store.set_onboarded(true);

        let reloaded = UserStore::new(storage);
        assert!(reloaded.is_onboarded());
        assert_eq!(
            reloaded.profile().unwrap().interests,
            ["mentorship".to_string()]
        );
    }
}
