use crate::clock::{next_id, unix_millis};
use crate::storage::{self, Storage};
use crate::types::{ChatSession, Message, MessageContent, Role};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const DEFAULT_TITLE: &str = "New Conversation";
const TITLE_MAX_CHARS: usize = 30;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ChatState {
    sessions: Vec<ChatSession>,
    current_session_id: Option<String>,
    is_loading: bool,
    error: Option<String>,
    /// Messages the user has already seen, per session.
    message_history: HashMap<String, usize>,
}

/// Owns chat sessions and their message lists.
///
/// The session list is newest-first (sessions are prepended on create);
/// messages within a session are append-ordered.
pub struct ChatStore {
    state: ChatState,
    storage: Storage,
}

impl ChatStore {
    /// Hydrate from the persisted blob, or start empty.
    pub fn new(storage: Storage) -> Self {
        let state = storage.load(storage::CHAT_STORE).unwrap_or_default();
        Self { state, storage }
    }

    pub fn sessions(&self) -> &[ChatSession] {
        &self.state.sessions
    }

    pub fn current_session_id(&self) -> Option<&str> {
        self.state.current_session_id.as_deref()
    }

    pub fn current_session(&self) -> Option<&ChatSession> {
        let id = self.state.current_session_id.as_deref()?;
        self.session(id)
    }

    pub fn session(&self, session_id: &str) -> Option<&ChatSession> {
        self.state.sessions.iter().find(|s| s.id == session_id)
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    /// How many messages of a session the user has already seen.
    pub fn seen_count(&self, session_id: &str) -> usize {
        self.state
            .message_history
            .get(session_id)
            .copied()
            .unwrap_or(0)
    }

    /// Create an empty session, prepend it, and make it current.
    pub fn create_session(&mut self) -> String {
        let now = unix_millis();
        let session = ChatSession {
            id: next_id(),
            title: DEFAULT_TITLE.to_string(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
            topics: None,
            suggested_resources: None,
            summary: None,
        };
        let id = session.id.clone();
        self.state.sessions.insert(0, session);
        self.state.current_session_id = Some(id.clone());
        self.persist();
        id
    }

    pub fn set_current_session(&mut self, session_id: &str) {
        self.state.current_session_id = Some(session_id.to_string());
        self.persist();
    }

    pub fn rename_session(&mut self, session_id: &str, title: impl Into<String>) {
        if let Some(session) = self.session_mut(session_id) {
            session.title = title.into();
            session.updated_at = unix_millis();
            self.persist();
        }
    }

    /// Remove a session. If it was current, the newest remaining session
    /// becomes current (or none when the list is empty afterwards).
    pub fn delete_session(&mut self, session_id: &str) {
        self.state.sessions.retain(|s| s.id != session_id);
        if self.state.current_session_id.as_deref() == Some(session_id) {
            self.state.current_session_id = self.state.sessions.first().map(|s| s.id.clone());
        }
        self.state.message_history.remove(session_id);
        self.persist();
    }

    /// Append a message to the current session, creating one when none is
    /// active. The first user message with plain-text content names the
    /// session. Returns the new message id.
    pub fn add_message(&mut self, role: Role, content: MessageContent) -> String {
        if self.state.current_session_id.is_none() {
            self.create_session();
        }

        let message = Message {
            id: next_id(),
            role,
            content,
            timestamp: unix_millis(),
            liked: None,
            disliked: None,
            read: None,
            feedback: None,
        };
        let message_id = message.id.clone();

        let current_id = self.state.current_session_id.clone();
        if let Some(session) = current_id.and_then(|id| {
            self.state
                .sessions
                .iter_mut()
                .find(move |s| s.id == id)
        }) {
            if session.messages.is_empty() && message.role == Role::User {
                if let MessageContent::Text(text) = &message.content {
                    session.title = derive_title(text);
                }
            }
            session.messages.push(message);
            session.updated_at = unix_millis();
        }

        self.persist();
        message_id
    }

    /// Empty a session's message list and reset its seen counter. Title and
    /// id are untouched.
    pub fn clear_messages(&mut self, session_id: &str) {
        if let Some(session) = self.session_mut(session_id) {
            session.messages.clear();
            session.updated_at = unix_millis();
        }
        self.state
            .message_history
            .insert(session_id.to_string(), 0);
        self.persist();
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.state.is_loading = is_loading;
        self.persist();
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.state.error = error;
        self.persist();
    }

    pub fn update_message_history(&mut self, session_id: &str, count: usize) {
        self.state
            .message_history
            .insert(session_id.to_string(), count);
        self.persist();
    }

    pub fn mark_message_as_read(&mut self, message_id: &str) {
        self.update_message(message_id, |message| message.read = Some(true));
    }

    pub fn like_message(&mut self, message_id: &str) {
        self.update_message(message_id, |message| {
            message.liked = Some(true);
            message.disliked = Some(false);
        });
    }

    pub fn dislike_message(&mut self, message_id: &str) {
        self.update_message(message_id, |message| {
            message.liked = Some(false);
            message.disliked = Some(true);
        });
    }

    /// Record detected topics and suggested resource ids on a session.
    pub fn set_session_topics(
        &mut self,
        session_id: &str,
        topics: Vec<String>,
        suggested_resources: Vec<String>,
    ) {
        if let Some(session) = self.session_mut(session_id) {
            session.topics = Some(topics);
            session.suggested_resources = Some(suggested_resources);
            self.persist();
        }
    }

    fn session_mut(&mut self, session_id: &str) -> Option<&mut ChatSession> {
        self.state.sessions.iter_mut().find(|s| s.id == session_id)
    }

    fn update_message(&mut self, message_id: &str, apply: impl FnOnce(&mut Message)) {
        let found = self
            .state
            .sessions
            .iter_mut()
            .flat_map(|session| session.messages.iter_mut())
            .find(|message| message.id == message_id);
        if let Some(message) = found {
            apply(message);
            self.persist();
        }
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(storage::CHAT_STORE, &self.state) {
            tracing::warn!(error = %err, "failed to persist chat store");
        }
    }
}

fn derive_title(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() > TITLE_MAX_CHARS {
        let head: String = trimmed.chars().take(TITLE_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ChatStore {
        ChatStore::new(Storage::in_memory())
    }

    #[test]
    fn test_create_session_becomes_current_and_newest_first() {
        let mut store = store();
        let first = store.create_session();
        let second = store.create_session();
        assert_eq!(store.current_session_id(), Some(second.as_str()));
        assert_eq!(store.sessions()[0].id, second);
        assert_eq!(store.sessions()[1].id, first);
    }

    #[test]
    fn test_add_message_creates_session_when_none_active() {
        let mut store = store();
        store.add_message(Role::User, MessageContent::text("hello there"));
        assert_eq!(store.sessions().len(), 1);
        assert_eq!(store.current_session().unwrap().messages.len(), 1);
    }

    #[test]
    fn test_first_user_message_names_the_session() {
        let mut store = store();
        store.add_message(Role::User, MessageContent::text("  How do I run a pay audit?  "));
        assert_eq!(
            store.current_session().unwrap().title,
            "How do I run a pay audit?"
        );
    }

    #[test]
    fn test_long_titles_truncate_to_30_chars() {
        let mut store = store();
        let text = "What are the best practices for inclusive recruitment in engineering?";
        store.add_message(Role::User, MessageContent::text(text));
        let title = store.current_session().unwrap().title.clone();
        assert_eq!(title, format!("{}...", &text[..30]));
        assert_eq!(title.chars().count(), 33);
    }

    #[test]
    fn test_second_message_does_not_retitle() {
        let mut store = store();
        store.add_message(Role::User, MessageContent::text("first question"));
        store.add_message(Role::User, MessageContent::text("second question"));
        assert_eq!(store.current_session().unwrap().title, "first question");
    }

    #[test]
    fn test_rich_first_message_keeps_default_title() {
        let mut store = store();
        store.add_message(
            Role::User,
            MessageContent::Parts(vec![crate::types::ContentPart::Text {
                text: "look at this chart".to_string(),
            }]),
        );
        assert_eq!(store.current_session().unwrap().title, DEFAULT_TITLE);
    }

    #[test]
    fn test_delete_current_session_reassigns_to_newest_remaining() {
        let mut store = store();
        let older = store.create_session();
        let newer = store.create_session();
        store.delete_session(&newer);
        assert_eq!(store.current_session_id(), Some(older.as_str()));
    }

    #[test]
    fn test_delete_only_session_clears_current() {
        let mut store = store();
        let only = store.create_session();
        store.delete_session(&only);
        assert_eq!(store.current_session_id(), None);
        assert!(store.sessions().is_empty());
    }

    #[test]
    fn test_delete_non_current_session_keeps_current() {
        let mut store = store();
        let older = store.create_session();
        let newer = store.create_session();
        store.delete_session(&older);
        assert_eq!(store.current_session_id(), Some(newer.as_str()));
    }

    #[test]
    fn test_clear_messages_resets_seen_counter_and_keeps_title() {
        let mut store = store();
        store.add_message(Role::User, MessageContent::text("hello"));
        let id = store.current_session_id().unwrap().to_string();
        store.update_message_history(&id, 1);

        store.clear_messages(&id);
        let session = store.session(&id).unwrap();
        assert!(session.messages.is_empty());
        assert_eq!(session.title, "hello");
        assert_eq!(store.seen_count(&id), 0);
    }

    #[test]
    fn test_delete_session_purges_seen_counter() {
        let mut store = store();
        let id = store.create_session();
        store.update_message_history(&id, 4);
        store.delete_session(&id);
        assert_eq!(store.seen_count(&id), 0);
    }

    #[test]
    fn test_like_and_dislike_are_mutually_exclusive() {
        let mut store = store();
        let id = store.add_message(Role::Assistant, MessageContent::text("response"));

        store.like_message(&id);
        let message = &store.current_session().unwrap().messages[0];
        assert_eq!(message.liked, Some(true));
        assert_eq!(message.disliked, Some(false));

        store.dislike_message(&id);
        let message = &store.current_session().unwrap().messages[0];
        assert_eq!(message.liked, Some(false));
        assert_eq!(message.disliked, Some(true));
    }

    #[test]
    fn test_mark_message_as_read_sets_flag() {
        let mut store = store();
        let id = store.add_message(Role::Assistant, MessageContent::text("response"));
        store.mark_message_as_read(&id);
        assert_eq!(
            store.current_session().unwrap().messages[0].read,
            Some(true)
        );
    }

    #[test]
    fn test_state_survives_reload_through_shared_storage() {
        let storage = Storage::in_memory();
        let mut store = ChatStore::new(storage.clone());
        store.add_message(Role::User, MessageContent::text("persist me"));
        let session_id = store.current_session_id().unwrap().to_string();

        let reloaded = ChatStore::new(storage);
        assert_eq!(reloaded.current_session_id(), Some(session_id.as_str()));
        assert_eq!(reloaded.current_session().unwrap().messages.len(), 1);
    }
}
