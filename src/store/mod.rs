//! Persisted application stores.
//!
//! Each store exclusively owns one slice of state (chat sessions, resource
//! bookmarks/results, user profile) and rewrites its named blob after every
//! mutation. Instances are constructed once at startup and passed by
//! reference to consumers; there are no module-level singletons.

pub mod chat;
pub mod resource;
pub mod user;

pub use chat::ChatStore;
pub use resource::{AssessmentOutcome, QuizResult, ResourceStore};
pub use user::{ProfileUpdate, SettingsUpdate, UserStore};
