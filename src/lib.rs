//! State and business logic for an educational app on gender equality in
//! digital spaces.
//!
//! The crate owns everything below the screen layer: the static resource
//! catalog, quiz/assessment scoring, keyword-based topic extraction, the
//! three persisted stores (chat sessions, bookmarks/results, user profile),
//! and the client for the remote completion endpoint. Rendering, navigation,
//! and image capture live with the embedding UI.

pub mod ai;
pub mod catalog;
pub mod clock;
pub mod scoring;
pub mod storage;
pub mod store;
pub mod topics;
pub mod types;
