//! AI conversation client.
//!
//! The app talks to a single opaque completion endpoint: one HTTP POST per
//! user-initiated send, a `{"messages": [...]}` body, a `{"completion": str}`
//! response. No retry, no backoff, no streaming.
//!
//! # Usage
//!
//! ```rust,no_run
//! use digiequity::ai::AiClient;
//!
//! # async fn example(history: &[digiequity::types::Message]) -> anyhow::Result<()> {
//! let ai = AiClient::new();
//! let reply = ai.send_message(history).await?;
//! # Ok(())
//! # }
//! ```

mod client;

pub use client::{
    AiClient, AiError, FALLBACK_ASSISTANT_MESSAGE, SEND_FAILED_ERROR, SYSTEM_PROMPT,
};
