use crate::types::{Message, MessageContent, Role};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::env;

/// Production completion endpoint. Override with `AI_ENDPOINT`.
const DEFAULT_ENDPOINT: &str = "https://toolkit.rork.com/text/llm/";

/// Prepended to every conversation that does not already carry a system
/// message.
pub const SYSTEM_PROMPT: &str = "\
You are an AI assistant specializing in gender equality in digital transformation. Your purpose is to:

1. Educate users about gender equality, digital inclusion, and women's rights in technology
2. Help organizations identify and implement inclusive digital policies
3. Provide resources and tools for empowering women and marginalized groups in digital spaces
4. Offer bias-free, inclusive responses that respect all genders and backgrounds

Be friendly, empathetic, and encouraging. Avoid making assumptions about the user's gender, background, or knowledge level. When appropriate, share success stories of women and marginalized groups in tech.

If asked about sensitive topics, provide balanced, research-based information. If you don't know something, admit it rather than making up information.

Always aim to be constructive and solution-oriented, focusing on practical steps individuals and organizations can take to promote gender equality in digital spaces.

When providing resources, format them clearly with titles and brief descriptions. When listing steps or processes, use numbered lists for clarity.

If the user shares an image, analyze it thoughtfully in the context of gender equality and digital transformation. Look for relevant elements like representation, inclusivity, or potential biases.

Occasionally suggest relevant assessments or quizzes from the app that might help the user learn more about specific topics.

When discussing gender equality, consider intersectionality - how gender interacts with race, class, disability, sexuality, and other aspects of identity.

Provide concrete, actionable advice when possible, and cite research or best practices to support your recommendations.

Format code blocks, if any, with triple backticks. This helps the app display code properly.

When discussing statistics or research findings, mention the source if possible to add credibility.

If appropriate, suggest specific tools or assessments from the app that might help the user with their specific situation.";

/// Assistant text the chat flow shows in place of a failed completion.
pub const FALLBACK_ASSISTANT_MESSAGE: &str =
    "I'm sorry, I encountered an error processing your request. Please try again.";

/// Generic error string recorded in the chat store when a send fails.
pub const SEND_FAILED_ERROR: &str = "Failed to get response. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("completion endpoint error {status}: {body}")]
    Endpoint {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed completion response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: Role,
    content: Cow<'a, MessageContent>,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    messages: Vec<WireMessage<'a>>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    completion: String,
}

/// Client for the remote completion endpoint.
pub struct AiClient {
    client: reqwest::Client,
    endpoint: String,
}

impl AiClient {
    /// Client against `AI_ENDPOINT` if set, the bundled endpoint otherwise.
    pub fn new() -> Self {
        let endpoint = env::var("AI_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::with_endpoint(endpoint)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Send a conversation history and return the completion text.
    ///
    /// Callers treat the endpoint as cost-incurring: at most one attempt per
    /// logical user message, no retry on failure.
    pub async fn send_message(&self, history: &[Message]) -> Result<String, AiError> {
        let messages = build_payload(history);
        tracing::debug!(
            message_count = messages.len(),
            endpoint = %self.endpoint,
            "sending conversation to completion endpoint"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&CompletionRequest { messages })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, "completion endpoint rejected request");
            return Err(AiError::Endpoint { status, body });
        }

        let parsed: CompletionResponse = serde_json::from_str(&body)?;
        Ok(parsed.completion)
    }
}

impl Default for AiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Map history to the wire form, content passed through unchanged. The fixed
/// system prompt is prepended only when the history carries no system role.
fn build_payload(history: &[Message]) -> Vec<WireMessage<'_>> {
    let mut messages: Vec<WireMessage> = history
        .iter()
        .map(|msg| WireMessage {
            role: msg.role,
            content: Cow::Borrowed(&msg.content),
        })
        .collect();

    if !history.iter().any(|msg| msg.role == Role::System) {
        messages.insert(
            0,
            WireMessage {
                role: Role::System,
                content: Cow::Owned(MessageContent::text(SYSTEM_PROMPT)),
            },
        );
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContentPart;

    fn message(role: Role, content: MessageContent) -> Message {
        Message {
            id: "m".to_string(),
            role,
            content,
            timestamp: 0,
            liked: None,
            disliked: None,
            read: None,
            feedback: None,
        }
    }

    fn payload_json(history: &[Message]) -> serde_json::Value {
        serde_json::to_value(CompletionRequest {
            messages: build_payload(history),
        })
        .unwrap()
    }

    #[test]
    fn test_system_prompt_prepended_when_absent() {
        let history = vec![message(Role::User, MessageContent::text("hello"))];
        let json = payload_json(&history);
        let messages = json["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["content"], "hello");
    }

    #[test]
    fn test_existing_system_message_is_not_duplicated() {
        let history = vec![
            message(Role::System, MessageContent::text("custom instructions")),
            message(Role::User, MessageContent::text("hello")),
        ];
        let json = payload_json(&history);
        let messages = json["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["content"], "custom instructions");
    }

    #[test]
    fn test_rich_content_passes_through_as_parts() {
        let history = vec![message(
            Role::User,
            MessageContent::Parts(vec![
                ContentPart::Text {
                    text: "what do you see".to_string(),
                },
                ContentPart::Image {
                    image: "base64data".to_string(),
                },
            ]),
        )];
        let json = payload_json(&history);
        let content = &json["messages"][1]["content"];
        assert!(content.is_array());
        assert_eq!(content[0]["type"], "text");
        assert_eq!(content[1]["image"], "base64data");
    }
}
