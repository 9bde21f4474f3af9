use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One part of a rich (multi-part) message body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentPart {
    Text { text: String },
    Image { image: String },
}

/// Message body: either a plain string or a list of text/image parts.
///
/// Serializes untagged so the JSON form stays `"..."` or `[{...}]`, which is
/// what both the persisted blobs and the completion endpoint expect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

impl MessageContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn as_plain_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Parts(_) => None,
        }
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: MessageContent,
    /// Unix milliseconds.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disliked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_resources: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    Article,
    Video,
    Course,
    Tool,
    Story,
    CaseStudy,
}

/// Static catalog entry. Never mutated at runtime; `content` absent means
/// the resource is presented as an external link rather than inline reading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct_answer: usize,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<QuizQuestion>,
}

/// Maturity weight per option, same length as `options`. Observed range 0-3.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub weights: Vec<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<AssessmentQuestion>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    System,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub theme: ThemeMode,
    pub notifications: bool,
    pub language: String,
    pub font_size: FontSize,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            notifications: true,
            language: "en".to_string(),
            font_size: FontSize::Medium,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub assessment_id: String,
    /// Unix milliseconds.
    pub date: i64,
    pub score: u32,
    pub areas: BTreeMap<String, u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub interests: Vec<String>,
    pub completed_quizzes: Vec<String>,
    pub saved_resources: Vec<String>,
    pub assessment_results: Vec<AssessmentResult>,
    pub settings: UserSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
    }

    #[test]
    fn test_plain_content_serializes_as_string() {
        let content = MessageContent::text("hello");
        assert_eq!(serde_json::to_string(&content).unwrap(), "\"hello\"");
    }

    #[test]
    fn test_rich_content_round_trip() {
        let content = MessageContent::Parts(vec![
            ContentPart::Text {
                text: "look at this".to_string(),
            },
            ContentPart::Image {
                image: "data:image/png;base64,AAAA".to_string(),
            },
        ]);
        let json = serde_json::to_string(&content).unwrap();
        assert!(json.starts_with("[{\"type\":\"text\""));
        let back: MessageContent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, content);
    }

    #[test]
    fn test_resource_type_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ResourceType::CaseStudy).unwrap(),
            "\"case-study\""
        );
    }

    #[test]
    fn test_message_optional_flags_omitted_when_unset() {
        let msg = Message {
            id: "1".to_string(),
            role: Role::User,
            content: MessageContent::text("hi"),
            timestamp: 0,
            liked: None,
            disliked: None,
            read: None,
            feedback: None,
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("liked"));
        assert!(!json.contains("feedback"));
    }
}
