//! Topic extraction over conversation text and resource suggestions.
//!
//! A fixed table maps topic names to keyword substrings. A topic matches a
//! conversation when its own name or any of its keywords appears in the
//! lowered text of any user message. Both functions are pure and advisory;
//! the assistant is separately prompted to surface resources on its own.

use crate::types::{ContentPart, Message, MessageContent, Role};

const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "recruitment",
        &["hiring", "recruit", "job", "candidate", "interview", "application"],
    ),
    (
        "bias",
        &["prejudice", "stereotype", "discrimination", "unfair", "unconscious bias"],
    ),
    (
        "leadership",
        &["leader", "executive", "management", "board", "director", "c-suite"],
    ),
    (
        "pay gap",
        &["salary", "compensation", "wage", "pay difference", "equal pay"],
    ),
    (
        "inclusion",
        &["inclusive", "diversity", "belonging", "representation"],
    ),
    (
        "policy",
        &["policies", "regulation", "guideline", "framework", "standard"],
    ),
    (
        "education",
        &["training", "learn", "course", "skill", "knowledge"],
    ),
    (
        "mentorship",
        &["mentor", "coach", "guide", "sponsor", "role model"],
    ),
    (
        "work-life balance",
        &["flexibility", "remote work", "parental leave", "childcare"],
    ),
    (
        "technology",
        &["tech", "digital", "software", "hardware", "engineering", "coding"],
    ),
    (
        "intersectionality",
        &["intersectional", "race", "class", "disability", "lgbtq", "multiple identities"],
    ),
    (
        "ai ethics",
        &["artificial intelligence", "algorithm", "machine learning", "data bias", "ethical ai"],
    ),
    (
        "digital divide",
        &["access", "connectivity", "rural", "developing countries", "internet access"],
    ),
    (
        "stem education",
        &["science", "technology", "engineering", "mathematics", "education"],
    ),
    (
        "entrepreneurship",
        &["startup", "founder", "venture capital", "funding", "business"],
    ),
    (
        "online harassment",
        &["harassment", "trolling", "abuse", "safety", "online violence"],
    ),
];

const TOPIC_RESOURCES: &[(&str, &[&str])] = &[
    ("recruitment", &["1", "5", "9", "15"]),
    ("bias", &["1", "7", "8", "10", "13"]),
    ("leadership", &["2", "6", "15", "19"]),
    ("pay gap", &["4", "11", "14", "18"]),
    ("inclusion", &["3", "6", "13", "20"]),
    ("education", &["3", "7", "12", "17"]),
    ("mentorship", &["5", "9", "14"]),
    ("work-life balance", &["4", "15"]),
    ("technology", &["1", "2", "10", "19"]),
    ("intersectionality", &["20", "16", "11"]),
    ("ai ethics", &["1", "10", "17"]),
    ("digital divide", &["7", "16"]),
    ("stem education", &["2", "12", "17"]),
    ("entrepreneurship", &["18", "11", "6"]),
    ("online harassment", &["8", "19"]),
];

/// At most this many resource suggestions per conversation.
const MAX_SUGGESTIONS: usize = 3;

/// Detect topics across the user messages of a conversation.
///
/// Returns topic names deduplicated in detection order. Matching is
/// case-insensitive substring search; image parts contribute nothing.
pub fn extract_topics(messages: &[Message]) -> Vec<String> {
    let mut topics: Vec<String> = Vec::new();

    for message in messages.iter().filter(|m| m.role == Role::User) {
        let content = match &message.content {
            MessageContent::Text(text) => text.to_lowercase(),
            MessageContent::Parts(parts) => parts
                .iter()
                .filter_map(|part| match part {
                    ContentPart::Text { text } => Some(text.to_lowercase()),
                    ContentPart::Image { .. } => None,
                })
                .collect::<Vec<_>>()
                .join(" "),
        };

        for (topic, keywords) in TOPIC_KEYWORDS {
            let mentioned = content.contains(topic)
                || keywords.iter().any(|keyword| content.contains(keyword));
            if mentioned && !topics.iter().any(|t| t == topic) {
                topics.push(topic.to_string());
            }
        }
    }

    topics
}

/// Map detected topics to recommended resource ids.
///
/// Ids are deduplicated in first-seen order across the given topics and
/// capped at three suggestions.
pub fn suggest_resources(topics: &[String]) -> Vec<String> {
    let mut suggested: Vec<String> = Vec::new();

    for topic in topics {
        let Some((_, ids)) = TOPIC_RESOURCES.iter().find(|(name, _)| name == topic) else {
            continue;
        };
        for id in *ids {
            if !suggested.iter().any(|s| s == id) {
                suggested.push(id.to_string());
            }
        }
    }

    suggested.truncate(MAX_SUGGESTIONS);
    suggested
}
