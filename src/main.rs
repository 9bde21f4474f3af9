use anyhow::Result;
use digiequity::ai::{AiClient, FALLBACK_ASSISTANT_MESSAGE, SEND_FAILED_ERROR};
use digiequity::storage::Storage;
use digiequity::store::{ChatStore, ResourceStore, UserStore};
use digiequity::topics::{extract_topics, suggest_resources};
use digiequity::types::{MessageContent, Role};
use std::io::{BufRead, Write};

/// Minimal terminal front end over the store layer: one chat session per
/// run, the same send/fallback flow the app screens use.
#[tokio::main]
async fn main() -> Result<()> {
    // .env first so AI_ENDPOINT and RUST_LOG can come from the project dir.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let storage = Storage::open();
    let mut chat = ChatStore::new(storage.clone());
    let resources = ResourceStore::new(storage.clone());
    let mut user = UserStore::new(storage);
    user.initialize_profile();

    let ai = AiClient::new();
    let name = user
        .profile()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "there".to_string());
    println!("Hello {name}. Ask about gender equality in digital spaces; /quit to exit.");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text == "/quit" {
            break;
        }

        chat.add_message(Role::User, MessageContent::text(text));
        chat.set_loading(true);

        let history = chat
            .current_session()
            .map(|session| session.messages.clone())
            .unwrap_or_default();

        match ai.send_message(&history).await {
            Ok(reply) => {
                chat.set_error(None);
                println!("{reply}\n");
                chat.add_message(Role::Assistant, MessageContent::text(reply));
            }
            Err(err) => {
                tracing::error!(error = %err, "completion request failed");
                chat.set_error(Some(SEND_FAILED_ERROR.to_string()));
                println!("{FALLBACK_ASSISTANT_MESSAGE}\n");
                chat.add_message(
                    Role::Assistant,
                    MessageContent::text(FALLBACK_ASSISTANT_MESSAGE),
                );
            }
        }
        chat.set_loading(false);

        if let Some(session) = chat.current_session() {
            let session_id = session.id.clone();
            let topics = extract_topics(&session.messages);
            let suggested = suggest_resources(&topics);
            if !suggested.is_empty() {
                println!("Related resources:");
                for id in &suggested {
                    if let Some(resource) = resources.resources().iter().find(|r| &r.id == id) {
                        println!("  - {} ({})", resource.title, resource.url);
                    }
                }
                println!();
            }
            chat.set_session_topics(&session_id, topics, suggested);
        }
    }

    Ok(())
}
