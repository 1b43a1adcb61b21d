use std::io::Stdout;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use uuid::Uuid;

use medmentor::application::ports::ConversationRepository;
use medmentor::application::services::ChatSession;
use medmentor::domain::ConversationId;
use medmentor::infrastructure::http::HttpAdvisorClient;
use medmentor::infrastructure::observability::{TracingConfig, init_tracing};
use medmentor::infrastructure::persistence::{
    InMemoryConversationRepository, PgConversationRepository, connect_once,
};
use medmentor::presentation::terminal::{TerminalView, example_question, welcome_banner};
use medmentor::presentation::{Environment, Settings};

enum Command<'a> {
    Quit,
    Examples,
    Example(Option<&'static str>),
    Resume(Option<ConversationId>),
    Send(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    let mut parts = line.splitn(2, char::is_whitespace);
    match parts.next() {
        Some("/quit") | Some("/exit") => Command::Quit,
        Some("/examples") => Command::Examples,
        Some("/example") => Command::Example(
            parts
                .next()
                .and_then(|n| n.trim().parse::<usize>().ok())
                .and_then(example_question),
        ),
        Some("/resume") => Command::Resume(
            parts
                .next()
                .and_then(|id| Uuid::parse_str(id.trim()).ok())
                .map(ConversationId::from_uuid),
        ),
        _ => Command::Send(line),
    }
}

async fn conversation_store(settings: &Settings) -> Arc<dyn ConversationRepository> {
    match connect_once(&settings.database.url, settings.database.max_connections).await {
        Ok(pool) => Arc::new(PgConversationRepository::new(pool)),
        Err(e) => {
            tracing::warn!(error = %e, "Conversation store unavailable, keeping history in memory");
            Arc::new(InMemoryConversationRepository::new())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(
        &TracingConfig::from_settings(environment, &settings.logging),
        "medmentor-chat",
    );

    let repository = conversation_store(&settings).await;
    let advisor = Arc::new(HttpAdvisorClient::from_settings(&settings.client));
    let view: TerminalView<Stdout> = TerminalView::new(std::io::stdout());
    let mut session = ChatSession::new(repository, advisor, view);

    let banner = welcome_banner(&settings.prompt.assistant_name);
    println!("{}", banner);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Command::Quit => break,
            Command::Examples => println!("{}", banner),
            Command::Example(Some(question)) => {
                let _ = session.send(question).await;
            }
            Command::Example(None) => println!("Unknown example number."),
            Command::Resume(Some(id)) => {
                if session.resume(id).await.is_ok() {
                    println!("Resumed conversation {}", id);
                }
            }
            Command::Resume(None) => println!("Usage: /resume <conversation-id>"),
            Command::Send(text) => {
                // Failures were already shown by the view.
                let _ = session.send(text).await;
            }
        }
    }

    if let Some(id) = session.conversation_id() {
        println!("Conversation saved as {}", id);
    }

    Ok(())
}
