//! Terminal front end for the relay: each line typed is one send.

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use chat_relay::ui::client::RelayClient;
use chat_relay::ui::session::ChatSession;
use chat_relay::ui::transcript::{Message, Sender};

#[derive(Parser, Debug)]
#[command(name = "chat", about = "Talk to the chat relay from a terminal")]
struct Args {
    /// Relay chat endpoint
    #[arg(long, env = "CHAT_RELAY_URL", default_value = "http://localhost:3000/chat")]
    url: String,
}

fn render(message: &Message) {
    let who = match message.sender {
        Sender::User => "you",
        Sender::Bot => "bot",
    };
    println!("{who}> {}", message.text);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut session = ChatSession::new(RelayClient::new(args.url));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut shown = 0;

    println!("Ask me anything... (Ctrl-D to quit)");
    while let Some(line) = lines.next_line().await? {
        session.set_input(line);
        if !session.send().await {
            continue;
        }
        for message in &session.transcript().messages()[shown..] {
            render(message);
        }
        shown = session.transcript().len();
    }
    Ok(())
}
