//! CLI entry point for thomas.

mod cli;

use clap::Parser;
use std::io::IsTerminal;
use thomas::api::ApiClient;
use thomas::app::App;
use thomas::config::load_config;
use thomas::tui::Renderer;
use thomas::types::ConversationId;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();

    // Diagnostics go to stderr so they never interleave with the transcript.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("THOMAS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    if let Some(base_url) = args.base_url {
        config.server.base_url = base_url;
    }
    if args.no_color {
        config.display.color = false;
    }
    let color = config.display.color && std::io::stdout().is_terminal();
    thomas::tui::set_typing_enabled(color);

    let client = ApiClient::new(&config.server);
    let renderer = Renderer::new(color);
    let mut app = App::new(client, renderer);

    if let Some(id) = args.conversation {
        app.open_conversation(ConversationId(id)).await;
    }

    if let Some(prompt) = args.prompt {
        app.one_shot(&prompt).await;
        return;
    }

    if let Err(e) = app.run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
