//! Application state and the interactive loop.
//!
//! `App` owns the transcript, the active conversation id, and a backend
//! handle. Slash commands are parsed up front so the loop body stays a
//! plain dispatch.

use std::io::{self, Write};

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::debug;

use crate::api::Backend;
use crate::error::ClientError;
use crate::transcript::Transcript;
use crate::tui::{settings, start_typing, Renderer};
use crate::types::ConversationId;

/// Default topic used when `/news` is given no query.
const DEFAULT_NEWS_QUERY: &str = "technology trends";

/// Static slash command metadata used by parsing and `/help` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlashCommand {
    pub name: &'static str,
    pub description: &'static str,
}

/// Built-in slash commands for interactive mode.
pub const SLASH_COMMANDS: [SlashCommand; 8] = [
    SlashCommand {
        name: "/news",
        description: "Fetch a news summary: /news [query].",
    },
    SlashCommand {
        name: "/new",
        description: "Start a fresh conversation.",
    },
    SlashCommand {
        name: "/open",
        description: "Open a stored conversation: /open <id>.",
    },
    SlashCommand {
        name: "/delete",
        description: "Delete a stored conversation: /delete <id>.",
    },
    SlashCommand {
        name: "/help",
        description: "List available slash commands.",
    },
    SlashCommand {
        name: "/quit",
        description: "Exit interactive mode.",
    },
    SlashCommand {
        name: "/exit",
        description: "Exit interactive mode.",
    },
    SlashCommand {
        name: "/q",
        description: "Short alias for exit.",
    },
];

/// Parsed slash command actions consumed by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommandAction {
    Quit,
    Help,
    News(Option<String>),
    New,
    Open(Option<String>),
    Delete(Option<String>),
    Unknown(String),
}

/// Parse a slash command from user input.
///
/// Returns `None` if the input is not a slash command.
pub fn parse_slash_command(input: &str) -> Option<SlashCommandAction> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let token = trimmed
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    let action = match token.as_str() {
        "/" | "/help" => SlashCommandAction::Help,
        "/quit" | "/exit" | "/q" => SlashCommandAction::Quit,
        "/new" => SlashCommandAction::New,
        "/news" => {
            let rest = trimmed[token.len()..].trim();
            SlashCommandAction::News((!rest.is_empty()).then(|| rest.to_string()))
        }
        "/open" => {
            SlashCommandAction::Open(trimmed.split_whitespace().nth(1).map(str::to_string))
        }
        "/delete" => {
            SlashCommandAction::Delete(trimmed.split_whitespace().nth(1).map(str::to_string))
        }
        other => SlashCommandAction::Unknown(other.to_string()),
    };

    Some(action)
}

/// Interactive chat application over an injected backend.
pub struct App<B: Backend> {
    backend: B,
    transcript: Transcript,
    renderer: Renderer,
    conversation: Option<ConversationId>,
}

impl<B: Backend> App<B> {
    pub fn new(backend: B, renderer: Renderer) -> Self {
        Self {
            backend,
            transcript: Transcript::new(),
            renderer,
            conversation: None,
        }
    }

    /// The conversation the next message will be sent to, if any.
    pub fn conversation(&self) -> Option<ConversationId> {
        self.conversation
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Send one user message and append the reply (or an error bubble).
    ///
    /// The request is awaited before control returns, so replies always land
    /// in the transcript in submission order.
    pub async fn send(&mut self, text: &str) {
        let entry = self.transcript.push(text, true);
        self.renderer.entry(entry);

        self.transcript.show_typing();
        let reply = {
            let _typing = start_typing(self.renderer.color_enabled());
            self.backend.chat(text, self.conversation).await
        };
        self.transcript.hide_typing();

        match reply {
            Ok(reply) => {
                if let Some(id) = reply.conversation_id {
                    self.conversation = Some(id);
                }
                let entry = self.transcript.push(reply.response, false);
                self.renderer.entry(entry);
            }
            Err(err) => {
                debug!(error = %err, "chat request failed");
                let entry = self.transcript.push(format!("Error: {err}"), false);
                self.renderer.entry(entry);
            }
        }
    }

    /// Fetch a news summary and append it as an assistant message.
    pub async fn news(&mut self, query: Option<&str>) {
        let query = query.unwrap_or(DEFAULT_NEWS_QUERY);

        self.transcript.show_typing();
        let result = {
            let _typing = start_typing(self.renderer.color_enabled());
            self.backend.news(query).await
        };
        self.transcript.hide_typing();

        let text = match result {
            Ok(news) => news,
            Err(err) => {
                debug!(error = %err, "news request failed");
                format!("Error: {err}")
            }
        };
        let entry = self.transcript.push(text, false);
        self.renderer.entry(entry);
    }

    /// Replace the transcript with the stored history of `id`.
    pub async fn open_conversation(&mut self, id: ConversationId) {
        match self.backend.conversation(id).await {
            Ok(messages) => {
                self.transcript.clear();
                self.conversation = Some(id);
                for message in messages {
                    let is_user = message.is_user();
                    self.transcript.push(message.content, is_user);
                }
                self.renderer.info(&format!("opened conversation {id}"));
                for entry in self.transcript.entries() {
                    self.renderer.entry(entry);
                }
            }
            Err(err) => self.renderer.error(&err.to_string()),
        }
    }

    /// Start a fresh server-side conversation and reset the transcript.
    pub async fn new_conversation(&mut self) {
        match self.backend.create_conversation().await {
            Ok(id) => {
                self.transcript.clear();
                self.conversation = Some(id);
                self.renderer.welcome();
            }
            Err(err) => self.renderer.error(&err.to_string()),
        }
    }

    /// Delete a stored conversation. Clears local state when the deleted
    /// conversation is the open one.
    pub async fn delete_conversation(&mut self, id: ConversationId) {
        match self.backend.delete_conversation(id).await {
            Ok(true) => {
                if self.conversation == Some(id) {
                    self.conversation = None;
                    self.transcript.clear();
                }
                self.renderer.info(&format!("deleted conversation {id}"));
            }
            Ok(false) => self
                .renderer
                .error(&format!("conversation {id} was not deleted")),
            Err(err) => self.renderer.error(&err.to_string()),
        }
    }

    /// Send one message and exit (non-interactive mode).
    pub async fn one_shot(&mut self, prompt: &str) {
        self.send(prompt).await;
    }

    /// Run the interactive loop until `/quit` or end of input.
    pub async fn run(&mut self) -> Result<(), ClientError> {
        self.renderer.banner();
        if self.transcript.is_empty() {
            self.renderer.welcome();
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            let Some(line) = prompt_line(&mut lines, settings::PROMPT_PRIMARY).await? else {
                return Ok(());
            };
            let line = line.trim().to_string();
            if line.is_empty() {
                continue;
            }

            match parse_slash_command(&line) {
                Some(SlashCommandAction::Quit) => return Ok(()),
                Some(SlashCommandAction::Help) => self.print_help(),
                Some(SlashCommandAction::News(query)) => self.news(query.as_deref()).await,
                Some(SlashCommandAction::New) => self.new_conversation().await,
                Some(SlashCommandAction::Open(arg)) => match parse_id_argument(arg.as_deref()) {
                    Ok(id) => self.open_conversation(id).await,
                    Err(message) => self.renderer.error(&message),
                },
                Some(SlashCommandAction::Delete(arg)) => {
                    match parse_id_argument(arg.as_deref()) {
                        Ok(id) => {
                            if confirm_delete(&mut lines).await? {
                                self.delete_conversation(id).await;
                            } else {
                                self.renderer.info("delete cancelled");
                            }
                        }
                        Err(message) => self.renderer.error(&message),
                    }
                }
                Some(SlashCommandAction::Unknown(token)) => self
                    .renderer
                    .error(&format!("unknown command {token}, try /help")),
                None => self.send(&line).await,
            }
        }
    }

    fn print_help(&self) {
        for command in SLASH_COMMANDS {
            self.renderer
                .info(&format!("{:10} {}", command.name, command.description));
        }
    }
}

/// Parse the `<id>` argument of `/open` and `/delete`.
fn parse_id_argument(arg: Option<&str>) -> Result<ConversationId, String> {
    let Some(arg) = arg else {
        return Err("a conversation id is required".to_string());
    };
    arg.parse()
        .map_err(|_| format!("invalid conversation id: {arg}"))
}

/// Print a prompt and read one line. Returns `None` at end of input.
async fn prompt_line(
    lines: &mut Lines<BufReader<Stdin>>,
    prompt: &str,
) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    lines.next_line().await
}

/// Ask for delete confirmation; anything but `y` cancels.
async fn confirm_delete(lines: &mut Lines<BufReader<Stdin>>) -> io::Result<bool> {
    let answer = prompt_line(lines, settings::PROMPT_DELETE_CONFIRM).await?;
    Ok(answer
        .map(|a| a.trim().eq_ignore_ascii_case("y"))
        .unwrap_or(false))
}
