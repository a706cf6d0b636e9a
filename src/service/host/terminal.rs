//! Terminal host.
//!
//! Renders the widget on stdout and reads input from stdin, one line per
//! action. Lines starting with `/` are widget commands (the bubble and the
//! quick-reply buttons); anything else is typed text sent with Enter.

use std::{
    io::Write,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, instrument};

use crate::{
    base::{
        config::Config,
        markup,
        types::{Message, Res, Role, Topic, Void},
    },
    runtime::Runtime,
};

use super::{GenericHost, HostClient};

const HELP: &str = "Commands: /toggle (open or close the chat), /ask <topic> (quick reply), /topics, /help, /quit. Any other line is sent as a question.";

// Extra methods on `HostClient` applied by the terminal implementation.

impl HostClient {
    /// Creates a host that draws the widget in the terminal.
    pub fn terminal(config: &Config) -> Self {
        Self::new(Arc::new(TerminalHost::new(config)))
    }
}

// Types.

/// One line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle,
    Ask(String),
    Topics,
    Help,
    Quit,
    /// Typed text, kept exactly as entered.
    Send(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let Some(command) = line.trim().strip_prefix('/') else {
            return Command::Send(line.to_string());
        };

        let (name, argument) = command.split_once(char::is_whitespace).unwrap_or((command, ""));

        match name {
            "toggle" => Command::Toggle,
            "ask" => Command::Ask(argument.trim().to_lowercase()),
            "topics" => Command::Topics,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            // Not a widget command, so it is a question like `/price?`.
            _ => Command::Send(line.to_string()),
        }
    }
}

// Structs.

/// Terminal host implementation.
struct TerminalHost {
    title: String,
    greeting: String,
    visible: AtomicBool,
}

impl TerminalHost {
    fn new(config: &Config) -> Self {
        Self {
            title: config.title.clone(),
            greeting: config.greeting.clone(),
            visible: AtomicBool::new(false),
        }
    }

    fn emit(&self, text: &str) -> Void {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{text}")?;
        out.flush()?;

        Ok(())
    }

    fn emit_closed_hint(&self) -> Void {
        self.emit("(chat is closed, type /toggle to open it)")
    }

    /// The text to print for a message, or `None` while the panel is hidden.
    fn render(&self, message: &Message) -> Option<String> {
        self.visible.load(Ordering::SeqCst).then(|| format_message(message))
    }

    /// Dispatch one line of input. Returns `false` once the session should end.
    async fn handle_command(&self, runtime: &Runtime, command: Command) -> Res<bool> {
        match command {
            Command::Quit => return Ok(false),
            Command::Help => self.emit(HELP)?,
            Command::Topics => self.emit(&format_quick_replies())?,
            Command::Toggle => {
                runtime.toggle_panel().await?;
            }
            Command::Ask(key) => {
                if !runtime.is_panel_open() {
                    self.emit_closed_hint()?;
                    return Ok(true);
                }

                match key.parse::<Topic>() {
                    Ok(topic) => runtime.ask_question(topic).await?,
                    Err(err) => self.emit(&err.to_string())?,
                }
            }
            Command::Send(text) => {
                if !runtime.is_panel_open() {
                    self.emit_closed_hint()?;
                    return Ok(true);
                }

                runtime.send_message(&text).await?;
            }
        }

        Ok(true)
    }
}

#[async_trait]
impl GenericHost for TerminalHost {
    #[instrument(name = "TerminalHost::start", skip_all)]
    async fn start(&self, runtime: Runtime) -> Void {
        if !runtime.is_panel_open() {
            self.emit(&format!("💬 {} (type /toggle to chat, /help for commands)", self.title))?;
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            let line = tokio::select! {
                line = lines.next_line() => line?,
                _ = tokio::signal::ctrl_c() => {
                    info!("Received Ctrl-C, closing the widget ...");
                    break;
                }
            };

            // End of input.
            let Some(line) = line else {
                break;
            };

            if !self.handle_command(&runtime, Command::parse(&line)).await? {
                break;
            }
        }

        Ok(())
    }

    fn show_message(&self, message: &Message) -> Void {
        match self.render(message) {
            Some(text) => self.emit(&text),
            None => Ok(()),
        }
    }

    fn set_panel_visible(&self, visible: bool, transcript: &[Message]) -> Void {
        self.visible.store(visible, Ordering::SeqCst);

        if !visible {
            return self.emit(&format!("💬 {} (minimized)", self.title));
        }

        self.emit(&format!("━━ {} ━━", self.title))?;
        self.emit(&format_message(&Message::bot(self.greeting.as_str())))?;
        self.emit(&format_quick_replies())?;

        for message in transcript {
            self.emit(&format_message(message))?;
        }

        Ok(())
    }
}

// Helpers.

/// Format one transcript entry for the terminal.
///
/// Bot text has its emphasis rendered in bold; continuation lines are indented
/// under the speaker tag.
pub fn format_message(message: &Message) -> String {
    let (tag, text) = match message.role {
        Role::User => ("  you › ", message.text.clone()),
        Role::Bot => ("  bot › ", markup::to_ansi(&message.text)),
    };

    let indent = " ".repeat(tag.chars().count());
    let body = text.lines().collect::<Vec<_>>().join(&format!("\n{indent}"));

    format!("{tag}{body}")
}

/// Format the quick-reply buttons.
pub fn format_quick_replies() -> String {
    Topic::QUICK_REPLIES.iter().map(|topic| format!("[/ask {}] {}", topic.key(), topic.label())).collect::<Vec<_>>().join("  ")
}

// Tests.
