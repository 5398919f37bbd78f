//! Implements InputPort. Inquire-based interactive chat loop.
//!
//! Boot animation, welcome message, then prompt -> resolve -> display.
//! Slash commands: /voice toggles voice input, /quit exits.

use crate::domain::{DomainError, ListenState};
use crate::ports::InputPort;
use crate::usecases::ChatService;
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
use inquire::{InquireError, Text};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Applies the neon theme for all subsequent inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new(">").with_fg(Color::LightMagenta))
        .with_answer(StyleSheet::new().with_fg(Color::LightCyan))
        .with_help_message(StyleSheet::new().with_fg(Color::DarkGrey));
    inquire::set_global_render_config(config);
}

/// Spinner shown while the assistant reply is pending.
fn thinking_spinner(label: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("spinner template"),
    );
    pb.set_message(label.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// TUI adapter. Inquire prompts around the chat service.
pub struct TuiInputPort {
    chat: Arc<ChatService>,
    assistant_name: String,
    boot_delay: Duration,
}

impl TuiInputPort {
    pub fn new(chat: Arc<ChatService>, assistant_name: String, boot_delay: Duration) -> Self {
        Self {
            chat,
            assistant_name,
            boot_delay,
        }
    }

    /// Loading animation before the chat interface appears.
    async fn boot(&self) {
        if self.boot_delay.is_zero() {
            return;
        }
        let pb = thinking_spinner("Loading chat interface...");
        tokio::time::sleep(self.boot_delay).await;
        pb.finish_and_clear();
    }

    /// Next user input: a transcript while listening, otherwise the typed
    /// prompt. Returns None when the user quits (Esc / Ctrl-C).
    async fn next_input(&self, state: ListenState) -> Result<Option<String>, DomainError> {
        if state.is_listening() {
            if let Some(transcript) = self.chat.listen().await {
                println!("You (voice): {}", transcript);
                return Ok(Some(transcript));
            }
            debug!("no transcript captured; falling back to typed prompt");
        }

        match Text::new("You:").prompt() {
            Ok(line) => Ok(Some(line)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(DomainError::Ui(e.to_string())),
        }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        self.boot().await;

        println!("Welcome to SNR AI! I'm your advanced AI assistant.");
        println!("Commands: /voice toggles voice input, /quit exits.");

        let mut state = ListenState::default();

        loop {
            let input = match self.next_input(state).await? {
                Some(line) => line,
                None => break,
            };
            let trimmed = input.trim();

            match trimmed {
                "" => continue,
                "/quit" | "/exit" => break,
                "/voice" => {
                    let next = self.chat.toggle_voice(state);
                    if next == state {
                        println!("Voice input isn't available here; staying in text mode.");
                    } else if next.is_listening() {
                        println!("Voice mode on. I'll listen before each prompt.");
                    } else {
                        println!("Voice mode off.");
                    }
                    state = next;
                    continue;
                }
                _ => {}
            }

            let spinner = thinking_spinner("Thinking...");
            let reply = self.chat.submit(trimmed, state).await;
            spinner.finish_and_clear();
            println!("{}: {}", self.assistant_name, reply.text);
        }

        println!("Goodbye!");
        Ok(())
    }
}
