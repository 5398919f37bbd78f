//! Domain entities. Pure data structures for the core business.
//!
//! No terminal/speech/IO types here — these are mapped from adapters.

use serde::{Deserialize, Serialize};

/// A user utterance, normalized to lowercase at construction so that all
/// keyword matching is case-insensitive. Discarded after a response is
/// generated; there is no identity beyond the call that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    normalized: String,
}

impl Utterance {
    /// Build an utterance from raw user text (typed or transcribed).
    pub fn new(raw: &str) -> Self {
        Self {
            normalized: raw.to_lowercase(),
        }
    }

    /// The lowercase text used for trigger matching.
    pub fn text(&self) -> &str {
        &self.normalized
    }

    /// Substring containment check against a trigger. No tokenization or
    /// word-boundary handling: "hive" contains "hi" and matches.
    pub fn contains_trigger(&self, trigger: &str) -> bool {
        self.normalized.contains(trigger)
    }
}

/// Who produced a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

/// A single rendered line of the conversation. The UI decides how long to
/// keep these around; nothing in the application retains them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }
}

/// Voice-input state. Owned by the UI controller and threaded through the
/// toggle operation explicitly, never held as ambient shared state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListenState {
    #[default]
    Idle,
    Listening,
}

impl ListenState {
    pub fn toggled(self) -> Self {
        match self {
            ListenState::Idle => ListenState::Listening,
            ListenState::Listening => ListenState::Idle,
        }
    }

    pub fn is_listening(self) -> bool {
        matches!(self, ListenState::Listening)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utterance_lowercases() {
        let u = Utterance::new("HEY There!");
        assert_eq!(u.text(), "hey there!");
        assert!(u.contains_trigger("hey"));
    }

    #[test]
    fn test_trigger_has_no_word_boundary() {
        // Observed behavior: "hive" contains "hi".
        assert!(Utterance::new("hive").contains_trigger("hi"));
    }

    #[test]
    fn test_listen_state_toggles() {
        let s = ListenState::Idle;
        assert!(s.toggled().is_listening());
        assert_eq!(s.toggled().toggled(), ListenState::Idle);
    }
}
