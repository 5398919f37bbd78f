//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. Response resolution itself
//! never fails; these cover the surrounding plumbing (UI, speech, startup).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Speech synthesis failed: {0}")]
    SpeechSynth(String),

    #[error("Speech recognition failed: {0}")]
    SpeechInput(String),

    #[error("UI error: {0}")]
    Ui(String),
}
