//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters. Speech ports degrade gracefully: when the host
//! has no speech capability, adapters report unavailable and the feature is
//! silently disabled — nothing propagates into response resolution.

use crate::domain::DomainError;
use chrono::{DateTime, Local};

/// Text-to-speech playback.
#[async_trait::async_trait]
pub trait SpeechSynthPort: Send + Sync {
    /// Whether playback can be attempted at all.
    fn is_available(&self) -> bool;

    /// Speak the given text. Fire-and-forget at the call site; errors are
    /// logged, never surfaced to the user.
    async fn speak(&self, text: &str) -> Result<(), DomainError>;
}

/// Speech-to-text transcription.
#[async_trait::async_trait]
pub trait SpeechInputPort: Send + Sync {
    /// Whether transcription can be attempted at all.
    fn is_available(&self) -> bool;

    /// Capture one utterance. `Ok(None)` means nothing was recognized; the
    /// caller falls back to typed input.
    async fn transcribe(&self) -> Result<Option<String>, DomainError>;
}

/// Wall-clock capability. Injected into the resolver so tests can freeze it.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Uniform random selection capability. Injected into the resolver so tests
/// can pin the pick.
pub trait RandomSource: Send + Sync {
    /// Index in `0..upper`. Callers guarantee `upper >= 1`.
    fn pick(&self, upper: usize) -> usize;
}
