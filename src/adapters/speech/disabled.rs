//! Silently-disabled speech adapters.
//!
//! Used when no speech command is configured: the capability reports
//! unavailable and every call is a no-op, so the rest of the application
//! never sees a speech error.

use crate::domain::DomainError;
use crate::ports::{SpeechInputPort, SpeechSynthPort};

/// No-op speech adapter. Implements both ports.
pub struct DisabledSpeech;

#[async_trait::async_trait]
impl SpeechSynthPort for DisabledSpeech {
    fn is_available(&self) -> bool {
        false
    }

    async fn speak(&self, _text: &str) -> Result<(), DomainError> {
        Ok(())
    }
}

#[async_trait::async_trait]
impl SpeechInputPort for DisabledSpeech {
    fn is_available(&self) -> bool {
        false
    }

    async fn transcribe(&self) -> Result<Option<String>, DomainError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_speech_is_inert() {
        let speech = DisabledSpeech;
        assert!(!SpeechSynthPort::is_available(&speech));
        assert!(!SpeechInputPort::is_available(&speech));
        speech.speak("ignored").await.unwrap();
        assert_eq!(speech.transcribe().await.unwrap(), None);
    }
}
