//! Chat orchestration: normalize input -> resolve -> delayed display -> TTS.
//!
//! - The response delay mimics the assistant "typing" before the reply shows
//! - TTS playback is fire-and-forget; a second submission may interleave
//!   with an earlier playback (no cancellation or ordering guarantees)
//! - The voice toggle threads an explicit ListenState value; when speech
//!   input is unavailable the toggle is silently a no-op

use crate::domain::{ChatMessage, ListenState, Utterance};
use crate::ports::{SpeechInputPort, SpeechSynthPort};
use crate::usecases::ResponseResolver;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Chat service. Wraps the resolver with the surrounding plumbing.
pub struct ChatService {
    resolver: ResponseResolver,
    synth: Arc<dyn SpeechSynthPort>,
    recognizer: Arc<dyn SpeechInputPort>,
    response_delay: Duration,
}

impl ChatService {
    pub fn new(
        resolver: ResponseResolver,
        synth: Arc<dyn SpeechSynthPort>,
        recognizer: Arc<dyn SpeechInputPort>,
        response_delay: Duration,
    ) -> Self {
        Self {
            resolver,
            synth,
            recognizer,
            response_delay,
        }
    }

    /// Handle one user submission. Always produces an assistant message;
    /// resolution itself has no failure modes.
    pub async fn submit(&self, input: &str, state: ListenState) -> ChatMessage {
        let utterance = Utterance::new(input);
        let reply = self.resolver.resolve(&utterance);

        // Delay before the reply is shown, like the original typing pause.
        tokio::time::sleep(self.response_delay).await;

        if state.is_listening() && self.synth.is_available() {
            let synth = Arc::clone(&self.synth);
            let spoken = reply.clone();
            tokio::spawn(async move {
                if let Err(e) = synth.speak(&spoken).await {
                    warn!(error = %e, "speech playback failed");
                }
            });
        }

        ChatMessage::assistant(reply)
    }

    /// Toggle voice mode. Returns the new state; unchanged when no speech
    /// recognizer is available on this host.
    pub fn toggle_voice(&self, current: ListenState) -> ListenState {
        if !self.recognizer.is_available() {
            debug!("speech input unavailable; voice toggle ignored");
            return current;
        }
        let next = current.toggled();
        info!(listening = next.is_listening(), "voice mode toggled");
        next
    }

    /// Capture one spoken utterance while listening. `None` falls back to
    /// typed input; recognizer errors are logged and treated the same way.
    pub async fn listen(&self) -> Option<String> {
        if !self.recognizer.is_available() {
            return None;
        }
        match self.recognizer.transcribe().await {
            Ok(transcript) => transcript.filter(|t| !t.trim().is_empty()),
            Err(e) => {
                warn!(error = %e, "speech recognition failed; falling back to typed input");
                None
            }
        }
    }
}
