//! Speech adapters backed by external commands.
//!
//! TTS runs the configured command with the reply text as the final argument
//! (e.g. `espeak`, `say`). STT runs the configured command and reads one
//! transcript line from its stdout (e.g. a whisper/vosk wrapper script).

use crate::domain::DomainError;
use crate::ports::{SpeechInputPort, SpeechSynthPort};
use tokio::process::Command;
use tracing::{debug, warn};

/// Split a configured command string into program + leading arguments.
/// Whitespace splitting only; quoting is not supported.
fn split_command(raw: &str) -> Option<(String, Vec<String>)> {
    let mut parts = raw.split_whitespace().map(str::to_string);
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Text-to-speech via an external command.
pub struct CommandTts {
    program: String,
    args: Vec<String>,
}

impl CommandTts {
    /// Build from a configured command line, e.g. "espeak -s 150".
    /// Returns None for a blank command (feature stays disabled).
    pub fn from_command(raw: &str) -> Option<Self> {
        let (program, args) = split_command(raw)?;
        Some(Self { program, args })
    }
}

#[async_trait::async_trait]
impl SpeechSynthPort for CommandTts {
    fn is_available(&self) -> bool {
        true
    }

    async fn speak(&self, text: &str) -> Result<(), DomainError> {
        debug!(program = %self.program, "speaking reply");
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .status()
            .await
            .map_err(|e| DomainError::SpeechSynth(format!("spawn {}: {}", self.program, e)))?;

        if !status.success() {
            return Err(DomainError::SpeechSynth(format!(
                "{} exited with {}",
                self.program, status
            )));
        }
        Ok(())
    }
}

/// Speech-to-text via an external command. One invocation captures one
/// utterance; the first non-empty stdout line is the transcript.
pub struct CommandStt {
    program: String,
    args: Vec<String>,
}

impl CommandStt {
    pub fn from_command(raw: &str) -> Option<Self> {
        let (program, args) = split_command(raw)?;
        Some(Self { program, args })
    }
}

#[async_trait::async_trait]
impl SpeechInputPort for CommandStt {
    fn is_available(&self) -> bool {
        true
    }

    async fn transcribe(&self) -> Result<Option<String>, DomainError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .await
            .map_err(|e| DomainError::SpeechInput(format!("spawn {}: {}", self.program, e)))?;

        if !output.status.success() {
            warn!(program = %self.program, status = %output.status, "transcriber exited nonzero");
            return Ok(None);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let transcript = stdout
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .map(str::to_string);
        debug!(got = transcript.is_some(), "transcription attempt finished");
        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command() {
        let (program, args) = split_command("espeak -s 150").unwrap();
        assert_eq!(program, "espeak");
        assert_eq!(args, ["-s", "150"]);
    }

    #[test]
    fn test_blank_command_is_none() {
        assert!(split_command("   ").is_none());
        assert!(CommandTts::from_command("").is_none());
        assert!(CommandStt::from_command("").is_none());
    }

    #[tokio::test]
    async fn test_stt_reads_first_stdout_line() {
        // `echo` stands in for a transcriber binary.
        let stt = CommandStt::from_command("echo hello world").unwrap();
        let transcript = stt.transcribe().await.unwrap();
        assert_eq!(transcript.as_deref(), Some("hello world"));
    }

    #[tokio::test]
    async fn test_stt_missing_binary_is_error() {
        let stt = CommandStt::from_command("definitely-not-a-real-binary-snr").unwrap();
        assert!(stt.transcribe().await.is_err());
    }

    #[tokio::test]
    async fn test_tts_runs_command() {
        // `true` consumes the text argument and exits 0.
        let tts = CommandTts::from_command("true").unwrap();
        tts.speak("hello").await.unwrap();
    }
}
