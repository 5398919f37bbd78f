//! Application configuration. Delays, speech commands, catalog override.

use serde::Deserialize;

/// Default delay in ms before a resolved reply is displayed.
pub const DEFAULT_RESPONSE_DELAY_MS: u64 = 600;

/// Default boot/loading animation duration in ms (matches the original
/// loading screen).
pub const DEFAULT_BOOT_DELAY_MS: u64 = 2000;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Delay in ms between submission and reply display. Read from
    /// SNR_CHAT_RESPONSE_DELAY_MS.
    #[serde(default)]
    pub response_delay_ms: Option<u64>,

    /// Boot animation duration in ms. Read from SNR_CHAT_BOOT_DELAY_MS.
    #[serde(default)]
    pub boot_delay_ms: Option<u64>,

    /// Path to a JSON catalog replacing the built-in responses. Read from
    /// SNR_CHAT_CATALOG.
    #[serde(default)]
    pub catalog: Option<String>,

    /// External text-to-speech command, reply text appended as the final
    /// argument (e.g. "espeak -s 150"). Read from SNR_CHAT_TTS_COMMAND.
    #[serde(default)]
    pub tts_command: Option<String>,

    /// External speech-to-text command printing one transcript line on
    /// stdout. Read from SNR_CHAT_STT_COMMAND.
    #[serde(default)]
    pub stt_command: Option<String>,

    /// Display name for the assistant. Read from SNR_CHAT_ASSISTANT_NAME.
    #[serde(default)]
    pub assistant_name: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("SNR_CHAT"));
        if let Ok(path) = std::env::var("SNR_CHAT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // Numeric env values arrive as strings; parse them directly.
        if let Ok(s) = std::env::var("SNR_CHAT_RESPONSE_DELAY_MS") {
            if let Ok(ms) = s.parse::<u64>() {
                cfg.response_delay_ms = Some(ms);
            }
        }
        if let Ok(s) = std::env::var("SNR_CHAT_BOOT_DELAY_MS") {
            if let Ok(ms) = s.parse::<u64>() {
                cfg.boot_delay_ms = Some(ms);
            }
        }
        Ok(cfg)
    }

    /// Returns the reply display delay in ms. Defaults to 600 if unset.
    pub fn response_delay_ms_or_default(&self) -> u64 {
        self.response_delay_ms.unwrap_or(DEFAULT_RESPONSE_DELAY_MS)
    }

    /// Returns the boot animation duration in ms. Defaults to 2000 if unset.
    pub fn boot_delay_ms_or_default(&self) -> u64 {
        self.boot_delay_ms.unwrap_or(DEFAULT_BOOT_DELAY_MS)
    }

    /// Returns the assistant display name. Defaults to "SNR".
    pub fn assistant_name_or_default(&self) -> String {
        self.assistant_name
            .clone()
            .unwrap_or_else(|| "SNR".to_string())
    }

    /// Returns the TTS command if configured (non-blank).
    pub fn tts_command(&self) -> Option<String> {
        self.tts_command
            .clone()
            .filter(|c| !c.trim().is_empty())
    }

    /// Returns the STT command if configured (non-blank).
    pub fn stt_command(&self) -> Option<String> {
        self.stt_command
            .clone()
            .filter(|c| !c.trim().is_empty())
    }

    /// Returns true if speech output is configured.
    pub fn is_tts_configured(&self) -> bool {
        self.tts_command().is_some()
    }

    /// Returns true if speech input is configured.
    pub fn is_stt_configured(&self) -> bool {
        self.stt_command().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.response_delay_ms_or_default(), 600);
        assert_eq!(cfg.boot_delay_ms_or_default(), 2000);
        assert_eq!(cfg.assistant_name_or_default(), "SNR");
        assert!(!cfg.is_tts_configured());
        assert!(!cfg.is_stt_configured());
    }

    #[test]
    fn test_blank_commands_count_as_unset() {
        let cfg = AppConfig {
            tts_command: Some("   ".to_string()),
            stt_command: Some(String::new()),
            ..Default::default()
        };
        assert!(!cfg.is_tts_configured());
        assert!(!cfg.is_stt_configured());
    }
}
