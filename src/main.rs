//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; resolution is delegated to ResponseResolver.

use dotenv::dotenv;
use snr_chat::adapters::speech::{CommandStt, CommandTts, DisabledSpeech};
use snr_chat::adapters::system::{SystemClock, ThreadRandom};
use snr_chat::adapters::ui::tui::TuiInputPort;
use snr_chat::domain::ResponseCatalog;
use snr_chat::ports::{Clock, InputPort, RandomSource, SpeechInputPort, SpeechSynthPort};
use snr_chat::usecases::{ChatService, ResponseResolver};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = &env_loaded {
        info!(path = %path.display(), "loaded .env");
    }

    snr_chat::adapters::ui::init_ui();

    let cfg = snr_chat::shared::config::AppConfig::load().unwrap_or_default();

    // --- Response catalog: built-in unless a JSON override is configured ---
    let catalog = match cfg.catalog.as_deref() {
        Some(path) => {
            let path = PathBuf::from(path);
            info!(path = %path.display(), "loading response catalog override");
            ResponseCatalog::from_json_file(&path)
                .map_err(|e| anyhow::anyhow!("catalog override: {}", e))?
        }
        None => ResponseCatalog::builtin(),
    };

    // --- Resolver with injected clock and random source ---
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let random: Arc<dyn RandomSource> = Arc::new(ThreadRandom);
    let resolver = ResponseResolver::new(catalog, clock, random);

    // --- Speech adapters: command-backed when configured, otherwise disabled ---
    let synth: Arc<dyn SpeechSynthPort> =
        match cfg.tts_command().and_then(|c| CommandTts::from_command(&c)) {
            Some(tts) => {
                info!("speech output enabled via SNR_CHAT_TTS_COMMAND");
                Arc::new(tts)
            }
            None => {
                warn!("SNR_CHAT_TTS_COMMAND not set; speech output disabled");
                Arc::new(DisabledSpeech)
            }
        };
    let recognizer: Arc<dyn SpeechInputPort> =
        match cfg.stt_command().and_then(|c| CommandStt::from_command(&c)) {
            Some(stt) => {
                info!("speech input enabled via SNR_CHAT_STT_COMMAND");
                Arc::new(stt)
            }
            None => {
                warn!("SNR_CHAT_STT_COMMAND not set; speech input disabled");
                Arc::new(DisabledSpeech)
            }
        };

    let response_delay = Duration::from_millis(cfg.response_delay_ms_or_default());
    info!(
        response_delay_ms = response_delay.as_millis() as u64,
        "reply display delay"
    );

    let chat_service = Arc::new(ChatService::new(resolver, synth, recognizer, response_delay));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        Arc::clone(&chat_service),
        cfg.assistant_name_or_default(),
        Duration::from_millis(cfg.boot_delay_ms_or_default()),
    ));

    // --- Run (boot -> welcome -> chat loop) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
