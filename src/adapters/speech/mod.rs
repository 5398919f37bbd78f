//! Speech adapters. Command-backed TTS/STT with a disabled fallback.

pub mod command;
pub mod disabled;

pub use command::{CommandStt, CommandTts};
pub use disabled::DisabledSpeech;
