//! Core transcription library: audio decoding, Whisper speech recognition,
//! and transcript rendering (SubRip subtitles and a plain-text timeline).

pub mod audio;
pub mod pipeline;
pub mod shared;
pub mod transcript;
