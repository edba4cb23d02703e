pub const WHISPER_MODEL_NAME: &str = "ggml-tiny.en.bin";
pub const WHISPER_MODEL_URL: &str =
    "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-tiny.en.bin";

/// Whisper models operate on 16 kHz mono PCM.
pub const WHISPER_SAMPLE_RATE: u32 = 16000;

pub const DEFAULT_INPUT_FILENAME: &str = "output.mp3";
pub const SRT_FILENAME: &str = "transcript.srt";
pub const TIMELINE_FILENAME: &str = "transcript.txt";
