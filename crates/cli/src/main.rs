use std::path::PathBuf;
use std::process;

use clap::Parser;

use audioscribe_core::audio::infrastructure::ffmpeg_audio_reader::FfmpegAudioReader;
use audioscribe_core::audio::infrastructure::whisper_recognizer::WhisperRecognizer;
use audioscribe_core::pipeline::transcribe_use_case::{
    outputs_present, RunOutcome, TranscribeUseCase,
};
use audioscribe_core::shared::constants::{
    DEFAULT_INPUT_FILENAME, WHISPER_MODEL_NAME, WHISPER_MODEL_URL,
};
use audioscribe_core::shared::model_resolver;

/// Transcribe an audio file to SubRip subtitles and a plain-text timeline.
#[derive(Parser)]
#[command(name = "audioscribe")]
struct Cli {
    /// Input audio file.
    #[arg(default_value = DEFAULT_INPUT_FILENAME)]
    input: PathBuf,

    /// Directory where transcript.srt and transcript.txt are written.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Path to a ggml Whisper model (resolved from cache or downloaded otherwise).
    #[arg(long)]
    model: Option<PathBuf>,

    /// Re-transcribe even if both transcript files already exist.
    #[arg(long)]
    force: bool,

    /// Spoken language passed to the recognizer.
    #[arg(long, default_value = "en")]
    language: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Skip before touching the model: a run that would skip must succeed
    // even when the model is unresolvable (offline, bad --model path).
    if !cli.force && outputs_present(&cli.out_dir) {
        log::info!(
            "Transcripts already exist in {}, nothing to do",
            cli.out_dir.display()
        );
        return Ok(());
    }

    let model_path = match cli.model {
        Some(path) => path,
        None => {
            log::info!("Resolving model: {WHISPER_MODEL_NAME}");
            let path = model_resolver::resolve(
                WHISPER_MODEL_NAME,
                WHISPER_MODEL_URL,
                None,
                Some(Box::new(download_progress)),
            )?;
            eprintln!();
            path
        }
    };

    let recognizer =
        WhisperRecognizer::new(&model_path, Box::new(FfmpegAudioReader), &cli.language)?;
    let use_case = TranscribeUseCase::new(Box::new(recognizer), cli.force);

    match use_case.run(&cli.input, &cli.out_dir)? {
        RunOutcome::Written { segments } => {
            log::info!(
                "Transcribed {segments} segments to {}",
                cli.out_dir.display()
            );
        }
        RunOutcome::SkippedExisting => {
            log::info!(
                "Transcripts already exist in {}, nothing to do",
                cli.out_dir.display()
            );
        }
    }

    Ok(())
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading Whisper model... {pct}%");
    } else {
        eprint!("\rDownloading Whisper model... {downloaded} bytes");
    }
}
