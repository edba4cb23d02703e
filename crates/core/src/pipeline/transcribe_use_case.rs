use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::audio::domain::speech_recognizer::SpeechRecognizer;
use crate::shared::constants::{SRT_FILENAME, TIMELINE_FILENAME};
use crate::transcript::{srt, timeline};

#[derive(Error, Debug)]
pub enum TranscribeError {
    #[error("input audio not found: {0}")]
    MissingInput(PathBuf),
    #[error("speech recognition failed: {0}")]
    Recognition(#[source] Box<dyn std::error::Error>),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("expected output missing after write: {0}")]
    MissingOutput(PathBuf),
}

/// What a completed run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Both transcript files were written.
    Written { segments: usize },
    /// Both outputs already existed and `force` was off; nothing ran.
    SkippedExisting,
}

/// One-shot transcription orchestrator.
///
/// Runs a single end-to-end pass: skip if both outputs already exist (unless
/// forced), check the input, invoke the recognizer once, render and write the
/// SubRip and timeline files, then verify both landed on disk. No retries and
/// no cleanup of partial outputs on failure.
pub struct TranscribeUseCase {
    recognizer: Box<dyn SpeechRecognizer>,
    force: bool,
}

/// True when both transcript files already exist in `out_dir`.
///
/// `run` consults this for its skip guard; callers can check it first to
/// avoid expensive setup (like a model download) for a run that would skip.
pub fn outputs_present(out_dir: &Path) -> bool {
    out_dir.join(SRT_FILENAME).exists() && out_dir.join(TIMELINE_FILENAME).exists()
}

impl TranscribeUseCase {
    pub fn new(recognizer: Box<dyn SpeechRecognizer>, force: bool) -> Self {
        Self { recognizer, force }
    }

    pub fn run(&self, input: &Path, out_dir: &Path) -> Result<RunOutcome, TranscribeError> {
        let srt_path = out_dir.join(SRT_FILENAME);
        let timeline_path = out_dir.join(TIMELINE_FILENAME);

        // Existing outputs are trusted without content validation; `force`
        // is the explicit way to overwrite them.
        if !self.force && outputs_present(out_dir) {
            log::info!(
                "transcripts already present in {}, skipping",
                out_dir.display()
            );
            return Ok(RunOutcome::SkippedExisting);
        }

        if !input.exists() {
            return Err(TranscribeError::MissingInput(input.to_path_buf()));
        }

        log::info!("transcribing {}", input.display());
        let segments = self
            .recognizer
            .transcribe(input)
            .map_err(TranscribeError::Recognition)?;
        log::info!("recognized {} segments", segments.len());

        write_transcript(&srt_path, &srt::render(&segments))?;
        write_transcript(&timeline_path, &timeline::render(&segments))?;

        for path in [&srt_path, &timeline_path] {
            if !path.exists() {
                return Err(TranscribeError::MissingOutput(path.clone()));
            }
        }

        log::info!(
            "wrote {} and {}",
            srt_path.display(),
            timeline_path.display()
        );
        Ok(RunOutcome::Written {
            segments: segments.len(),
        })
    }
}

fn write_transcript(path: &Path, contents: &str) -> Result<(), TranscribeError> {
    fs::write(path, contents).map_err(|source| TranscribeError::Write {
        path: path.to_path_buf(),
        source,
    })
}
