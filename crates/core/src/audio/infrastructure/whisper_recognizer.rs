use std::path::{Path, PathBuf};

use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::audio::domain::audio_reader::AudioReader;
use crate::audio::domain::speech_recognizer::SpeechRecognizer;
use crate::audio::domain::transcript_segment::TranscriptSegment;
use crate::shared::constants::WHISPER_SAMPLE_RATE;

/// Speech recognizer using whisper.cpp via whisper-rs.
///
/// Decodes the input file through an [`AudioReader`] and produces
/// utterance-level timestamped segments. The model is loaded lazily inside
/// `transcribe`, so construction stays cheap.
pub struct WhisperRecognizer {
    model_path: PathBuf,
    reader: Box<dyn AudioReader>,
    language: String,
}

impl std::fmt::Debug for WhisperRecognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhisperRecognizer")
            .field("model_path", &self.model_path)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl WhisperRecognizer {
    pub fn new(
        model_path: &Path,
        reader: Box<dyn AudioReader>,
        language: &str,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        if !model_path.exists() {
            return Err(format!("Whisper model not found at: {}", model_path.display()).into());
        }
        Ok(Self {
            model_path: model_path.to_path_buf(),
            reader,
            language: language.to_string(),
        })
    }
}

impl SpeechRecognizer for WhisperRecognizer {
    fn transcribe(
        &self,
        audio: &Path,
    ) -> Result<Vec<TranscriptSegment>, Box<dyn std::error::Error>> {
        let pcm = self
            .reader
            .read_audio(audio, WHISPER_SAMPLE_RATE)?
            .ok_or_else(|| format!("No audio stream in: {}", audio.display()))?;
        log::debug!("decoded {:.1}s of audio from {}", pcm.duration(), audio.display());

        let ctx = WhisperContext::new_with_params(
            self.model_path.to_str().ok_or("Invalid model path")?,
            WhisperContextParameters::default(),
        )
        .map_err(|e| format!("Failed to load Whisper model: {e}"))?;

        let mut state = ctx
            .create_state()
            .map_err(|e| format!("Failed to create Whisper state: {e}"))?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 0 });
        params.set_language(Some(self.language.as_str()));
        params.set_translate(false);
        params.set_token_timestamps(true);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_n_threads(num_cpus().min(4) as i32);

        state
            .full(params, pcm.samples())
            .map_err(|e| format!("Whisper inference failed: {e}"))?;

        let mut segments = Vec::new();
        let num_segments = state.full_n_segments();

        for seg_idx in 0..num_segments {
            let segment = match state.get_segment(seg_idx) {
                Some(s) => s,
                None => continue,
            };

            // Assemble the segment text and time bounds from its tokens,
            // skipping special markers like [_BEG_] or <|endoftext|>.
            let mut text = String::new();
            let mut start_cs: Option<i64> = None;
            let mut end_cs: i64 = 0;

            let n_tokens = segment.n_tokens();
            for tok_idx in 0..n_tokens {
                let token = match segment.get_token(tok_idx) {
                    Some(t) => t,
                    None => continue,
                };
                let piece = match token.to_str() {
                    Ok(t) => t,
                    Err(_) => continue,
                };
                let probe = piece.trim();
                if probe.starts_with('[') || probe.starts_with('<') {
                    continue;
                }

                let data = token.token_data();
                if start_cs.is_none() {
                    start_cs = Some(data.t0);
                }
                end_cs = end_cs.max(data.t1);
                text.push_str(piece);
            }

            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }
            let start_cs = match start_cs {
                Some(cs) => cs,
                None => continue,
            };

            // Token timestamps are in centiseconds (10ms units).
            let start_time = start_cs as f64 / 100.0;
            let end_time = end_cs as f64 / 100.0;
            if end_time <= start_time {
                continue;
            }

            segments.push(TranscriptSegment::new(start_time, end_time, trimmed));
        }

        Ok(segments)
    }
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
