use std::path::Path;

use super::transcript_segment::TranscriptSegment;

/// Domain interface for speech-to-text transcription.
///
/// Implementations run inference on an audio file and return timestamped
/// segments in chronological order.
pub trait SpeechRecognizer: Send {
    fn transcribe(
        &self,
        audio: &Path,
    ) -> Result<Vec<TranscriptSegment>, Box<dyn std::error::Error>>;
}
