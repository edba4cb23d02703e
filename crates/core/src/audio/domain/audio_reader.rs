use std::path::Path;

use super::audio_segment::AudioSegment;

/// Domain interface for decoding a media file's audio track.
pub trait AudioReader: Send {
    /// Decode the audio track to a mono PCM segment at the given sample rate.
    /// Returns `None` if the file has no audio track.
    fn read_audio(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<Option<AudioSegment>, Box<dyn std::error::Error>>;
}
