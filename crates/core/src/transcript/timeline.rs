use crate::audio::domain::transcript_segment::TranscriptSegment;

use super::timestamp::format_timestamp;

/// Render segments as a plain-text timeline, one `[start -> end] text` line
/// per segment.
pub fn render(segments: &[TranscriptSegment]) -> String {
    let mut out = String::new();
    for segment in segments {
        out.push_str(&format!(
            "[{} -> {}] {}\n",
            format_timestamp(segment.start_time),
            format_timestamp(segment.end_time),
            segment.text.trim(),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_two_segments() {
        let segments = vec![
            TranscriptSegment::new(0.0, 1.2, "hello"),
            TranscriptSegment::new(1.2, 3.0, "world"),
        ];
        let expected = "[00:00:00,000 -> 00:00:01,200] hello\n\
                        [00:00:01,200 -> 00:00:03,000] world\n";
        assert_eq!(render(&segments), expected);
    }

    #[test]
    fn test_render_trims_text() {
        let segments = vec![TranscriptSegment::new(0.0, 0.5, " padded ")];
        assert_eq!(render(&segments), "[00:00:00,000 -> 00:00:00,500] padded\n");
    }

    #[test]
    fn test_render_empty_input_is_empty() {
        assert_eq!(render(&[]), "");
    }
}
