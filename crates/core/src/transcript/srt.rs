use crate::audio::domain::transcript_segment::TranscriptSegment;

use super::timestamp::format_timestamp;

/// Render segments as a SubRip document.
///
/// Each block is a 1-based index line, a `start --> end` line, the trimmed
/// text, and a blank separator line.
pub fn render(segments: &[TranscriptSegment]) -> String {
    let mut out = String::new();
    for (idx, segment) in segments.iter().enumerate() {
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            idx + 1,
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
        let expected = "1\n\
                        00:00:00,000 --> 00:00:01,200\n\
                        hello\n\
                        \n\
                        2\n\
                        00:00:01,200 --> 00:00:03,000\n\
                        world\n\
                        \n";
        assert_eq!(render(&segments), expected);
    }

    #[test]
    fn test_render_trims_text() {
        let segments = vec![TranscriptSegment::new(0.0, 0.5, "  padded  ")];
        assert_eq!(render(&segments), "1\n00:00:00,000 --> 00:00:00,500\npadded\n\n");
    }

    #[test]
    fn test_render_empty_input_is_empty() {
        assert_eq!(render(&[]), "");
    }
}
