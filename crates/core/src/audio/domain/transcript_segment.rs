/// A recognized utterance with chronological bounds in seconds.
///
/// Segments arrive in the order the recognizer produced them; callers do not
/// re-sort or re-validate them.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptSegment {
    pub start_time: f64,
    pub end_time: f64,
    pub text: String,
}

impl TranscriptSegment {
    pub fn new(start_time: f64, end_time: f64, text: impl Into<String>) -> Self {
        Self {
            start_time,
            end_time,
            text: text.into(),
        }
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_fields() {
        let seg = TranscriptSegment::new(1.0, 1.5, "hello");
        assert_eq!(seg.start_time, 1.0);
        assert_eq!(seg.end_time, 1.5);
        assert_eq!(seg.text, "hello");
    }

    #[test]
    fn test_segment_duration() {
        let seg = TranscriptSegment::new(2.0, 2.8, "test");
        assert_relative_eq!(seg.duration(), 0.8, epsilon = 0.001);
    }
}
