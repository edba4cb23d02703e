/// Format a non-negative seconds value as a SubRip timestamp `HH:MM:SS,mmm`.
///
/// The value is rounded to whole milliseconds before decomposition, so a
/// fractional part at the top of a second carries into the seconds field
/// instead of ever producing a `,1000` millisecond field. Hours widen past
/// two digits only above 99 hours.
pub fn format_timestamp(seconds: f64) -> String {
    let total_ms = (seconds * 1000.0).round() as u64;
    let millis = total_ms % 1000;
    let total_secs = total_ms / 1000;
    let secs = total_secs % 60;
    let minutes = (total_secs / 60) % 60;
    let hours = total_secs / 3600;
    format!("{hours:02}:{minutes:02}:{secs:02},{millis:03}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0.0, "00:00:00,000")]
    #[case::whole_fields(3661.5, "01:01:01,500")]
    #[case::sub_second(1.2, "00:00:01,200")]
    #[case::millis_stay_put(59.999, "00:00:59,999")]
    #[case::millis_carry_into_seconds(59.9999, "00:01:00,000")]
    #[case::minute_boundary(60.0, "00:01:00,000")]
    #[case::hour_boundary(3600.0, "01:00:00,000")]
    fn test_format_timestamp(#[case] seconds: f64, #[case] expected: &str) {
        assert_eq!(format_timestamp(seconds), expected);
    }

    #[test]
    fn test_fields_are_zero_padded() {
        let ts = format_timestamp(7.05);
        assert_eq!(ts, "00:00:07,050");
        assert_eq!(ts.len(), 12);
    }

    #[test]
    fn test_hours_widen_past_two_digits() {
        assert_eq!(format_timestamp(100.0 * 3600.0), "100:00:00,000");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(format_timestamp(12.345), format_timestamp(12.345));
    }
}
