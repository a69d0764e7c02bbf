use time::macros::format_description;
use time::Time;

const NOT_AVAILABLE: &str = "N/A";
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Format a duration in seconds as `HH:MM:SS`.
///
/// The value is read as a UTC timestamp and only the time of day is
/// printed, so anything of 24h or more wraps (`90000` gives `"01:00:00"`).
/// Clients rely on the fixed width; do not widen the hour field.
///
/// Missing, NaN and infinite values give `"N/A"`. Every finite value wraps,
/// however large.
pub fn format_duration(seconds: Option<f64>) -> String {
    let Some(seconds) = seconds.filter(|s| s.is_finite()) else {
        return NOT_AVAILABLE.to_string();
    };

    // floor() yields a whole number, so the remainder is exact and in 0..86400
    let of_day = seconds.floor().rem_euclid(SECONDS_PER_DAY) as u32;

    let format = format_description!("[hour]:[minute]:[second]");
    Time::from_hms((of_day / 3600) as u8, (of_day / 60 % 60) as u8, (of_day % 60) as u8)
        .ok()
        .and_then(|t| t.format(&format).ok())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_seconds() {
        assert_eq!(format_duration(Some(125.0)), "00:02:05");
        assert_eq!(format_duration(Some(42.0)), "00:00:42");
        assert_eq!(format_duration(Some(0.0)), "00:00:00");
        assert_eq!(format_duration(Some(3599.0)), "00:59:59");
        assert_eq!(format_duration(Some(86399.0)), "23:59:59");
    }

    #[test]
    fn test_fractional_seconds_are_floored() {
        assert_eq!(format_duration(Some(42.9)), "00:00:42");
        assert_eq!(format_duration(Some(-0.5)), "23:59:59");
        assert_eq!(format_duration(Some(-1.0)), "23:59:59");
    }

    #[test]
    fn test_wraps_past_a_day() {
        assert_eq!(format_duration(Some(86400.0)), "00:00:00");
        assert_eq!(format_duration(Some(90000.0)), "01:00:00");
    }

    #[test]
    fn test_wraps_beyond_calendar_range() {
        assert_eq!(format_duration(Some(1e12)), "01:46:40");

        let huge = format_duration(Some(1e300));
        assert_eq!(huge.len(), 8);
        assert_ne!(huge, "N/A");
    }

    #[test]
    fn test_missing_or_non_finite() {
        assert_eq!(format_duration(None), "N/A");
        assert_eq!(format_duration(Some(f64::NAN)), "N/A");
        assert_eq!(format_duration(Some(f64::INFINITY)), "N/A");
        assert_eq!(format_duration(Some(f64::NEG_INFINITY)), "N/A");
    }
}
