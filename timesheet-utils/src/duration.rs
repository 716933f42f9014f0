use thiserror::Error;

/// Hour value which cannot be rendered as a clock string.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("invalid hour value for clock formatting: {hours}")]
pub struct InvalidClockHours {
    pub hours: f32,
}

/// Formats a non-negative fractional hour value as a zero-padded `HH:MM`
/// clock string.
///
/// The value is truncated to whole minutes first and split afterwards, so
/// `2.5` becomes `02:30` and `0.99` becomes `00:59`. The hour part has no
/// upper bound, accumulated totals render as e.g. `170:45`.
pub fn format_clock_hours(hours: f32) -> Result<String, InvalidClockHours> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(InvalidClockHours { hours });
    }
    let total_minutes = (f64::from(hours) * 60.0).trunc() as u64;
    Ok(format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_hours() {
        assert_eq!(format_clock_hours(0.0).unwrap(), "00:00");
    }

    #[test]
    fn test_whole_hours_are_zero_padded() {
        assert_eq!(format_clock_hours(8.0).unwrap(), "08:00");
        assert_eq!(format_clock_hours(9.75).unwrap(), "09:45");
    }

    #[test]
    fn test_half_hour_fraction() {
        assert_eq!(format_clock_hours(2.5).unwrap(), "02:30");
    }

    #[test]
    fn test_fraction_is_truncated_not_rounded() {
        assert_eq!(format_clock_hours(0.99).unwrap(), "00:59");
        assert_eq!(format_clock_hours(1.999).unwrap(), "01:59");
    }

    #[test]
    fn test_hours_may_exceed_a_day() {
        assert_eq!(format_clock_hours(30.25).unwrap(), "30:15");
        assert_eq!(format_clock_hours(170.75).unwrap(), "170:45");
    }

    #[test]
    fn test_minutes_round_trip_within_one_minute() {
        for hours in [0.25f32, 1.75, 7.5, 23.984, 40.33] {
            let formatted = format_clock_hours(hours).unwrap();
            let (hh, mm) = formatted.split_once(':').unwrap();
            let minutes = hh.parse::<u64>().unwrap() * 60 + mm.parse::<u64>().unwrap();
            let diff = f64::from(hours) * 60.0 - minutes as f64;
            assert!(
                (0.0..1.0).contains(&diff),
                "{hours} formatted as {formatted}, off by {diff} minutes"
            );
        }
    }

    #[test]
    fn test_negative_hours_are_rejected() {
        assert_eq!(
            format_clock_hours(-0.5),
            Err(InvalidClockHours { hours: -0.5 })
        );
    }

    #[test]
    fn test_non_finite_hours_are_rejected() {
        assert!(format_clock_hours(f32::NAN).is_err());
        assert!(format_clock_hours(f32::INFINITY).is_err());
    }
}
