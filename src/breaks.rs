//! Break scheduling
//!
//! Both breaks are placed relative to `work_start` only:
//! - morning break: start + 1h30
//! - afternoon break: start + 5h
//!
//! Minute overflow carries into the hour exactly once and hours are never
//! wrapped at midnight, so a 23:45 start yields a "25:15" morning break.
//! A `work_start` that cannot be parsed degrades to a fixed fallback pair.

use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::types::{BreakKind, BreakTime};
use log::{debug, warn};
use std::fmt;

/// Offset of the morning break from the start of work (hours, minutes)
const MORNING_OFFSET: (u32, u32) = (1, 30);

/// Offset of the afternoon break from the start of work (hours, minutes)
const AFTERNOON_OFFSET: (u32, u32) = (5, 0);

/// Hour/minute pair.
///
/// Values produced by [`ClockTime::parse`] are always a valid 24-hour time;
/// values produced by [`ClockTime::shift`] may run past 23.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    /// Parse `HH:MM`. Each field is an integer with an optional sign and any
    /// number of leading zeros, surrounding whitespace ignored. Hour must be
    /// 0-23 and minute 0-59.
    pub fn parse(value: &str) -> Result<Self, PlannerError> {
        let malformed = || PlannerError::MalformedTime(format!("{:?}", value));

        let mut parts = value.split(':');
        let (hour, minute) = match (parts.next(), parts.next(), parts.next()) {
            (Some(h), Some(m), None) => (parse_field(h), parse_field(m)),
            _ => return Err(malformed()),
        };

        match (hour, minute) {
            (Some(hour), Some(minute)) if hour < 24 && minute < 60 => Ok(Self { hour, minute }),
            _ => Err(malformed()),
        }
    }

    /// Add an offset, carrying a minute overflow into the hour once
    pub fn shift(self, hours: u32, minutes: u32) -> Self {
        let mut hour = self.hour + hours;
        let mut minute = self.minute + minutes;
        if minute >= 60 {
            hour += 1;
            minute -= 60;
        }
        Self { hour, minute }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

fn parse_field(field: &str) -> Option<u32> {
    let field = field.trim();
    let (negative, digits) = match field.as_bytes().first() {
        Some(b'-') => (true, &field[1..]),
        Some(b'+') => (false, &field[1..]),
        _ => (false, field),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // Anything left after the leading zeros with more than two digits is out of range
    let significant = digits.trim_start_matches('0');
    if significant.len() > 2 {
        return None;
    }
    let value: u32 = if significant.is_empty() { 0 } else { significant.parse().ok()? };

    if negative && value != 0 {
        return None;
    }
    Some(value)
}

/// Compute the morning and afternoon breaks for a work start time
pub fn compute_breaks(work_start: &str, duration: i64) -> Result<Vec<BreakTime>, PlannerError> {
    let start = ClockTime::parse(work_start)?;

    let morning = start.shift(MORNING_OFFSET.0, MORNING_OFFSET.1);
    let afternoon = start.shift(AFTERNOON_OFFSET.0, AFTERNOON_OFFSET.1);

    Ok(vec![
        BreakTime {
            time: morning.to_string(),
            duration,
            kind: BreakKind::Morning,
        },
        BreakTime {
            time: afternoon.to_string(),
            duration,
            kind: BreakKind::Afternoon,
        },
    ])
}

/// The fixed break pair used when `work_start` is unusable.
///
/// Configured times are re-emitted as zero-padded `HH:MM`, like computed ones.
pub fn fallback_breaks(config: &PlannerConfig, duration: i64) -> Vec<BreakTime> {
    vec![
        BreakTime {
            time: normalize_clock(&config.fallback_morning),
            duration,
            kind: BreakKind::Morning,
        },
        BreakTime {
            time: normalize_clock(&config.fallback_afternoon),
            duration,
            kind: BreakKind::Afternoon,
        },
    ]
}

/// Canonical `HH:MM` form of a clock time; unparseable input is returned as is
pub fn normalize_clock(value: &str) -> String {
    match ClockTime::parse(value) {
        Ok(time) => time.to_string(),
        Err(_) => value.to_string(),
    }
}

/// Compute breaks, substituting the fallback pair on a malformed start time.
/// Always returns exactly two breaks.
pub fn schedule_breaks(config: &PlannerConfig, work_start: &str, duration: i64) -> Vec<BreakTime> {
    match compute_breaks(work_start, duration) {
        Ok(breaks) => {
            debug!(
                "Scheduled breaks at {} and {} for start {}",
                breaks[0].time, breaks[1].time, work_start
            );
            breaks
        }
        Err(e) => {
            warn!("Error generating break times: {}; using fallback breaks", e);
            fallback_breaks(config, duration)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn times(breaks: &[BreakTime]) -> Vec<&str> {
        breaks.iter().map(|b| b.time.as_str()).collect()
    }

    #[test]
    fn test_parse_valid_times() {
        assert_eq!(ClockTime::parse("09:00").unwrap(), ClockTime { hour: 9, minute: 0 });
        assert_eq!(ClockTime::parse("23:59").unwrap(), ClockTime { hour: 23, minute: 59 });
        assert_eq!(ClockTime::parse("0:5").unwrap(), ClockTime { hour: 0, minute: 5 });
        assert_eq!(ClockTime::parse(" 08:15 ").unwrap(), ClockTime { hour: 8, minute: 15 });
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "notatime", "25:99", "24:00", "12:60", "9", "09:00:00", "-1:30", "09:", ":30", "123:00", "0024:00", "+:30", "9 0:00", "99999999999:00"] {
            assert!(
                matches!(ClockTime::parse(input), Err(PlannerError::MalformedTime(_))),
                "expected {:?} to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_parse_accepts_padded_and_signed_fields() {
        assert_eq!(ClockTime::parse("007:15").unwrap(), ClockTime { hour: 7, minute: 15 });
        assert_eq!(ClockTime::parse("07:015").unwrap(), ClockTime { hour: 7, minute: 15 });
        assert_eq!(ClockTime::parse("+9:00").unwrap(), ClockTime { hour: 9, minute: 0 });
        assert_eq!(ClockTime::parse("-0:30").unwrap(), ClockTime { hour: 0, minute: 30 });
        assert_eq!(ClockTime::parse("0000000023:0059").unwrap(), ClockTime { hour: 23, minute: 59 });
    }

    #[test]
    fn test_schedule_with_extra_leading_zeros() {
        let config = PlannerConfig::default();

        for input in ["007:15", "07:015"] {
            let breaks = schedule_breaks(&config, input, 15);
            assert_eq!(times(&breaks), vec!["08:45", "12:15"], "start {:?}", input);
        }
    }

    #[test]
    fn test_shift_single_carry() {
        let start = ClockTime { hour: 9, minute: 45 };
        assert_eq!(start.shift(1, 30), ClockTime { hour: 11, minute: 15 });
        assert_eq!(start.shift(5, 0), ClockTime { hour: 14, minute: 45 });
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(ClockTime { hour: 7, minute: 5 }.to_string(), "07:05");
    }

    #[test]
    fn test_morning_break_for_every_valid_start() {
        for hour in 0..24 {
            for minute in 0..60 {
                let start = format!("{:02}:{:02}", hour, minute);
                let breaks = compute_breaks(&start, 15).unwrap();

                let carry = if minute + 30 >= 60 { 1 } else { 0 };
                let expected = format!("{:02}:{:02}", hour + 1 + carry, (minute + 30) % 60);
                assert_eq!(breaks[0].time, expected, "morning break for {}", start);
                assert_eq!(breaks[0].kind, BreakKind::Morning);
            }
        }
    }

    #[test]
    fn test_afternoon_break_for_every_valid_start() {
        for hour in 0..24 {
            for minute in 0..60 {
                let start = format!("{:02}:{:02}", hour, minute);
                let breaks = compute_breaks(&start, 15).unwrap();

                assert_eq!(breaks[1].time, format!("{:02}:{:02}", hour + 5, minute));
                assert_eq!(breaks[1].kind, BreakKind::Afternoon);
            }
        }
    }

    #[test]
    fn test_late_start_is_not_wrapped() {
        let breaks = compute_breaks("23:45", 10).unwrap();
        assert_eq!(times(&breaks), vec!["25:15", "28:45"]);
    }

    #[test]
    fn test_duration_does_not_move_breaks() {
        let short = compute_breaks("08:20", 5).unwrap();
        let long = compute_breaks("08:20", 45).unwrap();

        assert_eq!(times(&short), times(&long));
        assert_eq!(short[0].duration, 5);
        assert_eq!(long[1].duration, 45);
    }

    #[test]
    fn test_schedule_falls_back_on_malformed_start() {
        let config = PlannerConfig::default();

        for input in ["25:99", "notatime", ""] {
            let breaks = schedule_breaks(&config, input, 20);
            assert_eq!(
                breaks,
                vec![
                    BreakTime {
                        time: "10:30".to_string(),
                        duration: 20,
                        kind: BreakKind::Morning,
                    },
                    BreakTime {
                        time: "14:00".to_string(),
                        duration: 20,
                        kind: BreakKind::Afternoon,
                    },
                ]
            );
        }
    }

    #[test]
    fn test_schedule_uses_configured_fallback() {
        let config = PlannerConfig {
            fallback_morning: "10:00".to_string(),
            fallback_afternoon: "15:30".to_string(),
            ..PlannerConfig::default()
        };

        let breaks = schedule_breaks(&config, "bad", 15);
        assert_eq!(times(&breaks), vec!["10:00", "15:30"]);
    }

    #[test]
    fn test_unpadded_fallback_is_zero_padded() {
        let config = PlannerConfig::from_json(r#"{"fallback_morning": " 9:5"}"#).unwrap();

        let breaks = schedule_breaks(&config, "bad", 15);
        assert_eq!(times(&breaks), vec!["09:05", "14:00"]);
    }

    #[test]
    fn test_normalize_clock() {
        assert_eq!(normalize_clock("7:5"), "07:05");
        assert_eq!(normalize_clock("014:00"), "14:00");
        assert_eq!(normalize_clock("noon"), "noon");
    }
}
