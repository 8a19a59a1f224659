//! Countdown to the wedding instant.

use chrono::{DateTime, FixedOffset, Utc};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Glyphs shown in the day/hour/minute/second slots once the wedding has
/// passed.
pub const PASSED_GLYPHS: [&str; 4] = ["🎊", "🎉", "💑", "💕"];

/// What the four digit slots should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountdownDisplay {
    Counting {
        days: String,
        hours: String,
        minutes: String,
        seconds: String,
    },
    /// Terminal state; stable on every subsequent tick.
    Passed,
}

/// Pure engine: holds the fixed target, recomputes from wall-clock time
/// on demand, so the display is accurate across restarts.
#[derive(Debug, Clone)]
pub struct Countdown {
    target: DateTime<FixedOffset>,
}

impl Countdown {
    pub fn new(target: DateTime<FixedOffset>) -> Self {
        Self { target }
    }

    pub fn display_at(&self, now: DateTime<Utc>) -> CountdownDisplay {
        let remaining = self.target.timestamp_millis() - now.timestamp_millis();
        if remaining < 0 {
            return CountdownDisplay::Passed;
        }
        CountdownDisplay::Counting {
            days: pad2(remaining / MS_PER_DAY),
            hours: pad2(remaining % MS_PER_DAY / MS_PER_HOUR),
            minutes: pad2(remaining % MS_PER_HOUR / MS_PER_MINUTE),
            seconds: pad2(remaining % MS_PER_MINUTE / MS_PER_SECOND),
        }
    }
}

/// Two-digit zero padding; wider values render as-is.
fn pad2(value: i64) -> String {
    format!("{value:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(timestamp: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(timestamp, 0).unwrap()
    }

    fn target(timestamp: i64) -> Countdown {
        Countdown::new(at(timestamp).fixed_offset())
    }

    #[test]
    fn decomposes_ninety_thousand_and_change() {
        // 90_061 s = 1 day, 1 hour, 1 minute, 1 second.
        let countdown = target(1_000_000 + 90_061);
        assert_eq!(
            countdown.display_at(at(1_000_000)),
            CountdownDisplay::Counting {
                days: String::from("01"),
                hours: String::from("01"),
                minutes: String::from("01"),
                seconds: String::from("01"),
            }
        );
    }

    #[test]
    fn past_target_is_terminal_on_every_tick() {
        let countdown = target(1_000);
        assert_eq!(countdown.display_at(at(2_000)), CountdownDisplay::Passed);
        assert_eq!(countdown.display_at(at(3_000)), CountdownDisplay::Passed);
        assert_eq!(countdown.display_at(at(1_000_000)), CountdownDisplay::Passed);
    }

    #[test]
    fn exact_target_instant_still_counts() {
        // remaining == 0 is not yet "passed".
        let countdown = target(5_000);
        assert_eq!(
            countdown.display_at(at(5_000)),
            CountdownDisplay::Counting {
                days: String::from("00"),
                hours: String::from("00"),
                minutes: String::from("00"),
                seconds: String::from("00"),
            }
        );
    }

    #[test]
    fn padding_keeps_two_digits_and_never_truncates() {
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(0), "00");
        assert_eq!(pad2(42), "42");
        assert_eq!(pad2(123), "123");
    }

    #[test]
    fn hundred_plus_days_render_unclipped() {
        let countdown = target(123 * 86_400 + 90);
        match countdown.display_at(at(0)) {
            CountdownDisplay::Counting { days, .. } => assert_eq!(days, "123"),
            other => panic!("unexpected display {other:?}"),
        }
    }
}
