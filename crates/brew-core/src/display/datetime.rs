//! Date and time display utilities.
//!
//! Three wrappers cover the formats the interface uses: full timestamps
//! in the system timezone, long-form calendar dates, and 12-hour clock
//! times.

use std::fmt;

use jiff::civil::{Date, Time};
use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that provides system timezone formatting
/// via the `Display` trait.
///
/// # Format
///
/// `YYYY-MM-DD HH:MM:SS TZ`, zero-padded, 24-hour clock, with the
/// timezone abbreviation (e.g. UTC, EST, JST).
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Long-form calendar date, e.g. `Friday, August 7, 2026`.
pub struct LongDate(pub Date);

impl fmt::Display for LongDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} {}, {}",
            self.0.strftime("%A"),
            self.0.strftime("%B"),
            self.0.day(),
            self.0.year()
        )
    }
}

/// Twelve-hour clock time, e.g. `6:00 PM`.
pub struct ClockTime(pub Time);

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = self.0.hour();
        let (hour12, meridiem) = match hour {
            0 => (12, "AM"),
            1..=11 => (hour, "AM"),
            12 => (12, "PM"),
            _ => (hour - 12, "PM"),
        };
        write!(f, "{}:{:02} {}", hour12, self.0.minute(), meridiem)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;

    #[test]
    fn test_long_date_format() {
        let formatted = format!("{}", LongDate(date(2026, 8, 7)));
        assert_eq!(formatted, "Friday, August 7, 2026");
    }

    #[test]
    fn test_clock_time_edges() {
        assert_eq!(format!("{}", ClockTime(time(18, 0, 0, 0))), "6:00 PM");
        assert_eq!(format!("{}", ClockTime(time(8, 30, 0, 0))), "8:30 AM");
        assert_eq!(format!("{}", ClockTime(time(0, 0, 0, 0))), "12:00 AM");
        assert_eq!(format!("{}", ClockTime(time(12, 0, 0, 0))), "12:00 PM");
    }

    #[test]
    fn test_local_date_time_shape() {
        let timestamp = Timestamp::from_second(1640995200).expect("valid"); // 2022-01-01 UTC
        let output = format!("{}", LocalDateTime(&timestamp));
        let parts: Vec<&str> = output.split_whitespace().collect();
        assert_eq!(parts.len(), 3); // Date, Time, Timezone
        assert!(parts[1].contains(':'));
    }
}
