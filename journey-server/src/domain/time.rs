//! Scheduled clock times.
//!
//! Timetables give times as "HH:MM" strings with no date attached. Stop
//! order along a service is carried by sequence numbers, so a `ClockTime`
//! is only ever compared against other times at the same station.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A scheduled time of day at a stop, at minute resolution.
///
/// # Examples
///
/// ```
/// use journey_server::domain::ClockTime;
///
/// let time = ClockTime::parse_hhmm("14:30").unwrap();
/// assert_eq!(time.to_string(), "14:30");
/// assert!(ClockTime::parse_hhmm("09:15").unwrap() < time);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use journey_server::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse_hhmm("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(ClockTime::parse_hhmm("1430").is_err());
    /// assert!(ClockTime::parse_hhmm("14:3").is_err());
    /// assert!(ClockTime::parse_hhmm("25:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Create a time from hour and minute components.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes since midnight.
    pub fn minutes_of_day(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// Returns this time shifted forward by `mins`, or `None` if that
    /// would pass midnight.
    pub fn checked_add_mins(&self, mins: u32) -> Option<Self> {
        let total = self.minutes_of_day().checked_add(mins)?;
        if total >= 24 * 60 {
            return None;
        }
        Self::from_hm(total / 60, total % 60)
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        let t = ClockTime::parse_hhmm("07:05").unwrap();
        assert_eq!(t.hour(), 7);
        assert_eq!(t.minute(), 5);
        assert_eq!(t.minutes_of_day(), 425);
    }

    #[test]
    fn reject_malformed() {
        assert!(ClockTime::parse_hhmm("").is_err());
        assert!(ClockTime::parse_hhmm("7:05").is_err());
        assert!(ClockTime::parse_hhmm("07-05").is_err());
        assert!(ClockTime::parse_hhmm("ab:cd").is_err());
        assert!(ClockTime::parse_hhmm("12:60").is_err());
        assert!(ClockTime::parse_hhmm("24:00").is_err());
    }

    #[test]
    fn ordering_is_time_of_day() {
        let early = ClockTime::parse_hhmm("06:00").unwrap();
        let late = ClockTime::parse_hhmm("22:30").unwrap();
        assert!(early < late);
        assert_eq!(early, ClockTime::from_hm(6, 0).unwrap());
    }

    #[test]
    fn add_minutes_within_day() {
        let t = ClockTime::parse_hhmm("10:50").unwrap();
        assert_eq!(t.checked_add_mins(15).unwrap().to_string(), "11:05");
        assert_eq!(t.checked_add_mins(0), Some(t));
    }

    #[test]
    fn add_minutes_past_midnight_is_none() {
        let t = ClockTime::parse_hhmm("23:50").unwrap();
        assert!(t.checked_add_mins(10).is_none());
    }

    #[test]
    fn display_and_debug() {
        let t = ClockTime::parse_hhmm("09:07").unwrap();
        assert_eq!(format!("{t}"), "09:07");
        assert_eq!(format!("{t:?}"), "ClockTime(09:07)");
    }
}
