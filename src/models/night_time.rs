//! Wrap-aware time points within a single working night.
//!
//! A [`NightTime`] is a whole-hour time of day between 5:00 PM and 4:00 AM,
//! tagged with whether it falls before or after midnight. Ordering compares
//! the day offset first, so 1:00 AM sorts after 11:00 PM.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Format accepted when parsing time text ("5:00 PM", "12:00 AM").
pub const TIME_INPUT_FORMAT: &str = "%I:%M %p";

/// Format produced when displaying a time ("5:00 PM", no leading zero).
pub const TIME_DISPLAY_FORMAT: &str = "%-I:%M %p";

/// First clock hour of the working window (5:00 PM).
pub const WINDOW_START_HOUR: u32 = 17;

/// Last clock hour of the working window (4:00 AM, inclusive).
pub const WINDOW_END_HOUR: u32 = 4;

/// Whether a time falls on the starting evening or after midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOffset {
    /// 5:00 PM through 11:00 PM.
    Evening,
    /// 12:00 AM through 4:00 AM.
    AfterMidnight,
}

/// A validated whole-hour point in the working night.
///
/// # Example
///
/// ```
/// use babysitter_pay::models::{DayOffset, NightTime};
///
/// let late = NightTime::parse("1:00 AM").unwrap();
/// let early = NightTime::parse("11:00 PM").unwrap();
///
/// assert_eq!(late.day_offset(), DayOffset::AfterMidnight);
/// assert!(late > early);
/// assert_eq!(late.hours_since(early), Some(2));
/// assert_eq!(late.to_string(), "1:00 AM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct NightTime {
    // Field order matters for the derived ordering.
    day_offset: DayOffset,
    time: NaiveTime,
}

impl NightTime {
    /// Parses and validates time text such as "5:00 PM".
    ///
    /// Checks run in this order:
    /// 1. The text must parse as a 12-hour time with meridiem (`MalformedTime`)
    /// 2. The time must lie within 5:00 PM to 4:00 AM inclusive (`OutOfWindow`)
    /// 3. The minute must be zero (`FractionalHour`)
    ///
    /// The window check runs before the minute check, so "4:01 AM" is
    /// reported as out of window rather than fractional.
    pub fn parse(text: &str) -> EngineResult<Self> {
        let time = NaiveTime::parse_from_str(text.trim(), TIME_INPUT_FORMAT).map_err(|_| {
            EngineError::MalformedTime {
                input: text.to_string(),
            }
        })?;

        let day_offset = if time.hour() >= WINDOW_START_HOUR {
            DayOffset::Evening
        } else if time.hour() < WINDOW_END_HOUR
            || (time.hour() == WINDOW_END_HOUR && time.minute() == 0 && time.second() == 0)
        {
            DayOffset::AfterMidnight
        } else {
            return Err(EngineError::OutOfWindow {
                input: text.to_string(),
            });
        };

        if time.minute() != 0 || time.second() != 0 {
            return Err(EngineError::FractionalHour {
                input: text.to_string(),
                minute: time.minute(),
            });
        }

        Ok(Self { day_offset, time })
    }

    /// Returns the clock hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute, which is always zero for a validated time.
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Returns whether this time is on the starting evening or after midnight.
    pub fn day_offset(&self) -> DayOffset {
        self.day_offset
    }

    /// Returns the underlying time of day.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Returns whole hours elapsed since 5:00 PM on the starting evening (0..=11).
    pub fn timeline_hour(&self) -> u32 {
        match self.day_offset {
            DayOffset::Evening => self.hour() - WINDOW_START_HOUR,
            DayOffset::AfterMidnight => self.hour() + (24 - WINDOW_START_HOUR),
        }
    }

    /// Returns the time `hours` later on the night timeline, wrapping the
    /// clock past midnight. The result must stay within the working window.
    pub(crate) fn plus_hours(&self, hours: u32) -> NightTime {
        let timeline_hour = self.timeline_hour() + hours;
        let day_offset = if timeline_hour < 24 - WINDOW_START_HOUR {
            DayOffset::Evening
        } else {
            DayOffset::AfterMidnight
        };
        let (time, _) = self
            .time
            .overflowing_add_signed(Duration::hours(i64::from(hours)));
        Self { day_offset, time }
    }

    /// Returns the whole hours from `earlier` to `self`, or `None` if
    /// `earlier` is actually later on the night timeline.
    pub fn hours_since(&self, earlier: NightTime) -> Option<u32> {
        self.timeline_hour().checked_sub(earlier.timeline_hour())
    }
}

impl fmt::Display for NightTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time.format(TIME_DISPLAY_FORMAT))
    }
}

impl FromStr for NightTime {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NightTime> for String {
    fn from(time: NightTime) -> Self {
        time.to_string()
    }
}

impl TryFrom<String> for NightTime {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_evening_time() {
        let time = NightTime::parse("5:00 PM").unwrap();
        assert_eq!(time.hour(), 17);
        assert_eq!(time.minute(), 0);
        assert_eq!(time.day_offset(), DayOffset::Evening);
        assert_eq!(time.timeline_hour(), 0);
    }

    #[test]
    fn test_parse_midnight_is_after_midnight() {
        let time = NightTime::parse("12:00 AM").unwrap();
        assert_eq!(time.hour(), 0);
        assert_eq!(time.day_offset(), DayOffset::AfterMidnight);
        assert_eq!(time.timeline_hour(), 7);
    }

    #[test]
    fn test_parse_window_end_boundary() {
        let time = NightTime::parse("4:00 AM").unwrap();
        assert_eq!(time.hour(), 4);
        assert_eq!(time.day_offset(), DayOffset::AfterMidnight);
        assert_eq!(time.timeline_hour(), 11);
    }

    #[test]
    fn test_parse_accepts_two_digit_hour_and_lowercase_meridiem() {
        let time = NightTime::parse("11:00 pm").unwrap();
        assert_eq!(time.hour(), 23);

        let time = NightTime::parse("02:00 AM").unwrap();
        assert_eq!(time.hour(), 2);
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        for input in ["", "five o'clock", "17:00", "13:00 PM", "5 PM", "5:00 XM"] {
            match NightTime::parse(input) {
                Err(EngineError::MalformedTime { input: rejected }) => {
                    assert_eq!(rejected, input);
                }
                other => panic!("Expected MalformedTime for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_parse_rejects_times_outside_window() {
        for input in ["4:59 PM", "4:01 AM", "5:00 AM", "12:00 PM", "9:00 AM", "4:00 PM"] {
            match NightTime::parse(input) {
                Err(EngineError::OutOfWindow { .. }) => {}
                other => panic!("Expected OutOfWindow for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_parse_rejects_fractional_hour_inside_window() {
        match NightTime::parse("5:15 PM") {
            Err(EngineError::FractionalHour { input, minute }) => {
                assert_eq!(input, "5:15 PM");
                assert_eq!(minute, 15);
            }
            other => panic!("Expected FractionalHour, got {:?}", other),
        }

        assert!(matches!(
            NightTime::parse("3:30 AM"),
            Err(EngineError::FractionalHour { minute: 30, .. })
        ));
    }

    #[test]
    fn test_ordering_is_wrap_aware() {
        let eleven_pm = NightTime::parse("11:00 PM").unwrap();
        let one_am = NightTime::parse("1:00 AM").unwrap();
        let five_pm = NightTime::parse("5:00 PM").unwrap();

        assert!(five_pm < eleven_pm);
        assert!(eleven_pm < one_am);
        assert_eq!(one_am.hours_since(five_pm), Some(8));
        assert_eq!(five_pm.hours_since(one_am), None);
    }

    #[test]
    fn test_plus_hours_wraps_clock() {
        let ten_pm = NightTime::parse("10:00 PM").unwrap();

        let one_am = ten_pm.plus_hours(3);
        assert_eq!(one_am, NightTime::parse("1:00 AM").unwrap());
        assert_eq!(ten_pm.plus_hours(1).day_offset(), DayOffset::Evening);
        assert_eq!(ten_pm.plus_hours(0), ten_pm);
    }

    #[test]
    fn test_display_has_no_leading_zero() {
        assert_eq!(NightTime::parse("09:00 PM").unwrap().to_string(), "9:00 PM");
        assert_eq!(NightTime::parse("12:00 AM").unwrap().to_string(), "12:00 AM");
    }

    #[test]
    fn test_serializes_as_display_string() {
        let time = NightTime::parse("10:00 PM").unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, "\"10:00 PM\"");

        let parsed: NightTime = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, time);
    }

    #[test]
    fn test_deserialize_rejects_out_of_window() {
        let result: Result<NightTime, _> = serde_json::from_str("\"10:00 AM\"");
        assert!(result.is_err());
    }
}
