//! Error types for the babysitter pay engine.
//!
//! Every rejection the engine can produce is a distinct variant of
//! [`EngineError`], carrying the input that caused it.

use thiserror::Error;

/// The main error type for the babysitter pay engine.
///
/// All fallible operations return this error type. Nothing is retried or
/// corrected internally; each variant names exactly one violated rule.
///
/// # Example
///
/// ```
/// use babysitter_pay::error::EngineError;
///
/// let error = EngineError::OutOfWindow {
///     input: "4:59 PM".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Time '4:59 PM' is outside working hours (5:00 PM to 4:00 AM)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A family was assigned to a job that already has one.
    #[error("Babysitter is already booked by family {family} tonight")]
    AlreadyAssigned {
        /// The family already holding the job.
        family: char,
    },

    /// The family code is not one of A, B or C.
    #[error("Invalid family code: '{code}'")]
    InvalidFamily {
        /// The rejected code.
        code: String,
    },

    /// The time text could not be parsed as "h:mm AM/PM".
    #[error("Malformed time '{input}': expected format like '5:00 PM'")]
    MalformedTime {
        /// The rejected text.
        input: String,
    },

    /// The time has a non-zero minute component.
    #[error("Time '{input}' is not on the hour (minute {minute})")]
    FractionalHour {
        /// The rejected text.
        input: String,
        /// The minute that was parsed.
        minute: u32,
    },

    /// The time falls outside the working window.
    #[error("Time '{input}' is outside working hours (5:00 PM to 4:00 AM)")]
    OutOfWindow {
        /// The rejected text.
        input: String,
    },

    /// A start or end time was read before being set.
    #[error("{field} time has not been set")]
    TimeNotSet {
        /// Which endpoint was read ("Start" or "End").
        field: &'static str,
    },

    /// Pay was calculated before a family was assigned.
    #[error("Cannot calculate pay: no family has been assigned")]
    FamilyNotSet,

    /// Pay was calculated before both start and end were set.
    #[error("Cannot calculate pay: {field} time has not been set")]
    ScheduleNotSet {
        /// The missing endpoint ("start" or "end").
        field: &'static str,
    },

    /// The end time resolves earlier than the start time.
    #[error("End time {end} is before start time {start}")]
    EndBeforeStart {
        /// The formatted start time.
        start: String,
        /// The formatted end time.
        end: String,
    },

    /// No rate schedule exists for the family.
    #[error("Unknown family: '{family}'")]
    UnknownFamily {
        /// The family code without a schedule.
        family: String,
    },

    /// A family's schedule has no tier covering the given hour.
    #[error("No rate found for family {family} at hour {hour}")]
    RateNotFound {
        /// The family being billed.
        family: char,
        /// The clock hour (0-23) being billed.
        hour: u32,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rate table parsed but does not cover the working window.
    #[error("Invalid rate table: {message}")]
    InvalidRateTable {
        /// A description of the gap or overlap.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
