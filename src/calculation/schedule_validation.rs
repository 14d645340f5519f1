//! Compute-time schedule validation.
//!
//! Each setter validates its own field as it arrives. This module performs
//! the checks that need the whole job: that a family is assigned, that both
//! endpoints exist, and that the end does not precede the start once
//! overnight wraparound is resolved.

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Family, NightTime};

/// A validated `[start, end)` interval on the night timeline.
///
/// `end` is never earlier than `start`; they may be equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftInterval {
    start: NightTime,
    end: NightTime,
}

impl ShiftInterval {
    /// Creates an interval, failing with `EndBeforeStart` if `end < start`.
    pub fn new(start: NightTime, end: NightTime) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::EndBeforeStart {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Returns the start of the interval.
    pub fn start(&self) -> NightTime {
        self.start
    }

    /// Returns the end of the interval.
    pub fn end(&self) -> NightTime {
        self.end
    }

    /// Returns the whole hours in the interval.
    pub fn hours(&self) -> u32 {
        self.end.timeline_hour() - self.start.timeline_hour()
    }
}

/// The result of compute-time validation, including the audit step.
#[derive(Debug, Clone)]
pub struct ScheduleValidation {
    /// The family to bill.
    pub family: Family,
    /// The validated interval.
    pub interval: ShiftInterval,
    /// The audit step recording this validation.
    pub audit_step: AuditStep,
}

/// Validates a candidate job state before pay accumulation.
///
/// Checks run in this order:
/// 1. A family is assigned (`FamilyNotSet`)
/// 2. Start and end are both set (`ScheduleNotSet`)
/// 3. End is not earlier than start on the night timeline (`EndBeforeStart`)
///
/// # Examples
///
/// ```
/// use babysitter_pay::calculation::validate_for_computation;
/// use babysitter_pay::models::{Family, NightTime};
///
/// let start = NightTime::parse("10:00 PM").unwrap();
/// let end = NightTime::parse("2:00 AM").unwrap();
///
/// let validation = validate_for_computation(Some(Family::B), Some(start), Some(end), 1).unwrap();
/// assert_eq!(validation.interval.hours(), 4);
/// ```
pub fn validate_for_computation(
    family: Option<Family>,
    start: Option<NightTime>,
    end: Option<NightTime>,
    step_number: u32,
) -> EngineResult<ScheduleValidation> {
    let family = family.ok_or(EngineError::FamilyNotSet)?;
    let start = start.ok_or(EngineError::ScheduleNotSet { field: "start" })?;
    let end = end.ok_or(EngineError::ScheduleNotSet { field: "end" })?;
    let interval = ShiftInterval::new(start, end)?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "schedule_validation".to_string(),
        rule_name: "Schedule Validation".to_string(),
        input: serde_json::json!({
            "family": family,
            "start": start,
            "end": end
        }),
        output: serde_json::json!({
            "start_offset": start.day_offset(),
            "end_offset": end.day_offset(),
            "hours": interval.hours()
        }),
        reasoning: if start.day_offset() == end.day_offset() {
            format!(
                "{} to {} is {} hour(s) with no midnight crossing",
                start,
                end,
                interval.hours()
            )
        } else {
            format!(
                "{} to {} crosses midnight: {} hour(s)",
                start,
                end,
                interval.hours()
            )
        },
    };

    Ok(ScheduleValidation {
        family,
        interval,
        audit_step,
    })
}
