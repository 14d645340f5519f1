//! A single night's babysitting job.
//!
//! A [`Job`] is filled in one field at a time. Each setter validates its own
//! input immediately; [`Job::calculate_pay`] performs the checks that need
//! the whole job and then bills the night hour by hour.

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{accumulate_pay, validate_for_computation};
use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditTrace, Family, NightTime, PayCalculation};

/// Family assignment state. Moves from `Unset` to `Assigned` at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FamilyAssignment {
    #[default]
    Unset,
    Assigned(Family),
}

/// One babysitting job for one night.
///
/// # Example
///
/// ```
/// use babysitter_pay::Job;
///
/// let mut job = Job::new();
/// job.set_family("b")?;
/// job.set_start("5:00 PM")?;
/// job.set_end("1:00 AM")?;
/// job.calculate_pay()?;
///
/// assert!(job.is_busy());
/// assert_eq!(job.pay(), 92);
/// # Ok::<(), babysitter_pay::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Job {
    family: FamilyAssignment,
    start: Option<NightTime>,
    end: Option<NightTime>,
    rates: RateTable,
    calculation: Option<PayCalculation>,
}

impl Job {
    /// Creates an empty job billed against the standard rate table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty job billed against a custom rate table.
    pub fn with_rates(rates: RateTable) -> Self {
        Self {
            rates,
            ..Self::default()
        }
    }

    /// Assigns the family, which can happen only once per job.
    ///
    /// # Errors
    ///
    /// - `AlreadyAssigned` if a family is already set, whatever `code` is
    /// - `InvalidFamily` if `code` is not a single letter A, B or C in either case
    pub fn set_family(&mut self, code: &str) -> EngineResult<()> {
        if let FamilyAssignment::Assigned(current) = self.family {
            warn!(family = %current, requested = %code, "Family already assigned");
            return Err(EngineError::AlreadyAssigned {
                family: current.code(),
            });
        }

        let family = code.parse::<Family>().inspect_err(|err| {
            warn!(requested = %code, error = %err, "Rejected family code");
        })?;

        debug!(family = %family, "Family assigned");
        self.family = FamilyAssignment::Assigned(family);
        Ok(())
    }

    /// Sets the start time from text such as "5:00 PM".
    ///
    /// Clears any previously computed pay.
    pub fn set_start(&mut self, text: &str) -> EngineResult<()> {
        let time = Self::normalize(text, "start")?;
        self.start = Some(time);
        self.calculation = None;
        Ok(())
    }

    /// Sets the end time from text such as "4:00 AM".
    ///
    /// Clears any previously computed pay.
    pub fn set_end(&mut self, text: &str) -> EngineResult<()> {
        let time = Self::normalize(text, "end")?;
        self.end = Some(time);
        self.calculation = None;
        Ok(())
    }

    fn normalize(text: &str, field: &'static str) -> EngineResult<NightTime> {
        match NightTime::parse(text) {
            Ok(time) => {
                debug!(field = field, time = %time, offset = ?time.day_offset(), "Time accepted");
                Ok(time)
            }
            Err(err) => {
                warn!(field = field, input = %text, error = %err, "Time rejected");
                Err(err)
            }
        }
    }

    /// Returns the start time formatted as "h:mm AM/PM".
    pub fn start(&self) -> EngineResult<String> {
        self.start
            .map(|t| t.to_string())
            .ok_or(EngineError::TimeNotSet { field: "Start" })
    }

    /// Returns the end time formatted as "h:mm AM/PM".
    pub fn end(&self) -> EngineResult<String> {
        self.end
            .map(|t| t.to_string())
            .ok_or(EngineError::TimeNotSet { field: "End" })
    }

    /// Returns the assigned family.
    pub fn family(&self) -> EngineResult<Family> {
        match self.family {
            FamilyAssignment::Assigned(family) => Ok(family),
            FamilyAssignment::Unset => Err(EngineError::FamilyNotSet),
        }
    }

    /// Returns whether a family has booked this job.
    pub fn is_busy(&self) -> bool {
        matches!(self.family, FamilyAssignment::Assigned(_))
    }

    /// Validates the job and computes its pay.
    ///
    /// On failure the job holds no computed pay and [`Job::pay`] reads 0.
    ///
    /// # Errors
    ///
    /// - `FamilyNotSet` if no family is assigned
    /// - `ScheduleNotSet` if start or end is missing
    /// - `EndBeforeStart` if end resolves earlier than start
    /// - `UnknownFamily` or `RateNotFound` if the rate table cannot bill an hour
    pub fn calculate_pay(&mut self) -> EngineResult<()> {
        self.calculation = None;

        let started = Instant::now();
        let family = match self.family {
            FamilyAssignment::Assigned(family) => Some(family),
            FamilyAssignment::Unset => None,
        };

        let result = validate_for_computation(family, self.start, self.end, 1).and_then(
            |validation| {
                let accumulation =
                    accumulate_pay(validation.family, &validation.interval, &self.rates, 2)?;
                Ok((validation, accumulation))
            },
        );

        let (validation, accumulation) = match result {
            Ok(parts) => parts,
            Err(err) => {
                warn!(error = %err, "Pay calculation failed");
                return Err(err);
            }
        };

        let mut steps = vec![validation.audit_step];
        steps.extend(accumulation.audit_steps);
        let duration_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

        info!(
            family = %validation.family,
            start = %validation.interval.start(),
            end = %validation.interval.end(),
            hours = validation.interval.hours(),
            total = accumulation.total,
            duration_us = duration_us,
            "Pay calculated"
        );

        self.calculation = Some(PayCalculation {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            family: validation.family,
            start: validation.interval.start(),
            end: validation.interval.end(),
            hours: validation.interval.hours(),
            pay_lines: accumulation.pay_lines,
            total: accumulation.total,
            audit_trace: AuditTrace { steps, duration_us },
        });
        Ok(())
    }

    /// Returns the computed pay, or 0 if pay has not been computed for the
    /// current inputs.
    pub fn pay(&self) -> u32 {
        self.calculation.as_ref().map_or(0, |c| c.total)
    }

    /// Returns the full breakdown of the last successful computation.
    pub fn breakdown(&self) -> Option<&PayCalculation> {
        self.calculation.as_ref()
    }
}
