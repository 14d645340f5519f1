//! Calculation logic for the babysitter pay engine.
//!
//! This module contains compute-time schedule validation, the per-family
//! hourly rate lookup, and the hour-by-hour pay accumulation.

mod accumulator;
mod hourly_rate;
mod schedule_validation;

pub use accumulator::{AccumulationResult, accumulate_pay};
pub use hourly_rate::{HourlyRate, rate_for};
pub use schedule_validation::{ScheduleValidation, ShiftInterval, validate_for_computation};
