//! Core data models for the babysitter pay engine.
//!
//! This module contains the domain values the engine validates and produces.

mod family;
mod night_time;
mod pay_calculation;

pub use family::Family;
pub use night_time::{
    DayOffset, NightTime, TIME_DISPLAY_FORMAT, TIME_INPUT_FORMAT, WINDOW_END_HOUR,
    WINDOW_START_HOUR,
};
pub use pay_calculation::{AuditStep, AuditTrace, PayCalculation, PayLine};
