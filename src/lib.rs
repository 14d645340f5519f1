//! Pay engine for a single night of babysitting.
//!
//! This crate validates a (family, start, end) booking within the 5:00 PM to
//! 4:00 AM working window and computes the pay owed, billing each whole hour
//! at the rate of the family's tier for that hour of the night.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
mod job;
pub mod models;

pub use job::Job;
