//! Hourly rate lookup.
//!
//! The rate for a billed hour depends only on the family and the clock hour
//! at which that hour starts.

use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::Family;

/// The result of a rate lookup for one billed hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyRate {
    /// The label of the tier containing the hour.
    pub tier: String,
    /// The hourly rate.
    pub rate: u32,
}

/// Looks up the rate for the hour starting at clock hour `hour` (0-23).
///
/// # Errors
///
/// - `UnknownFamily` if the table has no schedule for `family`
/// - `RateNotFound` if no tier covers `hour`
///
/// # Examples
///
/// ```
/// use babysitter_pay::calculation::rate_for;
/// use babysitter_pay::config::RateTable;
/// use babysitter_pay::models::Family;
///
/// let table = RateTable::standard();
/// assert_eq!(rate_for(&table, Family::B, 21).unwrap().rate, 12);
/// assert_eq!(rate_for(&table, Family::B, 22).unwrap().rate, 8);
/// assert_eq!(rate_for(&table, Family::B, 0).unwrap().rate, 16);
/// ```
pub fn rate_for(table: &RateTable, family: Family, hour: u32) -> EngineResult<HourlyRate> {
    table
        .schedule(family)?
        .iter()
        .find(|tier| tier.contains(hour))
        .map(|tier| HourlyRate {
            tier: tier.label.clone(),
            rate: tier.rate,
        })
        .ok_or(EngineError::RateNotFound {
            family: family.code(),
            hour,
        })
}
