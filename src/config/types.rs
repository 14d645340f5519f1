//! Configuration types for babysitting rates.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the validated
//! [`RateTable`] the engine bills against.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Family, WINDOW_END_HOUR, WINDOW_START_HOUR};

/// Metadata about the babysitting service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceMetadata {
    /// The human-readable name of the service.
    pub name: String,
    /// The version or effective date of the rates.
    pub version: String,
    /// A description of the service.
    #[serde(default)]
    pub description: String,
}

/// A contiguous range of clock hours billed at one rate.
///
/// `from_hour` is inclusive and `until_hour` exclusive. When `until_hour`
/// is not greater than `from_hour` the tier wraps past midnight.
///
/// # Example
///
/// ```
/// use babysitter_pay::config::RateTier;
///
/// let tier = RateTier::new("after_bedtime", 23, 5, 20);
/// assert!(tier.contains(23));
/// assert!(tier.contains(0));
/// assert!(tier.contains(4));
/// assert!(!tier.contains(22));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTier {
    /// A short identifier for the tier.
    pub label: String,
    /// First clock hour of the tier (0-23).
    pub from_hour: u32,
    /// Clock hour at which the tier stops applying (0-24).
    pub until_hour: u32,
    /// The hourly rate.
    pub rate: u32,
}

impl RateTier {
    /// Creates a new tier.
    pub fn new(label: &str, from_hour: u32, until_hour: u32, rate: u32) -> Self {
        Self {
            label: label.to_string(),
            from_hour,
            until_hour,
            rate,
        }
    }

    /// Returns whether the hour starting at clock hour `hour` falls in this tier.
    pub fn contains(&self, hour: u32) -> bool {
        if self.from_hour < self.until_hour {
            (self.from_hour..self.until_hour).contains(&hour)
        } else {
            hour >= self.from_hour || hour < self.until_hour
        }
    }
}

/// One family's schedule as written in `rates.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct FamilyScheduleConfig {
    /// Tiers in billing order.
    pub tiers: Vec<RateTier>,
}

/// Rates configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Map of family code to schedule.
    pub families: BTreeMap<String, FamilyScheduleConfig>,
}

/// Clock hours at which a billed hour can start, in night order.
pub fn billable_hours() -> impl Iterator<Item = u32> {
    (WINDOW_START_HOUR..24).chain(0..WINDOW_END_HOUR)
}

/// Validated per-family rate tiers.
///
/// Every family has a schedule, and every billable hour of the night is
/// covered by exactly one tier of each schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    schedules: BTreeMap<Family, Vec<RateTier>>,
}

impl RateTable {
    /// Returns the standard rate table.
    ///
    /// - A: $15/hr until 11:00 PM, $20/hr after
    /// - B: $12/hr until 10:00 PM, $8/hr until midnight, $16/hr after
    /// - C: $21/hr until 9:00 PM, $15/hr after
    pub fn standard() -> Self {
        let mut schedules = BTreeMap::new();
        schedules.insert(
            Family::A,
            vec![
                RateTier::new("before_bedtime", 17, 23, 15),
                RateTier::new("after_bedtime", 23, 5, 20),
            ],
        );
        schedules.insert(
            Family::B,
            vec![
                RateTier::new("before_bedtime", 17, 22, 12),
                RateTier::new("after_bedtime", 22, 24, 8),
                RateTier::new("after_midnight", 0, 5, 16),
            ],
        );
        schedules.insert(
            Family::C,
            vec![
                RateTier::new("before_bedtime", 17, 21, 21),
                RateTier::new("after_bedtime", 21, 5, 15),
            ],
        );
        Self { schedules }
    }

    /// Builds a rate table from a parsed configuration, validating coverage.
    ///
    /// # Errors
    ///
    /// - `UnknownFamily` if a key is not A, B or C
    /// - `InvalidRateTable` if a family is missing or defined more than once,
    ///   a tier hour is out of range, a rate is too large to bill a full
    ///   night, or a billable hour is covered by zero or several tiers
    pub fn from_config(config: RatesConfig) -> EngineResult<Self> {
        let mut schedules = BTreeMap::new();

        for (code, schedule) in config.families {
            let family: Family = code
                .parse()
                .map_err(|_| EngineError::UnknownFamily { family: code.clone() })?;
            if schedules.insert(family, schedule.tiers).is_some() {
                return Err(EngineError::InvalidRateTable {
                    message: format!("family {} defined more than once", family),
                });
            }
        }

        let table = Self { schedules };
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> EngineResult<()> {
        for family in Family::ALL {
            let tiers = self.schedules.get(&family).ok_or_else(|| {
                EngineError::InvalidRateTable {
                    message: format!("family {} has no schedule", family),
                }
            })?;

            if let Some(tier) = tiers
                .iter()
                .find(|t| t.from_hour > 23 || t.until_hour > 24)
            {
                return Err(EngineError::InvalidRateTable {
                    message: format!(
                        "family {} tier '{}' has hours out of range ({}..{})",
                        family, tier.label, tier.from_hour, tier.until_hour
                    ),
                });
            }

            // A full night at the highest rate must still fit the pay total.
            let night_hours = billable_hours().count() as u32;
            if let Some(tier) = tiers
                .iter()
                .find(|t| t.rate.checked_mul(night_hours).is_none())
            {
                return Err(EngineError::InvalidRateTable {
                    message: format!(
                        "family {} tier '{}' rate {} overflows a {}-hour night",
                        family, tier.label, tier.rate, night_hours
                    ),
                });
            }

            for hour in billable_hours() {
                let covering = tiers.iter().filter(|t| t.contains(hour)).count();
                if covering != 1 {
                    return Err(EngineError::InvalidRateTable {
                        message: format!(
                            "family {} hour {} is covered by {} tiers",
                            family, hour, covering
                        ),
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the tiers for a family.
    pub fn schedule(&self, family: Family) -> EngineResult<&[RateTier]> {
        self.schedules
            .get(&family)
            .map(Vec::as_slice)
            .ok_or_else(|| EngineError::UnknownFamily {
                family: family.to_string(),
            })
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard()
    }
}
