//! Pay calculation result models.
//!
//! This module contains the [`PayCalculation`] type and its associated
//! structures that capture the output of a pay computation: one pay line per
//! billed hour, the total, and an audit trace of every rule applied.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Family, NightTime};

/// A single billed hour.
///
/// # Example
///
/// ```
/// use babysitter_pay::models::{NightTime, PayLine};
///
/// let line = PayLine {
///     starts_at: NightTime::parse("10:00 PM").unwrap(),
///     tier: "after_bedtime".to_string(),
///     rate: 8,
/// };
/// assert_eq!(line.rate, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayLine {
    /// The start of the billed hour.
    pub starts_at: NightTime,
    /// The label of the rate tier the hour fell into.
    pub tier: String,
    /// The hourly rate charged for this hour.
    pub rate: u32,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a pay computation for one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The family being billed.
    pub family: Family,
    /// The validated start time.
    pub start: NightTime,
    /// The validated end time.
    pub end: NightTime,
    /// Whole hours worked.
    pub hours: u32,
    /// One line per billed hour, in order.
    pub pay_lines: Vec<PayLine>,
    /// Sum of all pay line rates.
    pub total: u32,
    /// Record of every decision made during the calculation.
    pub audit_trace: AuditTrace,
}

impl PayCalculation {
    /// Returns the hours billed in each tier, in the order tiers were first reached.
    pub fn hours_by_tier(&self) -> Vec<(String, u32)> {
        let mut tiers: Vec<(String, u32)> = Vec::new();
        for line in &self.pay_lines {
            match tiers.iter_mut().find(|(tier, _)| *tier == line.tier) {
                Some((_, hours)) => *hours += 1,
                None => tiers.push((line.tier.clone(), 1)),
            }
        }
        tiers
    }
}
