//! Tiered pay accumulation.
//!
//! Walks a validated interval one hour at a time, charging each hour at the
//! rate of the tier its starting clock hour falls in.

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::{AuditStep, Family, PayLine};

use super::hourly_rate::rate_for;
use super::schedule_validation::ShiftInterval;

/// The result of accumulating pay over an interval.
#[derive(Debug, Clone)]
pub struct AccumulationResult {
    /// One line per billed hour, in order.
    pub pay_lines: Vec<PayLine>,
    /// The sum of all line rates.
    pub total: u32,
    /// One audit step per run of consecutive hours in the same tier, then a total step.
    pub audit_steps: Vec<AuditStep>,
}

/// Accumulates pay for `family` over `interval`.
///
/// A zero-hour interval produces no lines and a total of 0.
///
/// # Examples
///
/// ```
/// use babysitter_pay::calculation::{accumulate_pay, ShiftInterval};
/// use babysitter_pay::config::RateTable;
/// use babysitter_pay::models::{Family, NightTime};
///
/// let interval = ShiftInterval::new(
///     NightTime::parse("5:00 PM").unwrap(),
///     NightTime::parse("1:00 AM").unwrap(),
/// )
/// .unwrap();
///
/// let result = accumulate_pay(Family::B, &interval, &RateTable::standard(), 1).unwrap();
/// assert_eq!(result.total, 92);
/// assert_eq!(result.pay_lines.len(), 8);
/// ```
pub fn accumulate_pay(
    family: Family,
    interval: &ShiftInterval,
    table: &RateTable,
    start_step_number: u32,
) -> EngineResult<AccumulationResult> {
    let hours = interval.hours();
    let mut pay_lines: Vec<PayLine> = Vec::with_capacity(hours as usize);
    let mut total: u32 = 0;

    for step in 0..hours {
        let starts_at = interval.start().plus_hours(step);
        let lookup = rate_for(table, family, starts_at.hour())?;

        total += lookup.rate;
        pay_lines.push(PayLine {
            starts_at,
            tier: lookup.tier,
            rate: lookup.rate,
        });
    }

    let mut audit_steps = tier_run_steps(family, &pay_lines, start_step_number);
    let total_step_number = start_step_number + audit_steps.len() as u32;

    audit_steps.push(AuditStep {
        step_number: total_step_number,
        rule_id: "pay_total".to_string(),
        rule_name: "Pay Total".to_string(),
        input: serde_json::json!({
            "family": family,
            "hours": hours,
            "line_rates": pay_lines.iter().map(|l| l.rate).collect::<Vec<_>>()
        }),
        output: serde_json::json!({
            "total": total
        }),
        reasoning: if hours == 0 {
            "Zero-hour job: nothing to bill".to_string()
        } else {
            format!(
                "Total pay for family {}: {} hour(s) = ${}",
                family, hours, total
            )
        },
    });

    Ok(AccumulationResult {
        pay_lines,
        total,
        audit_steps,
    })
}

/// Builds one audit step per run of consecutive lines billed in the same tier.
fn tier_run_steps(family: Family, pay_lines: &[PayLine], start_step_number: u32) -> Vec<AuditStep> {
    let mut steps = Vec::new();
    let mut run_start = 0;

    while run_start < pay_lines.len() {
        let first = &pay_lines[run_start];
        let run_len = pay_lines[run_start..]
            .iter()
            .take_while(|l| l.tier == first.tier)
            .count();
        let last = &pay_lines[run_start + run_len - 1];
        let amount = first.rate * run_len as u32;

        steps.push(AuditStep {
            step_number: start_step_number + steps.len() as u32,
            rule_id: "tier_rate".to_string(),
            rule_name: "Tier Rate Application".to_string(),
            input: serde_json::json!({
                "family": family,
                "tier": first.tier,
                "first_hour": first.starts_at,
                "last_hour": last.starts_at,
                "hours": run_len
            }),
            output: serde_json::json!({
                "rate": first.rate,
                "amount": amount
            }),
            reasoning: format!(
                "{} hour(s) from {} in tier '{}' at ${}/hr = ${}",
                run_len, first.starts_at, first.tier, first.rate, amount
            ),
        });

        run_start += run_len;
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RateTier;
    use crate::models::NightTime;

    fn interval(start: &str, end: &str) -> ShiftInterval {
        ShiftInterval::new(
            NightTime::parse(start).unwrap(),
            NightTime::parse(end).unwrap(),
        )
        .unwrap()
    }

    fn total(family: Family, start: &str, end: &str) -> u32 {
        accumulate_pay(family, &interval(start, end), &RateTable::standard(), 1)
            .unwrap()
            .total
    }

    #[test]
    fn test_family_a_scenarios() {
        assert_eq!(total(Family::A, "5:00 PM", "11:00 PM"), 90);
        assert_eq!(total(Family::A, "5:00 PM", "12:00 AM"), 110);
        assert_eq!(total(Family::A, "5:00 PM", "4:00 AM"), 190);
        assert_eq!(total(Family::A, "12:00 AM", "4:00 AM"), 80);
    }

    #[test]
    fn test_family_b_scenarios() {
        assert_eq!(total(Family::B, "5:00 PM", "1:00 AM"), 92);
        assert_eq!(total(Family::B, "10:00 PM", "12:00 AM"), 16);
        assert_eq!(total(Family::B, "5:00 PM", "4:00 AM"), 60 + 16 + 64);
    }

    #[test]
    fn test_family_c_scenarios() {
        assert_eq!(total(Family::C, "5:00 PM", "9:00 PM"), 84);
        assert_eq!(total(Family::C, "5:00 PM", "4:00 AM"), 84 + 7 * 15);
        assert_eq!(total(Family::C, "9:00 PM", "10:00 PM"), 15);
    }

    #[test]
    fn test_zero_duration_produces_no_lines() {
        let result = accumulate_pay(
            Family::A,
            &interval("4:00 AM", "4:00 AM"),
            &RateTable::standard(),
            1,
        )
        .unwrap();

        assert_eq!(result.total, 0);
        assert!(result.pay_lines.is_empty());
        assert_eq!(result.audit_steps.len(), 1);
        assert_eq!(result.audit_steps[0].rule_id, "pay_total");
    }

    #[test]
    fn test_pay_lines_advance_across_midnight() {
        let result = accumulate_pay(
            Family::B,
            &interval("10:00 PM", "2:00 AM"),
            &RateTable::standard(),
            1,
        )
        .unwrap();

        let starts: Vec<String> = result
            .pay_lines
            .iter()
            .map(|l| l.starts_at.to_string())
            .collect();
        assert_eq!(starts, vec!["10:00 PM", "11:00 PM", "12:00 AM", "1:00 AM"]);

        let rates: Vec<u32> = result.pay_lines.iter().map(|l| l.rate).collect();
        assert_eq!(rates, vec![8, 8, 16, 16]);
    }

    #[test]
    fn test_audit_steps_per_tier_run() {
        let result = accumulate_pay(
            Family::B,
            &interval("5:00 PM", "1:00 AM"),
            &RateTable::standard(),
            4,
        )
        .unwrap();

        let ids: Vec<&str> = result
            .audit_steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(ids, vec!["tier_rate", "tier_rate", "tier_rate", "pay_total"]);

        let numbers: Vec<u32> = result.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![4, 5, 6, 7]);

        assert_eq!(result.audit_steps[0].output["amount"], 60);
        assert_eq!(result.audit_steps[1].output["amount"], 16);
        assert_eq!(result.audit_steps[2].output["amount"], 16);
        assert_eq!(result.audit_steps[3].output["total"], 92);
    }

    #[test]
    fn test_custom_table_is_used() {
        let config = crate::config::RatesConfig {
            families: [
                ("A", 10),
                ("B", 11),
                ("C", 12),
            ]
            .into_iter()
            .map(|(code, rate)| {
                (
                    code.to_string(),
                    crate::config::FamilyScheduleConfig {
                        tiers: vec![RateTier::new("flat", 17, 5, rate)],
                    },
                )
            })
            .collect(),
        };
        let table = RateTable::from_config(config).unwrap();

        let result = accumulate_pay(Family::C, &interval("8:00 PM", "1:00 AM"), &table, 1).unwrap();
        assert_eq!(result.total, 5 * 12);
    }
}
