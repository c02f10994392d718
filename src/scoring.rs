//! Risk score aggregation.
//!
//! Findings roll up into a 0–100 score and a discrete [`RiskLevel`] through
//! three steps: per-rule decay (repeat matches of the same rule count half),
//! a hard-trigger floor of 75, and a ceiling of 100.

use crate::finding::{Finding, RiskLevel};
use std::collections::HashSet;

/// Lowest score classified as `low`.
pub const LOW_THRESHOLD: u32 = 1;
/// Lowest score classified as `medium`.
pub const MEDIUM_THRESHOLD: u32 = 25;
/// Lowest score classified as `high`.
pub const HIGH_THRESHOLD: u32 = 50;
/// Lowest score classified as `dangerous`.
pub const DANGEROUS_THRESHOLD: u32 = 75;
/// Minimum score when any hard-trigger rule matched.
pub const HARD_TRIGGER_FLOOR: u32 = 75;
/// Score ceiling.
pub const MAX_SCORE: u32 = 100;

/// Aggregates findings into `(total_score, risk_level, has_hard_trigger)`.
///
/// Decay is per rule ID in finding order: the first occurrence of a rule
/// contributes its effective weight in full, every later occurrence of the
/// same rule contributes `floor(weight / 2)`. Decay never crosses rule
/// boundaries — two different rules at full weight do not decay each other.
///
/// A hard trigger forces the score to at least 75 and the level to
/// `dangerous` regardless of the sum.
pub fn calculate_score(findings: &[Finding]) -> (u32, RiskLevel, bool) {
    if findings.is_empty() {
        return (0, RiskLevel::Safe, false);
    }

    let has_hard_trigger = findings.iter().any(|f| f.hard_trigger);

    let mut seen_rules: HashSet<&str> = HashSet::new();
    let mut total: u64 = 0;
    for finding in findings {
        let first = seen_rules.insert(finding.rule_id);
        let contribution = if first {
            finding.weight
        } else {
            finding.weight / 2
        };
        total += u64::from(contribution);
    }

    if has_hard_trigger {
        total = total.max(u64::from(HARD_TRIGGER_FLOOR));
    }
    let total = total.min(u64::from(MAX_SCORE)) as u32;

    let risk_level = if has_hard_trigger || total >= DANGEROUS_THRESHOLD {
        RiskLevel::Dangerous
    } else if total >= HIGH_THRESHOLD {
        RiskLevel::High
    } else if total >= MEDIUM_THRESHOLD {
        RiskLevel::Medium
    } else if total >= LOW_THRESHOLD {
        RiskLevel::Low
    } else {
        RiskLevel::Safe
    };

    (total, risk_level, has_hard_trigger)
}
