//! Structured (machine-readable) report.
//!
//! Emits a versioned JSON document with a generation timestamp, the scan
//! duration, a summary block, and the full per-skill audit records.
//! serde_json writes non-ASCII glyphs literally, so snippets containing
//! arbitrary text survive round-tripping unescaped.

use crate::finding::{RiskLevel, SkillAuditResult};

/// Schema version of the structured report.
pub const REPORT_VERSION: &str = "1.0.0";

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    version: &'static str,
    generated_at: String,
    scan_time_seconds: f64,
    summary: Summary,
    skills: &'a [SkillAuditResult],
}

#[derive(serde::Serialize)]
struct Summary {
    total_skills: usize,
    total_findings: usize,
    by_risk_level: ByRiskLevel,
}

#[derive(Default, serde::Serialize)]
struct ByRiskLevel {
    safe: usize,
    low: usize,
    medium: usize,
    high: usize,
    dangerous: usize,
}

/// Renders the structured report for the given results.
///
/// Summary counts are computed over exactly the skills array that is
/// emitted, so parsing the report back and re-counting always agrees.
///
/// # Panics
///
/// Panics if serialization fails (cannot happen for valid results).
pub fn render(results: &[SkillAuditResult], scan_time: f64) -> String {
    let mut by_risk_level = ByRiskLevel::default();
    let mut total_findings = 0;
    for result in results {
        total_findings += result.findings.len();
        match result.risk_level {
            RiskLevel::Safe => by_risk_level.safe += 1,
            RiskLevel::Low => by_risk_level.low += 1,
            RiskLevel::Medium => by_risk_level.medium += 1,
            RiskLevel::High => by_risk_level.high += 1,
            RiskLevel::Dangerous => by_risk_level.dangerous += 1,
        }
    }

    let report = JsonReport {
        version: REPORT_VERSION,
        generated_at: chrono::Utc::now().to_rfc3339(),
        scan_time_seconds: (scan_time * 100.0).round() / 100.0,
        summary: Summary {
            total_skills: results.len(),
            total_findings,
            by_risk_level,
        },
        skills: results,
    };

    let mut out = serde_json::to_string_pretty(&report).expect("JSON serialization failed");
    out.push('\n');
    out
}
