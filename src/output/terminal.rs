//! Human-readable colored terminal report.
//!
//! Renders a banner, a one-line stats summary, and every skill sorted by
//! (risk level descending, score descending) with its top findings. ANSI
//! sequences come from [colored], which auto-disables when stdout is not a
//! terminal; `--no-color` additionally forces them off via
//! `colored::control::set_override(false)` in the driver.

use crate::finding::{RiskLevel, Severity, SkillAuditResult};
use colored::{ColoredString, Colorize};

/// Findings shown per skill when not verbose.
const MAX_SHOWN_FINDINGS: usize = 5;

fn level_icon(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Safe => "🟢",
        RiskLevel::Low => "🔵",
        RiskLevel::Medium => "🟡",
        RiskLevel::High => "🟠",
        RiskLevel::Dangerous => "🔴",
    }
}

// 255,135,0 is xterm color 208 — the orange used for the high tier.
fn level_colored(level: RiskLevel, text: &str) -> ColoredString {
    match level {
        RiskLevel::Safe => text.green(),
        RiskLevel::Low => text.blue(),
        RiskLevel::Medium => text.yellow(),
        RiskLevel::High => text.truecolor(255, 135, 0),
        RiskLevel::Dangerous => text.red(),
    }
}

fn severity_colored(severity: Severity, text: &str) -> ColoredString {
    match severity {
        Severity::Low => text.blue(),
        Severity::Medium => text.yellow(),
        Severity::High => text.truecolor(255, 135, 0),
        Severity::Critical => text.red(),
    }
}

/// Renders the terminal report for the given results.
pub fn render(results: &[SkillAuditResult], scan_time: f64, verbose: bool) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(&format!(
        "{}\n",
        "╔══════════════════════════════════════════════════════════════╗".bold()
    ));
    out.push_str(&format!(
        "{}\n",
        "║              Skill Security Audit Report                     ║".bold()
    ));
    out.push_str(&format!(
        "{}\n",
        "╚══════════════════════════════════════════════════════════════╝".bold()
    ));
    out.push('\n');

    let total_findings: usize = results.iter().map(|r| r.findings.len()).sum();
    let dangerous = results
        .iter()
        .filter(|r| r.risk_level == RiskLevel::Dangerous)
        .count();
    let high = results
        .iter()
        .filter(|r| r.risk_level == RiskLevel::High)
        .count();

    let mut stats = format!(
        "Scanned: {} skills | Findings: {} | Time: {:.1}s",
        results.len(),
        total_findings,
        scan_time
    );
    if dangerous > 0 {
        stats.push_str(&format!(
            " | {}",
            format!("DANGEROUS: {dangerous}").red().bold()
        ));
    }
    if high > 0 {
        stats.push_str(&format!(
            " | {}",
            format!("HIGH: {high}").truecolor(255, 135, 0).bold()
        ));
    }
    out.push_str(&stats);
    out.push_str("\n\n");

    // Most dangerous first; the sort is stable so skills at the same level
    // and score keep their scanner enumeration order.
    let mut sorted: Vec<&SkillAuditResult> = results.iter().collect();
    sorted.sort_by(|a, b| {
        b.risk_level
            .cmp(&a.risk_level)
            .then(b.total_score.cmp(&a.total_score))
    });

    for result in sorted {
        // Pad before coloring — ANSI escapes would break column widths.
        let level_name = format!("{:<10}", result.risk_level.to_string().to_uppercase());
        let mut line = format!(
            "{} {} {} Score: {}",
            level_icon(result.risk_level),
            level_colored(result.risk_level, &level_name),
            format!("{:<25}", result.name).bold(),
            result.total_score
        );
        if result.has_hard_trigger {
            line.push_str(&format!("{}", " [HARD TRIGGER]".red()));
        }
        out.push_str(&line);
        out.push('\n');

        if !result.findings.is_empty() {
            let shown = if verbose {
                result.findings.len()
            } else {
                result.findings.len().min(MAX_SHOWN_FINDINGS)
            };

            for finding in &result.findings[..shown] {
                let severity_name =
                    severity_colored(finding.severity, &finding.severity.to_string().to_uppercase());
                out.push_str(&format!(
                    "   └─ [{}] {} at {}:{}\n",
                    severity_name, finding.rule_name, finding.file, finding.line
                ));
                if verbose {
                    out.push_str(&format!("      {}\n", finding.snippet.cyan()));
                }
            }

            if result.findings.len() > MAX_SHOWN_FINDINGS && !verbose {
                out.push_str(&format!(
                    "   └─ ... and {} more findings\n",
                    result.findings.len() - MAX_SHOWN_FINDINGS
                ));
            }
        }
        out.push('\n');
    }

    out
}
