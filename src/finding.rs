//! Core data types for audit findings and results.
//!
//! This module contains the primary output types of the audit pipeline:
//!
//! - [`Finding`] — a single rule match at one line of one file.
//! - [`SkillAuditResult`] — the scored audit outcome for one skill.
//! - [`Severity`], [`Category`], [`RiskLevel`], [`Capability`] —
//!   classification enums.
//!
//! Every enum here is a closed set that appears as a string in the
//! structured report; the serde derives are the single serialization site.

use std::fmt;

/// Severity of a detection rule.
///
/// Variants are ordered least to most severe and implement [`Ord`].
/// Serializes to lowercase strings (`"low"` … `"critical"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Behavioral category of a detection rule.
///
/// Serializes to kebab-case strings (`"remote-execution"`, `"network-exfil"`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Destructive,
    RemoteExecution,
    CommandInjection,
    NetworkExfil,
    PrivilegeEscalation,
    Persistence,
    SecretExposure,
}

/// Discrete risk classification of an audited skill.
///
/// Variants are ordered safest to most dangerous and implement [`Ord`], so
/// `--min-level` filtering is a plain comparison and report sorting is
/// `cmp` on the level. Serializes to lowercase strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// No findings at all.
    Safe,
    /// Score 1–24.
    Low,
    /// Score 25–49.
    Medium,
    /// Score 50–74.
    High,
    /// Score ≥ 75 or any hard-trigger finding.
    Dangerous,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Safe => write!(f, "safe"),
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
            RiskLevel::Dangerous => write!(f, "dangerous"),
        }
    }
}

/// Capability class a script is inferred to exercise.
///
/// Advisory only — carried on the audit result for declared-vs-observed
/// consistency review, never fed into the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Network,
    Shell,
    FilesystemWrite,
}

/// A single rule match at one line of one file.
///
/// Findings are never deduplicated: every matching line yields its own
/// finding, and several rules may each match the same line. `weight` is the
/// *effective* weight — the rule's base weight, halved for matches inside
/// non-script markdown files.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Finding {
    /// Stable rule identifier (e.g. `"CURL_PIPE_SH"`); always present in
    /// the catalog.
    pub rule_id: &'static str,
    /// Human-readable rule name.
    pub rule_name: &'static str,
    /// Severity inherited from the rule.
    pub severity: Severity,
    /// Category inherited from the rule.
    pub category: Category,
    /// Path of the matched file, relative to the skill root.
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    /// Trimmed line content, at most 100 chars, `…`-terminated if truncated.
    pub snippet: String,
    /// Effective weight used for scoring.
    pub weight: u32,
    /// Whether this finding alone classifies the skill as dangerous.
    pub hard_trigger: bool,
}

/// Scored audit outcome for a single skill.
///
/// Built once by [`audit::audit_skill`](crate::audit::audit_skill) and
/// consumed read-only by the [`output`](crate::output) reporters.
///
/// Invariants:
/// - `total_score == 0` ⇔ `findings.is_empty()` ⇔ `risk_level == Safe`
/// - `has_hard_trigger` ⇒ `risk_level == Dangerous` and `total_score ≥ 75`
/// - `total_score ≤ 100`, `script_count ≤ file_count`
#[derive(Debug, Clone, serde::Serialize)]
pub struct SkillAuditResult {
    /// Skill name (directory basename).
    pub name: String,
    /// Absolute path of the skill directory.
    pub path: String,
    /// Discrete risk classification.
    pub risk_level: RiskLevel,
    /// Aggregated score, clamped to 0–100.
    pub total_score: u32,
    /// `true` when any finding's rule is a hard trigger.
    pub has_hard_trigger: bool,
    /// Number of files that survived the scanner's filters.
    pub file_count: usize,
    /// Number of those files classified as scripts.
    pub script_count: usize,
    /// Capability tokens declared in the skill manifest.
    pub allowed_tools: Vec<String>,
    /// Whether an `allowed-tools` declaration was found and parsed.
    pub manifest_parsed: bool,
    /// Union of capability classes the skill's scripts appear to exercise.
    pub inferred_capabilities: Vec<Capability>,
    /// All findings, in (file-walk, line, catalog) order.
    pub findings: Vec<Finding>,
}
