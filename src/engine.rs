//! Line-oriented pattern matching engine.
//!
//! Applies every catalog rule to every line of a file's content and emits
//! [`Finding`]s in (line, catalog) order. The engine looks only at raw
//! text: no parsing, no include-following, no cross-line patterns.

use crate::finding::Finding;
use crate::rules;

const SNIPPET_MAX_CHARS: usize = 100;

/// Scans one file's content against the full rule catalog.
///
/// For each 1-indexed line, each rule is tested once; a rule contributes at
/// most one finding per line even when the pattern occurs several times on
/// it. Distinct rules matching the same line each produce their own finding.
///
/// Matches inside non-script `.md` files count at half the rule's base
/// weight — documentation examples are worth less than live code.
pub fn scan_content(content: &str, relative_path: &str, is_script: bool) -> Vec<Finding> {
    let halved = !is_script && relative_path.ends_with(".md");
    let mut findings = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        for rule in rules::catalog() {
            if rule.regex.is_match(line) {
                let weight = if halved { rule.weight / 2 } else { rule.weight };
                findings.push(Finding {
                    rule_id: rule.id,
                    rule_name: rule.name,
                    severity: rule.severity,
                    category: rule.category,
                    file: relative_path.to_string(),
                    line: idx + 1,
                    snippet: make_snippet(line),
                    weight,
                    hard_trigger: rule.hard_trigger,
                });
            }
        }
    }

    findings
}

fn make_snippet(line: &str) -> String {
    let trimmed = line.trim();
    // Cut at a char boundary — a raw byte index can fall mid-codepoint and
    // panic on multi-byte UTF-8.
    match trimmed.char_indices().nth(SNIPPET_MAX_CHARS) {
        Some((cut, _)) => format!("{}…", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
