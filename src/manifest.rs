//! Skill manifest parsing and capability inference.
//!
//! A skill may declare the tool capabilities it uses in its manifest
//! (`skill.md`) in any of three surface syntaxes, tried in order — the
//! first that yields tokens wins:
//!
//! 1. An inline `allowed-tools: …` directive anywhere in the body.
//! 2. YAML front matter with an inline (`[a, b]`) or block (`- item`) list.
//! 3. A markdown section headed `allowed-tools` with bullet items.
//!
//! Parsing never fails the pipeline: I/O and decode errors degrade to an
//! empty declaration with `parse_success == false`.

use crate::finding::Capability;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Parsed `allowed-tools` declaration from a skill manifest.
#[derive(Debug, Clone, Default)]
pub struct ManifestInfo {
    /// Declared capability tokens, in declaration order.
    pub allowed_tools: Vec<String>,
    /// `true` when any of the three syntaxes produced tokens.
    pub parse_success: bool,
}

// The rest-of-line capture must stay on the directive's own line; letting it
// reach past the newline would swallow the first item of a block list.
static RE_INLINE_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)allowed[_-]?tools[ \t]*:[ \t]*(.+?)$").unwrap());

// Identifier optionally followed by a parenthesized argument: `Bash(git *)`.
static RE_TOOL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z_][A-Za-z0-9_]*(?:\([^)]*\))?").unwrap());

static RE_FRONT_MATTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---[ \t]*\n(.*?)\n---").unwrap());

static RE_FM_FLOW_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)allowed[_-]?tools[ \t]*:[ \t]*\[([^\]]+)\]").unwrap());

static RE_FM_BLOCK_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)allowed[_-]?tools[ \t]*:[ \t]*\n((?:[ \t]+-[ \t]+.+\n?)+)").unwrap()
});

static RE_LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-\s+(.+)").unwrap());

static RE_SECTION_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)#+[ \t]*allowed[_-]?tools[ \t]*\n((?:[*-][ \t]+.+\n?)+)").unwrap()
});

static RE_BULLET_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[*-]\s+(.+)").unwrap());

fn trim_token(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string()
}

fn trim_bullet_token(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| c == '`' || c == '"' || c == '\'')
        .to_string()
}

/// Extracts the declared capability tokens from manifest content.
///
/// Returns `(tokens, found)` where `found` reports whether any of the three
/// syntaxes matched with at least one token.
pub fn extract_allowed_tools(content: &str) -> (Vec<String>, bool) {
    // Syntax 1: inline directive anywhere in the body.
    if let Some(cap) = RE_INLINE_DIRECTIVE.captures(content) {
        let rest = cap[1].trim();
        let tools: Vec<String> = RE_TOOL_TOKEN
            .find_iter(rest)
            .map(|m| m.as_str().to_string())
            .collect();
        if !tools.is_empty() {
            return (tools, true);
        }
    }

    // Syntax 2: YAML front matter at the start of the file.
    if let Some(fm) = RE_FRONT_MATTER.captures(content) {
        let yaml = &fm[1];

        if let Some(cap) = RE_FM_FLOW_LIST.captures(yaml) {
            let tools: Vec<String> = cap[1]
                .split(',')
                .map(trim_token)
                .filter(|t| !t.is_empty())
                .collect();
            if !tools.is_empty() {
                return (tools, true);
            }
        }

        if let Some(cap) = RE_FM_BLOCK_LIST.captures(yaml) {
            let tools: Vec<String> = RE_LIST_ITEM
                .captures_iter(&cap[1])
                .map(|c| trim_token(&c[1]))
                .filter(|t| !t.is_empty())
                .collect();
            if !tools.is_empty() {
                return (tools, true);
            }
        }
    }

    // Syntax 3: markdown section headed `allowed-tools`.
    if let Some(cap) = RE_SECTION_HEADING.captures(content) {
        let tools: Vec<String> = RE_BULLET_ITEM
            .captures_iter(&cap[1])
            .map(|c| trim_bullet_token(&c[1]))
            .filter(|t| !t.is_empty())
            .collect();
        if !tools.is_empty() {
            return (tools, true);
        }
    }

    (Vec::new(), false)
}

/// Parses a manifest file from disk.
///
/// Any read or UTF-8 decode failure yields the default (empty, unparsed)
/// result; the audit continues without a declaration.
pub fn parse_manifest(path: &Path) -> ManifestInfo {
    let Ok(bytes) = std::fs::read(path) else {
        return ManifestInfo::default();
    };
    let Ok(content) = String::from_utf8(bytes) else {
        return ManifestInfo::default();
    };

    let (allowed_tools, parse_success) = extract_allowed_tools(&content);
    ManifestInfo {
        allowed_tools,
        parse_success,
    }
}

// Coarse presence patterns per capability class. One alternation per class;
// a single hit anywhere in the file marks the capability as exercised.

static RE_CAP_NETWORK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)urllib\.request|http\.client|requests\.|\bcurl\b|\bwget\b").unwrap()
});

static RE_CAP_SHELL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"subprocess\.|os\.system|os\.popen|\beval\b|\bexec\b").unwrap()
});

static RE_CAP_FS_WRITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)open\s*\([^)]*["']w|\.write\s*\(|>>?\s*["'/~]"#).unwrap()
});

/// Infers which capability classes a script's content exercises.
///
/// Advisory: the result is carried on the audit record for declared-vs-
/// observed review and does not feed the score. An empty result is normal.
pub fn infer_capabilities(content: &str) -> Vec<Capability> {
    let mut capabilities = Vec::new();
    if RE_CAP_NETWORK.is_match(content) {
        capabilities.push(Capability::Network);
    }
    if RE_CAP_SHELL.is_match(content) {
        capabilities.push(Capability::Shell);
    }
    if RE_CAP_FS_WRITE.is_match(content) {
        capabilities.push(Capability::FilesystemWrite);
    }
    capabilities
}
