//! Static catalog of dangerous-pattern detection rules.
//!
//! The catalog is immutable process-wide state: every pattern is compiled
//! exactly once into a [`LazyLock`] static and referenced from the ordered
//! [`catalog`] table. Rules marked `hard_trigger` classify a skill as
//! dangerous on a single match, regardless of the rest of the score.

use crate::finding::{Category, Severity};
use regex::Regex;
use std::sync::LazyLock;

/// A single detection rule.
///
/// Patterns are line-oriented regular expressions — lexical matching only,
/// no tokenization or language awareness. Case-insensitivity is per-rule
/// via an inline `(?i)`.
pub struct Rule {
    /// Stable identifier (e.g. `"CURL_PIPE_SH"`).
    pub id: &'static str,
    /// Human-readable name shown in the terminal report.
    pub name: &'static str,
    /// Compiled line pattern.
    pub regex: &'static LazyLock<Regex>,
    pub severity: Severity,
    pub category: Category,
    /// Base weight, before markdown halving and decay.
    pub weight: u32,
    /// A single match suffices for the `dangerous` classification.
    pub hard_trigger: bool,
}

// A. Destructive operations

// The flag cluster before the target must carry -r; `rm --recursive /` is
// intentionally not matched.
static RE_RM_RF_ROOT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)rm\s+(-[a-zA-Z]*)*\s*-r[a-zA-Z]*\s+(-[a-zA-Z]*\s+)*[/]($|\s|;|\|)").unwrap()
});

static RE_RM_RF_HOME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)rm\s+(-[a-zA-Z]*)*\s*-r[a-zA-Z]*\s+(-[a-zA-Z]*\s+)*(~|\$HOME)").unwrap()
});

static RE_DD_WIPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)dd\s+.*of=/dev/(sd[a-z]|nvme|hd[a-z]|vd[a-z])").unwrap());

static RE_MKFS_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)mkfs(\.[a-z0-9]+)?\s+/dev/").unwrap());

// B. Remote execution

static RE_CURL_PIPE_SH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)curl\s+[^|]*\|\s*(ba)?sh").unwrap());

static RE_WGET_PIPE_SH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)wget\s+[^|]*\|\s*(ba)?sh").unwrap());

static RE_BASE64_EXEC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)base64\s+(-d|--decode)[^|]*\|\s*(ba)?sh").unwrap());

// C. Command injection

static RE_PY_EVAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\beval\s*\(").unwrap());

static RE_PY_EXEC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bexec\s*\(").unwrap());

static RE_OS_SYSTEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"os\.system\s*\(").unwrap());

static RE_SUBPROCESS_SHELL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"subprocess\.(run|call|Popen)\s*\([^)]*shell\s*=\s*True").unwrap()
});

// D. Network exfiltration

static RE_CURL_POST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)curl\s+[^;|]*-X\s*POST").unwrap());

static RE_NETCAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bnc\s+(-[a-z]*\s+)*[a-zA-Z0-9.-]+\s+\d+").unwrap());

static RE_PY_URLLIB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"urllib\.request\.urlopen\s*\(").unwrap());

// E. Privilege escalation

static RE_SUDO: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bsudo\s+").unwrap());

static RE_CHMOD_777: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"chmod\s+(-[a-zA-Z]*\s+)*7[0-7]{2}").unwrap());

static RE_SUDOERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(/etc/sudoers|visudo|NOPASSWD)").unwrap());

// F. Persistence

static RE_CRONTAB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(crontab\s+-|/etc/cron)").unwrap());

static RE_SSH_KEYS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(>>|>)\s*~?/?(\.ssh/authorized_keys|\.ssh/id_)").unwrap()
});

// G. Secret exposure

static RE_PRIVATE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)-----BEGIN\s+(RSA|OPENSSH|EC|DSA)?\s*PRIVATE KEY-----").unwrap()
});

static RE_API_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(api[_-]?key|apikey|api_secret)\s*[=:]\s*["'][a-zA-Z0-9_-]{16,}["']"#)
        .unwrap()
});

static RE_PASSWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(password|passwd|pwd)\s*[=:]\s*["'][^"']{4,}["']"#).unwrap()
});

static RE_AWS_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(AKIA|ASIA)[A-Z0-9]{16}").unwrap());

static RE_GITHUB_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ghp_[a-zA-Z0-9]{36}").unwrap());

static RULES: &[Rule] = &[
    // A. Destructive operations
    Rule {
        id: "RM_RF_ROOT",
        name: "Recursive root delete",
        regex: &RE_RM_RF_ROOT,
        severity: Severity::Critical,
        category: Category::Destructive,
        weight: 100,
        hard_trigger: true,
    },
    Rule {
        id: "RM_RF_HOME",
        name: "Recursive home delete",
        regex: &RE_RM_RF_HOME,
        severity: Severity::Critical,
        category: Category::Destructive,
        weight: 90,
        hard_trigger: true,
    },
    Rule {
        id: "DD_WIPE",
        name: "Raw disk write",
        regex: &RE_DD_WIPE,
        severity: Severity::Critical,
        category: Category::Destructive,
        weight: 100,
        hard_trigger: true,
    },
    Rule {
        id: "MKFS_FORMAT",
        name: "Filesystem format on device",
        regex: &RE_MKFS_FORMAT,
        severity: Severity::Critical,
        category: Category::Destructive,
        weight: 100,
        hard_trigger: true,
    },
    // B. Remote execution
    Rule {
        id: "CURL_PIPE_SH",
        name: "Curl piped to shell",
        regex: &RE_CURL_PIPE_SH,
        severity: Severity::Critical,
        category: Category::RemoteExecution,
        weight: 90,
        hard_trigger: true,
    },
    Rule {
        id: "WGET_PIPE_SH",
        name: "Wget piped to shell",
        regex: &RE_WGET_PIPE_SH,
        severity: Severity::Critical,
        category: Category::RemoteExecution,
        weight: 90,
        hard_trigger: true,
    },
    Rule {
        id: "BASE64_EXEC",
        name: "Base64 decode into shell",
        regex: &RE_BASE64_EXEC,
        severity: Severity::Critical,
        category: Category::RemoteExecution,
        weight: 85,
        hard_trigger: true,
    },
    // C. Command injection
    Rule {
        id: "PY_EVAL",
        name: "Dynamic eval",
        regex: &RE_PY_EVAL,
        severity: Severity::High,
        category: Category::CommandInjection,
        weight: 70,
        hard_trigger: false,
    },
    Rule {
        id: "PY_EXEC",
        name: "Dynamic exec",
        regex: &RE_PY_EXEC,
        severity: Severity::High,
        category: Category::CommandInjection,
        weight: 70,
        hard_trigger: false,
    },
    Rule {
        id: "OS_SYSTEM",
        name: "os.system call",
        regex: &RE_OS_SYSTEM,
        severity: Severity::High,
        category: Category::CommandInjection,
        weight: 65,
        hard_trigger: false,
    },
    Rule {
        id: "SUBPROCESS_SHELL",
        name: "subprocess with shell=True",
        regex: &RE_SUBPROCESS_SHELL,
        severity: Severity::High,
        category: Category::CommandInjection,
        weight: 65,
        hard_trigger: false,
    },
    // D. Network exfiltration
    Rule {
        id: "CURL_POST",
        name: "Outbound POST request",
        regex: &RE_CURL_POST,
        severity: Severity::Medium,
        category: Category::NetworkExfil,
        weight: 40,
        hard_trigger: false,
    },
    Rule {
        id: "NETCAT",
        name: "Netcat connection",
        regex: &RE_NETCAT,
        severity: Severity::High,
        category: Category::NetworkExfil,
        weight: 60,
        hard_trigger: false,
    },
    Rule {
        id: "PY_URLLIB",
        name: "urllib fetch",
        regex: &RE_PY_URLLIB,
        severity: Severity::Medium,
        category: Category::NetworkExfil,
        weight: 35,
        hard_trigger: false,
    },
    // E. Privilege escalation
    Rule {
        id: "SUDO",
        name: "sudo invocation",
        regex: &RE_SUDO,
        severity: Severity::High,
        category: Category::PrivilegeEscalation,
        weight: 60,
        hard_trigger: false,
    },
    Rule {
        id: "CHMOD_777",
        name: "World-writable chmod",
        regex: &RE_CHMOD_777,
        severity: Severity::High,
        category: Category::PrivilegeEscalation,
        weight: 55,
        hard_trigger: false,
    },
    Rule {
        id: "SUDOERS",
        name: "sudoers policy modification",
        regex: &RE_SUDOERS,
        severity: Severity::Critical,
        category: Category::PrivilegeEscalation,
        weight: 95,
        hard_trigger: true,
    },
    // F. Persistence
    Rule {
        id: "CRONTAB",
        name: "Cron installation",
        regex: &RE_CRONTAB,
        severity: Severity::High,
        category: Category::Persistence,
        weight: 65,
        hard_trigger: false,
    },
    Rule {
        id: "SSH_KEYS",
        name: "SSH key injection",
        regex: &RE_SSH_KEYS,
        severity: Severity::Critical,
        category: Category::Persistence,
        weight: 90,
        hard_trigger: true,
    },
    // G. Secret exposure
    Rule {
        id: "PRIVATE_KEY",
        name: "Embedded private key",
        regex: &RE_PRIVATE_KEY,
        severity: Severity::Critical,
        category: Category::SecretExposure,
        weight: 85,
        hard_trigger: true,
    },
    Rule {
        id: "API_KEY",
        name: "Hardcoded API key",
        regex: &RE_API_KEY,
        severity: Severity::High,
        category: Category::SecretExposure,
        weight: 60,
        hard_trigger: false,
    },
    Rule {
        id: "PASSWORD",
        name: "Hardcoded password",
        regex: &RE_PASSWORD,
        severity: Severity::High,
        category: Category::SecretExposure,
        weight: 55,
        hard_trigger: false,
    },
    Rule {
        id: "AWS_KEY",
        name: "AWS access key",
        regex: &RE_AWS_KEY,
        severity: Severity::Critical,
        category: Category::SecretExposure,
        weight: 80,
        hard_trigger: false,
    },
    Rule {
        id: "GITHUB_TOKEN",
        name: "GitHub personal access token",
        regex: &RE_GITHUB_TOKEN,
        severity: Severity::Critical,
        category: Category::SecretExposure,
        weight: 80,
        hard_trigger: false,
    },
];

/// Returns the full rule catalog in evaluation order.
pub fn catalog() -> &'static [Rule] {
    RULES
}

/// Looks up a rule by its stable ID.
pub fn rule_by_id(id: &str) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.id == id)
}
