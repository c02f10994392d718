//! Skill discovery and file collection.
//!
//! The scanner turns a skills root directory into an ordered list of
//! [`SkillInfo`] values. Discovery is two-level: immediate children of the
//! root are tested for skill-ness, then each accepted skill directory is
//! walked recursively with size, binary, and ignored-directory filters.
//!
//! Per-file I/O errors never fail the pass — the affected file is simply
//! left out of the skill's file list.

use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory names excluded from the recursive walk, by exact name.
pub const SKIP_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "__pycache__",
    ".venv",
    "venv",
    "dist",
    "build",
    ".cache",
    ".pytest_cache",
    "coverage",
];

/// Extensions (lowercased, no dot) that classify a file as a script.
pub const SCRIPT_EXTENSIONS: &[&str] = &[
    "py", "sh", "bash", "zsh", "js", "ts", "rb", "pl", "ps1", "cmd", "bat",
];

/// Files larger than this are skipped entirely (2 MiB).
pub const MAX_FILE_SIZE: u64 = 2 * 1024 * 1024;

/// Length of the binary/shebang probe read.
const PROBE_LEN: u64 = 8192;

/// A file that survived the scanner's filters.
#[derive(Debug, Clone)]
pub struct ScannedFile {
    /// Absolute path.
    pub path: PathBuf,
    /// Path relative to the owning skill directory.
    pub relative_path: String,
    /// Lowercased extension without the dot, empty when absent.
    pub extension: String,
    /// Size in bytes (≤ [`MAX_FILE_SIZE`]).
    pub size: u64,
    /// Extension is in [`SCRIPT_EXTENSIONS`] or the file starts with `#!`.
    pub is_script: bool,
    /// File begins with the two bytes `#!`.
    pub has_shebang: bool,
}

/// A discovered skill directory and its collected files.
///
/// Created by the scanner and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct SkillInfo {
    /// Directory basename.
    pub name: String,
    /// Skill root directory.
    pub path: PathBuf,
    /// Manifest file, when a case-variant of `skill.md` exists.
    pub manifest_path: Option<PathBuf>,
    /// Files in deterministic walk order.
    pub files: Vec<ScannedFile>,
}

/// Reads the first 8 KiB of `path` once and answers both probe questions:
/// `(contains_nul, starts_with_shebang)`. Returns `None` on any I/O error,
/// which callers treat as "skip this file".
fn probe_file(path: &Path) -> Option<(bool, bool)> {
    let file = std::fs::File::open(path).ok()?;
    let mut chunk = Vec::with_capacity(PROBE_LEN as usize);
    file.take(PROBE_LEN).read_to_end(&mut chunk).ok()?;
    Some((chunk.contains(&0), chunk.starts_with(b"#!")))
}

/// Finds the skill manifest under its accepted case-variant names.
pub fn find_manifest(skill_dir: &Path) -> Option<PathBuf> {
    for name in ["skill.md", "SKILL.md", "Skill.md"] {
        let candidate = skill_dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

fn is_skipped_dir(name: &std::ffi::OsStr) -> bool {
    name.to_str().map(|n| SKIP_DIRS.contains(&n)).unwrap_or(false)
}

/// Collects the files of a single skill directory.
///
/// The walk is sorted by file name at every level so repeated runs over an
/// unchanged tree produce identical output. Ignored directories are pruned
/// without being descended into.
pub fn scan_skill_directory(skill_dir: &Path) -> SkillInfo {
    let name = skill_dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let manifest_path = find_manifest(skill_dir);
    let mut files = Vec::new();

    let walker = WalkDir::new(skill_dir)
        .sort_by_file_name()
        .into_iter()
        // depth 0 is the skill root itself; never prune it even if the skill
        // happens to be named like an ignored directory.
        .filter_entry(|e| e.depth() == 0 || !(e.file_type().is_dir() && is_skipped_dir(e.file_name())));

    for entry in walker.filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        let size = metadata.len();
        if size > MAX_FILE_SIZE {
            continue;
        }

        let path = entry.into_path();
        let Some((is_binary, has_shebang)) = probe_file(&path) else {
            continue;
        };
        if is_binary {
            continue;
        }

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let is_script = SCRIPT_EXTENSIONS.contains(&extension.as_str()) || has_shebang;
        let relative_path = path
            .strip_prefix(skill_dir)
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|_| path.to_string_lossy().to_string());

        files.push(ScannedFile {
            path,
            relative_path,
            extension,
            size,
            is_script,
            has_shebang,
        });
    }

    SkillInfo {
        name,
        path: skill_dir.to_path_buf(),
        manifest_path,
        files,
    }
}

/// Returns `true` when a directory qualifies as a skill: it carries a
/// manifest, a `scripts/` subdirectory, or a `__main__.py` entry point.
fn is_skill_dir(dir: &Path) -> bool {
    find_manifest(dir).is_some()
        || dir.join("scripts").is_dir()
        || dir.join("__main__.py").is_file()
}

/// Enumerates and scans every skill under `root`.
///
/// Immediate child directories are considered in name order; hidden
/// directories (leading `.`) and non-qualifying directories are skipped
/// silently. An unreadable root yields an empty list.
pub fn scan_skills_root(root: &Path) -> Vec<SkillInfo> {
    let Ok(entries) = std::fs::read_dir(root) else {
        return Vec::new();
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .map(|n| !n.starts_with('.'))
                .unwrap_or(false)
        })
        .collect();
    dirs.sort();

    dirs.iter()
        .filter(|dir| is_skill_dir(dir))
        .map(|dir| scan_skill_directory(dir))
        .collect()
}

/// Default skills root: `~/.claude/skills`.
pub fn default_skills_root() -> PathBuf {
    match directories::UserDirs::new() {
        Some(dirs) => dirs.home_dir().join(".claude").join("skills"),
        None => PathBuf::from(".claude").join("skills"),
    }
}
