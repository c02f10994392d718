//! Command-line interface definition.
//!
//! Uses [clap] derive macros. Single command, flags only — this module is
//! used only by the binary crate (`src/main.rs`).

use clap::Parser;
use skillguard::finding::RiskLevel;
use std::path::PathBuf;

/// Security risk auditor for AI agent skills.
#[derive(Parser)]
#[command(
    name = "skillguard",
    version,
    about = "Security risk auditor for AI agent skills"
)]
pub struct Cli {
    /// Skills root directory to scan (default: ~/.claude/skills).
    #[arg(long, short = 'r')]
    pub root: Option<PathBuf>,

    /// Emit the machine-readable JSON report instead of the terminal report.
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Write the report to a file instead of stdout.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Lowest risk level included in the report.
    #[arg(long, short = 'm', default_value = "safe", value_enum)]
    pub min_level: RiskLevel,

    /// Disable ANSI colors in the terminal report.
    #[arg(long)]
    pub no_color: bool,

    /// Show every finding per skill and include snippets.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
