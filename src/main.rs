mod cli;

use clap::Parser;
use colored::Colorize;
use skillguard::finding::RiskLevel;
use skillguard::{audit, output, scanner};
use std::time::Instant;

fn main() {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // A single failure exit code is reserved for everything fatal;
            // --help and --version still exit 0.
            let is_error = e.use_stderr();
            let _ = e.print();
            std::process::exit(if is_error { 1 } else { 0 });
        }
    };

    if cli.no_color {
        colored::control::set_override(false);
    }

    let root = cli
        .root
        .clone()
        .unwrap_or_else(scanner::default_skills_root);
    if !root.is_dir() {
        eprintln!("Error: skills root does not exist: {}", root.display());
        std::process::exit(1);
    }

    let start = Instant::now();
    eprintln!("{}", format!("Scanning {}", root.display()).dimmed());

    let skills = scanner::scan_skills_root(&root);
    if skills.is_empty() {
        eprintln!("{}", "No skills found".dimmed());
    } else {
        eprintln!(
            "{}",
            format!(
                "Found {} skill{}, auditing…",
                skills.len(),
                if skills.len() == 1 { "" } else { "s" }
            )
            .dimmed()
        );
    }

    let results = audit::audit_all(&skills);
    let scan_time = start.elapsed().as_secs_f64();

    // The filter shapes the report only; the exit code below still sees
    // every result.
    let filtered: Vec<_> = results
        .iter()
        .filter(|r| r.risk_level >= cli.min_level)
        .cloned()
        .collect();

    let rendered = if cli.json {
        output::json::render(&filtered, scan_time)
    } else {
        output::terminal::render(&filtered, scan_time, cli.verbose)
    };

    if let Some(out_path) = &cli.output {
        if let Err(e) = std::fs::write(out_path, &rendered) {
            eprintln!("Error writing report to {}: {e}", out_path.display());
            std::process::exit(1);
        }
        eprintln!("Report written to {}", out_path.display());
    } else {
        print!("{rendered}");
    }

    let any_dangerous = results.iter().any(|r| r.risk_level == RiskLevel::Dangerous);
    std::process::exit(if any_dangerous { 1 } else { 0 });
}
