//! # skillguard
//!
//! Security risk auditing for AI agent skills.
//!
//! `skillguard` scans a tree of installed skills (directories containing a
//! markdown manifest and/or scripts), matches every line of every in-scope
//! file against a catalog of dangerous patterns, and assigns each skill a
//! quantified risk score and a discrete risk level. Reports come in a
//! machine-readable JSON form and a colorized terminal form.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use skillguard::{audit, output, scanner};
//!
//! let skills = scanner::scan_skills_root(Path::new("~/.claude/skills"));
//! let results = audit::audit_all(&skills);
//!
//! print!("{}", output::terminal::render(&results, 0.0, false));
//! ```
//!
//! ## Architecture
//!
//! The crate is organized around a pipeline:
//!
//! 1. **[`scanner`]** — discover skill directories and collect their files
//!    (size, binary, and ignored-directory filters).
//! 2. **[`manifest`]** — extract the declared `allowed-tools` list and infer
//!    exercised capabilities.
//! 3. **[`rules`]** — the immutable catalog of detection rules.
//! 4. **[`engine`]** — apply every rule to every line, emitting findings.
//! 5. **[`scoring`]** — aggregate findings into a score and risk level with
//!    decay, floor, and ceiling semantics.
//! 6. **[`audit`]** — orchestrate the per-skill pipeline in parallel.
//! 7. **[`finding`]** — core data types shared across stages.
//! 8. **[`output`]** — render results as JSON or colored terminal text.
//!
//! The auditor is a *lexical*, line-oriented scanner: it never executes,
//! parses, or modifies what it inspects, and adversarial content degrades
//! to fewer findings rather than errors.

pub mod audit;
pub mod engine;
pub mod finding;
pub mod manifest;
pub mod output;
pub mod rules;
pub mod scanner;
pub mod scoring;
