//! Report formatting for audit results.
//!
//! Two sinks are supported:
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | Structured JSON | [`json`] | Automation / scripting |
//! | Terminal text | [`terminal`] | Human review |
//!
//! Both renderers take a slice of results (already filtered by the driver's
//! `--min-level`) plus the scan wall-clock time and return the complete
//! report as a `String`.

pub mod json;
pub mod terminal;
