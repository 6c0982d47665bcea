//! Configuration for a report run.
//!
//! The suite list is an explicit input rather than a process-wide constant,
//! so the engine can be driven with arbitrary suite sets in tests and the
//! CLI can derive the list from whatever the raw directory contains.

use std::fs;
use std::path::Path;

use crate::errors::BenchReportError;

/// Raw files carrying a whole-suite run are named this by convention and
/// always sort to the end of the section order.
pub const FULL_SUITE: &str = "full_suite";

#[derive(Clone, Debug, PartialEq)]
pub struct ReportConfig {
    /// Ordered suite names; each maps to `<suite>.txt` in the raw directory
    /// and to one section of the report.
    pub suites: Vec<String>,
    /// Regression/improvement tolerance in percent.
    pub threshold_pct: f64,
    /// Platform label for the report header.
    pub platform: String,
}

impl ReportConfig {
    pub fn new<S: Into<String>>(suites: Vec<String>, platform: S) -> Self {
        Self {
            suites,
            threshold_pct: 5.0,
            platform: platform.into(),
        }
    }

    pub fn with_threshold(mut self, threshold_pct: f64) -> Self {
        self.threshold_pct = threshold_pct;
        self
    }
}

/// Discover suite names from the `*.txt` files in a raw-output directory.
///
/// Names are sorted for stable section order, with the `full_suite`
/// convention pinned last.
pub fn discover_suites(raw_dir: &Path) -> Result<Vec<String>, BenchReportError> {
    let entries = fs::read_dir(raw_dir)
        .map_err(|e| BenchReportError::read(format!("{}: {e}", raw_dir.display())))?;
    let mut suites = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| BenchReportError::read(e.to_string()))?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "txt") {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                suites.push(stem.to_string());
            }
        }
    }
    suites.sort();
    if let Some(idx) = suites.iter().position(|s| s == FULL_SUITE) {
        let full = suites.remove(idx);
        suites.push(full);
    }
    Ok(suites)
}
