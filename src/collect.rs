//! Raw-output collection: one `<suite>.txt` file per suite.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::extract::extract_measurements;
use crate::measurement::SuiteRun;

/// Read and extract every suite file present under `raw_dir`.
///
/// Suites whose file is absent are skipped; they render as NOT RUN in the
/// report. Order follows the configured suite list.
pub fn collect_runs(raw_dir: &Path, suites: &[String]) -> Vec<SuiteRun> {
    let mut runs = Vec::new();
    for suite in suites {
        let path = raw_dir.join(format!("{suite}.txt"));
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                debug!("skipping {}: {err}", path.display());
                continue;
            }
        };
        runs.push(SuiteRun {
            suite: suite.clone(),
            measurements: extract_measurements(&content),
        });
    }
    runs
}
