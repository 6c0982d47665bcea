//! Baseline reconstruction from a previously generated report.
//!
//! The loader understands two sources: the versioned JSON sidecar written
//! next to every report, and the report's own result tables. The sidecar is
//! preferred; the table scan keeps reports from older versions usable.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use ahash::AHashMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::measurement::UNKNOWN_VARIANT;
use crate::units::normalize_time;

/// Composite key (`name` or `name/variant`) to prior mean latency in
/// nanoseconds.
pub type BaselineMap = AHashMap<String, f64>;

/// Format version accepted by [`load_sidecar`]. Bump when the sidecar layout
/// changes.
pub const BASELINE_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineSidecar {
    pub version: u32,
    pub entries: Vec<BaselineEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineEntry {
    pub key: String,
    pub mean_ns: f64,
}

static TABLE_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\|\s*`([^`]+)`\s*\|\s*([^|]+)\|\s*([0-9.]+)\s*(ns|µs|ms)")
        .expect("table row pattern")
});

/// Load the baseline for a prior report path.
///
/// Missing file, unreadable sidecar, or a report without any matching table
/// rows all degrade to an empty mapping.
pub fn load_baseline(report_path: &Path) -> BaselineMap {
    if let Some(map) = load_sidecar(&sidecar_path(report_path)) {
        return map;
    }
    match fs::read_to_string(report_path) {
        Ok(text) => parse_report_tables(&text),
        Err(err) => {
            debug!("no baseline at {}: {err}", report_path.display());
            BaselineMap::new()
        }
    }
}

/// Sidecar location for a report path: `report.md` → `report.md.baseline.json`.
pub fn sidecar_path(report_path: &Path) -> PathBuf {
    let mut name = report_path.as_os_str().to_os_string();
    name.push(".baseline.json");
    PathBuf::from(name)
}

/// Read a sidecar file, returning `None` when it is absent, malformed, or
/// carries an unrecognized version.
pub fn load_sidecar(path: &Path) -> Option<BaselineMap> {
    let text = fs::read_to_string(path).ok()?;
    let sidecar: BaselineSidecar = serde_json::from_str(&text).ok()?;
    if sidecar.version != BASELINE_FORMAT_VERSION {
        debug!(
            "ignoring baseline sidecar {} with version {}",
            path.display(),
            sidecar.version
        );
        return None;
    }
    let mut map = BaselineMap::new();
    for entry in sidecar.entries {
        map.insert(entry.key, entry.mean_ns);
    }
    Some(map)
}

/// Scan a report's result tables for baseline rows.
///
/// Row shape is the hard contract with the report assembler: backticked
/// benchmark name, variant cell, then the mean value followed by its unit.
/// Later rows overwrite earlier ones when a key repeats.
pub fn parse_report_tables(text: &str) -> BaselineMap {
    let mut map = BaselineMap::new();
    for caps in TABLE_ROW.captures_iter(text) {
        let name = caps[1].trim();
        let variant = caps[2].trim();
        let value: f64 = match caps[3].parse() {
            Ok(v) => v,
            Err(_) => continue,
        };
        let mean_ns = normalize_time(value, &caps[4]);
        map.insert(composite_key(name, variant), mean_ns);
    }
    map
}

fn composite_key(name: &str, variant: &str) -> String {
    if variant.is_empty() || variant == UNKNOWN_VARIANT {
        name.to_string()
    } else {
        format!("{name}/{variant}")
    }
}
