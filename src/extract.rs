//! Extraction of structured measurements from raw harness output.
//!
//! The harness prints semi-structured text whose exact layout drifts across
//! tool versions, so extraction is a set of independent regex scans over an
//! immutable buffer. Anything that does not match is skipped; a malformed
//! block can never fail the run.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::measurement::{Measurement, UNKNOWN_VARIANT};
use crate::units::normalize_time;

/// Bytes of context scanned after a time line for outlier and throughput
/// data. Wide enough for the two follow-up lines the harness prints, narrow
/// enough not to bleed into the next benchmark block.
const LOOKAHEAD_BYTES: usize = 500;

static TIME_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"([a-z_][a-z_0-9]*(?:/[a-z_0-9]+)*)\s+time:\s+\[([0-9.]+)\s+(ns|µs|ms|s)\s+([0-9.]+)\s+(ns|µs|ms|s)\s+([0-9.]+)\s+(ns|µs|ms|s)\]",
    )
    .expect("time line pattern")
});

static OUTLIER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Found ([0-9]+) outliers among ([0-9]+) measurements \(([0-9.]+)%\)")
        .expect("outlier line pattern")
});

static THROUGHPUT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"thrpt:\s+\[(?:[0-9.]+ (?:Melem|elem)/s )?([0-9.]+) (?:Melem|elem)/s")
        .expect("throughput line pattern")
});

/// Extract every benchmark result from raw harness text, in document order.
///
/// Duplicate benchmark/variant pairs are all kept positionally; consumers
/// that need one value per key decide their own policy.
pub fn extract_measurements(content: &str) -> Vec<Measurement> {
    let mut results = Vec::new();
    for caps in TIME_LINE.captures_iter(content) {
        let full_name = &caps[1];
        let (benchmark_name, variant) = split_variant(full_name);

        let lower_ns = normalize_time(parse_f64(&caps[2]), &caps[3]);
        let mean_ns = normalize_time(parse_f64(&caps[4]), &caps[5]);
        let upper_ns = normalize_time(parse_f64(&caps[6]), &caps[7]);
        if !(lower_ns <= mean_ns && mean_ns <= upper_ns) {
            warn!("skipping {full_name}: confidence interval out of order");
            continue;
        }

        let window = lookahead(content, caps.get(0).map_or(0, |m| m.end()));
        let (outlier_count, sample_count, outlier_pct) = scan_outliers(window);
        let throughput = scan_throughput(window);

        results.push(Measurement {
            benchmark_name,
            variant,
            mean_ns,
            lower_ns,
            upper_ns,
            outlier_count,
            sample_count,
            outlier_pct,
            throughput,
        });
    }
    results
}

/// Split `name/variant/path` into the base name and the full variant
/// remainder. Nested variant segments stay joined, so `bench/strategy/fast`
/// keeps `strategy/fast` intact.
fn split_variant(full_name: &str) -> (String, String) {
    match full_name.split_once('/') {
        Some((name, rest)) => (name.to_string(), rest.to_string()),
        None => (full_name.to_string(), UNKNOWN_VARIANT.to_string()),
    }
}

/// Bounded slice of text following a match, clamped to a char boundary so a
/// multi-byte unit symbol at the cut point cannot split.
fn lookahead(content: &str, start: usize) -> &str {
    let mut end = (start + LOOKAHEAD_BYTES).min(content.len());
    while !content.is_char_boundary(end) {
        end -= 1;
    }
    &content[start..end]
}

fn scan_outliers(window: &str) -> (u32, u32, f64) {
    match OUTLIER_LINE.captures(window) {
        Some(caps) => (
            caps[1].parse().unwrap_or(0),
            caps[2].parse().unwrap_or(100),
            parse_f64(&caps[3]),
        ),
        None => (0, 100, 0.0),
    }
}

fn scan_throughput(window: &str) -> Option<f64> {
    THROUGHPUT_LINE
        .captures(window)
        .and_then(|caps| caps[1].parse().ok())
}

fn parse_f64(digits: &str) -> f64 {
    digits.parse().unwrap_or(0.0)
}
