//! Time-unit conversion between harness output and the canonical nanosecond
//! representation.

use tracing::warn;

const NS_PER_US: f64 = 1_000.0;
const NS_PER_MS: f64 = 1_000_000.0;
const NS_PER_S: f64 = 1_000_000_000.0;

/// Convert a time value with its unit symbol to nanoseconds.
///
/// Unrecognized unit symbols pass the value through unchanged. The harness
/// output format drifts across versions, so an unknown symbol is reported at
/// warn level instead of failing the whole extraction.
pub fn normalize_time(value: f64, unit: &str) -> f64 {
    match unit {
        "ns" => value,
        "µs" => value * NS_PER_US,
        "ms" => value * NS_PER_MS,
        "s" => value * NS_PER_S,
        other => {
            warn!("unrecognized time unit {other:?}, value passed through unconverted");
            value
        }
    }
}

/// Render a nanosecond latency in the most readable unit.
///
/// The baseline loader reads these rendered values back out of the report
/// table, so the set of emitted units must stay a subset of what
/// [`normalize_time`] accepts.
pub fn format_latency(ns: f64) -> String {
    if ns < 1_000.0 {
        format!("{ns:.2} ns")
    } else if ns < 1_000_000.0 {
        format!("{:.2} µs", ns / NS_PER_US)
    } else {
        format!("{:.2} ms", ns / NS_PER_MS)
    }
}
