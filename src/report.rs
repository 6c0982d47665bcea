//! Consolidated markdown report assembly.
//!
//! The result-table row shape (backticked name, variant, mean latency with
//! unit) is read back by the baseline loader on the next run. Column order
//! must not change without bumping the sidecar format version.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::baseline::{BASELINE_FORMAT_VERSION, BaselineEntry, BaselineSidecar, sidecar_path};
use crate::config::ReportConfig;
use crate::errors::BenchReportError;
use crate::measurement::SuiteRun;
use crate::regression::RegressionReport;
use crate::sysinfo::SystemInfo;
use crate::units::format_latency;

/// Everything the assembler needs beyond the measurements themselves.
pub struct ReportContext<'a> {
    pub config: &'a ReportConfig,
    pub system_info: &'a SystemInfo,
    /// Pre-formatted generation timestamp; the assembler itself never reads
    /// the clock.
    pub timestamp: &'a str,
    /// Label for the raw-data pointer in the notes footer.
    pub raw_dir_name: &'a str,
}

/// Render the full consolidated report as a markdown string.
pub fn render_report(
    ctx: &ReportContext<'_>,
    runs: &[SuiteRun],
    regression: &RegressionReport,
) -> String {
    let mut out = String::new();
    push_header(&mut out, ctx);
    for suite in &ctx.config.suites {
        let run = runs.iter().find(|r| &r.suite == suite);
        push_suite_section(&mut out, suite, run);
    }
    push_regression_section(&mut out, ctx.config.threshold_pct, regression);
    push_notes(&mut out, ctx, runs.len());
    out
}

/// Write the rendered report plus its baseline sidecar.
pub fn write_report(
    path: &Path,
    ctx: &ReportContext<'_>,
    runs: &[SuiteRun],
    regression: &RegressionReport,
) -> Result<(), BenchReportError> {
    let rendered = render_report(ctx, runs, regression);
    let file =
        File::create(path).map_err(|e| BenchReportError::write(format!("{}: {e}", path.display())))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(rendered.as_bytes())
        .map_err(|e| BenchReportError::write(e.to_string()))?;
    writer
        .flush()
        .map_err(|e| BenchReportError::write(e.to_string()))?;
    write_sidecar(&sidecar_path(path), runs)
}

/// Serialize the key → mean_ns mapping for the next run's baseline loader.
/// Later duplicates of a key overwrite earlier ones.
pub fn build_sidecar(runs: &[SuiteRun]) -> BaselineSidecar {
    let mut entries: Vec<BaselineEntry> = Vec::new();
    for run in runs {
        for measurement in &run.measurements {
            let key = measurement.key();
            match entries.iter_mut().find(|e| e.key == key) {
                Some(existing) => existing.mean_ns = measurement.mean_ns,
                None => entries.push(BaselineEntry {
                    key,
                    mean_ns: measurement.mean_ns,
                }),
            }
        }
    }
    BaselineSidecar {
        version: BASELINE_FORMAT_VERSION,
        entries,
    }
}

fn write_sidecar(path: &Path, runs: &[SuiteRun]) -> Result<(), BenchReportError> {
    let sidecar = build_sidecar(runs);
    let file =
        File::create(path).map_err(|e| BenchReportError::write(format!("{}: {e}", path.display())))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &sidecar)
        .map_err(|e| BenchReportError::write(e.to_string()))
}

fn push_header(out: &mut String, ctx: &ReportContext<'_>) {
    let info = ctx.system_info;
    let _ = writeln!(
        out,
        "# Benchmark Results: {} ({})\n",
        ctx.timestamp, ctx.config.platform
    );
    let _ = writeln!(out, "## Metadata\n");
    let _ = writeln!(out, "- **Platform**: {}", ctx.config.platform);
    let _ = writeln!(out, "- **Date**: {}", ctx.timestamp);
    let _ = writeln!(out, "- **CPU**: {}", info.get_or_na("CPU"));
    let _ = writeln!(out, "- **RAM**: {}", info.get_or_na("RAM"));
    let _ = writeln!(
        out,
        "- **OS**: {} {}",
        info.get_or_na("OS"),
        info.get("OS_VERSION").unwrap_or("")
    );
    let _ = writeln!(out, "- **Architecture**: {}", info.get_or_na("ARCH"));
    let _ = writeln!(out, "- **Rust Version**: {}", info.get_or_na("RUST_VERSION"));
    let _ = writeln!(out, "- **Git Commit**: {}", info.get_or_na("GIT_COMMIT"));
    let _ = writeln!(out, "- **Git Branch**: {}", info.get_or_na("GIT_BRANCH"));
    let _ = writeln!(out, "\n---\n");
}

fn push_suite_section(out: &mut String, suite: &str, run: Option<&SuiteRun>) {
    let _ = writeln!(out, "## {}\n", section_title(suite));
    match run {
        Some(run) if !run.measurements.is_empty() => {
            let means: Vec<f64> = run.measurements.iter().map(|m| m.mean_ns).collect();
            let avg = means.iter().sum::<f64>() / means.len() as f64;
            let min = means.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = means.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let _ = writeln!(
                out,
                "**Summary**: Average: {} | Range: [{} - {}]\n",
                format_latency(avg),
                format_latency(min),
                format_latency(max)
            );
            let _ = writeln!(out, "| Benchmark | Variant | Mean Latency | Range | Outliers |");
            let _ = writeln!(out, "|-----------|---------|--------------|-------|----------|");
            for m in &run.measurements {
                let _ = writeln!(
                    out,
                    "| `{}` | {} | {} | [{} - {}] | {:.1}% |",
                    m.benchmark_name,
                    m.variant,
                    format_latency(m.mean_ns),
                    format_latency(m.lower_ns),
                    format_latency(m.upper_ns),
                    m.outlier_pct
                );
            }
        }
        _ => {
            let _ = writeln!(out, "**NOT RUN**");
        }
    }
    let _ = writeln!(out, "\n---\n");
}

fn push_regression_section(out: &mut String, threshold_pct: f64, report: &RegressionReport) {
    let _ = writeln!(out, "## Regression Analysis\n");
    if report.is_empty() {
        let _ = writeln!(
            out,
            "No baseline comparison available or all changes within ±{threshold_pct}% threshold.\n"
        );
        return;
    }
    if !report.regressions.is_empty() {
        let _ = writeln!(out, "### Regressions (>{threshold_pct}% slower)\n");
        for c in &report.regressions {
            let _ = writeln!(
                out,
                "- **{}**: {} → {} ({:+.1}%)",
                c.key,
                format_latency(c.baseline_ns),
                format_latency(c.current_ns),
                c.change_pct
            );
        }
        let _ = writeln!(out);
    } else {
        let _ = writeln!(out, "No regressions detected.\n");
    }
    if !report.improvements.is_empty() {
        let _ = writeln!(out, "### Improvements (>{threshold_pct}% faster)\n");
        for c in &report.improvements {
            let _ = writeln!(
                out,
                "- **{}**: {} → {} ({:+.1}%)",
                c.key,
                format_latency(c.baseline_ns),
                format_latency(c.current_ns),
                c.change_pct
            );
        }
        let _ = writeln!(out);
    }
}

fn push_notes(out: &mut String, ctx: &ReportContext<'_>, suites_run: usize) {
    let _ = writeln!(out, "---\n");
    let _ = writeln!(out, "## Notes\n");
    let _ = writeln!(out, "- Generated: {}", ctx.timestamp);
    let _ = writeln!(
        out,
        "- Generator: benchreport {}",
        env!("CARGO_PKG_VERSION")
    );
    let _ = writeln!(
        out,
        "- Benchmarks run: {}/{}",
        suites_run,
        ctx.config.suites.len()
    );
    let _ = writeln!(out, "- Raw data: `{}/`", ctx.raw_dir_name);
}

/// `fill_processing_bench` → `Fill Processing Bench`.
fn section_title(suite: &str) -> String {
    suite
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
