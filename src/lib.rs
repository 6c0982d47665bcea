//! Consolidated benchmark reporting with baseline regression analysis.
//!
//! benchreport ingests the raw text output of a micro-benchmarking harness,
//! extracts structured latency measurements, and produces a consolidated
//! markdown report. When a prior report is supplied, the current run is
//! diffed against it and changes beyond a tolerance threshold are flagged as
//! regressions or improvements.
//!
//! # Pipeline
//!
//! ```rust,no_run
//! use std::path::Path;
//! use benchreport::{
//!     ReportConfig, RegressionAnalyzer, RegressionConfig, ReportContext,
//!     SystemInfo, collect_runs, discover_suites, load_baseline, write_report,
//! };
//!
//! let raw_dir = Path::new("raw/2026-08-07");
//! let suites = discover_suites(raw_dir)?;
//! let config = ReportConfig::new(suites, "M1");
//! let runs = collect_runs(raw_dir, &config.suites);
//! let baseline = load_baseline(Path::new("reports/previous.md"));
//! let analyzer = RegressionAnalyzer::new(RegressionConfig::default());
//! let regression = analyzer.evaluate(&runs, &baseline);
//! let ctx = ReportContext {
//!     config: &config,
//!     system_info: &SystemInfo::from_dir(raw_dir),
//!     timestamp: "2026-08-07 12:00:00",
//!     raw_dir_name: "2026-08-07",
//! };
//! write_report(Path::new("reports/current.md"), &ctx, &runs, &regression)?;
//! # Ok::<(), benchreport::BenchReportError>(())
//! ```
//!
//! # Design notes
//!
//! - Extraction is permissive: unmatched or malformed text is skipped, never
//!   an error. Harness output format drifts across versions and a partial
//!   report beats no report.
//! - All time values are normalized to nanoseconds before anything compares
//!   or renders them.
//! - The baseline loader reads the report's own result tables (and a
//!   versioned JSON sidecar), so report format and loader form a closed
//!   loop that must stay compatible across versions.

pub mod baseline;
pub mod cli;
pub mod collect;
pub mod config;
pub mod errors;
pub mod extract;
pub mod measurement;
pub mod regression;
pub mod report;
pub mod sysinfo;
pub mod units;

pub use baseline::{BASELINE_FORMAT_VERSION, BaselineMap, BaselineSidecar, load_baseline};
pub use cli::CommandLineConfig;
pub use collect::collect_runs;
pub use config::{FULL_SUITE, ReportConfig, discover_suites};
pub use errors::BenchReportError;
pub use extract::extract_measurements;
pub use measurement::{Comparison, Measurement, SuiteRun, UNKNOWN_VARIANT};
pub use regression::{RegressionAnalyzer, RegressionConfig, RegressionReport};
pub use report::{ReportContext, build_sidecar, render_report, write_report};
pub use sysinfo::SystemInfo;
pub use units::{format_latency, normalize_time};
