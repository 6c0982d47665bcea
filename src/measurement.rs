/// Canonical variant value for benchmark cases reported without a `/variant`
/// suffix.
pub const UNKNOWN_VARIANT: &str = "unknown";

/// One parsed benchmark result, all times in nanoseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    pub benchmark_name: String,
    pub variant: String,
    pub mean_ns: f64,
    pub lower_ns: f64,
    pub upper_ns: f64,
    pub outlier_count: u32,
    pub sample_count: u32,
    pub outlier_pct: f64,
    /// Elements per second when the harness reported throughput.
    pub throughput: Option<f64>,
}

impl Measurement {
    /// Composite key used to match this measurement across runs.
    ///
    /// The canonical "unknown" variant is omitted so that unsuffixed
    /// benchmark cases match baseline rows written without a variant.
    pub fn key(&self) -> String {
        if self.variant == UNKNOWN_VARIANT {
            self.benchmark_name.clone()
        } else {
            format!("{}/{}", self.benchmark_name, self.variant)
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: mean={:.2}ns samples={}",
            self.key(),
            self.mean_ns,
            self.sample_count
        )
    }
}

/// One current measurement matched against its baseline counterpart.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub key: String,
    pub baseline_ns: f64,
    pub current_ns: f64,
    pub change_pct: f64,
}

impl Comparison {
    pub fn new(key: String, baseline_ns: f64, current_ns: f64) -> Self {
        let change_pct = (current_ns - baseline_ns) / baseline_ns * 100.0;
        Self {
            key,
            baseline_ns,
            current_ns,
            change_pct,
        }
    }
}

/// All measurements extracted from one suite's raw output file.
#[derive(Clone, Debug, PartialEq)]
pub struct SuiteRun {
    pub suite: String,
    pub measurements: Vec<Measurement>,
}
