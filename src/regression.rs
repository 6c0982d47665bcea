//! Regression and improvement detection against a baseline mapping.

use crate::baseline::BaselineMap;
use crate::measurement::{Comparison, SuiteRun};

/// Tolerance configuration for change classification.
#[derive(Clone, Debug, PartialEq)]
pub struct RegressionConfig {
    /// Percent change beyond which a comparison is flagged. The bound is
    /// exclusive: a change of exactly `threshold_pct` stays unchanged.
    pub threshold_pct: f64,
}

impl Default for RegressionConfig {
    fn default() -> Self {
        Self { threshold_pct: 5.0 }
    }
}

/// Classified comparisons, regressions worst-first and improvements
/// best-first. Unchanged comparisons are not carried.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegressionReport {
    pub regressions: Vec<Comparison>,
    pub improvements: Vec<Comparison>,
}

impl RegressionReport {
    pub fn is_empty(&self) -> bool {
        self.regressions.is_empty() && self.improvements.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct RegressionAnalyzer {
    config: RegressionConfig,
}

impl RegressionAnalyzer {
    pub fn new(config: RegressionConfig) -> Self {
        Self { config }
    }

    /// Compare every current measurement against the baseline.
    ///
    /// Keys absent from the baseline are excluded from both lists, so a
    /// benchmark's first appearance never reads as a regression. Duplicate
    /// current keys each produce their own comparison.
    pub fn evaluate(&self, runs: &[SuiteRun], baseline: &BaselineMap) -> RegressionReport {
        let mut report = RegressionReport::default();
        for run in runs {
            for measurement in &run.measurements {
                let key = measurement.key();
                let Some(&baseline_ns) = baseline.get(&key) else {
                    continue;
                };
                let comparison = Comparison::new(key, baseline_ns, measurement.mean_ns);
                if comparison.change_pct > self.config.threshold_pct {
                    report.regressions.push(comparison);
                } else if comparison.change_pct < -self.config.threshold_pct {
                    report.improvements.push(comparison);
                }
            }
        }
        report
            .regressions
            .sort_by(|a, b| b.change_pct.total_cmp(&a.change_pct));
        report
            .improvements
            .sort_by(|a, b| a.change_pct.total_cmp(&b.change_pct));
        report
    }
}
