use crate::errors::BenchReportError;

/// Parsed command line for the `benchreport` binary.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandLineConfig {
    pub raw_dir: String,
    pub output_file: String,
    pub platform: Option<String>,
    pub baseline_file: Option<String>,
    pub threshold_pct: f64,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut raw_dir = None;
        let mut output_file = None;
        let mut platform = None;
        let mut baseline_file = None;
        let mut threshold_pct = 5.0;
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--platform" => {
                    platform = Some(
                        iter.next()
                            .ok_or_else(|| "--platform requires a value".to_string())?
                            .to_string(),
                    );
                }
                "--compare-with" => {
                    baseline_file = Some(
                        iter.next()
                            .ok_or_else(|| "--compare-with requires a value".to_string())?
                            .to_string(),
                    );
                }
                "--threshold" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| "--threshold requires a value".to_string())?;
                    threshold_pct = value
                        .parse()
                        .map_err(|_| format!("invalid threshold {value}"))?;
                }
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                _ => {
                    if raw_dir.is_none() {
                        raw_dir = Some(arg.to_string());
                    } else if output_file.is_none() {
                        output_file = Some(arg.to_string());
                    } else {
                        return Err(format!("unexpected argument {arg}"));
                    }
                }
            }
        }
        Ok(Self {
            raw_dir: raw_dir.ok_or_else(|| "missing raw directory argument".to_string())?,
            output_file: output_file.ok_or_else(|| "missing output file argument".to_string())?,
            platform,
            baseline_file,
            threshold_pct,
        })
    }

    pub fn help() -> &'static str {
        "Usage: benchreport RAW_DIR OUTPUT_FILE [--platform NAME] [--compare-with FILE] [--threshold PCT]\n"
    }

    pub fn validate(&self) -> Result<(), BenchReportError> {
        if self.threshold_pct < 0.0 {
            return Err(BenchReportError::invalid_input(format!(
                "threshold must be non-negative, got {}",
                self.threshold_pct
            )));
        }
        Ok(())
    }
}
