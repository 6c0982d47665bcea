use std::{env, path::Path, process};

use chrono::Local;

use benchreport::{
    BenchReportError, CommandLineConfig, RegressionAnalyzer, RegressionConfig, ReportConfig,
    ReportContext, SystemInfo, collect_runs, discover_suites, load_baseline, write_report,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{}", CommandLineConfig::help());
            process::exit(2);
        }
    };
    if let Err(err) = config.validate() {
        eprintln!("error: {err}");
        process::exit(2);
    }

    if let Err(err) = run(&config) {
        eprintln!("report generation failed: {err}");
        process::exit(1);
    }
}

fn run(cli: &CommandLineConfig) -> Result<(), BenchReportError> {
    let raw_dir = Path::new(&cli.raw_dir);
    let output = Path::new(&cli.output_file);

    let system_info = SystemInfo::from_dir(raw_dir);
    let platform = cli
        .platform
        .clone()
        .or_else(|| system_info.get("PLATFORM").map(str::to_string))
        .unwrap_or_else(|| "unknown".to_string());

    let suites = discover_suites(raw_dir)?;
    let config =
        ReportConfig::new(suites, platform).with_threshold(cli.threshold_pct);
    let runs = collect_runs(raw_dir, &config.suites);

    let baseline = match &cli.baseline_file {
        Some(path) => load_baseline(Path::new(path)),
        None => Default::default(),
    };
    let analyzer = RegressionAnalyzer::new(RegressionConfig {
        threshold_pct: config.threshold_pct,
    });
    let regression = analyzer.evaluate(&runs, &baseline);

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let raw_dir_name = raw_dir
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(&cli.raw_dir);
    let ctx = ReportContext {
        config: &config,
        system_info: &system_info,
        timestamp: &timestamp,
        raw_dir_name,
    };
    write_report(output, &ctx, &runs, &regression)?;

    println!("Consolidated markdown generated: {}", output.display());
    println!(
        "Benchmarks processed: {}/{}",
        runs.len(),
        config.suites.len()
    );
    if !regression.regressions.is_empty() {
        println!("WARNING: {} regressions detected", regression.regressions.len());
    }
    if !regression.improvements.is_empty() {
        println!("INFO: {} improvements detected", regression.improvements.len());
    }
    Ok(())
}
