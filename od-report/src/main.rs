use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use od_report::config::ReportConfig;
use od_report::logging::init_logger;
use od_report::scenario::{Scenario, ScenarioError};

/// Booking history and forecast for every origin-destination of a service.
///
/// Configuration is read from the environment: OD_REPORT_TODAY (YYYY-MM-DD),
/// OD_REPORT_STRICT and OD_REPORT_PRETTY (1/0). Logs go to stderr, filtered
/// by RUST_LOG.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct CliArgs {
    /// JSON scenario file; reports on the built-in Paris-Lyon-Marseille
    /// example when omitted
    scenario: Option<PathBuf>,
}

fn run(args: &CliArgs, config: &ReportConfig) -> Result<String, ScenarioError> {
    let scenario = match &args.scenario {
        Some(path) => Scenario::from_file(path, config)?,
        None => Scenario::demo(config)?,
    };
    scenario.render(config)
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logger();

    let config = match ReportConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    match run(&args, &config) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed to build report");
            ExitCode::FAILURE
        }
    }
}
