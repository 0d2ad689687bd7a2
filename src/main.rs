use clap::Parser;
use daylight_metrics::config::{self, Config, ConfigError};
use daylight_metrics::metrics::model::{Thresholds, check_lux};
use daylight_metrics::pipeline::run_analysis;
use daylight_metrics::results::npy::NpyMatrixReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::Level;

const USAGE_EXIT_CODE: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "daylight-metrics")]
#[command(
    about = "Computes BREEAM, sDA, ASE and UDI daylight metrics from annual illuminance results",
    long_about = None
)]
struct Cli {
    /// Simulation folder containing results/__static_apertures__/default/total
    results_root: PathBuf,

    /// BREEAM minimum-point illuminance threshold in lux (e.g. 300)
    #[arg(value_parser = parse_lux)]
    min_lux: f64,

    /// Hours every point must reach the minimum threshold (e.g. 2000)
    min_hours_req: u32,

    /// BREEAM spatial-average illuminance threshold in lux (e.g. 100)
    #[arg(value_parser = parse_lux)]
    avg_lux: f64,

    /// Hours the spatial average must reach its threshold (e.g. 4000)
    avg_hours_req: u32,

    /// Lower bound of the useful UDI band in lux (e.g. 100 or 300)
    #[arg(value_parser = parse_lux)]
    udi_min_lux: f64,

    /// Logging and parallelism settings (default: config/config.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_lux(value: &str) -> Result<f64, String> {
    let lux: f64 = value.parse().map_err(|err| format!("{err}"))?;
    check_lux("lux threshold", lux).map_err(|err| err.to_string())
}

fn init_tracing(level: Level) {
    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => config::load_from_path(path),
        None if Path::new(config::DEFAULT_CONFIG_PATH).is_file() => config::load_default(),
        None => Ok(Config::default()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let thresholds = match Thresholds::new(
        cli.min_lux,
        cli.min_hours_req,
        cli.avg_lux,
        cli.avg_hours_req,
        cli.udi_min_lux,
    ) {
        Ok(thresholds) => thresholds,
        Err(err) => {
            eprintln!("ERROR: {err}");
            return ExitCode::from(USAGE_EXIT_CODE);
        }
    };

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("ERROR: {err}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.log_level());
    tracing::info!(app = %config.app.name, ?thresholds, "Starting daylight analysis");

    match run_analysis(
        &cli.results_root,
        &thresholds,
        &NpyMatrixReader,
        config.parallel(),
    ) {
        Ok(outcome) => {
            println!(
                "[OK] Analysed {} rooms from .npy files -> {}",
                outcome.summary.summary.rooms_analysed,
                outcome.summary_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}
