use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use bpp_with_aco::experiment::BinPackingExperiment;
use bpp_with_aco::experiment_config::ExperimentConfig;
use clap::Parser;
use log::{info, LevelFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Bin packing with a rank based ant system")]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config_file: PathBuf,
    /// Per ant statistics as csv.
    #[arg(short, long, value_name = "FILE")]
    stats_file: Option<PathBuf>,
    /// Final pheromone matrix as csv.
    #[arg(short, long, value_name = "FILE")]
    pheromone_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    log_level: LevelFilter,
}

fn init_logger(level_filter: LevelFilter) -> Result<()> {
    let epoch = Instant::now();
    fern::Dispatch::new()
        .format(move |out, message, record| {
            let duration = epoch.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}]",
                record.level(),
                hours,
                min,
                sec
            );
            out.finish(format_args!("{:<20}{}", prefix, message))
        })
        .level(level_filter)
        .chain(std::io::stderr())
        .apply()
        .context("could not initialize logger")?;

    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logger(args.log_level)?;

    let config = ExperimentConfig::from_file(&args.config_file)
        .with_context(|| format!("could not load {}", args.config_file.display()))?;
    info!("Loaded config {:?}", config);

    let outcome = BinPackingExperiment::run_config(
        &config,
        args.stats_file.as_deref(),
        args.pheromone_file.as_deref(),
    )
    .context("experiment failed")?;

    match outcome {
        Some(outcome) => {
            let bins = outcome
                .global_best
                .as_ref()
                .map_or(0, |best| best.num_bins());
            println!(
                "{} bins after {} iterations (lower bound {})",
                bins, outcome.iterations, outcome.lower_bound
            );
        }
        None => println!("nothing to do, experiment is marked as finished"),
    }

    Ok(())
}
