use csv::Writer;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{sink, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use crate::experiment_config::{Algorithm, ExperimentConfig, ExperimentConfigError};
use crate::metaheuristic::{as_rank, AcoError, AsRank, Metaheuristic};
use crate::packing::Solution;

/// What a finished run reports back.
#[derive(Debug, Clone)]
pub struct ExperimentOutcome {
    pub iterations: usize,
    pub global_best: Option<Solution>,
    pub lower_bound: usize,
    pub elapsed: Duration,
}

impl ExperimentOutcome {
    /// True if the best packing uses no more bins than the trivial lower bound.
    pub fn reached_lower_bound(&self) -> bool {
        self.global_best
            .as_ref()
            .map_or(false, |best| best.num_bins() <= self.lower_bound)
    }
}

#[derive(Debug)]
pub enum ExperimentError {
    Config(ExperimentConfigError),
    Algorithm(AcoError),
    Output(String),
}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{}", err),
            Self::Algorithm(err) => write!(f, "{}", err),
            Self::Output(msg) => write!(f, "Could not write output: {}", msg),
        }
    }
}

impl Error for ExperimentError {}

impl From<ExperimentConfigError> for ExperimentError {
    fn from(err: ExperimentConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<AcoError> for ExperimentError {
    fn from(err: AcoError) -> Self {
        match err {
            AcoError::InvalidParams(msg) => {
                Self::Config(ExperimentConfigError::InvalidAlgorithmConfig(msg))
            }
            other => Self::Algorithm(other),
        }
    }
}

pub struct BinPackingExperiment {}

impl BinPackingExperiment {
    /// Runs the experiment a config describes.
    ///
    /// Returns `None` for configs marked as finished. Per ant statistics go to
    /// `stats_file` and the final pheromone matrix to `pheromone_file`, if given.
    pub fn run_config(
        config: &ExperimentConfig,
        stats_file: Option<&Path>,
        pheromone_file: Option<&Path>,
    ) -> Result<Option<ExperimentOutcome>, ExperimentError> {
        let experiment_cfg = config.experiment.cfg();
        if experiment_cfg.finished() {
            info!("Experiment is marked as finished, skipping it.");
            return Ok(None);
        }

        let problem = config.instance.problem_instance()?;
        let lower_bound = problem.lower_bound();
        let algo_cfg = config.algorithm.as_rank();
        let params = algo_cfg.params();
        if params.rank_weight > params.ant_count {
            warn!(
                "rank_weight {} exceeds the {} ants, only {} ants will deposit.",
                params.rank_weight,
                params.ant_count,
                params.depositing_ants()
            );
        }

        let stats_writer: Box<dyn Write> = match stats_file {
            Some(path) => Box::new(BufWriter::new(create(path)?)),
            None => Box::new(sink()),
        };
        let supervisor = as_rank::Supervisor::new(
            experiment_cfg.aggregation_rate,
            Writer::from_writer(stats_writer),
        );
        let mut aco = AsRank::new(params, supervisor);
        aco.initialize(problem)?;
        info!(
            "Running AS-Rank with seed {} for at most {} iterations, lower bound is {} bins.",
            algo_cfg.seed, params.num_iterations, lower_bound
        );

        let progress = ProgressBar::new(params.num_iterations as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{elapsed_precise} [{bar:40}] {pos}/{len} {msg}")
                .progress_chars("=> "),
        );

        let criteria = StopCriteria {
            num_iterations: params.num_iterations,
            lower_bound: if experiment_cfg.stop_at_lower_bound {
                Some(lower_bound)
            } else {
                None
            },
            max_duration: experiment_cfg.max_duration(),
        };
        let start_time = Instant::now();
        let iterations = iterate(&mut aco, criteria, &progress)?;
        progress.finish_and_clear();
        aco.supervisor.flush(iterations);

        if let Some(path) = pheromone_file {
            let snapshot = aco.pheromone_snapshot()?;
            snapshot
                .write_csv(BufWriter::new(create(path)?))
                .map_err(|err| ExperimentError::Output(format!("{}: {}", path.display(), err)))?;
            info!("Pheromone matrix written to {}.", path.display());
        }

        let outcome = ExperimentOutcome {
            iterations,
            global_best: aco.global_best().cloned(),
            lower_bound,
            elapsed: start_time.elapsed(),
        };
        if let Some(best) = outcome.global_best.as_ref() {
            info!(
                "Finished after {} iterations in {:?}: {} bins ({})",
                outcome.iterations,
                outcome.elapsed,
                best.num_bins(),
                best
            );
        }

        Ok(Some(outcome))
    }
}

/// When a run ends before all iterations are done.
#[derive(Debug, Clone, Copy)]
pub struct StopCriteria {
    pub num_iterations: usize,
    /// Stop once the global best uses no more bins than this.
    pub lower_bound: Option<usize>,
    pub max_duration: Option<Duration>,
}

/// Runs iterations of any metaheuristic until the criteria say stop.
/// Returns the number of iterations run.
pub fn iterate<M: Metaheuristic>(
    algo: &mut M,
    criteria: StopCriteria,
    progress: &ProgressBar,
) -> Result<usize, AcoError> {
    let start_time = Instant::now();
    let mut iterations = 0;
    while iterations < criteria.num_iterations {
        let result = algo.single_iteration()?;
        iterations = result.iteration;
        progress.inc(1);
        if result.improved {
            progress.set_message(&format!("best {} bins", result.global_best.num_bins()));
        }

        if let Some(lower_bound) = criteria.lower_bound {
            if result.global_best.num_bins() <= lower_bound {
                info!(
                    "Reached the lower bound of {} bins after {} iterations.",
                    lower_bound, iterations
                );
                break;
            }
        }
        if let Some(max_duration) = criteria.max_duration {
            if start_time.elapsed() >= max_duration {
                warn!(
                    "Time budget of {:?} exhausted after {} iterations.",
                    max_duration, iterations
                );
                break;
            }
        }
    }

    Ok(iterations)
}

fn create(path: &Path) -> Result<File, ExperimentError> {
    File::create(path)
        .map_err(|err| ExperimentError::Output(format!("{}: {}", path.display(), err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metaheuristic::ProblemInstance;
    use crate::packing::Item;
    use std::io::Sink;

    fn initialized() -> AsRank<as_rank::Supervisor<Sink>> {
        let problem = ProblemInstance::new(
            vec![
                Item::new(0, 6.0),
                Item::new(1, 4.0),
                Item::new(2, 5.0),
                Item::new(3, 5.0),
            ],
            10.0,
        )
        .unwrap();
        let params = as_rank::Params::new(1.0, 2.0, 0.1, Some(3), 4, 2, 10);
        let mut aco = AsRank::new(params, as_rank::Supervisor::silent());
        aco.initialize(problem).unwrap();
        aco
    }

    #[test]
    fn iterate_runs_all_iterations() {
        let mut aco = initialized();
        let criteria = StopCriteria {
            num_iterations: 7,
            lower_bound: None,
            max_duration: None,
        };
        let iterations = iterate(&mut aco, criteria, &ProgressBar::hidden()).unwrap();

        assert_eq!(iterations, 7);
        assert_eq!(aco.iteration(), 7);
    }

    #[test]
    fn iterate_stops_at_lower_bound() {
        let mut aco = initialized();
        // 4 items never need more than 4 bins
        let criteria = StopCriteria {
            num_iterations: 50,
            lower_bound: Some(4),
            max_duration: None,
        };
        let iterations = iterate(&mut aco, criteria, &ProgressBar::hidden()).unwrap();

        assert_eq!(iterations, 1);
    }

    #[test]
    fn iterate_stops_when_time_is_up() {
        let mut aco = initialized();
        let criteria = StopCriteria {
            num_iterations: 50,
            lower_bound: None,
            max_duration: Some(Duration::from_nanos(1)),
        };
        let iterations = iterate(&mut aco, criteria, &ProgressBar::hidden()).unwrap();

        assert_eq!(iterations, 1);
    }

    #[test]
    fn iterate_errors_before_initialize() {
        let params = as_rank::Params::new(1.0, 1.0, 0.1, Some(3), 2, 1, 10);
        let mut aco = AsRank::new(params, as_rank::Supervisor::silent());
        let criteria = StopCriteria {
            num_iterations: 3,
            lower_bound: None,
            max_duration: None,
        };

        assert_eq!(
            iterate(&mut aco, criteria, &ProgressBar::hidden()).err(),
            Some(AcoError::NotInitialized)
        );
    }
}
