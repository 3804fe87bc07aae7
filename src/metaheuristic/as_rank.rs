mod ant;
mod heuristic;
mod message;
mod params;
mod pheromone;
mod supervisor;

pub use ant::{Ant, Construction};
pub use heuristic::HeuristicMatrix;
pub use message::Message;
pub use params::Params;
pub use pheromone::{PheromoneMatrix, TAU_0};
pub use supervisor::Supervisor;

use crate::metaheuristic::supervisor as sv;
use crate::metaheuristic::{AcoError, IterationResult, Metaheuristic, ProblemInstance};
use crate::packing::Solution;
use crate::rng::{rng64, split_seed};
use crate::util::MatrixSnapshot;

use log::{debug, info};
use oorandom::Rand64;
use rayon::prelude::*;

/// Everything that only exists once a problem instance is known.
struct Colony {
    problem: ProblemInstance,
    heuristics: HeuristicMatrix,
    pheromones: PheromoneMatrix,
    global_best: Option<Solution>,
    iteration: usize,
}

/// Rank based ant system for one dimensional bin packing.
///
/// Ants build item orderings guided by pheromones and the item weights,
/// First-Fit turns every ordering into a packing, and the best ranked ants
/// reinforce the consecutive pairs of their orderings.
pub struct AsRank<S: sv::Supervisor<Message>> {
    params: Params,
    colony: Option<Colony>,
    pub supervisor: S,
    rng: Rand64,
}

impl<S: sv::Supervisor<Message>> AsRank<S> {
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Number of finished iterations since the last initialization.
    pub fn iteration(&self) -> usize {
        self.colony.as_ref().map_or(0, |colony| colony.iteration)
    }

    pub fn problem(&self) -> Option<&ProblemInstance> {
        self.colony.as_ref().map(|colony| &colony.problem)
    }

    pub fn pheromone_snapshot(&self) -> Result<MatrixSnapshot, AcoError> {
        let colony = self.colony.as_ref().ok_or(AcoError::NotInitialized)?;
        Ok(colony.pheromones.snapshot())
    }

    pub fn heuristic_snapshot(&self) -> Result<MatrixSnapshot, AcoError> {
        let colony = self.colony.as_ref().ok_or(AcoError::NotInitialized)?;
        Ok(colony.heuristics.snapshot())
    }

    /// Runs one full iteration: construction by every ant, evaluation,
    /// best tracking and the pheromone update.
    pub fn run_iteration(&mut self) -> Result<IterationResult, AcoError> {
        let colony = self.colony.as_mut().ok_or(AcoError::NotInitialized)?;
        let iteration = colony.iteration + 1;

        // seeds are drawn in ant order before any ant runs
        let mut ants = Vec::with_capacity(self.params.ant_count);
        for _ in 0..self.params.ant_count {
            let (sender, id) = self.supervisor.new_ant();
            ants.push(Ant::new(
                colony.problem.items(),
                colony.problem.capacity(),
                &colony.pheromones,
                &colony.heuristics,
                self.params.alpha,
                self.params.beta,
                split_seed(&mut self.rng),
                sender,
                id,
                iteration,
            ));
        }

        let solutions: Vec<Solution> = if self.params.parallel {
            ants.into_par_iter().map(|ant| ant.get_solution()).collect()
        } else {
            ants.into_iter().map(|ant| ant.get_solution()).collect()
        };

        // min_by_key keeps the first of equally good solutions
        let iteration_best = solutions
            .iter()
            .min_by_key(|solution| solution.num_bins())
            .cloned()
            .ok_or_else(|| AcoError::InvalidParams("No ant produced a solution.".to_string()))?;

        let improved = match &colony.global_best {
            Some(best) => iteration_best.num_bins() < best.num_bins(),
            None => true,
        };
        if improved {
            info!(
                "Iteration {}: new global best with {} bins.",
                iteration,
                iteration_best.num_bins()
            );
            colony.global_best = Some(iteration_best.clone());
        }

        let depositing_ants =
            colony
                .pheromones
                .update(&solutions, self.params.rho, self.params.rank_weight);
        colony.iteration = iteration;

        let info = self.supervisor.prepare_next(iteration);
        debug!(
            "Iteration {}: best {} bins, mean {:.2} bins, {} fallbacks, {} depositing ants.",
            iteration,
            iteration_best.num_bins(),
            info.mean_bins(),
            info.fallbacks,
            depositing_ants
        );

        let global_best = colony
            .global_best
            .clone()
            .unwrap_or_else(|| iteration_best.clone());

        Ok(IterationResult {
            iteration,
            iteration_best,
            global_best,
            improved,
            depositing_ants,
            info,
        })
    }
}

impl<S: sv::Supervisor<Message>> Metaheuristic for AsRank<S> {
    type Params = Params;
    type SupervisorType = S;

    fn new(params: Self::Params, supervisor: Self::SupervisorType) -> Self {
        AsRank {
            params,
            colony: None,
            supervisor,
            rng: rng64(params.seed),
        }
    }

    fn initialize(&mut self, problem: ProblemInstance) -> Result<(), AcoError> {
        self.params.validate()?;

        let heuristics = HeuristicMatrix::new(&problem);
        let pheromones = PheromoneMatrix::new(problem.dimension());
        info!(
            "Initialized AS-Rank with {} items, capacity {} and {} ants (W = {}).",
            problem.len(),
            problem.capacity(),
            self.params.ant_count,
            self.params.depositing_ants()
        );

        self.rng = rng64(self.params.seed);
        self.supervisor.reset();
        self.colony = Some(Colony {
            problem,
            heuristics,
            pheromones,
            global_best: None,
            iteration: 0,
        });

        Ok(())
    }

    fn single_iteration(&mut self) -> Result<IterationResult, AcoError> {
        self.run_iteration()
    }

    fn global_best(&self) -> Option<&Solution> {
        self.colony
            .as_ref()
            .and_then(|colony| colony.global_best.as_ref())
    }
}
