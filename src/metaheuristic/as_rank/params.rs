use crate::metaheuristic::AcoError;
use crate::rng::os_random_seed;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    pub alpha: f64,
    pub beta: f64,
    pub rho: f64,
    pub seed: u128,
    pub ant_count: usize,
    /// Number of best ranked ants that deposit pheromone (W).
    pub rank_weight: usize,
    /// Only read by whoever drives the iterations, the algorithm itself runs one iteration at a time.
    pub num_iterations: usize,
    /// Construct the ants of an iteration on the rayon thread pool.
    pub parallel: bool,
}

impl Params {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        alpha: f64,
        beta: f64,
        rho: f64,
        seed: Option<u128>,
        ant_count: usize,
        rank_weight: usize,
        num_iterations: usize,
    ) -> Self {
        Params {
            alpha,
            beta,
            rho,
            seed: seed.unwrap_or_else(os_random_seed),
            ant_count,
            rank_weight,
            num_iterations,
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// W clamped to the number of ants.
    pub fn depositing_ants(&self) -> usize {
        self.rank_weight.min(self.ant_count)
    }

    pub fn validate(&self) -> Result<(), AcoError> {
        if self.ant_count == 0 {
            return Err(AcoError::InvalidParams(
                "At least one ant is needed.".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.rho) {
            return Err(AcoError::InvalidParams(format!(
                "Evaporation rate {} is not in [0, 1].",
                self.rho
            )));
        }
        if !self.alpha.is_finite() || !self.beta.is_finite() {
            return Err(AcoError::InvalidParams(format!(
                "alpha ({}) and beta ({}) need to be finite.",
                self.alpha, self.beta
            )));
        }

        Ok(())
    }
}
