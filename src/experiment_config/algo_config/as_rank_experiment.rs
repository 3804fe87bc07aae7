use serde::{Deserialize, Serialize};

use crate::experiment_config::Fix;
use crate::metaheuristic::as_rank::Params;
use crate::rng::os_random_seed;

#[derive(Copy, Clone, Deserialize, Serialize, Debug)]
pub struct AsRankExperiment {
    pub alpha: f64,
    pub beta: f64,
    pub rho: f64,
    pub seed: u64,
    pub ant_count: usize,
    pub rank_weight: usize,
    pub num_iterations: usize,
    #[serde(default)]
    pub parallel: bool,
}

impl AsRankExperiment {
    pub fn params(&self) -> Params {
        Params::new(
            self.alpha,
            self.beta,
            self.rho,
            Some(self.seed as u128),
            self.ant_count,
            self.rank_weight,
            self.num_iterations,
        )
        .with_parallel(self.parallel)
    }
}

#[derive(Deserialize, Serialize, Debug)]
pub struct UnseededAsRankExperiment {
    pub alpha: f64,
    pub beta: f64,
    pub rho: f64,
    pub ant_count: usize,
    pub rank_weight: usize,
    pub num_iterations: usize,
    #[serde(default)]
    pub parallel: bool,
}

impl Fix<AsRankExperiment> for UnseededAsRankExperiment {
    fn to_fixed(&self) -> AsRankExperiment {
        AsRankExperiment {
            alpha: self.alpha,
            beta: self.beta,
            rho: self.rho,
            seed: (os_random_seed() >> 64) as u64,
            ant_count: self.ant_count,
            rank_weight: self.rank_weight,
            num_iterations: self.num_iterations,
            parallel: self.parallel,
        }
    }
}
