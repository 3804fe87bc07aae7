mod as_rank_experiment;

use serde::{Deserialize, Serialize};

use crate::experiment_config::Fix;
pub use as_rank_experiment::{AsRankExperiment, UnseededAsRankExperiment};

#[derive(Deserialize, Serialize, Debug)]
#[serde(untagged)]
pub enum AlgoConfig {
    AsRank(AsRankExperiment),
    UnseededAsRank(UnseededAsRankExperiment),
}

impl AlgoConfig {
    /// The seeded experiment, drawing a seed from the OS for unseeded configs.
    pub fn as_rank(&self) -> AsRankExperiment {
        match self {
            AlgoConfig::AsRank(as_rank) => *as_rank,
            AlgoConfig::UnseededAsRank(unseeded) => unseeded.to_fixed(),
        }
    }
}
