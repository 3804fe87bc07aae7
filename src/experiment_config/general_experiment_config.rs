use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::experiment;
use crate::experiment_config::{Algorithm, Fix};

#[derive(Deserialize, Serialize, Debug)]
#[serde(untagged)]
pub enum GeneralExperimentConfig {
    Full(FullConfig),
    NoStat(NoStatConfig),
    AggregationOnly(AggregationOnly),
}

impl GeneralExperimentConfig {
    pub fn cfg(&self) -> FullConfig {
        match self {
            Self::Full(cfg) => *cfg,
            Self::NoStat(cfg) => cfg.to_fixed(),
            Self::AggregationOnly(cfg) => cfg.to_fixed(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy)]
pub struct FullConfig {
    pub finished: bool,
    pub aggregation_rate: usize,
    /// Wall clock budget in seconds, anything not positive means no budget.
    pub max_time: f64,
    pub stop_at_lower_bound: bool,
}

experiment! {FullConfig}

impl FullConfig {
    pub fn max_duration(&self) -> Option<Duration> {
        if self.max_time.is_finite() && self.max_time > 0.0 {
            Some(Duration::from_secs_f64(self.max_time))
        } else {
            None
        }
    }
}

#[derive(Deserialize, Serialize, Debug)]
pub struct NoStatConfig {
    pub aggregation_rate: usize,
    pub max_time: f64,
    pub stop_at_lower_bound: bool,
}

impl Fix<FullConfig> for NoStatConfig {
    fn to_fixed(&self) -> FullConfig {
        FullConfig {
            finished: false,
            aggregation_rate: self.aggregation_rate,
            max_time: self.max_time,
            stop_at_lower_bound: self.stop_at_lower_bound,
        }
    }
}

#[derive(Deserialize, Serialize, Debug)]
pub struct AggregationOnly {
    pub aggregation_rate: usize,
}

impl Fix<FullConfig> for AggregationOnly {
    fn to_fixed(&self) -> FullConfig {
        FullConfig {
            finished: false,
            aggregation_rate: self.aggregation_rate,
            max_time: 0.0,
            stop_at_lower_bound: false,
        }
    }
}
