use serde::{Deserialize, Serialize};

use crate::experiment_config::{ExperimentConfigError, Fix};
use crate::rng::os_random_seed;

#[derive(Copy, Clone, Deserialize, Serialize, Debug)]
pub struct UniformGeneration {
    pub seed: u64,
    pub size: usize,
    pub capacity: f64,
    pub weight_range: (f64, f64),
}

impl UniformGeneration {
    /// Every generated weight has to be positive and fit into a bin.
    pub fn check(&self) -> Result<(), ExperimentConfigError> {
        let (min, max) = self.weight_range;
        if !(min > 0.0 && min <= max && max <= self.capacity) {
            return Err(ExperimentConfigError::InvalidInstanceConfig(format!(
                "Weight range ({}, {}) is not within (0, {}].",
                min, max, self.capacity
            )));
        }

        Ok(())
    }
}

#[derive(Copy, Clone, Deserialize, Serialize, Debug)]
pub struct UnseededUniformGeneration {
    pub size: usize,
    pub capacity: f64,
    pub weight_range: (f64, f64),
}

impl Fix<UniformGeneration> for UnseededUniformGeneration {
    fn to_fixed(&self) -> UniformGeneration {
        UniformGeneration {
            seed: (os_random_seed() >> 64) as u64,
            size: self.size,
            capacity: self.capacity,
            weight_range: self.weight_range,
        }
    }
}
