mod file_instance;
mod inline_instance;
mod uniform_generation;

pub use file_instance::FileInstance;
pub use inline_instance::InlineInstance;
pub use uniform_generation::{UniformGeneration, UnseededUniformGeneration};

use serde::{Deserialize, Serialize};

use super::{ExperimentConfigError, Fix};
use crate::metaheuristic::ProblemInstance;
use crate::packing::import::import_csv;
use crate::packing::{Generate, Item, Uniform};
use crate::rng::rng64;

#[derive(Deserialize, Serialize, Debug)]
#[serde(untagged)]
pub enum InstanceConfig {
    Inline(InlineInstance),
    File(FileInstance),
    Uniform(UniformGeneration),
    UnseededUniform(UnseededUniformGeneration),
}

impl InstanceConfig {
    pub fn inline(&self) -> Result<InlineInstance, ExperimentConfigError> {
        match self {
            Self::Inline(inline) => Ok(inline.clone()),
            _ => Err(ExperimentConfigError::InvalidInstanceConfig(
                "Config does not list its items.".to_string(),
            )),
        }
    }

    pub fn file(&self) -> Result<FileInstance, ExperimentConfigError> {
        match self {
            Self::File(file) => Ok(file.clone()),
            _ => Err(ExperimentConfigError::NotFileBased),
        }
    }

    pub fn uniform(&self) -> Result<UniformGeneration, ExperimentConfigError> {
        match self {
            Self::Uniform(uniform) => Ok(*uniform),
            Self::UnseededUniform(uniform) => Ok(uniform.to_fixed()),
            _ => Err(ExperimentConfigError::NotUniform),
        }
    }

    /// Builds the validated problem instance this config describes.
    pub fn problem_instance(&self) -> Result<ProblemInstance, ExperimentConfigError> {
        let (items, capacity): (Vec<Item>, f64) = if let Ok(inline) = self.inline() {
            (inline.items, inline.capacity)
        } else if let Ok(file) = self.file() {
            let items = import_csv(file.filename.as_str())
                .map_err(|err| ExperimentConfigError::InvalidInstanceConfig(err.to_string()))?;
            (items, file.capacity)
        } else {
            let uniform = self.uniform()?;
            uniform.check()?;
            let mut rng = rng64(uniform.seed as u128);
            let items = Uniform::new(uniform.size, uniform.weight_range, &mut rng).generate();
            (items, uniform.capacity)
        };

        ProblemInstance::new(items, capacity)
            .map_err(|err| ExperimentConfigError::InvalidInstanceConfig(err.to_string()))
    }
}
