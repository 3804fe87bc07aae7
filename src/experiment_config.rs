mod algo_config;
mod general_experiment_config;
mod instance_config;

pub use algo_config::{AlgoConfig, AsRankExperiment, UnseededAsRankExperiment};
pub use general_experiment_config::{FullConfig, GeneralExperimentConfig};
pub use instance_config::{FileInstance, InlineInstance, InstanceConfig, UniformGeneration};

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub trait Algorithm {
    fn finished(&self) -> bool;
}

#[macro_export]
macro_rules! experiment {
    ($type:ty) => {
        impl Algorithm for $type {
            fn finished(&self) -> bool {
                self.finished
            }
        }
    };
}

/// Completes a config variant with omitted fields into the full config.
pub trait Fix<CorrectType> {
    fn to_fixed(&self) -> CorrectType;
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ExperimentConfig {
    pub experiment: GeneralExperimentConfig,
    pub algorithm: AlgoConfig,
    pub instance: InstanceConfig,
}

impl ExperimentConfig {
    /// Reads a config from a `.yaml`/`.yml` or `.ron` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ExperimentConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| extension.to_lowercase());
        let file = File::open(path).map_err(|err| {
            ExperimentConfigError::UnreadableFile(format!("{}: {}", path.display(), err))
        })?;
        let reader = BufReader::new(file);

        debug!("Reading experiment config from {}.", path.display());
        match extension.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_reader(reader).map_err(|err| {
                ExperimentConfigError::InvalidFormat(format!("{}: {}", path.display(), err))
            }),
            Some("ron") => ron::de::from_reader(reader).map_err(|err| {
                ExperimentConfigError::InvalidFormat(format!("{}: {}", path.display(), err))
            }),
            _ => Err(ExperimentConfigError::InvalidFormat(format!(
                "{} is neither a yaml nor a ron file.",
                path.display()
            ))),
        }
    }
}

#[derive(Debug)]
pub enum ExperimentConfigError {
    InvalidAlgorithmConfig(String),
    NotFileBased,
    NotUniform,
    InvalidInstanceConfig(String),
    UnreadableFile(String),
    InvalidFormat(String),
}

impl fmt::Display for ExperimentConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAlgorithmConfig(msg) => write!(f, "{}", msg),
            Self::NotFileBased => write!(f, "Config is not a valid file import config."),
            Self::NotUniform => write!(f, "Config is not a valid uniform generation config."),
            Self::InvalidInstanceConfig(msg) => write!(f, "{}", msg),
            Self::UnreadableFile(msg) => write!(f, "Could not read config file {}", msg),
            Self::InvalidFormat(msg) => write!(f, "Could not parse config file {}", msg),
        }
    }
}

impl Error for ExperimentConfigError {}
