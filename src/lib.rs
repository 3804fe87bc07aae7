pub mod experiment;
pub mod experiment_config;
pub mod metaheuristic;
pub mod packing;
pub mod rng;
pub mod util;
