mod bin;
mod first_fit;
mod generate;
pub mod import;
mod item;
mod solution;

pub use bin::Bin;
pub use first_fit::first_fit;
pub use generate::{Generate, Uniform};
pub use item::Item;
pub use solution::{Edge, Solution};
