use crate::packing::Item;

use oorandom::Rand64;

/// A generator for item sets.
pub trait Generate {
    fn generate(&mut self) -> Vec<Item>;
}

/// Items with ids `0..size` and weights drawn uniformly from `[min, max)`.
pub struct Uniform<'a> {
    size: usize,
    weight_range: (f64, f64),
    rng: &'a mut Rand64,
}

impl<'a> Uniform<'a> {
    pub fn new(size: usize, weight_range: (f64, f64), rng: &'a mut Rand64) -> Self {
        Uniform {
            size,
            weight_range,
            rng,
        }
    }
}

impl<'a> Generate for Uniform<'a> {
    fn generate(&mut self) -> Vec<Item> {
        let (min, max) = self.weight_range;
        let delta = max - min;

        (0..self.size)
            .map(|id| Item::new(id, self.rng.rand_float() * delta + min))
            .collect()
    }
}
