use crate::packing::Solution;
use crate::util::{MatrixSnapshot, SquareMatrix};

use decorum::R64;
use num_traits::Zero;

pub const TAU_0: f64 = 1.0;

/// Learned desirability of every directed pair of item ids.
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    matrix: SquareMatrix<R64>,
}

impl PheromoneMatrix {
    pub fn new(dimension: usize) -> Self {
        PheromoneMatrix {
            matrix: SquareMatrix::new(dimension, R64::from_inner(TAU_0)),
        }
    }

    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.matrix
            .get((from, to))
            .map_or(0.0, |value| value.into_inner())
    }

    #[cfg(test)]
    pub(crate) fn set(&mut self, from: usize, to: usize, value: f64) {
        if let Some(cell) = self.matrix.get_mut((from, to)) {
            *cell = R64::from_inner(value);
        }
    }

    pub fn dimension(&self) -> usize {
        self.matrix.dimension()
    }

    pub fn snapshot(&self) -> MatrixSnapshot {
        self.matrix.snapshot(|value| value.into_inner())
    }

    /// Applies one AS-Rank update from the solutions of all ants of an iteration.
    ///
    /// Every off diagonal, non zero cell evaporates by `(1 - rho)`. Afterwards the
    /// solutions are ranked by their number of bins (stable, so ties keep the ant
    /// order) and the best `W = min(rank_weight, solutions.len())` ants deposit
    /// `(W - rank) / num_bins` on every consecutive pair of their ordering.
    ///
    /// Returns the number of ants that deposited.
    pub fn update(&mut self, solutions: &[Solution], rho: f64, rank_weight: usize) -> usize {
        self.evaporate(rho);

        let mut ranked: Vec<&Solution> = solutions.iter().collect();
        ranked.sort_by_key(|solution| solution.num_bins());

        let depositing = rank_weight.min(ranked.len());
        for (rank, solution) in ranked.iter().take(depositing).enumerate() {
            if solution.num_bins() == 0 {
                continue;
            }
            let deposit = (depositing - rank) as f64 / solution.num_bins() as f64;
            self.deposit(solution, deposit);
        }

        depositing
    }

    fn evaporate(&mut self, rho: f64) {
        let remaining = R64::from_inner(1.0 - rho);
        for cell in self.matrix.iter_off_diagonal_mut() {
            if !cell.is_zero() {
                *cell = *cell * remaining;
            }
        }
    }

    fn deposit(&mut self, solution: &Solution, amount: f64) {
        let amount = R64::from_inner(amount);
        for (from, to) in solution.iter_edges() {
            if from == to {
                continue;
            }
            if let Some(cell) = self.matrix.get_mut((from, to)) {
                *cell = *cell + amount;
            }
        }
    }
}
