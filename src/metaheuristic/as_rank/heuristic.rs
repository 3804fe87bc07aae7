use crate::metaheuristic::ProblemInstance;
use crate::util::{MatrixSnapshot, SquareMatrix};

use decorum::R64;
use num_traits::Zero;

/// Static desirability of moving from item i to item j, the weight of j.
/// Heavier items are preferred early, so that small items fill the gaps later.
/// Self pairs and ids missing from the instance stay 0.
#[derive(Debug, Clone)]
pub struct HeuristicMatrix {
    matrix: SquareMatrix<R64>,
}

impl HeuristicMatrix {
    pub fn new(problem: &ProblemInstance) -> Self {
        let mut matrix = SquareMatrix::new(problem.dimension(), R64::zero());
        for from in problem.items() {
            for to in problem.items() {
                if from.id == to.id {
                    continue;
                }
                if let Some(cell) = matrix.get_mut((from.id, to.id)) {
                    *cell = R64::from_inner(to.weight);
                }
            }
        }

        HeuristicMatrix { matrix }
    }

    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.matrix
            .get((from, to))
            .map_or(0.0, |value| value.into_inner())
    }

    pub fn dimension(&self) -> usize {
        self.matrix.dimension()
    }

    pub fn snapshot(&self) -> MatrixSnapshot {
        self.matrix.snapshot(|value| value.into_inner())
    }
}
