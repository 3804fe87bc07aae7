pub mod as_rank;
mod error;
mod supervisor;

pub use as_rank::AsRank;
pub use error::AcoError;
pub use supervisor::{Message, MessageInfo, Supervisor};

use crate::packing::{Item, Solution};

use std::collections::HashSet;

pub trait Metaheuristic {
    type Params;
    type SupervisorType;

    fn new(params: Self::Params, supervisor: Self::SupervisorType) -> Self;
    fn initialize(&mut self, problem: ProblemInstance) -> Result<(), AcoError>;
    fn single_iteration(&mut self) -> Result<IterationResult, AcoError>;
    fn global_best(&self) -> Option<&Solution>;
}

/// What a single iteration produced.
#[derive(Debug, Clone)]
pub struct IterationResult {
    pub iteration: usize,
    pub iteration_best: Solution,
    pub global_best: Solution,
    /// True if the global best was replaced in this iteration.
    pub improved: bool,
    pub depositing_ants: usize,
    pub info: MessageInfo,
}

/// Upper bound on the cells of the id indexed matrices, about 128 MiB per matrix.
pub const MAX_MATRIX_CELLS: usize = 1 << 24;

/// An immutable set of items together with the capacity shared by all bins.
/// Construction validates the instance, so every instance handed to an
/// algorithm can be packed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemInstance {
    items: Vec<Item>,
    capacity: f64,
    dimension: usize,
}

impl ProblemInstance {
    pub fn new(items: Vec<Item>, capacity: f64) -> Result<Self, AcoError> {
        if items.is_empty() {
            return Err(AcoError::InvalidInstance(
                "The item set is empty.".to_string(),
            ));
        }
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(AcoError::InvalidInstance(format!(
                "Capacity {} is not a positive number.",
                capacity
            )));
        }

        let mut ids = HashSet::with_capacity(items.len());
        for item in items.iter() {
            if !ids.insert(item.id) {
                return Err(AcoError::InvalidInstance(format!(
                    "Item id {} is used more than once.",
                    item.id
                )));
            }
            if !item.weight.is_finite() || item.weight <= 0.0 {
                return Err(AcoError::InvalidInstance(format!(
                    "Item {} has weight {}, which is not a positive number.",
                    item.id, item.weight
                )));
            }
            if item.weight > capacity {
                return Err(AcoError::InvalidInstance(format!(
                    "Item {} with weight {} exceeds the capacity {}.",
                    item.id, item.weight, capacity
                )));
            }
        }

        let dimension = items
            .iter()
            .map(|item| item.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .filter(|dimension| {
                dimension
                    .checked_mul(*dimension)
                    .map_or(false, |cells| cells <= MAX_MATRIX_CELLS)
            })
            .ok_or_else(|| {
                AcoError::InvalidInstance(
                    "Item ids are too sparse to size the matrices.".to_string(),
                )
            })?;

        Ok(ProblemInstance {
            items,
            capacity,
            dimension,
        })
    }

    /// The items in insertion order.
    /// This order is canonical: every deterministic tie break and fallback follows it.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Side length of the id indexed matrices, max id + 1.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(|item| item.weight).sum()
    }

    /// The trivial lower bound on the number of bins, ceil(total weight / capacity).
    pub fn lower_bound(&self) -> usize {
        ((self.total_weight() / self.capacity) - 1e-9).ceil().max(1.0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![Item::new(1, 4.0), Item::new(2, 5.0), Item::new(3, 2.0)]
    }

    #[test]
    fn new_works() {
        let problem = ProblemInstance::new(items(), 9.0).unwrap();

        assert_eq!(problem.len(), 3);
        assert_eq!(problem.dimension(), 4);
        assert_eq!(problem.items(), items().as_slice());
    }

    #[test]
    fn new_errors_on_empty_items() {
        let result = ProblemInstance::new(Vec::new(), 9.0);

        assert!(matches!(result, Err(AcoError::InvalidInstance(_))));
    }

    #[test]
    fn new_errors_on_oversized_item() {
        let result = ProblemInstance::new(items(), 4.0);

        assert!(matches!(result, Err(AcoError::InvalidInstance(_))));
    }

    #[test]
    fn new_errors_on_duplicate_id() {
        let result = ProblemInstance::new(vec![Item::new(1, 1.0), Item::new(1, 2.0)], 9.0);

        assert!(matches!(result, Err(AcoError::InvalidInstance(_))));
    }

    #[test]
    fn new_errors_on_non_positive_weight() {
        let zero = ProblemInstance::new(vec![Item::new(0, 0.0)], 9.0);
        let nan = ProblemInstance::new(vec![Item::new(0, f64::NAN)], 9.0);

        assert!(matches!(zero, Err(AcoError::InvalidInstance(_))));
        assert!(matches!(nan, Err(AcoError::InvalidInstance(_))));
    }

    #[test]
    fn new_errors_on_invalid_capacity() {
        let result = ProblemInstance::new(items(), f64::INFINITY);

        assert!(matches!(result, Err(AcoError::InvalidInstance(_))));
    }

    #[test]
    fn new_errors_on_sparse_ids() {
        for id in [usize::MAX, 1 << 32, 100_000].iter() {
            let result = ProblemInstance::new(vec![Item::new(0, 1.0), Item::new(*id, 1.0)], 2.0);

            assert!(
                matches!(result, Err(AcoError::InvalidInstance(_))),
                "Id {} should be rejected.",
                id
            );
        }
    }

    #[test]
    fn largest_dense_instance_is_valid() {
        let problem = ProblemInstance::new(vec![Item::new(4095, 1.0)], 1.0).unwrap();

        assert_eq!(problem.dimension() * problem.dimension(), MAX_MATRIX_CELLS);
    }

    #[test]
    fn item_id_zero_is_valid() {
        let problem = ProblemInstance::new(vec![Item::new(0, 1.0)], 1.0).unwrap();

        assert_eq!(problem.dimension(), 1);
    }

    #[test]
    fn lower_bound_works() {
        let problem = ProblemInstance::new(items(), 9.0).unwrap();
        let exact = ProblemInstance::new(vec![Item::new(0, 5.0), Item::new(1, 5.0)], 5.0).unwrap();

        assert_eq!(problem.lower_bound(), 2);
        assert_eq!(exact.lower_bound(), 2);
    }
}
