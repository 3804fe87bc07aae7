use crate::packing::{Bin, Item};

use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A directed pair of consecutive item ids in an ordering.
pub type Edge = (usize, usize);

/// An item ordering together with the bins First-Fit produced for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    order: Vec<Item>,
    bins: Vec<Bin>,
    num_bins: usize,
}

impl Solution {
    pub(crate) fn new(order: Vec<Item>, bins: Vec<Bin>) -> Self {
        Solution {
            num_bins: bins.len(),
            order,
            bins,
        }
    }

    pub fn order(&self) -> &[Item] {
        &self.order
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn num_bins(&self) -> usize {
        self.num_bins
    }

    pub fn iter_item_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().map(|item| item.id)
    }

    /// Iterates the consecutive id pairs of the ordering, the edges pheromone is deposited on.
    pub fn iter_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.order
            .iter()
            .zip(self.order.iter().skip(1))
            .map(|(from, to)| (from.id, to.id))
    }

    pub fn edges(&self) -> Vec<Edge> {
        self.iter_edges().collect()
    }

    /// Average load of the used bins relative to the capacity.
    pub fn fill_ratio(&self, capacity: f64) -> f64 {
        if self.num_bins == 0 {
            return 0.0;
        }
        let load: f64 = self.bins.iter().map(|bin| bin.current_load()).sum();
        load / (self.num_bins as f64 * capacity)
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.bins
                .iter()
                .map(|bin| format!(
                    "[{}]",
                    bin.items()
                        .iter()
                        .map(|item| format!("{}", item))
                        .collect::<Vec<String>>()
                        .join(", ")
                ))
                .collect::<Vec<String>>()
                .join(" | ")
        )
    }
}
