use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A single item to be packed.
/// The id is the identity of an item and is used as a direct index into the
/// heuristic and pheromone matrices, so ids should be dense.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: usize,
    pub weight: f64,
}

impl Item {
    pub fn new(id: usize, weight: f64) -> Self {
        Item { id, weight }
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
