use crate::packing::Item;

use float_cmp::approx_eq;
use serde::Serialize;

/// A bin filled by First-Fit.
/// The load is tracked incrementally and always equals the summed weight of `items`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bin {
    id: usize,
    items: Vec<Item>,
    current_load: f64,
}

impl Bin {
    /// Opens a new bin holding only the given item.
    pub fn with_item(id: usize, item: Item) -> Self {
        Bin {
            id,
            items: vec![item],
            current_load: item.weight,
        }
    }

    pub fn fits(&self, item: &Item, capacity: f64) -> bool {
        self.current_load + item.weight <= capacity
    }

    pub(crate) fn push(&mut self, item: Item) {
        self.current_load += item.weight;
        self.items.push(item);
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_ids(&self) -> Vec<usize> {
        self.items.iter().map(|item| item.id).collect()
    }

    pub fn current_load(&self) -> f64 {
        self.current_load
    }

    pub fn is_consistent(&self, capacity: f64) -> bool {
        let sum: f64 = self.items.iter().map(|item| item.weight).sum();
        approx_eq!(f64, sum, self.current_load, epsilon = 1e-9) && self.current_load <= capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_item_works() {
        let bin = Bin::with_item(3, Item::new(1, 4.0));

        assert_eq!(bin.id(), 3);
        assert_eq!(bin.item_ids(), vec![1]);
        assert!(approx_eq!(f64, bin.current_load(), 4.0));
    }

    #[test]
    fn fits_respects_capacity() {
        let bin = Bin::with_item(0, Item::new(1, 4.0));

        assert!(bin.fits(&Item::new(2, 5.0), 9.0), "Exact fill should fit.");
        assert!(!bin.fits(&Item::new(2, 5.5), 9.0), "Overfill should not fit.");
    }

    #[test]
    fn push_updates_load() {
        let mut bin = Bin::with_item(0, Item::new(1, 4.0));
        bin.push(Item::new(3, 2.0));

        assert_eq!(bin.item_ids(), vec![1, 3]);
        assert!(approx_eq!(f64, bin.current_load(), 6.0));
        assert!(bin.is_consistent(9.0));
    }
}
