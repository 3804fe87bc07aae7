use crate::packing::{Bin, Item, Solution};

/// Packs the items in the given order with First-Fit.
/// Each item goes into the first bin, in creation order, that still has room for it.
/// If no bin fits, a new bin with the next id is opened.
///
/// The result only depends on `order` and `capacity`. The packing quality is
/// entirely a function of the order, which is what the ants optimize.
pub fn first_fit(order: Vec<Item>, capacity: f64) -> Solution {
    let mut bins: Vec<Bin> = Vec::new();

    for item in order.iter() {
        match bins.iter_mut().find(|bin| bin.fits(item, capacity)) {
            Some(bin) => bin.push(*item),
            None => {
                let id = bins.len();
                bins.push(Bin::with_item(id, *item));
            }
        }
    }

    Solution::new(order, bins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn items() -> Vec<Item> {
        vec![Item::new(1, 4.0), Item::new(2, 5.0), Item::new(3, 2.0)]
    }

    fn ordered(ids: &[usize]) -> Vec<Item> {
        let items = items();
        ids.iter()
            .map(|id| *items.iter().find(|item| item.id == *id).unwrap())
            .collect()
    }

    fn loads(solution: &Solution) -> Vec<f64> {
        solution.bins().iter().map(|bin| bin.current_load()).collect()
    }

    fn contents(solution: &Solution) -> Vec<Vec<usize>> {
        solution.bins().iter().map(|bin| bin.item_ids()).collect()
    }

    #[test]
    fn fills_first_bin_exactly() {
        let solution = first_fit(ordered(&[1, 2, 3]), 9.0);

        assert_eq!(solution.num_bins(), 2);
        assert_eq!(contents(&solution), vec![vec![1, 2], vec![3]]);
        assert_eq!(loads(&solution), vec![9.0, 2.0]);
    }

    #[test]
    fn places_later_item_into_second_bin() {
        let solution = first_fit(ordered(&[2, 3, 1]), 9.0);

        assert_eq!(solution.num_bins(), 2);
        assert_eq!(contents(&solution), vec![vec![2, 3], vec![1]]);
        assert_eq!(loads(&solution), vec![7.0, 4.0]);
    }

    #[test]
    fn opens_new_bin_on_overflow() {
        let solution = first_fit(ordered(&[1, 3, 2]), 9.0);

        assert_eq!(solution.num_bins(), 2);
        assert_eq!(contents(&solution), vec![vec![1, 3], vec![2]]);
        assert_eq!(loads(&solution), vec![6.0, 5.0]);
    }

    #[test]
    fn separates_items_that_never_fit_together() {
        let solution = first_fit(ordered(&[1, 2, 3]), 5.0);

        assert_eq!(solution.num_bins(), 3);
        assert_eq!(contents(&solution), vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn scans_all_open_bins() {
        let order = vec![
            Item::new(0, 6.0),
            Item::new(1, 6.0),
            Item::new(2, 4.0),
            Item::new(3, 4.0),
        ];
        let solution = first_fit(order, 10.0);

        assert_eq!(contents(&solution), vec![vec![0, 2], vec![1, 3]]);
        assert_eq!(
            solution.bins().iter().map(|bin| bin.id()).collect::<Vec<_>>(),
            vec![0, 1]
        );
    }

    #[test]
    fn is_deterministic() {
        let a = first_fit(ordered(&[3, 1, 2]), 9.0);
        let b = first_fit(ordered(&[3, 1, 2]), 9.0);

        assert_eq!(a, b);
    }

    #[test]
    fn conserves_weight_and_items() {
        let order: Vec<Item> = (0..25)
            .map(|id| Item::new(id, 1.0 + (id * 7 % 11) as f64))
            .collect();
        let solution = first_fit(order.clone(), 15.0);

        let total: f64 = order.iter().map(|item| item.weight).sum();
        let packed: f64 = loads(&solution).iter().sum();
        assert!(approx_eq!(f64, total, packed, epsilon = 1e-9));

        let mut ids: Vec<usize> = contents(&solution).into_iter().flatten().collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..25).collect::<Vec<_>>());

        for bin in solution.bins() {
            assert!(bin.is_consistent(15.0), "Bin {} is overloaded.", bin.id());
        }
    }
}
