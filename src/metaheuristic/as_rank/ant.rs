use crate::metaheuristic::as_rank::{HeuristicMatrix, Message, PheromoneMatrix};
use crate::packing::{first_fit, Item, Solution};
use crate::rng::rng64;

use log::{trace, warn};
use oorandom::Rand64;
use std::sync::mpsc::Sender;
use std::time::Instant;

/// A single ant of one iteration.
/// It only reads the shared matrices and draws from its own generator,
/// so all ants of an iteration can run at the same time.
pub struct Ant<'a> {
    items: &'a [Item],
    capacity: f64,
    pheromone_matrix: &'a PheromoneMatrix,
    heuristic_matrix: &'a HeuristicMatrix,
    alpha: f64,
    beta: f64,
    rng_seed: u128,
    sender: Sender<Message>,
    id: usize,
    iteration: usize,
}

/// An item ordering together with some bookkeeping about how it was built.
#[derive(Debug, Clone, PartialEq)]
pub struct Construction {
    pub order: Vec<Item>,
    pub evaluations: usize,
    pub fallbacks: usize,
}

impl<'a> Ant<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        items: &'a [Item],
        capacity: f64,
        pheromone_matrix: &'a PheromoneMatrix,
        heuristic_matrix: &'a HeuristicMatrix,
        alpha: f64,
        beta: f64,
        rng_seed: u128,
        sender: Sender<Message>,
        id: usize,
        iteration: usize,
    ) -> Self {
        Ant {
            items,
            capacity,
            pheromone_matrix,
            heuristic_matrix,
            alpha,
            beta,
            rng_seed,
            sender,
            id,
            iteration,
        }
    }

    /// tau(from, to)^alpha * eta(from, to)^beta
    fn desirability(&self, from: usize, to: usize) -> f64 {
        self.pheromone_matrix.get(from, to).powf(self.alpha)
            * self.heuristic_matrix.get(from, to).powf(self.beta)
    }

    /// Builds a permutation of all items.
    ///
    /// Starting from a uniformly drawn item, the next item is drawn among the
    /// unvisited ones proportional to its desirability. Candidates with a non
    /// finite or negative desirability are left out. If nothing desirable is
    /// left, the first unvisited item in instance order is taken instead.
    pub fn construct(&self) -> Construction {
        let mut rng = rng64(self.rng_seed);
        let mut evaluations = 0;
        let mut fallbacks = 0;
        let mut order = Vec::with_capacity(self.items.len());

        if self.items.is_empty() {
            return Construction {
                order,
                evaluations,
                fallbacks,
            };
        }

        // unvisited keeps instance order, removals shift but never reorder
        let mut unvisited: Vec<Item> = self.items.to_vec();
        let start = rng.rand_range(0..unvisited.len() as u64) as usize;
        let mut current = unvisited.remove(start);
        order.push(current);

        let mut candidates: Vec<(usize, f64)> = Vec::with_capacity(unvisited.len());
        while !unvisited.is_empty() {
            candidates.clear();
            let mut total = 0.0;
            for (position, candidate) in unvisited.iter().enumerate() {
                let score = self.desirability(current.id, candidate.id);
                evaluations += 1;
                if score.is_finite() && score >= 0.0 {
                    candidates.push((position, score));
                    total += score;
                }
            }

            let position = if total > 0.0 {
                roulette(&mut rng, &candidates, total)
            } else {
                fallbacks += 1;
                trace!(
                    "ant {} found nothing desirable after item {}, taking item {}",
                    self.id,
                    current.id,
                    unvisited[0].id
                );
                0
            };

            current = unvisited.remove(position);
            order.push(current);
        }

        Construction {
            order,
            evaluations,
            fallbacks,
        }
    }

    /// Constructs an ordering, packs it with First-Fit and reports to the supervisor.
    pub fn get_solution(&self) -> Solution {
        let start_time = Instant::now();
        let construction = self.construct();
        let solution = first_fit(construction.order, self.capacity);

        let message = Message::new(
            self.id,
            self.iteration,
            solution.num_bins(),
            construction.evaluations,
            construction.fallbacks,
            start_time.elapsed(),
        );
        if self.sender.send(message).is_err() {
            warn!("supervisor is gone, dropping report of ant {}", self.id);
        }

        solution
    }
}

/// Roulette wheel selection over `(position, score)` pairs with a positive total.
/// Draws r in [0, total) and returns the first position whose cumulative score reaches r.
/// If rounding leaves the draw above the accumulated sum, the last candidate is taken.
fn roulette(rng: &mut Rand64, candidates: &[(usize, f64)], total: f64) -> usize {
    let r = rng.rand_float() * total;

    let mut cumulative = 0.0;
    let mut selected = None;
    for &(position, score) in candidates.iter() {
        cumulative += score;
        if cumulative >= r {
            selected = Some(position);
            break;
        }
    }

    match selected {
        Some(position) => position,
        None => candidates.last().map_or(0, |&(position, _)| position),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metaheuristic::ProblemInstance;
    use std::collections::HashSet;
    use std::sync::mpsc;

    fn problem() -> ProblemInstance {
        ProblemInstance::new(
            vec![
                Item::new(3, 4.0),
                Item::new(0, 5.0),
                Item::new(1, 2.0),
                Item::new(4, 3.0),
                Item::new(2, 6.0),
            ],
            10.0,
        )
        .unwrap()
    }

    fn ids(order: &[Item]) -> Vec<usize> {
        order.iter().map(|item| item.id).collect()
    }

    #[test]
    fn construct_builds_permutation() {
        let problem = problem();
        let pheromones = PheromoneMatrix::new(problem.dimension());
        let heuristics = HeuristicMatrix::new(&problem);
        let (tx, _rx) = mpsc::channel();

        for seed in 0..20 {
            let ant = Ant::new(
                problem.items(),
                problem.capacity(),
                &pheromones,
                &heuristics,
                1.0,
                2.0,
                seed,
                tx.clone(),
                1,
                1,
            );
            let construction = ant.construct();
            let unique: HashSet<usize> = ids(&construction.order).into_iter().collect();

            assert_eq!(construction.order.len(), problem.len());
            assert_eq!(unique.len(), problem.len(), "Ordering contains duplicates.");
            assert_eq!(construction.fallbacks, 0);
            // 4 + 3 + 2 + 1 candidates are scored
            assert_eq!(construction.evaluations, 10);
        }
    }

    #[test]
    fn construct_is_reproducible() {
        let problem = problem();
        let pheromones = PheromoneMatrix::new(problem.dimension());
        let heuristics = HeuristicMatrix::new(&problem);
        let (tx, _rx) = mpsc::channel();
        let ant = Ant::new(
            problem.items(),
            problem.capacity(),
            &pheromones,
            &heuristics,
            1.0,
            1.0,
            99,
            tx,
            1,
            1,
        );

        assert_eq!(ant.construct(), ant.construct());
    }

    #[test]
    fn construct_falls_back_to_instance_order() {
        let problem = problem();
        let mut pheromones = PheromoneMatrix::new(problem.dimension());
        for from in 0..problem.dimension() {
            for to in 0..problem.dimension() {
                pheromones.set(from, to, 0.0);
            }
        }
        let heuristics = HeuristicMatrix::new(&problem);
        let (tx, _rx) = mpsc::channel();

        for seed in 0..10 {
            let ant = Ant::new(
                problem.items(),
                problem.capacity(),
                &pheromones,
                &heuristics,
                1.0,
                1.0,
                seed,
                tx.clone(),
                1,
                1,
            );
            let construction = ant.construct();
            let start = construction.order[0].id;
            let expected: Vec<usize> = std::iter::once(start)
                .chain(ids(problem.items()).into_iter().filter(|id| *id != start))
                .collect();

            assert_eq!(ids(&construction.order), expected);
            assert_eq!(construction.fallbacks, problem.len() - 1);
        }
    }

    #[test]
    fn construct_discards_non_finite_scores() {
        let problem = problem();
        let pheromones = PheromoneMatrix::new(problem.dimension());
        let heuristics = HeuristicMatrix::new(&problem);
        let (tx, _rx) = mpsc::channel();
        // every weight is at least 2, raised to 1e6 each score overflows to infinity
        let ant = Ant::new(
            problem.items(),
            problem.capacity(),
            &pheromones,
            &heuristics,
            1.0,
            1e6,
            5,
            tx,
            1,
            1,
        );
        let construction = ant.construct();

        assert_eq!(construction.order.len(), problem.len());
        assert!(construction.fallbacks > 0);
    }

    #[test]
    fn item_zero_is_selectable() {
        let problem =
            ProblemInstance::new(vec![Item::new(1, 1.0), Item::new(0, 1.0)], 2.0).unwrap();
        let mut pheromones = PheromoneMatrix::new(problem.dimension());
        pheromones.set(1, 0, 1.0);
        let heuristics = HeuristicMatrix::new(&problem);
        let (tx, _rx) = mpsc::channel();

        let mut seen_second = HashSet::new();
        for seed in 0..32 {
            let ant = Ant::new(
                problem.items(),
                problem.capacity(),
                &pheromones,
                &heuristics,
                1.0,
                1.0,
                seed,
                tx.clone(),
                1,
                1,
            );
            let order = ids(&ant.construct().order);
            seen_second.insert(order[1]);
        }

        assert!(seen_second.contains(&0), "Item 0 was never chosen.");
    }

    #[test]
    fn get_solution_reports_to_supervisor() {
        let problem = problem();
        let pheromones = PheromoneMatrix::new(problem.dimension());
        let heuristics = HeuristicMatrix::new(&problem);
        let (tx, rx) = mpsc::channel();
        let ant = Ant::new(
            problem.items(),
            problem.capacity(),
            &pheromones,
            &heuristics,
            1.0,
            2.0,
            3,
            tx,
            7,
            2,
        );
        let solution = ant.get_solution();
        let message = rx.try_recv().unwrap();

        assert_eq!(message.ant_id, 7);
        assert_eq!(message.iteration, 2);
        assert_eq!(message.num_bins, solution.num_bins());
        assert_eq!(message.evaluations, 10);
    }

    #[test]
    fn roulette_skips_zero_scores() {
        let mut rng = rng64(11);
        let candidates = vec![(0, 0.0), (1, 0.0), (2, 3.0), (3, 0.0)];

        for _ in 0..100 {
            assert_eq!(roulette(&mut rng, &candidates, 3.0), 2);
        }
    }

    #[test]
    fn roulette_takes_last_candidate_on_rounding() {
        let mut rng = rng64(11);
        // a total larger than the accumulated sum leaves most draws unmatched
        let candidates = vec![(0, 1e-9), (4, 1e-9)];

        for _ in 0..100 {
            let position = roulette(&mut rng, &candidates, 1.0);
            assert!(position == 0 || position == 4);
        }
    }

    #[test]
    fn roulette_follows_scores() {
        let mut rng = rng64(5);
        let candidates = vec![(0, 1.0), (1, 9.0)];
        let picks = (0..1000)
            .filter(|_| roulette(&mut rng, &candidates, 10.0) == 1)
            .count();

        assert!(picks > 800, "Heavier candidate picked only {} times.", picks);
    }
}
