//! Variable Neighborhood Descent.
//!
//! Descends through a list of neighborhood structures with best
//! improvement steps. Whenever a structure yields an improvement the
//! scan restarts from the first structure; when the last structure
//! fails the solution is locally optimal with respect to every
//! structure in the list.
//!
//! # Algorithm
//! 1. `k = 0`
//! 2. While `k < order.len()`:
//!    - If `order[k]` has a strictly improving neighbor, accept the best
//!      one and reset `k = 0`
//!    - Otherwise `k += 1`
//!
//! The randomized variant shuffles the order on entry and again after
//! every accepted improvement, which diversifies the descent while
//! staying fully reproducible under a seeded generator.
//!
//! # Reference
//! Hansen, Mladenović & Moreno Pérez (2010), "Variable neighbourhood
//! search: methods and applications"

use rand::seq::SliceRandom;
use rand::Rng;

use crate::neighborhood::NeighborhoodKind;
use crate::problem::Problem;
use crate::solution::Solution;

/// Outcome of a descent: the local optimum plus per-structure counters.
#[derive(Debug, Clone)]
pub struct Descent {
    /// The locally optimal solution reached.
    pub solution: Solution,
    /// Accepted improvements per structure, canonically indexed.
    pub improvements: [u64; NeighborhoodKind::COUNT],
}

/// Deterministic VND over `order`.
///
/// With an empty order the start solution is returned unchanged.
pub fn descend(problem: &Problem, start: Solution, order: &[NeighborhoodKind]) -> Descent {
    let mut current = start;
    let mut improvements = [0u64; NeighborhoodKind::COUNT];
    let mut k = 0;
    while k < order.len() {
        match order[k].best_improvement(problem, &current) {
            Some(better) => {
                debug_assert!(better.tct() < current.tct());
                improvements[order[k].index()] += 1;
                current = better;
                k = 0;
            }
            None => k += 1,
        }
    }
    Descent {
        solution: current,
        improvements,
    }
}

/// VND over all four structures with the order re-shuffled on entry and
/// after every accepted improvement.
pub fn descend_random<R: Rng>(problem: &Problem, start: Solution, rng: &mut R) -> Descent {
    let mut order = NeighborhoodKind::ALL;
    order.shuffle(rng);
    let mut current = start;
    let mut improvements = [0u64; NeighborhoodKind::COUNT];
    let mut k = 0;
    while k < order.len() {
        match order[k].best_improvement(problem, &current) {
            Some(better) => {
                improvements[order[k].index()] += 1;
                current = better;
                order.shuffle(rng);
                k = 0;
            }
            None => k += 1,
        }
    }
    Descent {
        solution: current,
        improvements,
    }
}
