//! Intra-machine swap: exchange the tasks at two positions of one
//! machine's sequence.
//!
//! Applying the same swap twice restores the original solution, so a
//! swap is its own inverse.

use rand::Rng;

use crate::problem::Problem;
use crate::solution::Solution;

/// Swaps positions `i` and `j` on `machine`.
///
/// # Panics
/// Panics if `machine` or either position is out of range.
pub fn apply(
    problem: &Problem,
    solution: &Solution,
    machine: usize,
    i: usize,
    j: usize,
) -> Solution {
    let mut sequence = solution.machine(machine).to_vec();
    sequence.swap(i, j);
    solution.with_machines(problem, &[(machine, sequence)])
}

/// Best strictly improving swap over all machines; ties keep the first
/// candidate (machine, then `i`, then `j` ascending).
pub fn best_improvement(problem: &Problem, solution: &Solution) -> Option<Solution> {
    let mut best: Option<(i64, usize, usize, usize)> = None;
    for machine in 0..solution.num_machines() {
        let sequence = solution.machine(machine);
        if sequence.len() < 2 {
            continue;
        }
        let base = solution.machine_flowtime(machine) as i64;
        let mut scratch = sequence.to_vec();
        for i in 0..sequence.len() - 1 {
            for j in i + 1..sequence.len() {
                scratch.swap(i, j);
                let delta = problem.sequence_flowtime(&scratch) as i64 - base;
                scratch.swap(i, j);
                if delta < 0 && best.is_none_or(|(best_delta, ..)| delta < best_delta) {
                    best = Some((delta, machine, i, j));
                }
            }
        }
    }
    best.map(|(_, machine, i, j)| apply(problem, solution, machine, i, j))
}

/// One random swap, or `None` when no machine holds two tasks.
pub fn random<R: Rng>(problem: &Problem, solution: &Solution, rng: &mut R) -> Option<Solution> {
    let eligible: Vec<usize> = (0..solution.num_machines())
        .filter(|&machine| solution.machine(machine).len() >= 2)
        .collect();
    if eligible.is_empty() {
        return None;
    }
    let machine = eligible[rng.random_range(0..eligible.len())];
    let len = solution.machine(machine).len();
    let i = rng.random_range(0..len);
    // Draw j from the remaining positions so i != j.
    let mut j = rng.random_range(0..len - 1);
    if j >= i {
        j += 1;
    }
    Some(apply(problem, solution, machine, i, j))
}
