//! Inter-machine swap: exchange one task of a machine with one task of
//! another machine, keeping both positions.

use rand::Rng;

use crate::problem::Problem;
use crate::solution::Solution;

/// Swaps the task at position `i` of `machine_a` with the task at
/// position `j` of `machine_b`.
///
/// # Panics
/// Panics if the machines coincide or any index is out of range.
pub fn apply(
    problem: &Problem,
    solution: &Solution,
    machine_a: usize,
    i: usize,
    machine_b: usize,
    j: usize,
) -> Solution {
    assert_ne!(machine_a, machine_b, "swap_inter needs two machines");
    let mut seq_a = solution.machine(machine_a).to_vec();
    let mut seq_b = solution.machine(machine_b).to_vec();
    std::mem::swap(&mut seq_a[i], &mut seq_b[j]);
    solution.with_machines(problem, &[(machine_a, seq_a), (machine_b, seq_b)])
}

/// Best strictly improving cross-machine swap; ties keep the first
/// candidate (`machine_a`, `machine_b`, `i`, `j` ascending).
pub fn best_improvement(problem: &Problem, solution: &Solution) -> Option<Solution> {
    let mut best: Option<(i64, usize, usize, usize, usize)> = None;
    for machine_a in 0..solution.num_machines() {
        let seq_a = solution.machine(machine_a);
        if seq_a.is_empty() {
            continue;
        }
        let base_a = solution.machine_flowtime(machine_a) as i64;
        for machine_b in machine_a + 1..solution.num_machines() {
            let seq_b = solution.machine(machine_b);
            if seq_b.is_empty() {
                continue;
            }
            let base_b = solution.machine_flowtime(machine_b) as i64;
            let mut scratch_a = seq_a.to_vec();
            let mut scratch_b = seq_b.to_vec();
            for i in 0..seq_a.len() {
                for j in 0..seq_b.len() {
                    std::mem::swap(&mut scratch_a[i], &mut scratch_b[j]);
                    let delta = problem.sequence_flowtime(&scratch_a) as i64 - base_a
                        + problem.sequence_flowtime(&scratch_b) as i64
                        - base_b;
                    std::mem::swap(&mut scratch_a[i], &mut scratch_b[j]);
                    if delta < 0 && best.is_none_or(|(best_delta, ..)| delta < best_delta) {
                        best = Some((delta, machine_a, i, machine_b, j));
                    }
                }
            }
        }
    }
    best.map(|(_, machine_a, i, machine_b, j)| {
        apply(problem, solution, machine_a, i, machine_b, j)
    })
}

/// One random cross-machine swap, or `None` when fewer than two
/// machines hold tasks.
pub fn random<R: Rng>(problem: &Problem, solution: &Solution, rng: &mut R) -> Option<Solution> {
    let occupied: Vec<usize> = (0..solution.num_machines())
        .filter(|&machine| !solution.machine(machine).is_empty())
        .collect();
    if occupied.len() < 2 {
        return None;
    }
    let a = rng.random_range(0..occupied.len());
    let mut b = rng.random_range(0..occupied.len() - 1);
    if b >= a {
        b += 1;
    }
    let machine_a = occupied[a];
    let machine_b = occupied[b];
    let i = rng.random_range(0..solution.machine(machine_a).len());
    let j = rng.random_range(0..solution.machine(machine_b).len());
    Some(apply(problem, solution, machine_a, i, machine_b, j))
}
