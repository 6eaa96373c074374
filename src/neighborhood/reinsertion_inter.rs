//! Inter-machine reinsertion: remove a task from one machine and insert
//! it at any position of another machine.
//!
//! This is the only structure that changes machine loads, so it is the
//! one that can populate an empty machine or drain a machine entirely.

use rand::Rng;

use crate::problem::Problem;
use crate::solution::Solution;

/// Moves the task at position `from` of `machine_a` to position `to` of
/// `machine_b`.
///
/// # Panics
/// Panics if the machines coincide or any index is out of range (`to`
/// may equal the destination length, appending).
pub fn apply(
    problem: &Problem,
    solution: &Solution,
    machine_a: usize,
    from: usize,
    machine_b: usize,
    to: usize,
) -> Solution {
    assert_ne!(machine_a, machine_b, "reinsertion_inter needs two machines");
    let mut seq_a = solution.machine(machine_a).to_vec();
    let mut seq_b = solution.machine(machine_b).to_vec();
    let task = seq_a.remove(from);
    seq_b.insert(to, task);
    solution.with_machines(problem, &[(machine_a, seq_a), (machine_b, seq_b)])
}

/// Best strictly improving cross-machine reinsertion; ties keep the
/// first candidate (`machine_a`, `machine_b`, `from`, `to` ascending).
pub fn best_improvement(problem: &Problem, solution: &Solution) -> Option<Solution> {
    let mut best: Option<(i64, usize, usize, usize, usize)> = None;
    for machine_a in 0..solution.num_machines() {
        let seq_a = solution.machine(machine_a);
        if seq_a.is_empty() {
            continue;
        }
        let base_a = solution.machine_flowtime(machine_a) as i64;
        for machine_b in 0..solution.num_machines() {
            if machine_b == machine_a {
                continue;
            }
            let seq_b = solution.machine(machine_b);
            let base_b = solution.machine_flowtime(machine_b) as i64;
            for from in 0..seq_a.len() {
                let mut scratch_a = seq_a.to_vec();
                let task = scratch_a.remove(from);
                let delta_a = problem.sequence_flowtime(&scratch_a) as i64 - base_a;
                let mut scratch_b = seq_b.to_vec();
                for to in 0..=seq_b.len() {
                    scratch_b.insert(to, task);
                    let delta = delta_a + problem.sequence_flowtime(&scratch_b) as i64 - base_b;
                    scratch_b.remove(to);
                    if delta < 0 && best.is_none_or(|(best_delta, ..)| delta < best_delta) {
                        best = Some((delta, machine_a, machine_b, from, to));
                    }
                }
            }
        }
    }
    best.map(|(_, machine_a, machine_b, from, to)| {
        apply(problem, solution, machine_a, from, machine_b, to)
    })
}

/// One random cross-machine reinsertion, or `None` when the problem has
/// a single machine or no machine holds a task.
pub fn random<R: Rng>(problem: &Problem, solution: &Solution, rng: &mut R) -> Option<Solution> {
    if solution.num_machines() < 2 {
        return None;
    }
    let occupied: Vec<usize> = (0..solution.num_machines())
        .filter(|&machine| !solution.machine(machine).is_empty())
        .collect();
    if occupied.is_empty() {
        return None;
    }
    let machine_a = occupied[rng.random_range(0..occupied.len())];
    // Any other machine may receive, including empty ones.
    let mut machine_b = rng.random_range(0..solution.num_machines() - 1);
    if machine_b >= machine_a {
        machine_b += 1;
    }
    let from = rng.random_range(0..solution.machine(machine_a).len());
    let to = rng.random_range(0..=solution.machine(machine_b).len());
    Some(apply(problem, solution, machine_a, from, machine_b, to))
}
