//! Intra-machine reinsertion: remove a task from one position of a
//! machine's sequence and insert it at another position of the same
//! sequence.

use rand::Rng;

use crate::problem::Problem;
use crate::solution::Solution;

/// Moves the task at position `from` to position `to` (interpreted after
/// the removal) on `machine`.
///
/// # Panics
/// Panics if `machine` is out of range, `from` is not a position of its
/// sequence, or `to` exceeds the sequence length after removal.
pub fn apply(
    problem: &Problem,
    solution: &Solution,
    machine: usize,
    from: usize,
    to: usize,
) -> Solution {
    let mut sequence = solution.machine(machine).to_vec();
    let task = sequence.remove(from);
    sequence.insert(to, task);
    solution.with_machines(problem, &[(machine, sequence)])
}

/// Best strictly improving reinsertion over all machines; ties keep the
/// first candidate (machine, then `from`, then `to` ascending).
pub fn best_improvement(problem: &Problem, solution: &Solution) -> Option<Solution> {
    let mut best: Option<(i64, usize, usize, usize)> = None;
    for machine in 0..solution.num_machines() {
        let sequence = solution.machine(machine);
        if sequence.len() < 2 {
            continue;
        }
        let base = solution.machine_flowtime(machine) as i64;
        for from in 0..sequence.len() {
            let mut scratch = sequence.to_vec();
            let task = scratch.remove(from);
            for to in 0..sequence.len() {
                if to == from {
                    continue;
                }
                scratch.insert(to, task);
                let delta = problem.sequence_flowtime(&scratch) as i64 - base;
                scratch.remove(to);
                if delta < 0 && best.is_none_or(|(best_delta, ..)| delta < best_delta) {
                    best = Some((delta, machine, from, to));
                }
            }
        }
    }
    best.map(|(_, machine, from, to)| apply(problem, solution, machine, from, to))
}

/// One random reinsertion, or `None` when no machine holds two tasks.
pub fn random<R: Rng>(problem: &Problem, solution: &Solution, rng: &mut R) -> Option<Solution> {
    let eligible: Vec<usize> = (0..solution.num_machines())
        .filter(|&machine| solution.machine(machine).len() >= 2)
        .collect();
    if eligible.is_empty() {
        return None;
    }
    let machine = eligible[rng.random_range(0..eligible.len())];
    let len = solution.machine(machine).len();
    let from = rng.random_range(0..len);
    // Draw to from the remaining positions so the move is never a no-op.
    let mut to = rng.random_range(0..len - 1);
    if to >= from {
        to += 1;
    }
    Some(apply(problem, solution, machine, from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::SetupMatrix;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_apply_moves_task() {
        let problem = Problem::new(1, vec![1, 2, 3, 4], SetupMatrix::zero(4)).unwrap();
        let solution = Solution::from_sequences(&problem, vec![vec![0, 1, 2, 3]]);
        let moved = apply(&problem, &solution, 0, 0, 2);
        assert_eq!(moved.machine(0), &[1, 2, 0, 3]);
        let rebuilt = Solution::from_sequences(&problem, vec![vec![1, 2, 0, 3]]);
        assert_eq!(moved, rebuilt);
    }

    #[test]
    fn test_apply_same_position_is_identity() {
        let problem = Problem::new(1, vec![1, 2, 3, 4], SetupMatrix::zero(4)).unwrap();
        let solution = Solution::from_sequences(&problem, vec![vec![0, 1, 2, 3]]);
        let unchanged = apply(&problem, &solution, 0, 2, 2);
        assert_eq!(unchanged, solution);
        assert_eq!(unchanged.tct(), solution.tct());
    }

    #[test]
    fn test_best_improvement_pulls_short_task_forward() {
        // [9, 9, 1]: completions 9, 18, 19 -> 46. Moving the short task
        // to the front gives 1, 10, 19 -> 30.
        let problem = Problem::new(1, vec![9, 9, 1], SetupMatrix::zero(3)).unwrap();
        let solution = Solution::from_sequences(&problem, vec![vec![0, 1, 2]]);
        let better = best_improvement(&problem, &solution).unwrap();
        assert_eq!(better.machine(0), &[2, 0, 1]);
        assert_eq!(better.tct(), 30);
    }

    #[test]
    fn test_best_improvement_none_at_spt() {
        let problem = Problem::new(1, vec![2, 4, 6], SetupMatrix::zero(3)).unwrap();
        let solution = Solution::from_sequences(&problem, vec![vec![0, 1, 2]]);
        assert!(best_improvement(&problem, &solution).is_none());
    }

    #[test]
    fn test_random_never_a_no_op() {
        let problem = Problem::new(1, vec![2, 4, 6], SetupMatrix::zero(3)).unwrap();
        let solution = Solution::from_sequences(&problem, vec![vec![0, 1, 2]]);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let moved = random(&problem, &solution, &mut rng).unwrap();
            assert!(moved.is_valid_partition(&problem));
            assert_ne!(moved.machine(0), solution.machine(0));
        }
    }

    #[test]
    fn test_random_none_without_pair() {
        let problem = Problem::new(3, vec![1, 2], SetupMatrix::zero(2)).unwrap();
        let solution = Solution::from_sequences(&problem, vec![vec![0], vec![1], vec![]]);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(random(&problem, &solution, &mut rng).is_none());
    }
}
