//! Deterministic cheapest-insertion construction.
//!
//! Builds the initial solution by repeatedly inserting the unplaced task
//! with the smallest flowtime increase over every machine and insertion
//! position. Ties keep the first candidate in enumeration order (task
//! ascending, then machine ascending, then position ascending), so the
//! result is a pure function of the problem data: no randomness, no
//! dependence on iteration order of any collection.
//!
//! On a single machine with zero setups this reduces to shortest
//! processing time first, which is optimal for the sum of completion
//! times.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", ch. 3

use crate::problem::Problem;
use crate::solution::Solution;

/// Builds an initial solution by greedy cheapest insertion.
///
/// # Complexity
/// O(n^2 * m * L^2) for `n` tasks, `m` machines and maximum sequence
/// length `L`; each candidate insertion re-evaluates one sequence.
pub fn cheapest_insertion(problem: &Problem) -> Solution {
    let num_tasks = problem.num_tasks();
    let num_machines = problem.num_machines();
    let mut sequences: Vec<Vec<usize>> = vec![Vec::new(); num_machines];
    let mut flowtimes = vec![0u64; num_machines];
    let mut placed = vec![false; num_tasks];
    let mut scratch: Vec<usize> = Vec::with_capacity(num_tasks);

    for _ in 0..num_tasks {
        // (delta, new machine flowtime, task, machine, position)
        let mut best: Option<(i64, u64, usize, usize, usize)> = None;
        for task in 0..num_tasks {
            if placed[task] {
                continue;
            }
            for machine in 0..num_machines {
                let sequence = &sequences[machine];
                for position in 0..=sequence.len() {
                    scratch.clear();
                    scratch.extend_from_slice(&sequence[..position]);
                    scratch.push(task);
                    scratch.extend_from_slice(&sequence[position..]);
                    let new_flow = problem.sequence_flowtime(&scratch);
                    let delta = new_flow as i64 - flowtimes[machine] as i64;
                    if best.is_none_or(|(best_delta, ..)| delta < best_delta) {
                        best = Some((delta, new_flow, task, machine, position));
                    }
                }
            }
        }
        let (_, new_flow, task, machine, position) =
            best.expect("an unplaced task always admits an insertion");
        sequences[machine].insert(position, task);
        flowtimes[machine] = new_flow;
        placed[task] = true;
    }

    Solution::from_sequences(problem, sequences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::SetupMatrix;

    #[test]
    fn test_single_machine_zero_setups_is_spt() {
        let problem = Problem::new(1, vec![5, 3, 8], SetupMatrix::zero(3)).unwrap();
        let solution = cheapest_insertion(&problem);
        assert_eq!(solution.machine(0), &[1, 0, 2]);
        // Completions 3, 8, 16.
        assert_eq!(solution.tct(), 27);
    }

    #[test]
    fn test_spreads_tasks_over_idle_machines() {
        let problem = Problem::new(2, vec![7, 4], SetupMatrix::zero(2)).unwrap();
        let solution = cheapest_insertion(&problem);
        // Sharing a machine would cost at least 4 + 11; one task per
        // machine costs 7 + 4.
        assert_eq!(solution.tct(), 11);
        assert_eq!(solution.num_tasks(), 2);
        assert!(solution.sequences().iter().all(|seq| seq.len() == 1));
    }

    #[test]
    fn test_deterministic() {
        let setups = SetupMatrix::from_fn(5, |from, to| {
            if from == 0 || to == 0 || from == to {
                0
            } else {
                ((from * 3 + to * 5) % 7) as u32
            }
        });
        let problem = Problem::new(2, vec![9, 2, 6, 4, 8], setups).unwrap();
        let first = cheapest_insertion(&problem);
        let second = cheapest_insertion(&problem);
        assert_eq!(first, second);
    }

    #[test]
    fn test_partition_invariant() {
        let setups = SetupMatrix::from_fn(6, |from, to| ((from + 2 * to) % 5) as u32);
        let problem = Problem::new(3, vec![3, 1, 4, 1, 5, 9], setups).unwrap();
        let solution = cheapest_insertion(&problem);
        assert!(solution.is_valid_partition(&problem));
    }

    #[test]
    fn test_setups_steer_placement() {
        // Two tasks, one machine. Task 1 is cheap to open with and cheap
        // to follow with task 0; the reverse order pays a setup of 50.
        let rows = vec![vec![0, 50, 1], vec![0, 0, 50], vec![0, 1, 0]];
        let setups = SetupMatrix::from_rows(2, rows).unwrap();
        let problem = Problem::new(1, vec![5, 5], setups).unwrap();
        let solution = cheapest_insertion(&problem);
        assert_eq!(solution.machine(0), &[1, 0]);
        // Task 1 finishes at 1 + 5 = 6, task 0 at 6 + 1 + 5 = 12.
        assert_eq!(solution.tct(), 18);
    }

    #[test]
    fn test_single_task() {
        let problem = Problem::new(3, vec![42], SetupMatrix::zero(1)).unwrap();
        let solution = cheapest_insertion(&problem);
        assert_eq!(solution.tct(), 42);
        assert!(solution.is_valid_partition(&problem));
    }
}
