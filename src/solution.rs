//! Solution representation: one task sequence per machine, with cached
//! per-machine flowtimes and the total completion time.
//!
//! Solutions are immutable values. Operators never edit a sequence in
//! place: they derive a new `Solution` through [`Solution::with_machines`],
//! which recomputes only the machines whose sequences changed. The cached
//! total therefore always equals a from-scratch evaluation of the
//! sequences, which the property tests in `neighborhood` rely on.

use serde::{Deserialize, Serialize};

use crate::problem::Problem;

/// An assignment of every task to one machine with an explicit order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    sequences: Vec<Vec<usize>>,
    machine_flowtimes: Vec<u64>,
    total: u64,
}

impl Solution {
    /// Builds a solution from raw sequences, evaluating every machine.
    ///
    /// # Panics
    /// Panics if the number of sequences differs from the problem's
    /// machine count.
    pub fn from_sequences(problem: &Problem, sequences: Vec<Vec<usize>>) -> Self {
        assert_eq!(
            sequences.len(),
            problem.num_machines(),
            "one sequence per machine"
        );
        let machine_flowtimes: Vec<u64> = sequences
            .iter()
            .map(|seq| problem.sequence_flowtime(seq))
            .collect();
        let total = machine_flowtimes.iter().sum();
        Self {
            sequences,
            machine_flowtimes,
            total,
        }
    }

    /// All machine sequences, indexed by machine.
    pub fn sequences(&self) -> &[Vec<usize>] {
        &self.sequences
    }

    /// The task sequence of one machine.
    pub fn machine(&self, machine: usize) -> &[usize] {
        &self.sequences[machine]
    }

    /// Number of machines.
    pub fn num_machines(&self) -> usize {
        self.sequences.len()
    }

    /// Number of tasks across all machines.
    pub fn num_tasks(&self) -> usize {
        self.sequences.iter().map(Vec::len).sum()
    }

    /// Cached flowtime contribution of one machine.
    pub fn machine_flowtime(&self, machine: usize) -> u64 {
        self.machine_flowtimes[machine]
    }

    /// Total completion time of this solution.
    pub fn tct(&self) -> u64 {
        self.total
    }

    /// Derives a new solution with the given machines' sequences
    /// replaced, re-evaluating only those machines.
    ///
    /// `changes` must name each machine at most once.
    pub(crate) fn with_machines(
        &self,
        problem: &Problem,
        changes: &[(usize, Vec<usize>)],
    ) -> Self {
        debug_assert!(
            changes
                .iter()
                .enumerate()
                .all(|(i, (m, _))| changes[..i].iter().all(|(other, _)| other != m)),
            "each machine may be changed at most once"
        );
        let mut next = self.clone();
        for (machine, sequence) in changes {
            let new_flow = problem.sequence_flowtime(sequence);
            next.total = next.total - next.machine_flowtimes[*machine] + new_flow;
            next.machine_flowtimes[*machine] = new_flow;
            next.sequences[*machine] = sequence.clone();
        }
        next
    }

    /// Checks the partition invariant: every task of the problem appears
    /// in exactly one sequence, exactly once, and no foreign ids occur.
    pub fn is_valid_partition(&self, problem: &Problem) -> bool {
        if self.sequences.len() != problem.num_machines() {
            return false;
        }
        let mut seen = vec![false; problem.num_tasks()];
        for seq in &self.sequences {
            for &task in seq {
                if task >= seen.len() || seen[task] {
                    return false;
                }
                seen[task] = true;
            }
        }
        seen.into_iter().all(|s| s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::SetupMatrix;

    fn problem_3x2() -> Problem {
        let setups = SetupMatrix::from_fn(3, |from, to| {
            if from == 0 || to == 0 || from == to {
                0
            } else {
                2
            }
        });
        Problem::new(2, vec![4, 6, 2], setups).unwrap()
    }

    #[test]
    fn test_from_sequences_caches_costs() {
        let problem = problem_3x2();
        let solution = Solution::from_sequences(&problem, vec![vec![0, 1], vec![2]]);
        // Machine 0: task 0 finishes at 4, task 1 at 4 + 2 + 6 = 12.
        assert_eq!(solution.machine_flowtime(0), 4 + 12);
        // Machine 1: task 2 finishes at 2.
        assert_eq!(solution.machine_flowtime(1), 2);
        assert_eq!(solution.tct(), 16 + 2);
        assert_eq!(solution.num_tasks(), 3);
    }

    #[test]
    #[should_panic(expected = "one sequence per machine")]
    fn test_from_sequences_wrong_machine_count_panics() {
        let problem = problem_3x2();
        let _ = Solution::from_sequences(&problem, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_with_machines_matches_full_rebuild() {
        let problem = problem_3x2();
        let solution = Solution::from_sequences(&problem, vec![vec![0, 1], vec![2]]);
        let moved = solution.with_machines(&problem, &[(0, vec![1]), (1, vec![2, 0])]);
        let rebuilt = Solution::from_sequences(&problem, vec![vec![1], vec![2, 0]]);
        assert_eq!(moved, rebuilt);
    }

    #[test]
    fn test_with_machines_untouched_machine_unchanged() {
        let problem = problem_3x2();
        let solution = Solution::from_sequences(&problem, vec![vec![0, 1], vec![2]]);
        let moved = solution.with_machines(&problem, &[(0, vec![1, 0])]);
        assert_eq!(moved.machine(1), solution.machine(1));
        assert_eq!(moved.machine_flowtime(1), solution.machine_flowtime(1));
    }

    #[test]
    fn test_partition_accepts_valid() {
        let problem = problem_3x2();
        let solution = Solution::from_sequences(&problem, vec![vec![2], vec![0, 1]]);
        assert!(solution.is_valid_partition(&problem));
    }

    #[test]
    fn test_partition_rejects_duplicate() {
        let problem = problem_3x2();
        let solution = Solution::from_sequences(&problem, vec![vec![0, 1], vec![1]]);
        assert!(!solution.is_valid_partition(&problem));
    }

    #[test]
    fn test_partition_rejects_missing() {
        let problem = problem_3x2();
        let solution = Solution::from_sequences(&problem, vec![vec![0], vec![1]]);
        assert!(!solution.is_valid_partition(&problem));
    }

    #[test]
    fn test_partition_rejects_foreign_id() {
        let problem = problem_3x2();
        // Built against a wider problem, then checked against the narrow one.
        let wide = Problem::new(2, vec![1; 6], SetupMatrix::zero(6)).unwrap();
        let solution = Solution::from_sequences(&wide, vec![vec![0, 1, 5], vec![2]]);
        assert!(!solution.is_valid_partition(&problem));
    }

    #[test]
    fn test_solution_serde_roundtrip() {
        let problem = problem_3x2();
        let solution = Solution::from_sequences(&problem, vec![vec![0, 1], vec![2]]);
        let json = serde_json::to_string(&solution).unwrap();
        let back: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(solution, back);
    }
}
