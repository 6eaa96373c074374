//! Sequence-dependent setup time matrix.

use serde::{Deserialize, Serialize};

use super::ProblemError;

/// Setup times between consecutive tasks on the same machine.
///
/// Stored as a flattened `(n + 1) x (n + 1)` matrix for `n` tasks, in
/// row-major order. State `0` is the idle machine: `initial(j)` is the
/// setup paid when task `j` opens a machine's sequence, and
/// `between(i, j)` when `j` immediately follows `i`. Entries on the
/// diagonal and in column `0` are never consulted by the search.
///
/// # Reference
/// Allahverdi, Ng, Cheng & Kovalyov (2008), "A survey of scheduling
/// problems with setup times or costs"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupMatrix {
    num_tasks: usize,
    entries: Vec<u32>,
}

impl SetupMatrix {
    /// Creates an all-zero matrix for `num_tasks` tasks.
    pub fn zero(num_tasks: usize) -> Self {
        let side = num_tasks + 1;
        Self {
            num_tasks,
            entries: vec![0; side * side],
        }
    }

    /// Builds a matrix from explicit `(n + 1) x (n + 1)` rows.
    ///
    /// Returns [`ProblemError::SetupDimensionMismatch`] when the row
    /// count or any row length differs from `num_tasks + 1`.
    pub fn from_rows(num_tasks: usize, rows: Vec<Vec<u32>>) -> Result<Self, ProblemError> {
        let side = num_tasks + 1;
        if rows.len() != side {
            return Err(ProblemError::SetupDimensionMismatch {
                expected: side,
                found: rows.len(),
            });
        }
        let mut entries = Vec::with_capacity(side * side);
        for row in &rows {
            if row.len() != side {
                return Err(ProblemError::SetupDimensionMismatch {
                    expected: side,
                    found: row.len(),
                });
            }
            entries.extend_from_slice(row);
        }
        Ok(Self { num_tasks, entries })
    }

    /// Builds a matrix by evaluating `f(from_state, to_state)` for every
    /// entry, where state `0` is idle and state `t + 1` is task `t`.
    pub fn from_fn(num_tasks: usize, mut f: impl FnMut(usize, usize) -> u32) -> Self {
        let side = num_tasks + 1;
        let mut entries = Vec::with_capacity(side * side);
        for from in 0..side {
            for to in 0..side {
                entries.push(f(from, to));
            }
        }
        Self { num_tasks, entries }
    }

    /// Number of tasks this matrix covers.
    pub fn num_tasks(&self) -> usize {
        self.num_tasks
    }

    /// Raw entry in state indices (`0` = idle, `t + 1` = task `t`).
    pub fn entry(&self, from_state: usize, to_state: usize) -> u32 {
        self.entries[from_state * (self.num_tasks + 1) + to_state]
    }

    /// Setup paid when `task` is the first on its machine.
    pub fn initial(&self, task: usize) -> u32 {
        debug_assert!(task < self.num_tasks);
        self.entries[task + 1]
    }

    /// Setup paid when `to` immediately follows `from` on a machine.
    pub fn between(&self, from: usize, to: usize) -> u32 {
        debug_assert!(from < self.num_tasks && to < self.num_tasks);
        self.entries[(from + 1) * (self.num_tasks + 1) + (to + 1)]
    }
}
