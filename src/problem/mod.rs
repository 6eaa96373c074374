//! Problem data: machines, tasks, and setup times.
//!
//! [`Problem`] is the immutable snapshot every search component reads.
//! It is validated on construction and then passed by reference to the
//! construction heuristic, the neighborhood operators, and the runner;
//! there is no global instance.

mod setup;
mod task;

pub use setup::SetupMatrix;
pub use task::Task;

use serde::{Deserialize, Serialize};

/// Why problem data could not be accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    /// The machine count is zero.
    NoMachines,
    /// The task list is empty.
    NoTasks,
    /// The setup matrix side does not match the task count.
    SetupDimensionMismatch { expected: usize, found: usize },
}

impl std::fmt::Display for ProblemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemError::NoMachines => write!(f, "problem must have at least one machine"),
            ProblemError::NoTasks => write!(f, "problem must have at least one task"),
            ProblemError::SetupDimensionMismatch { expected, found } => write!(
                f,
                "setup matrix side must be {} (task count + 1), got {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for ProblemError {}

/// An immutable scheduling problem: `m` parallel machines, `n` tasks
/// with fixed processing times, and a sequence-dependent setup matrix.
///
/// The objective throughout the crate is total completion time (TCT):
/// the sum over all tasks of the time at which each task finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    num_machines: usize,
    tasks: Vec<Task>,
    setups: SetupMatrix,
}

impl Problem {
    /// Builds a validated problem from processing times and setups.
    ///
    /// Rejects zero machines, zero tasks, and a setup matrix sized for a
    /// different task count.
    pub fn new(
        num_machines: usize,
        processing_times: Vec<u32>,
        setups: SetupMatrix,
    ) -> Result<Self, ProblemError> {
        if num_machines == 0 {
            return Err(ProblemError::NoMachines);
        }
        if processing_times.is_empty() {
            return Err(ProblemError::NoTasks);
        }
        if setups.num_tasks() != processing_times.len() {
            return Err(ProblemError::SetupDimensionMismatch {
                expected: processing_times.len() + 1,
                found: setups.num_tasks() + 1,
            });
        }
        let tasks = processing_times
            .into_iter()
            .enumerate()
            .map(|(id, processing_time)| Task::new(id, processing_time))
            .collect();
        Ok(Self {
            num_machines,
            tasks,
            setups,
        })
    }

    /// Number of machines.
    pub fn num_machines(&self) -> usize {
        self.num_machines
    }

    /// Number of tasks.
    pub fn num_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// All tasks, indexed by id.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Processing time of `task`.
    pub fn processing_time(&self, task: usize) -> u32 {
        self.tasks[task].processing_time
    }

    /// The setup-time matrix.
    pub fn setups(&self) -> &SetupMatrix {
        &self.setups
    }

    /// Setup incurred before `next` given the previous task on the
    /// machine (`None` when the machine is still idle).
    pub fn setup_after(&self, prev: Option<usize>, next: usize) -> u32 {
        match prev {
            Some(prev) => self.setups.between(prev, next),
            None => self.setups.initial(next),
        }
    }

    /// Sum of task completion times along one machine's sequence.
    ///
    /// Each task finishes at the previous finish time plus its setup and
    /// processing time; the returned value is the sum of those finish
    /// times, i.e. this sequence's contribution to the TCT.
    pub fn sequence_flowtime(&self, sequence: &[usize]) -> u64 {
        let mut finish = 0u64;
        let mut total = 0u64;
        let mut prev = None;
        for &task in sequence {
            finish += u64::from(self.setup_after(prev, task)) + u64::from(self.processing_time(task));
            total += finish;
            prev = Some(task);
        }
        total
    }
}
