//! Task model.

use serde::{Deserialize, Serialize};

/// A single indivisible unit of work, scheduled on exactly one machine.
///
/// The `id` doubles as the task's index into the problem's task list and
/// into the setup-time matrix, so tasks can be referred to by `usize`
/// everywhere in the search code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Index into the problem's task list.
    pub id: usize,
    /// Processing duration in time units.
    pub processing_time: u32,
}

impl Task {
    /// Creates a task with the given index and processing time.
    pub fn new(id: usize, processing_time: u32) -> Self {
        Self {
            id,
            processing_time,
        }
    }
}
