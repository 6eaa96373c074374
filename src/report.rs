//! Run reporting: CSV records for solved instances.
//!
//! Each [`RunRecord`] is one CSV row. [`append_csv`] appends to an
//! existing results file and writes the header only when the file is new
//! or empty, so repeated batch runs accumulate into one table.

use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::gvns::{GvnsResult, NeighborhoodStats};
use crate::problem::Problem;

/// One solved instance, ready for CSV output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Instance label (usually the file stem).
    pub instance: String,
    /// Algorithm label, e.g. `gvns-vnd`.
    pub algorithm: String,
    /// Number of tasks in the instance.
    pub num_tasks: usize,
    /// Number of machines in the instance.
    pub num_machines: usize,
    /// Best total completion time found.
    pub tct: u64,
    /// Wall-clock solve time in milliseconds.
    pub elapsed_ms: u64,
    /// Fraction of outer iterations that improved the best solution.
    pub update_percentage: f64,
    /// Per-neighborhood counters captured from the run.
    pub stats: NeighborhoodStats,
}

impl RunRecord {
    /// Builds a record from a finished run.
    pub fn from_result(
        instance: impl Into<String>,
        algorithm: impl Into<String>,
        problem: &Problem,
        result: &GvnsResult,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            instance: instance.into(),
            algorithm: algorithm.into(),
            num_tasks: problem.num_tasks(),
            num_machines: problem.num_machines(),
            tct: result.best_tct,
            elapsed_ms,
            update_percentage: result.update_percentage,
            stats: result.stats.clone(),
        }
    }

    /// The CSV header matching [`RunRecord::to_csv_row`].
    pub fn csv_header() -> &'static str {
        "instance,algorithm,tasks,machines,tct,elapsed_ms,update_percentage,\
         shakes_swap_intra,shakes_reinsertion_intra,shakes_swap_inter,shakes_reinsertion_inter,\
         improvements_swap_intra,improvements_reinsertion_intra,improvements_swap_inter,\
         improvements_reinsertion_inter"
    }

    /// Renders this record as one CSV row.
    pub fn to_csv_row(&self) -> String {
        let shakes = &self.stats.shakes;
        let improvements = &self.stats.descent_improvements;
        format!(
            "{},{},{},{},{},{},{:.4},{},{},{},{},{},{},{},{}",
            self.instance,
            self.algorithm,
            self.num_tasks,
            self.num_machines,
            self.tct,
            self.elapsed_ms,
            self.update_percentage,
            shakes[0],
            shakes[1],
            shakes[2],
            shakes[3],
            improvements[0],
            improvements[1],
            improvements[2],
            improvements[3],
        )
    }
}

/// Appends records to a CSV file, writing the header only when the file
/// is new or empty.
pub fn append_csv(path: impl AsRef<Path>, records: &[RunRecord]) -> std::io::Result<()> {
    let path = path.as_ref();
    let needs_header = std::fs::metadata(path)
        .map(|meta| meta.len() == 0)
        .unwrap_or(true);
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if needs_header {
        writeln!(file, "{}", RunRecord::csv_header())?;
    }
    for record in records {
        writeln!(file, "{}", record.to_csv_row())?;
    }
    Ok(())
}
