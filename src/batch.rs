//! Batch solving of instance directories.
//!
//! Loads every `*.txt` instance in a directory, solves each one with its
//! own RNG stream, and returns one [`RunRecord`] per instance, sorted by
//! label. With the `parallel` feature the instances are solved on the
//! rayon thread pool; records are collected and written by the caller
//! afterwards, so no output sink needs a lock.
//!
//! Per-instance seeds are derived from the configured seed and the
//! instance's position in the sorted listing, which keeps results
//! independent of how the work is scheduled across threads.

use std::path::{Path, PathBuf};
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::gvns::{GvnsConfig, GvnsRunner, LocalSearchKind};
use crate::instance::{self, InstanceError};
use crate::problem::Problem;
use crate::report::RunRecord;

/// Why a batch run failed before any solving happened.
#[derive(Debug)]
pub enum BatchError {
    /// The directory could not be listed.
    Io(std::io::Error),
    /// One instance file failed to load.
    Instance {
        path: PathBuf,
        source: InstanceError,
    },
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchError::Io(err) => write!(f, "batch io error: {}", err),
            BatchError::Instance { path, source } => {
                write!(f, "failed to load '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::Io(err) => Some(err),
            BatchError::Instance { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for BatchError {
    fn from(err: std::io::Error) -> Self {
        BatchError::Io(err)
    }
}

/// Algorithm label written into the records of a batch.
pub fn algorithm_label(config: &GvnsConfig) -> &'static str {
    match config.local_search {
        LocalSearchKind::Vnd => "gvns-vnd",
        LocalSearchKind::RandomVnd => "gvns-rvnd",
    }
}

/// Solves every `*.txt` instance in `dir`.
///
/// Files are taken in lexicographic order; loading stops at the first
/// broken instance so a typo in one file is reported rather than
/// silently skipped.
pub fn solve_directory(
    dir: impl AsRef<Path>,
    config: &GvnsConfig,
) -> Result<Vec<RunRecord>, BatchError> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();

    let mut problems = Vec::with_capacity(paths.len());
    for path in paths {
        let problem = instance::read_file(&path).map_err(|source| BatchError::Instance {
            path: path.clone(),
            source,
        })?;
        let label = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        problems.push((label, problem));
    }
    Ok(solve_all(&problems, config))
}

/// Solves a set of labeled problems, one GVNS run each, returning the
/// records sorted by instance label.
pub fn solve_all(problems: &[(String, Problem)], config: &GvnsConfig) -> Vec<RunRecord> {
    #[cfg(feature = "parallel")]
    let iter = problems.par_iter().enumerate();
    #[cfg(not(feature = "parallel"))]
    let iter = problems.iter().enumerate();

    let mut records: Vec<RunRecord> = iter
        .map(|(index, (label, problem))| solve_one(index, label, problem, config))
        .collect();
    records.sort_by(|a, b| a.instance.cmp(&b.instance));
    records
}

fn solve_one(index: usize, label: &str, problem: &Problem, config: &GvnsConfig) -> RunRecord {
    // Derive a per-instance seed so every instance gets its own stream.
    let run_config = match config.seed {
        Some(seed) => config.clone().with_seed(seed.wrapping_add(index as u64)),
        None => config.clone(),
    };
    let started = Instant::now();
    let result = GvnsRunner::run(problem, &run_config);
    let elapsed_ms = started.elapsed().as_millis() as u64;
    RunRecord::from_result(label, algorithm_label(config), problem, &result, elapsed_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::generate::{generate, GeneratorConfig};

    fn small_problems() -> Vec<(String, Problem)> {
        let base = GeneratorConfig::default().with_num_tasks(6).with_num_machines(2);
        vec![
            ("alpha".to_string(), generate(&base.clone().with_seed(1))),
            ("beta".to_string(), generate(&base.clone().with_seed(2))),
            ("gamma".to_string(), generate(&base.with_seed(3))),
        ]
    }

    fn quick_config() -> GvnsConfig {
        GvnsConfig::default().with_max_iterations(5).with_seed(42)
    }

    #[test]
    fn test_solve_all_one_record_per_instance() {
        let problems = small_problems();
        let records = solve_all(&problems, &quick_config());
        assert_eq!(records.len(), 3);
        let labels: Vec<&str> = records.iter().map(|r| r.instance.as_str()).collect();
        assert_eq!(labels, ["alpha", "beta", "gamma"]);
        for record in &records {
            assert_eq!(record.algorithm, "gvns-vnd");
            assert_eq!(record.num_tasks, 6);
        }
    }

    #[test]
    fn test_solve_all_deterministic() {
        let problems = small_problems();
        let config = quick_config();
        let first = solve_all(&problems, &config);
        let second = solve_all(&problems, &config);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.instance, b.instance);
            assert_eq!(a.tct, b.tct);
            assert_eq!(a.stats, b.stats);
        }
    }

    #[test]
    fn test_solve_directory_roundtrip() {
        let dir = std::env::temp_dir().join(format!("u-pmsp-batch-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        for (label, problem) in small_problems() {
            crate::instance::write_file(dir.join(format!("{}.txt", label)), &problem).unwrap();
        }
        // Files with other extensions are ignored.
        std::fs::write(dir.join("notes.md"), "ignore me").unwrap();

        let records = solve_directory(&dir, &quick_config()).unwrap();
        let _ = std::fs::remove_dir_all(&dir);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].instance, "alpha");
        assert_eq!(records[2].instance, "gamma");
    }

    #[test]
    fn test_solve_directory_reports_broken_instance() {
        let dir = std::env::temp_dir().join(format!("u-pmsp-broken-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("bad.txt"), "n: nope").unwrap();

        let err = solve_directory(&dir, &quick_config()).unwrap_err();
        let _ = std::fs::remove_dir_all(&dir);

        match err {
            BatchError::Instance { path, .. } => {
                assert!(path.ends_with("bad.txt"));
            }
            other => panic!("expected instance error, got {:?}", other),
        }
    }

    #[test]
    fn test_solve_missing_directory_is_io() {
        let dir = std::env::temp_dir().join("u-pmsp-no-such-dir");
        match solve_directory(&dir, &quick_config()) {
            Err(BatchError::Io(_)) => {}
            other => panic!("expected io error, got {:?}", other),
        }
    }

    #[test]
    fn test_algorithm_label() {
        assert_eq!(algorithm_label(&quick_config()), "gvns-vnd");
        let rvnd = quick_config().with_local_search(LocalSearchKind::RandomVnd);
        assert_eq!(algorithm_label(&rvnd), "gvns-rvnd");
    }
}
