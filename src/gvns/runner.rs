//! GVNS execution engine.
//!
//! # Algorithm
//!
//! 1. Build the initial solution by cheapest insertion; it is also the
//!    incumbent best
//! 2. For each outer iteration, set k = 1 and while k <= k_max:
//!    a. **Shaking**: draw x' randomly from N_k(current)
//!    b. **Local search**: descend x' to a local optimum x'' with VND
//!    (or randomized VND)
//!    c. **Move or not**: if f(x'') < f(current), set current = x'' and
//!    k = 1; otherwise k = k + 1
//!    d. Track the best solution ever seen
//! 3. Return the best solution with run statistics
//!
//! # Reference
//!
//! Hansen, P. & Mladenović, N. (2001). "Variable neighborhood search:
//! Principles and applications", *European Journal of Operational Research* 130(3), 449-467.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::{GvnsConfig, LocalSearchKind};
use super::stats::NeighborhoodStats;
use crate::construction;
use crate::neighborhood::NeighborhoodKind;
use crate::problem::Problem;
use crate::search::{shaking, vnd};
use crate::solution::Solution;

/// Result of a GVNS run.
#[derive(Debug, Clone)]
pub struct GvnsResult {
    /// Best solution found.
    pub best: Solution,
    /// Total completion time of the best solution.
    pub best_tct: u64,
    /// Outer iterations executed.
    pub iterations: usize,
    /// Outer iterations in which the best TCT strictly decreased.
    pub improved_iterations: usize,
    /// `improved_iterations / iterations`, in `[0, 1]`; `0.0` for a run
    /// with no completed iteration.
    pub update_percentage: f64,
    /// Outer iteration at which the best solution was found (0 when the
    /// construction result was never beaten).
    pub best_iteration: usize,
    /// Best TCT after each outer iteration.
    pub tct_history: Vec<u64>,
    /// Per-neighborhood counters.
    pub stats: NeighborhoodStats,
    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// General Variable Neighborhood Search runner.
pub struct GvnsRunner;

impl GvnsRunner {
    /// Executes GVNS on the given problem.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_pmsp::gvns::{GvnsConfig, GvnsRunner};
    /// use u_pmsp::problem::{Problem, SetupMatrix};
    ///
    /// let problem = Problem::new(2, vec![4, 2, 3, 5], SetupMatrix::zero(4)).unwrap();
    /// let config = GvnsConfig::default().with_max_iterations(20).with_seed(7);
    /// let result = GvnsRunner::run(&problem, &config);
    /// assert!(result.best.is_valid_partition(&problem));
    /// assert_eq!(result.best_tct, result.best.tct());
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn run(problem: &Problem, config: &GvnsConfig) -> GvnsResult {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs GVNS with an optional cancellation token, checked between
    /// outer iterations. A cancelled run still returns the best solution
    /// found so far.
    pub fn run_with_cancel(
        problem: &Problem,
        config: &GvnsConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> GvnsResult {
        config.validate().expect("invalid GvnsConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut current = construction::cheapest_insertion(problem);
        let mut best = current.clone();
        let mut best_iteration = 0;

        let mut stats = NeighborhoodStats::default();
        let mut tct_history = Vec::with_capacity(config.max_iterations);
        let mut improved_iterations = 0;
        let mut iterations = 0;
        let mut cancelled = false;

        for outer in 0..config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let best_before = best.tct();
            let mut k = 1;
            while k <= config.k_max {
                // Shaking: random perturbation in the k-th neighborhood.
                let shaken = shaking::shake(problem, &current, k, &mut rng)
                    .expect("validated k_max keeps k on the strength scale");
                stats.record_shake(k);

                // Local search on the shaken solution.
                let descent = match config.local_search {
                    LocalSearchKind::Vnd => vnd::descend(problem, shaken, &NeighborhoodKind::ALL),
                    LocalSearchKind::RandomVnd => vnd::descend_random(problem, shaken, &mut rng),
                };
                stats.absorb_descent(&descent.improvements);
                let candidate = descent.solution;

                if candidate.tct() < current.tct() {
                    // Improvement over the current solution: accept and
                    // restart from the smallest strength.
                    current = candidate;
                    k = 1;
                } else {
                    k += 1;
                }

                if current.tct() < best.tct() {
                    best = current.clone();
                    best_iteration = outer;
                }
            }

            if best.tct() < best_before {
                improved_iterations += 1;
            }
            tct_history.push(best.tct());
            iterations += 1;
        }

        let update_percentage = if iterations == 0 {
            0.0
        } else {
            improved_iterations as f64 / iterations as f64
        };

        let best_tct = best.tct();
        GvnsResult {
            best,
            best_tct,
            iterations,
            improved_iterations,
            update_percentage,
            best_iteration,
            tct_history,
            stats,
            cancelled,
        }
    }
}
