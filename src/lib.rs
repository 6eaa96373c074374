//! Parallel machine scheduling with sequence-dependent setup times.
//!
//! Solves the assignment and ordering of `n` tasks on `m` parallel
//! machines, where starting a task costs a setup that depends on the
//! task that ran before it, minimizing the total completion time (TCT):
//! the sum over all tasks of the time at which each task finishes.
//!
//! The solver is a General Variable Neighborhood Search built from these
//! modules:
//!
//! - **`problem`**: validated, immutable instance data (machine count,
//!   tasks, and the setup-time matrix with its idle baseline row).
//! - **`solution`**: one task sequence per machine with cached
//!   per-machine flowtimes; derived, never mutated in place.
//! - **`construction`**: deterministic cheapest-insertion initial
//!   solution.
//! - **`neighborhood`**: the four move structures (swap and reinsertion,
//!   within and across machines) behind one operator contract.
//! - **`search`**: Variable Neighborhood Descent, its randomized-order
//!   variant, and shaking with a strength parameter.
//! - **`gvns`**: the outer controller alternating shaking and descent,
//!   with per-run statistics and cooperative cancellation.
//! - **`instance`**: plain-text instance files and a seeded random
//!   generator.
//! - **`report`**: CSV run records with header-once appending.
//! - **`batch`**: directory-level driver solving many instances (on the
//!   rayon pool under the `parallel` feature).
//!
//! # Examples
//!
//! ```
//! use u_pmsp::gvns::{GvnsConfig, GvnsRunner};
//! use u_pmsp::problem::{Problem, SetupMatrix};
//!
//! let problem = Problem::new(2, vec![4, 2, 3, 5], SetupMatrix::zero(4)).unwrap();
//! let config = GvnsConfig::default().with_max_iterations(20).with_seed(7);
//! let result = GvnsRunner::run(&problem, &config);
//! assert!(result.best.is_valid_partition(&problem));
//! assert!(result.update_percentage <= 1.0);
//! ```
//!
//! # References
//!
//! - Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//!   *Computers & Operations Research* 24(11), 1097-1100.
//! - Vallada, E. & Ruiz, R. (2011). "A genetic algorithm for the unrelated
//!   parallel machine scheduling problem with sequence dependent setup
//!   times", *European Journal of Operational Research* 211(3), 612-622.
//! - Allahverdi, A., Ng, C.T., Cheng, T.C.E. & Kovalyov, M.Y. (2008).
//!   "A survey of scheduling problems with setup times or costs",
//!   *European Journal of Operational Research* 187(3), 985-1032.

pub mod batch;
pub mod construction;
pub mod gvns;
pub mod instance;
pub mod neighborhood;
pub mod problem;
pub mod report;
pub mod search;
pub mod solution;
