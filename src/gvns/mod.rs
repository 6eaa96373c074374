//! General Variable Neighborhood Search (GVNS).
//!
//! A single-solution metaheuristic that alternates shaking and Variable
//! Neighborhood Descent. Each outer iteration climbs a ladder of
//! shaking strengths: a random perturbation of strength `k` is followed
//! by a full descent, the descended candidate replaces the current
//! solution only when strictly better (resetting `k` to 1), and the
//! ladder otherwise advances to `k + 1`. The best solution ever seen is
//! tracked separately and returned.
//!
//! # References
//!
//! - Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//!   *Computers & Operations Research* 24(11), 1097-1100.
//! - Hansen, P. & Mladenović, N. (2001). "Variable neighborhood search:
//!   Principles and applications", *European Journal of Operational Research* 130(3), 449-467.

mod config;
mod runner;
mod stats;

pub use config::{GvnsConfig, LocalSearchKind};
pub use runner::{GvnsResult, GvnsRunner};
pub use stats::NeighborhoodStats;
