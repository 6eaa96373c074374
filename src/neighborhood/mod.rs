//! Neighborhood structures over machine-sequence solutions.
//!
//! Four move families, ordered from least to most disruptive:
//! swap within a machine, reinsertion within a machine, swap across two
//! machines, reinsertion across two machines. The same canonical order
//! serves as the deterministic VND ladder and as the shaking strength
//! scale.
//!
//! Every operator module follows one contract:
//!
//! - `apply` performs a single concrete move and returns a new solution;
//!   inputs are never mutated and only the touched machines' cached
//!   costs are recomputed.
//! - `best_improvement` scans the whole structure and returns the best
//!   strictly improving neighbor, or `None` at a local optimum of the
//!   structure. Ties keep the first candidate in enumeration order
//!   (machines ascending, then coordinates ascending), so descent is
//!   reproducible.
//! - `random` draws one random valid move for shaking (machine drawn
//!   uniformly among eligible ones, then coordinates uniformly), or
//!   `None` when the structure admits no move at all.
//!
//! # References
//! - Mladenović & Hansen (1997), "Variable neighborhood search"
//! - Vallada & Ruiz (2011), "A genetic algorithm for the unrelated
//!   parallel machine scheduling problem with sequence dependent setup
//!   times"

pub mod reinsertion_inter;
pub mod reinsertion_intra;
pub mod swap_inter;
pub mod swap_intra;

use rand::Rng;

use crate::problem::Problem;
use crate::solution::Solution;

/// The four move structures, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborhoodKind {
    /// Exchange two positions within one machine.
    SwapIntra,
    /// Move a task to another position on the same machine.
    ReinsertionIntra,
    /// Exchange two tasks between two machines.
    SwapInter,
    /// Move a task from one machine to another.
    ReinsertionInter,
}

impl NeighborhoodKind {
    /// Number of neighborhood structures.
    pub const COUNT: usize = 4;

    /// All structures in canonical order.
    pub const ALL: [NeighborhoodKind; Self::COUNT] = [
        NeighborhoodKind::SwapIntra,
        NeighborhoodKind::ReinsertionIntra,
        NeighborhoodKind::SwapInter,
        NeighborhoodKind::ReinsertionInter,
    ];

    /// Zero-based index in the canonical order.
    pub fn index(self) -> usize {
        match self {
            NeighborhoodKind::SwapIntra => 0,
            NeighborhoodKind::ReinsertionIntra => 1,
            NeighborhoodKind::SwapInter => 2,
            NeighborhoodKind::ReinsertionInter => 3,
        }
    }

    /// Structure at the given zero-based canonical index.
    pub fn from_index(index: usize) -> Option<NeighborhoodKind> {
        Self::ALL.get(index).copied()
    }

    /// Short label used in reports.
    pub fn name(self) -> &'static str {
        match self {
            NeighborhoodKind::SwapIntra => "swap_intra",
            NeighborhoodKind::ReinsertionIntra => "reinsertion_intra",
            NeighborhoodKind::SwapInter => "swap_inter",
            NeighborhoodKind::ReinsertionInter => "reinsertion_inter",
        }
    }

    /// Best strictly improving neighbor in this structure, if any.
    pub fn best_improvement(self, problem: &Problem, solution: &Solution) -> Option<Solution> {
        match self {
            NeighborhoodKind::SwapIntra => swap_intra::best_improvement(problem, solution),
            NeighborhoodKind::ReinsertionIntra => {
                reinsertion_intra::best_improvement(problem, solution)
            }
            NeighborhoodKind::SwapInter => swap_inter::best_improvement(problem, solution),
            NeighborhoodKind::ReinsertionInter => {
                reinsertion_inter::best_improvement(problem, solution)
            }
        }
    }

    /// One random valid move in this structure, if any exists.
    pub fn random_move<R: Rng>(
        self,
        problem: &Problem,
        solution: &Solution,
        rng: &mut R,
    ) -> Option<Solution> {
        match self {
            NeighborhoodKind::SwapIntra => swap_intra::random(problem, solution, rng),
            NeighborhoodKind::ReinsertionIntra => reinsertion_intra::random(problem, solution, rng),
            NeighborhoodKind::SwapInter => swap_inter::random(problem, solution, rng),
            NeighborhoodKind::ReinsertionInter => reinsertion_inter::random(problem, solution, rng),
        }
    }
}
