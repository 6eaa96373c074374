//! Shaking: random perturbation with a strength parameter.
//!
//! Strength `k` selects the `k`-th neighborhood structure in canonical
//! order (1 = swap within a machine, up to 4 = reinsertion across
//! machines) and applies one random move from it. Strengths outside
//! `1..=4` are rejected as an error rather than clamped; callers that
//! loop over strengths validate their upper bound up front.

use rand::Rng;

use crate::neighborhood::NeighborhoodKind;
use crate::problem::Problem;
use crate::solution::Solution;

/// Why a shake request was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShakeError {
    /// Strength outside the supported `1..=max` scale.
    InvalidStrength { k: usize, max: usize },
}

impl std::fmt::Display for ShakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShakeError::InvalidStrength { k, max } => {
                write!(f, "shaking strength must be in 1..={}, got {}", max, k)
            }
        }
    }
}

impl std::error::Error for ShakeError {}

/// Applies one random move from the `k`-th neighborhood structure.
///
/// When that structure has no valid move for the given solution (for
/// example a cross-machine move on a single-machine problem), the input
/// solution is returned unchanged; the descent that follows simply
/// starts from the same point.
pub fn shake<R: Rng>(
    problem: &Problem,
    solution: &Solution,
    k: usize,
    rng: &mut R,
) -> Result<Solution, ShakeError> {
    let kind = k
        .checked_sub(1)
        .and_then(NeighborhoodKind::from_index)
        .ok_or(ShakeError::InvalidStrength {
            k,
            max: NeighborhoodKind::COUNT,
        })?;
    Ok(kind
        .random_move(problem, solution, rng)
        .unwrap_or_else(|| solution.clone()))
}
