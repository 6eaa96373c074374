//! Local search and perturbation.
//!
//! [`vnd`] drives the neighborhood operators to a local optimum;
//! [`shaking`] jumps away from one with a random move of configurable
//! strength. The GVNS controller in [`crate::gvns`] alternates the two.

pub mod shaking;
pub mod vnd;
