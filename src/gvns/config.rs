//! GVNS configuration.

use crate::neighborhood::NeighborhoodKind;

/// Which local search the controller runs after each shake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalSearchKind {
    /// Deterministic VND in canonical structure order.
    Vnd,
    /// VND with the structure order re-shuffled after every improvement.
    ///
    /// Diversifies the descent; still reproducible under a fixed seed.
    RandomVnd,
}

impl Default for LocalSearchKind {
    fn default() -> Self {
        LocalSearchKind::Vnd
    }
}

/// Configuration parameters for the GVNS controller.
///
/// # Examples
///
/// ```
/// use u_pmsp::gvns::{GvnsConfig, LocalSearchKind};
///
/// let config = GvnsConfig::default()
///     .with_max_iterations(200)
///     .with_k_max(3)
///     .with_local_search(LocalSearchKind::RandomVnd)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 200);
/// assert_eq!(config.k_max, 3);
/// ```
#[derive(Debug, Clone)]
pub struct GvnsConfig {
    /// Number of outer iterations (the search budget).
    pub max_iterations: usize,
    /// Largest shaking strength, in `1..=4`.
    pub k_max: usize,
    /// Local search variant run after each shake.
    pub local_search: LocalSearchKind,
    /// Random seed (None for a nondeterministic run).
    pub seed: Option<u64>,
}

impl Default for GvnsConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            k_max: NeighborhoodKind::COUNT,
            local_search: LocalSearchKind::default(),
            seed: None,
        }
    }
}

impl GvnsConfig {
    /// Sets the number of outer iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the largest shaking strength.
    pub fn with_k_max(mut self, k_max: usize) -> Self {
        self.k_max = k_max;
        self
    }

    /// Sets the local search variant.
    pub fn with_local_search(mut self, kind: LocalSearchKind) -> Self {
        self.local_search = kind;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sizes the iteration budget to the task count, a common rule for
    /// comparing runs across instances of different sizes.
    pub fn for_task_count(mut self, num_tasks: usize) -> Self {
        self.max_iterations = num_tasks.max(1);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if self.k_max == 0 || self.k_max > NeighborhoodKind::COUNT {
            return Err(format!(
                "k_max must be in 1..={}, got {}",
                NeighborhoodKind::COUNT,
                self.k_max
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GvnsConfig::default();
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.k_max, 4);
        assert_eq!(config.local_search, LocalSearchKind::Vnd);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builders() {
        let config = GvnsConfig::default()
            .with_max_iterations(50)
            .with_k_max(2)
            .with_local_search(LocalSearchKind::RandomVnd)
            .with_seed(7);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.k_max, 2);
        assert_eq!(config.local_search, LocalSearchKind::RandomVnd);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_for_task_count() {
        assert_eq!(GvnsConfig::default().for_task_count(45).max_iterations, 45);
        assert_eq!(GvnsConfig::default().for_task_count(0).max_iterations, 1);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GvnsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_iterations() {
        let config = GvnsConfig::default().with_max_iterations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_k_max() {
        let config = GvnsConfig::default().with_k_max(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_overlarge_k_max() {
        let config = GvnsConfig::default().with_k_max(5);
        let err = config.validate().unwrap_err();
        assert!(err.contains("k_max must be in 1..=4"));
    }
}
