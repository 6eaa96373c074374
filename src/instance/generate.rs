//! Random instance generation.
//!
//! Draws processing and setup times uniformly from configured inclusive
//! ranges. Generation is deterministic for a given configuration: the
//! seed is part of [`GeneratorConfig`], so the same config always yields
//! the same problem.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::problem::{Problem, SetupMatrix};

/// Configuration for the random instance generator.
///
/// # Examples
///
/// ```
/// use u_pmsp::instance::generate::{generate, GeneratorConfig};
///
/// let config = GeneratorConfig::default()
///     .with_num_tasks(12)
///     .with_num_machines(3)
///     .with_seed(7);
/// let problem = generate(&config);
/// assert_eq!(problem.num_tasks(), 12);
/// assert_eq!(problem.num_machines(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of tasks.
    pub num_tasks: usize,
    /// Number of machines.
    pub num_machines: usize,
    /// Inclusive processing-time range.
    pub processing_range: (u32, u32),
    /// Inclusive setup-time range.
    pub setup_range: (u32, u32),
    /// Seed of the generation stream.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_tasks: 40,
            num_machines: 8,
            processing_range: (1, 99),
            setup_range: (1, 9),
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Sets the number of tasks.
    pub fn with_num_tasks(mut self, n: usize) -> Self {
        self.num_tasks = n;
        self
    }

    /// Sets the number of machines.
    pub fn with_num_machines(mut self, m: usize) -> Self {
        self.num_machines = m;
        self
    }

    /// Sets the inclusive processing-time range.
    pub fn with_processing_range(mut self, low: u32, high: u32) -> Self {
        self.processing_range = (low, high);
        self
    }

    /// Sets the inclusive setup-time range.
    pub fn with_setup_range(mut self, low: u32, high: u32) -> Self {
        self.setup_range = (low, high);
        self
    }

    /// Sets the generation seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_tasks == 0 {
            return Err("num_tasks must be at least 1".into());
        }
        if self.num_machines == 0 {
            return Err("num_machines must be at least 1".into());
        }
        if self.processing_range.0 > self.processing_range.1 {
            return Err(format!(
                "processing_range low {} exceeds high {}",
                self.processing_range.0, self.processing_range.1
            ));
        }
        if self.setup_range.0 > self.setup_range.1 {
            return Err(format!(
                "setup_range low {} exceeds high {}",
                self.setup_range.0, self.setup_range.1
            ));
        }
        Ok(())
    }
}

/// Generates a random problem from the configuration.
///
/// Setup entries on the diagonal and in column 0 (returning to idle) are
/// written as zero; the search never reads them.
///
/// # Panics
///
/// Panics if the configuration is invalid.
pub fn generate(config: &GeneratorConfig) -> Problem {
    config.validate().expect("invalid GeneratorConfig");

    let mut rng = StdRng::seed_from_u64(config.seed);
    let (p_low, p_high) = config.processing_range;
    let processing: Vec<u32> = (0..config.num_tasks)
        .map(|_| rng.random_range(p_low..=p_high))
        .collect();

    let (s_low, s_high) = config.setup_range;
    let setups = SetupMatrix::from_fn(config.num_tasks, |from, to| {
        if to == 0 || from == to {
            0
        } else {
            rng.random_range(s_low..=s_high)
        }
    });

    Problem::new(config.num_machines, processing, setups)
        .expect("a validated generator config yields a valid problem")
}
