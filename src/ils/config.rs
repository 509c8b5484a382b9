//! ILS configuration.

use crate::error::{CflpError, Result};

/// Step budgets the inner local search draws from when none are given.
pub const DEFAULT_TIME_INTERVALS: [usize; 19] = [
    10, 20, 30, 40, 50, 60, 80, 90, 100, 110, 120, 130, 140, 150, 160, 170, 180, 190, 200,
];

/// Configuration for the Iterated Local Search.
///
/// # Examples
///
/// ```
/// use u_cflp::ils::IlsConfig;
///
/// let config = IlsConfig::default()
///     .with_global_iterations(20)
///     .with_time_intervals(vec![50, 100, 200])
///     .with_exploration_probability(0.1)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IlsConfig {
    /// Number of outer restart iterations.
    pub global_iterations: usize,

    /// Candidate step budgets for one local search phase. One is drawn
    /// uniformly per global iteration.
    pub time_intervals: Vec<usize>,

    /// Probability of accepting a restart candidate that is not better
    /// than the current solution.
    pub exploration_probability: f64,

    /// Largest index shift the perturbation may apply, in either direction.
    pub max_offset: usize,

    /// Random seed for reproducibility. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for IlsConfig {
    fn default() -> Self {
        Self {
            global_iterations: 5,
            time_intervals: DEFAULT_TIME_INTERVALS.to_vec(),
            exploration_probability: 0.15,
            max_offset: 3,
            seed: None,
        }
    }
}

impl IlsConfig {
    pub fn with_global_iterations(mut self, n: usize) -> Self {
        self.global_iterations = n;
        self
    }

    pub fn with_time_intervals(mut self, intervals: Vec<usize>) -> Self {
        self.time_intervals = intervals;
        self
    }

    pub fn with_exploration_probability(mut self, p: f64) -> Self {
        self.exploration_probability = p;
        self
    }

    pub fn with_max_offset(mut self, offset: usize) -> Self {
        self.max_offset = offset;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.time_intervals.is_empty() {
            return Err(CflpError::InvalidConfig(
                "time_intervals must not be empty".into(),
            ));
        }
        let p = self.exploration_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(CflpError::InvalidConfig(format!(
                "exploration_probability must be in [0, 1], got {p}"
            )));
        }
        Ok(())
    }
}
