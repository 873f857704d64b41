//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ModalError, Result};

/// Default half-width of the relative rate perturbation band (±10%).
pub const DEFAULT_PERTURBATION: f64 = 0.10;

/// Configuration for [`MonteCarloSimulator`](super::MonteCarloSimulator).
///
/// # Examples
///
/// ```
/// use u_modal::simulation::SimulationConfig;
///
/// let config = SimulationConfig::default()
///     .with_perturbation(0.2)
///     .with_seed(42);
/// assert_eq!(config.perturbation, 0.2);
/// assert_eq!(config.seed, Some(42));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Half-width `p` of the relative band: each draw uses a rate sampled
    /// uniformly from `[(1 - p)·c, (1 + p)·c]`.
    pub perturbation: f64,
    /// Seed for reproducible runs; `None` seeds each run from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            perturbation: DEFAULT_PERTURBATION,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Sets the perturbation half-width.
    pub fn with_perturbation(mut self, perturbation: f64) -> Self {
        self.perturbation = perturbation;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the perturbation lies in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        check_perturbation(self.perturbation)
    }
}

pub(crate) fn check_perturbation(perturbation: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&perturbation) {
        return Err(ModalError::InvalidPerturbation(perturbation));
    }
    Ok(())
}
