//! Monte Carlo simulation of route costs under uncertain rates.
//!
//! - [`simulate`] — Free function over an injected random source
//! - [`MonteCarloSimulator`] — Seedable runner bound to a catalog and cost model
//! - [`SimulationResult`] — Samples in draw order, mean, summary statistics
//! - [`Histogram`] — Equal-width binning of samples

mod config;
mod histogram;
mod monte_carlo;
mod result;

pub use config::{SimulationConfig, DEFAULT_PERTURBATION};
pub use histogram::{Histogram, DEFAULT_BINS};
pub use monte_carlo::{simulate, simulate_perturbed, MonteCarloSimulator};
pub use result::SimulationResult;

/// Sample counts that keep an interactive caller responsive.
///
/// Advisory only; the simulator accepts any count of at least one.
pub const RECOMMENDED_SIMULATIONS: std::ops::RangeInclusive<usize> = 100..=1000;

/// Sample count used when the caller does not choose one.
pub const DEFAULT_SIMULATIONS: usize = 500;
