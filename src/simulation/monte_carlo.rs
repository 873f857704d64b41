//! Monte Carlo cost simulation.
//!
//! Each draw perturbs the nominal cost-per-km rate uniformly within a
//! relative band and multiplies it by the route distance:
//!
//! ```text
//! sample = U((1 - p)·c, (1 + p)·c) · d
//! ```
//!
//! Draws are i.i.d. and consume only the random source passed in, so a
//! seeded source gives reproducible samples.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::config::{check_perturbation, DEFAULT_PERTURBATION};
use super::{SimulationConfig, SimulationResult};
use crate::error::{ModalError, Result};
use crate::models::{CostModel, Mode, RouteCatalog, RouteKey};

/// Simulates the cost of carrying `route` by `mode`, drawing
/// `n_simulations` samples under the default ±10% rate perturbation.
///
/// # Errors
///
/// [`ModalError::UnknownRoute`] / [`ModalError::UnknownMode`] if either key
/// is missing, [`ModalError::ZeroSimulations`] if `n_simulations` is zero,
/// [`ModalError::InvalidRate`] if the perturbed cost overflows `f64`.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_modal::models::{CostModel, Mode, RouteCatalog, RouteKey};
/// use u_modal::simulation::simulate;
///
/// let route = RouteKey::new("Sydney", "Melbourne");
/// let catalog = RouteCatalog::from_routes([(route.clone(), 880.0)]).unwrap();
/// let costs = CostModel::road_rail(0.5, 0.3).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let result = simulate(&route, &Mode::Rail, 1000, &catalog, &costs, &mut rng).unwrap();
/// assert_eq!(result.len(), 1000);
/// assert!((result.mean() - 264.0).abs() < 264.0 * 0.02);
/// ```
pub fn simulate<R: Rng>(
    route: &RouteKey,
    mode: &Mode,
    n_simulations: usize,
    catalog: &RouteCatalog,
    cost_model: &CostModel,
    rng: &mut R,
) -> Result<SimulationResult> {
    simulate_perturbed(
        route,
        mode,
        n_simulations,
        catalog,
        cost_model,
        DEFAULT_PERTURBATION,
        rng,
    )
}

/// Like [`simulate`], with an explicit perturbation half-width `p` in
/// `[0, 1]`.
pub fn simulate_perturbed<R: Rng>(
    route: &RouteKey,
    mode: &Mode,
    n_simulations: usize,
    catalog: &RouteCatalog,
    cost_model: &CostModel,
    perturbation: f64,
    rng: &mut R,
) -> Result<SimulationResult> {
    let distance = catalog
        .distance(route)
        .ok_or_else(|| ModalError::UnknownRoute(route.clone()))?;
    let rate = cost_model
        .rate_for(route, mode)
        .ok_or_else(|| ModalError::UnknownMode(mode.clone()))?;
    if n_simulations == 0 {
        return Err(ModalError::ZeroSimulations);
    }
    check_perturbation(perturbation)?;

    let low = rate * (1.0 - perturbation);
    let high = rate * (1.0 + perturbation);
    if !(high * distance).is_finite() {
        return Err(ModalError::InvalidRate {
            mode: mode.clone(),
            cost_per_km: rate,
        });
    }
    let samples: Vec<f64> = (0..n_simulations)
        .map(|_| rng.random_range(low..=high) * distance)
        .collect();

    let result = SimulationResult::new(route.clone(), mode.clone(), rate * distance, samples);
    debug!(
        route = %route,
        mode = %mode,
        n_simulations,
        mean = result.mean(),
        "simulated transport cost"
    );
    Ok(result)
}

/// Runs simulations against a fixed catalog and cost model.
///
/// With a seed in the config, each call to [`run`](Self::run) starts from
/// the same seeded state and is fully reproducible. Without one, each call
/// seeds a fresh generator from the OS.
///
/// # Examples
///
/// ```
/// use u_modal::models::{CostModel, Mode, RouteCatalog, RouteKey};
/// use u_modal::simulation::{MonteCarloSimulator, SimulationConfig};
///
/// let route = RouteKey::new("Sydney", "Brisbane");
/// let catalog = RouteCatalog::from_routes([(route.clone(), 920.0)]).unwrap();
/// let costs = CostModel::road_rail(0.5, 0.3).unwrap();
///
/// let sim = MonteCarloSimulator::new(&catalog, &costs)
///     .with_config(SimulationConfig::default().with_seed(42));
/// let a = sim.run(&route, &Mode::Road, 500).unwrap();
/// let b = sim.run(&route, &Mode::Road, 500).unwrap();
/// assert_eq!(a.samples(), b.samples());
/// ```
#[derive(Debug, Clone)]
pub struct MonteCarloSimulator<'a> {
    catalog: &'a RouteCatalog,
    cost_model: &'a CostModel,
    config: SimulationConfig,
}

impl<'a> MonteCarloSimulator<'a> {
    /// Creates a simulator with the default config.
    pub fn new(catalog: &'a RouteCatalog, cost_model: &'a CostModel) -> Self {
        Self {
            catalog,
            cost_model,
            config: SimulationConfig::default(),
        }
    }

    /// Replaces the config.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Current config.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates one route/mode pair with a generator built from the config.
    pub fn run(
        &self,
        route: &RouteKey,
        mode: &Mode,
        n_simulations: usize,
    ) -> Result<SimulationResult> {
        let mut rng = self.make_rng();
        self.run_with_rng(route, mode, n_simulations, &mut rng)
    }

    /// Simulates one route/mode pair with a caller-supplied generator.
    pub fn run_with_rng<R: Rng>(
        &self,
        route: &RouteKey,
        mode: &Mode,
        n_simulations: usize,
        rng: &mut R,
    ) -> Result<SimulationResult> {
        simulate_perturbed(
            route,
            mode,
            n_simulations,
            self.catalog,
            self.cost_model,
            self.config.perturbation,
            rng,
        )
    }

    /// Simulates `mode` on every catalog route, in catalog order.
    ///
    /// All routes draw from one generator in sequence; with a seed the whole
    /// batch is reproducible.
    pub fn run_all(&self, mode: &Mode, n_simulations: usize) -> Result<Vec<SimulationResult>> {
        let mut rng = self.make_rng();
        self.catalog
            .routes()
            .map(|route| self.run_with_rng(route, mode, n_simulations, &mut rng))
            .collect()
    }

    fn make_rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
