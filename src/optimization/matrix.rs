//! Dense route × mode nominal cost matrix.

use crate::models::{CostModel, Mode, RouteCatalog, RouteKey};

/// Nominal costs for every (route, mode) pair, stored row-major with one
/// row per route.
///
/// Rows follow catalog order and columns follow the cost model's priority
/// order, so column index doubles as tie-break priority.
///
/// # Examples
///
/// ```
/// use u_modal::models::{CostModel, RouteCatalog};
/// use u_modal::optimization::CostMatrix;
///
/// let catalog = RouteCatalog::from_routes([(("Sydney", "Melbourne"), 880.0)]).unwrap();
/// let costs = CostModel::road_rail(0.5, 0.3).unwrap();
/// let matrix = CostMatrix::build(&catalog, &costs);
///
/// assert_eq!(matrix.num_routes(), 1);
/// assert_eq!(matrix.num_modes(), 2);
/// assert!((matrix.get(0, 0) - 440.0).abs() < 1e-10);
/// assert!((matrix.get(0, 1) - 264.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct CostMatrix {
    routes: Vec<RouteKey>,
    modes: Vec<Mode>,
    data: Vec<f64>,
}

impl CostMatrix {
    /// Computes `distance_km(route) × rate_for(route, mode)` for every pair.
    pub fn build(catalog: &RouteCatalog, cost_model: &CostModel) -> Self {
        let routes: Vec<RouteKey> = catalog.routes().cloned().collect();
        let modes: Vec<Mode> = cost_model.modes().cloned().collect();
        let mut data = Vec::with_capacity(routes.len() * modes.len());
        for entry in catalog.entries() {
            for mode in &modes {
                let rate = cost_model.rate_for(&entry.route, mode).unwrap_or(0.0);
                data.push(entry.distance_km * rate);
            }
        }
        Self {
            routes,
            modes,
            data,
        }
    }

    /// Nominal cost of route `route` under mode `mode` (both indices).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, route: usize, mode: usize) -> f64 {
        self.data[route * self.modes.len() + mode]
    }

    /// All mode costs for one route, in priority order.
    pub fn row(&self, route: usize) -> &[f64] {
        let m = self.modes.len();
        &self.data[route * m..(route + 1) * m]
    }

    /// Route key at a row index.
    pub fn route(&self, index: usize) -> &RouteKey {
        &self.routes[index]
    }

    /// Mode at a column index.
    pub fn mode(&self, index: usize) -> &Mode {
        &self.modes[index]
    }

    /// Number of rows.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Number of columns.
    pub fn num_modes(&self) -> usize {
        self.modes.len()
    }

    /// Column index of the cheapest mode for a route.
    ///
    /// Ties go to the lowest column (highest priority). Returns `None` if
    /// there are no modes.
    pub fn cheapest(&self, route: usize) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (m, &cost) in self.row(route).iter().enumerate() {
            match best {
                Some((_, c)) if cost >= c => {}
                _ => best = Some((m, cost)),
            }
        }
        best.map(|(m, _)| m)
    }
}
