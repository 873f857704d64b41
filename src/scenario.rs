//! A catalog and cost model bundled as one serializable input.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{CostModel, RouteCatalog};
use crate::optimization::{optimize, OptimizationResult};
use crate::simulation::MonteCarloSimulator;

/// Everything needed to simulate and optimize: routes and rates.
///
/// # Examples
///
/// ```
/// use u_modal::scenario::Scenario;
///
/// let scenario = Scenario::default_australia();
/// assert_eq!(scenario.catalog.len(), 3);
///
/// let result = scenario.optimize().unwrap();
/// assert_eq!(result.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Known routes with distances.
    pub catalog: RouteCatalog,
    /// Per-mode rates.
    pub cost_model: CostModel,
}

impl Scenario {
    /// Creates a scenario from its parts.
    pub fn new(catalog: RouteCatalog, cost_model: CostModel) -> Self {
        Self {
            catalog,
            cost_model,
        }
    }

    /// Three east-coast Australian routes with road at 0.5/km and rail at
    /// 0.3/km.
    pub fn default_australia() -> Self {
        let catalog = RouteCatalog::from_routes([
            (("Sydney", "Melbourne"), 880.0),
            (("Sydney", "Brisbane"), 920.0),
            (("Melbourne", "Brisbane"), 1650.0),
        ])
        .expect("literal distances are non-negative");
        let cost_model = CostModel::road_rail(0.5, 0.3).expect("literal rates are non-negative");
        Self::new(catalog, cost_model)
    }

    /// Optimizes the scenario's mode assignment.
    pub fn optimize(&self) -> Result<OptimizationResult> {
        optimize(&self.catalog, &self.cost_model)
    }

    /// A simulator over this scenario with the default config.
    pub fn simulator(&self) -> MonteCarloSimulator<'_> {
        MonteCarloSimulator::new(&self.catalog, &self.cost_model)
    }

    /// Reads a scenario from JSON.
    ///
    /// Distances and rates are validated as the scenario is built.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> std::result::Result<Self, crate::parse::ParseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the scenario as pretty-printed JSON.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> std::result::Result<String, crate::parse::ParseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Mode, RouteKey};

    #[test]
    fn test_default_australia() {
        let s = Scenario::default_australia();
        assert_eq!(s.catalog.len(), 3);
        assert_eq!(s.cost_model.rate(&Mode::Road), Some(0.5));
        let result = s.optimize().unwrap();
        assert!(result.iter().all(|(_, m)| *m == Mode::Rail));
        assert!((result.total_cost() - (880.0 + 920.0 + 1650.0) * 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_simulator() {
        let s = Scenario::default_australia();
        let r = s
            .simulator()
            .run(&RouteKey::new("Melbourne", "Brisbane"), &Mode::Road, 100)
            .unwrap();
        assert_eq!(r.len(), 100);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_round_trip_preserves_order() {
        let s = Scenario::default_australia();
        let json = s.to_json().unwrap();
        let back = Scenario::from_json(&json).unwrap();
        assert_eq!(back, s);
        let keys: Vec<String> = back.catalog.routes().map(|r| r.to_string()).collect();
        assert_eq!(keys[2], "Melbourne-Brisbane");
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_rejects_negative_rate() {
        let json = r#"{
            "catalog": [],
            "cost_model": { "rates": [ { "mode": "road", "cost_per_km": -1.0 } ] }
        }"#;
        assert!(Scenario::from_json(json).is_err());
    }
}
