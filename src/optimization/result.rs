//! Optimization result types.

use serde::{Deserialize, Serialize};

use crate::models::{Mode, RouteKey};

/// The mode chosen for one route and its nominal cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Route key.
    pub route: RouteKey,
    /// Chosen mode.
    pub mode: Mode,
    /// Nominal cost of the route under the chosen mode.
    pub cost: f64,
}

/// A mode assignment for every catalog route plus the total nominal cost.
///
/// Assignments follow catalog order.
///
/// # Examples
///
/// ```
/// use u_modal::models::{CostModel, Mode, RouteCatalog, RouteKey};
/// use u_modal::optimization::optimize;
///
/// let catalog = RouteCatalog::from_routes([(("Sydney", "Melbourne"), 880.0)]).unwrap();
/// let costs = CostModel::road_rail(0.5, 0.3).unwrap();
///
/// let result = optimize(&catalog, &costs).unwrap();
/// assert_eq!(result.mode_for(&RouteKey::new("Sydney", "Melbourne")), Some(&Mode::Rail));
/// assert_eq!(result.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    assignments: Vec<Assignment>,
    total_cost: f64,
}

impl OptimizationResult {
    pub(crate) fn new(assignments: Vec<Assignment>) -> Self {
        let total_cost = assignments.iter().map(|a| a.cost).sum();
        Self {
            assignments,
            total_cost,
        }
    }

    /// Per-route assignments in catalog order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Chosen mode for a route, if the route was optimized.
    pub fn mode_for(&self, route: &RouteKey) -> Option<&Mode> {
        self.assignments
            .iter()
            .find(|a| &a.route == route)
            .map(|a| &a.mode)
    }

    /// Iterates over `(route, mode)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&RouteKey, &Mode)> {
        self.assignments.iter().map(|a| (&a.route, &a.mode))
    }

    /// Routes assigned to the given mode, in catalog order.
    pub fn routes_using<'a>(&'a self, mode: &'a Mode) -> impl Iterator<Item = &'a RouteKey> + 'a {
        self.assignments
            .iter()
            .filter(move |a| &a.mode == mode)
            .map(|a| &a.route)
    }

    /// Sum of the chosen modes' nominal costs.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Number of assigned routes.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns `true` if no route was assigned.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_costs() {
        let result = OptimizationResult::new(vec![
            Assignment {
                route: RouteKey::new("A", "B"),
                mode: Mode::Rail,
                cost: 30.0,
            },
            Assignment {
                route: RouteKey::new("B", "C"),
                mode: Mode::Road,
                cost: 12.5,
            },
        ]);
        assert!((result.total_cost() - 42.5).abs() < 1e-12);
        let rail: Vec<&RouteKey> = result.routes_using(&Mode::Rail).collect();
        assert_eq!(rail, vec![&RouteKey::new("A", "B")]);
        assert_eq!(result.mode_for(&RouteKey::new("C", "D")), None);
    }

    #[test]
    fn test_default_is_empty() {
        let result = OptimizationResult::default();
        assert!(result.is_empty());
        assert_eq!(result.total_cost(), 0.0);
    }
}
