//! Per-route minimum-cost mode selection.

use tracing::debug;

use super::{Assignment, AssignmentSolver, CostMatrix, OptimizationResult, PointwiseMinimum};
use crate::error::{ModalError, Result};
use crate::models::{CostModel, RouteCatalog};

/// Chooses the cheapest mode for every route using nominal rates.
///
/// Shorthand for `ModeOptimizer::default().optimize(catalog, cost_model)`.
///
/// # Errors
///
/// [`ModalError::EmptyCostModel`] if `cost_model` declares no mode. An empty
/// catalog is not an error and yields an empty result with zero cost.
///
/// # Examples
///
/// ```
/// use u_modal::models::{CostModel, Mode, RouteCatalog};
/// use u_modal::optimization::optimize;
///
/// let catalog = RouteCatalog::from_routes([
///     (("Sydney", "Melbourne"), 880.0),
///     (("Sydney", "Brisbane"), 920.0),
/// ]).unwrap();
/// let costs = CostModel::road_rail(0.5, 0.3).unwrap();
///
/// let result = optimize(&catalog, &costs).unwrap();
/// assert!(result.iter().all(|(_, mode)| *mode == Mode::Rail));
/// assert!((result.total_cost() - 540.0).abs() < 1e-9);
/// ```
pub fn optimize(catalog: &RouteCatalog, cost_model: &CostModel) -> Result<OptimizationResult> {
    ModeOptimizer::default().optimize(catalog, cost_model)
}

/// Mode optimizer with a pluggable [`AssignmentSolver`].
///
/// Defaults to [`PointwiseMinimum`], the exact optimum for independent
/// routes.
pub struct ModeOptimizer {
    solver: Box<dyn AssignmentSolver>,
}

impl ModeOptimizer {
    /// Creates an optimizer using [`PointwiseMinimum`].
    pub fn new() -> Self {
        Self {
            solver: Box::new(PointwiseMinimum),
        }
    }

    /// Replaces the solver.
    pub fn with_solver(mut self, solver: impl AssignmentSolver + 'static) -> Self {
        self.solver = Box::new(solver);
        self
    }

    /// Assigns a mode to every catalog route.
    ///
    /// # Errors
    ///
    /// [`ModalError::EmptyCostModel`] if no mode is declared. A solver that
    /// returns the wrong number of choices, or a mode index out of range,
    /// yields [`ModalError::AssignmentLength`] or
    /// [`ModalError::AssignmentOutOfRange`]; no partial result is returned.
    pub fn optimize(
        &self,
        catalog: &RouteCatalog,
        cost_model: &CostModel,
    ) -> Result<OptimizationResult> {
        if cost_model.is_empty() {
            return Err(ModalError::EmptyCostModel);
        }

        let matrix = CostMatrix::build(catalog, cost_model);
        let choice = self.solver.solve(&matrix);
        if choice.len() != matrix.num_routes() {
            return Err(ModalError::AssignmentLength {
                expected: matrix.num_routes(),
                actual: choice.len(),
            });
        }
        if let Some((route, &mode)) = choice
            .iter()
            .enumerate()
            .find(|&(_, &m)| m >= matrix.num_modes())
        {
            return Err(ModalError::AssignmentOutOfRange {
                route,
                mode,
                num_modes: matrix.num_modes(),
            });
        }

        let assignments = choice
            .iter()
            .enumerate()
            .map(|(r, &m)| Assignment {
                route: matrix.route(r).clone(),
                mode: matrix.mode(m).clone(),
                cost: matrix.get(r, m),
            })
            .collect();
        let result = OptimizationResult::new(assignments);

        debug!(
            routes = matrix.num_routes(),
            modes = matrix.num_modes(),
            total_cost = result.total_cost(),
            "optimized mode assignment"
        );
        Ok(result)
    }
}

impl Default for ModeOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ModeOptimizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModeOptimizer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::{Mode, RouteKey};

    fn australia() -> RouteCatalog {
        RouteCatalog::from_routes([
            (("Sydney", "Melbourne"), 880.0),
            (("Sydney", "Brisbane"), 920.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_rail_cheaper_everywhere() {
        let costs = CostModel::road_rail(0.5, 0.3).unwrap();
        let result = optimize(&australia(), &costs).unwrap();
        assert_eq!(
            result.mode_for(&RouteKey::new("Sydney", "Melbourne")),
            Some(&Mode::Rail)
        );
        assert_eq!(
            result.mode_for(&RouteKey::new("Sydney", "Brisbane")),
            Some(&Mode::Rail)
        );
        assert!((result.total_cost() - (880.0 * 0.3 + 920.0 * 0.3)).abs() < 1e-9);
    }

    #[test]
    fn test_road_cheaper_everywhere() {
        let costs = CostModel::road_rail(0.2, 0.3).unwrap();
        let result = optimize(&australia(), &costs).unwrap();
        assert_eq!(result.routes_using(&Mode::Road).count(), 2);
        assert!((result.total_cost() - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_tie_goes_to_first_declared() {
        let road_first = CostModel::road_rail(0.4, 0.4).unwrap();
        let result = optimize(&australia(), &road_first).unwrap();
        assert!(result.iter().all(|(_, m)| *m == Mode::Road));

        let rail_first = CostModel::new()
            .with_rate(Mode::Rail, 0.4)
            .unwrap()
            .with_rate(Mode::Road, 0.4)
            .unwrap();
        let result = optimize(&australia(), &rail_first).unwrap();
        assert!(result.iter().all(|(_, m)| *m == Mode::Rail));
    }

    #[test]
    fn test_empty_catalog() {
        let costs = CostModel::new().with_rate(Mode::Road, 0.5).unwrap();
        let result = optimize(&RouteCatalog::new(), &costs).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.total_cost(), 0.0);
    }

    #[test]
    fn test_empty_cost_model() {
        let err = optimize(&australia(), &CostModel::new()).unwrap_err();
        assert_eq!(err, ModalError::EmptyCostModel);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_idempotent() {
        let costs = CostModel::road_rail(0.5, 0.3).unwrap();
        let catalog = australia();
        assert_eq!(
            optimize(&catalog, &costs).unwrap(),
            optimize(&catalog, &costs).unwrap()
        );
    }

    #[test]
    fn test_follows_catalog_order() {
        let catalog = RouteCatalog::from_routes([
            (("Melbourne", "Brisbane"), 1650.0),
            (("Sydney", "Melbourne"), 880.0),
        ])
        .unwrap();
        let costs = CostModel::road_rail(0.5, 0.3).unwrap();
        let result = optimize(&catalog, &costs).unwrap();
        let routes: Vec<String> = result.iter().map(|(r, _)| r.to_string()).collect();
        assert_eq!(routes, vec!["Melbourne-Brisbane", "Sydney-Melbourne"]);
    }

    #[test]
    fn test_per_route_rates() {
        let mut costs = CostModel::road_rail(0.5, 0.3).unwrap();
        costs
            .set_route_rate(RouteKey::new("Sydney", "Brisbane"), Mode::Road, 0.1)
            .unwrap();
        let result = optimize(&australia(), &costs).unwrap();
        assert_eq!(
            result.mode_for(&RouteKey::new("Sydney", "Melbourne")),
            Some(&Mode::Rail)
        );
        assert_eq!(
            result.mode_for(&RouteKey::new("Sydney", "Brisbane")),
            Some(&Mode::Road)
        );
        assert!((result.total_cost() - (264.0 + 92.0)).abs() < 1e-9);
    }

    struct MostExpensive;

    impl AssignmentSolver for MostExpensive {
        fn solve(&self, costs: &CostMatrix) -> Vec<usize> {
            (0..costs.num_routes())
                .map(|r| {
                    let row = costs.row(r);
                    (0..row.len())
                        .max_by(|&a, &b| row[a].total_cmp(&row[b]))
                        .unwrap_or(0)
                })
                .collect()
        }
    }

    struct FixedChoice(Vec<usize>);

    impl AssignmentSolver for FixedChoice {
        fn solve(&self, _costs: &CostMatrix) -> Vec<usize> {
            self.0.clone()
        }
    }

    #[test]
    fn test_short_solver_output_is_rejected() {
        let costs = CostModel::road_rail(0.5, 0.3).unwrap();
        let err = ModeOptimizer::new()
            .with_solver(FixedChoice(vec![1]))
            .optimize(&australia(), &costs)
            .unwrap_err();
        assert_eq!(
            err,
            ModalError::AssignmentLength {
                expected: 2,
                actual: 1,
            }
        );
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_long_solver_output_is_rejected() {
        let costs = CostModel::road_rail(0.5, 0.3).unwrap();
        let err = ModeOptimizer::new()
            .with_solver(FixedChoice(vec![0, 1, 0]))
            .optimize(&australia(), &costs)
            .unwrap_err();
        assert!(matches!(err, ModalError::AssignmentLength { actual: 3, .. }));
    }

    #[test]
    fn test_out_of_range_mode_is_rejected() {
        let costs = CostModel::road_rail(0.5, 0.3).unwrap();
        let err = ModeOptimizer::new()
            .with_solver(FixedChoice(vec![0, 2]))
            .optimize(&australia(), &costs)
            .unwrap_err();
        assert_eq!(
            err,
            ModalError::AssignmentOutOfRange {
                route: 1,
                mode: 2,
                num_modes: 2,
            }
        );
    }

    #[test]
    fn test_custom_solver() {
        let costs = CostModel::road_rail(0.5, 0.3).unwrap();
        let result = ModeOptimizer::new()
            .with_solver(MostExpensive)
            .optimize(&australia(), &costs)
            .unwrap();
        assert!(result.iter().all(|(_, m)| *m == Mode::Road));
        assert!((result.total_cost() - 900.0).abs() < 1e-9);
    }
}
