//! Assignment solvers.
//!
//! Mode selection is the binary program
//!
//! ```text
//! minimize   Σ_r Σ_m cost[r][m] · x[r][m]
//! subject to Σ_m x[r][m] = 1       for every route r
//!            x[r][m] ∈ {0, 1}
//! ```
//!
//! With no constraint coupling two routes, the objective separates by row
//! and the optimum is the cheapest mode of each row. [`PointwiseMinimum`]
//! computes exactly that, so a general LP/ILP solver is never needed for
//! this model. [`AssignmentSolver`] stays open for formulations that add
//! coupling (shared capacity, for example).

use super::CostMatrix;

/// Chooses one mode column per route row of a [`CostMatrix`].
pub trait AssignmentSolver: Send + Sync {
    /// Returns, for each route row in order, the chosen mode column.
    ///
    /// Implementations must return exactly `costs.num_routes()` indices,
    /// each below `costs.num_modes()`; the optimizer rejects anything else.
    /// Callers guarantee at least one mode.
    fn solve(&self, costs: &CostMatrix) -> Vec<usize>;
}

/// Closed-form optimum: the cheapest mode of every route independently,
/// ties broken by priority.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointwiseMinimum;

impl AssignmentSolver for PointwiseMinimum {
    fn solve(&self, costs: &CostMatrix) -> Vec<usize> {
        (0..costs.num_routes())
            .map(|r| costs.cheapest(r).unwrap_or(0))
            .collect()
    }
}
