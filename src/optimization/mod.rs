//! Minimum-cost mode assignment across routes.
//!
//! - [`optimize`] — Cheapest mode per route, ties broken by declared priority
//! - [`ModeOptimizer`] — Same, with a pluggable [`AssignmentSolver`]
//! - [`CostMatrix`] — Route × mode nominal cost table the solvers read
//! - [`PointwiseMinimum`] — Closed-form solver (exact for independent routes)

mod matrix;
mod optimizer;
mod result;
mod solver;

pub use matrix::CostMatrix;
pub use optimizer::{optimize, ModeOptimizer};
pub use result::{Assignment, OptimizationResult};
pub use solver::{AssignmentSolver, PointwiseMinimum};
