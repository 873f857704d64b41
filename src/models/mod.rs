//! Domain model types for transport mode decisions.
//!
//! Provides the typed keys (routes and modes) and the two read-only inputs
//! every operation consumes: a route catalog with distances and a cost model
//! with per-kilometer rates.

mod catalog;
mod cost_model;
mod mode;
mod route_key;

pub use catalog::{RouteCatalog, RouteEntry};
pub use cost_model::{CostModel, ModeRate, RouteRate};
pub use mode::Mode;
pub use route_key::RouteKey;
