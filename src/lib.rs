//! # u-modal
//!
//! Transport mode decisions under uncertain per-kilometer costs: Monte Carlo
//! cost simulation for a single route/mode pair, and minimum-cost mode
//! assignment across a catalog of routes.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (RouteKey, Mode, RouteCatalog, CostModel)
//! - [`simulation`] — Monte Carlo cost simulation with injectable randomness
//! - [`optimization`] — Per-route cheapest-mode selection
//! - [`parse`] — `Origin-Destination,Distance` route text parsing
//! - [`scenario`] — Serializable catalog + cost model bundle
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use u_modal::models::{CostModel, Mode, RouteKey};
//! use u_modal::optimization::optimize;
//! use u_modal::parse::parse_routes;
//! use u_modal::simulation::{MonteCarloSimulator, SimulationConfig};
//!
//! let catalog = parse_routes("Sydney-Melbourne,880\nSydney-Brisbane,920").unwrap();
//! let costs = CostModel::road_rail(0.5, 0.3).unwrap();
//!
//! let plan = optimize(&catalog, &costs).unwrap();
//! assert!((plan.total_cost() - 540.0).abs() < 1e-9);
//!
//! let sim = MonteCarloSimulator::new(&catalog, &costs)
//!     .with_config(SimulationConfig::default().with_seed(1));
//! let run = sim.run(&RouteKey::new("Sydney", "Melbourne"), &Mode::Rail, 500).unwrap();
//! assert_eq!(run.len(), 500);
//! ```

pub mod error;
pub mod models;
pub mod optimization;
pub mod parse;
pub mod scenario;
pub mod simulation;

pub use error::{ErrorKind, ModalError, Result};
