//! Error types for simulation and optimization.

use thiserror::Error;

use crate::models::{Mode, RouteKey};

/// Classification of a [`ModalError`].
///
/// Every failure of the core is an input error: deterministic, immediately
/// reproducible, and never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A caller-supplied argument was unknown, empty, or out of range.
    InvalidArgument,
}

/// Errors returned by the simulation and optimization operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModalError {
    #[error("unknown route: {0}")]
    UnknownRoute(RouteKey),

    #[error("unknown mode: {0}")]
    UnknownMode(Mode),

    #[error("number of simulations must be at least 1")]
    ZeroSimulations,

    #[error("cost model has no modes to choose from")]
    EmptyCostModel,

    #[error("invalid distance for {route}: {distance_km} (must be finite and non-negative)")]
    InvalidDistance { route: RouteKey, distance_km: f64 },

    #[error("invalid rate for {mode}: {cost_per_km} (must be finite and non-negative)")]
    InvalidRate { mode: Mode, cost_per_km: f64 },

    #[error("invalid perturbation: {0} (must lie in [0, 1])")]
    InvalidPerturbation(f64),

    #[error("solver assigned {actual} routes, expected {expected}")]
    AssignmentLength { expected: usize, actual: usize },

    #[error("solver chose mode {mode} for route {route}; only {num_modes} modes exist")]
    AssignmentOutOfRange {
        route: usize,
        mode: usize,
        num_modes: usize,
    },
}

impl ModalError {
    /// Returns the error class.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ModalError::UnknownRoute(_)
            | ModalError::UnknownMode(_)
            | ModalError::ZeroSimulations
            | ModalError::EmptyCostModel
            | ModalError::InvalidDistance { .. }
            | ModalError::InvalidRate { .. }
            | ModalError::InvalidPerturbation(_)
            | ModalError::AssignmentLength { .. }
            | ModalError::AssignmentOutOfRange { .. } => ErrorKind::InvalidArgument,
        }
    }
}

/// Result alias for fallible core operations.
pub type Result<T> = std::result::Result<T, ModalError>;
