//! Per-mode cost-per-kilometer rates.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Mode, RouteKey};
use crate::error::{ModalError, Result};

/// A mode with its nominal cost per kilometer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeRate {
    /// Transport mode.
    pub mode: Mode,
    /// Nominal cost per kilometer.
    pub cost_per_km: f64,
}

/// A route-specific rate that replaces a mode's base rate on one route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRate {
    /// Route the rate applies to.
    pub route: RouteKey,
    /// Transport mode.
    pub mode: Mode,
    /// Cost per kilometer on this route.
    pub cost_per_km: f64,
}

#[derive(Serialize, Deserialize)]
struct CostModelData {
    rates: Vec<ModeRate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    overrides: Vec<RouteRate>,
}

/// Nominal cost-per-kilometer rates for each configured mode.
///
/// Declaration order is the priority order used to break ties between
/// equally cheap modes. Re-declaring a mode updates its rate but keeps its
/// priority.
///
/// Rates may be overridden per route; [`rate_for`](Self::rate_for) resolves
/// the override first and falls back to the mode's base rate.
///
/// # Examples
///
/// ```
/// use u_modal::models::{CostModel, Mode, RouteKey};
///
/// let model = CostModel::new()
///     .with_rate(Mode::Road, 0.5).unwrap()
///     .with_rate(Mode::Rail, 0.3).unwrap();
///
/// assert_eq!(model.rate(&Mode::Rail), Some(0.3));
/// assert_eq!(model.priority(&Mode::Road), Some(0));
/// assert_eq!(model.rate(&Mode::named("air")), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CostModelData", into = "CostModelData")]
pub struct CostModel {
    rates: Vec<ModeRate>,
    overrides: HashMap<(RouteKey, Mode), f64>,
}

fn check_rate(mode: &Mode, cost_per_km: f64) -> Result<()> {
    if !cost_per_km.is_finite() || cost_per_km < 0.0 {
        return Err(ModalError::InvalidRate {
            mode: mode.clone(),
            cost_per_km,
        });
    }
    Ok(())
}

impl CostModel {
    /// Creates a cost model with no modes.
    pub fn new() -> Self {
        Self::default()
    }

    /// The base two-mode model, declaring road before rail.
    pub fn road_rail(road_per_km: f64, rail_per_km: f64) -> Result<Self> {
        Self::new()
            .with_rate(Mode::Road, road_per_km)?
            .with_rate(Mode::Rail, rail_per_km)
    }

    /// Declares a mode with its rate, consuming and returning the model.
    pub fn with_rate(mut self, mode: impl Into<Mode>, cost_per_km: f64) -> Result<Self> {
        self.set_rate(mode, cost_per_km)?;
        Ok(self)
    }

    /// Declares a mode, or updates the rate of an already declared one.
    ///
    /// Fails if `cost_per_km` is negative or not finite.
    pub fn set_rate(&mut self, mode: impl Into<Mode>, cost_per_km: f64) -> Result<()> {
        let mode = mode.into();
        check_rate(&mode, cost_per_km)?;
        match self.rates.iter_mut().find(|r| r.mode == mode) {
            Some(existing) => existing.cost_per_km = cost_per_km,
            None => self.rates.push(ModeRate { mode, cost_per_km }),
        }
        Ok(())
    }

    /// Overrides a declared mode's rate on a single route.
    ///
    /// Fails with [`ModalError::UnknownMode`] if the mode is not declared.
    pub fn set_route_rate(
        &mut self,
        route: RouteKey,
        mode: impl Into<Mode>,
        cost_per_km: f64,
    ) -> Result<()> {
        let mode = mode.into();
        if self.priority(&mode).is_none() {
            return Err(ModalError::UnknownMode(mode));
        }
        check_rate(&mode, cost_per_km)?;
        self.overrides.insert((route, mode), cost_per_km);
        Ok(())
    }

    /// Base rate of the mode, if declared.
    pub fn rate(&self, mode: &Mode) -> Option<f64> {
        self.rates
            .iter()
            .find(|r| &r.mode == mode)
            .map(|r| r.cost_per_km)
    }

    /// Effective rate of the mode on the given route.
    ///
    /// Returns `None` only if the mode is not declared.
    pub fn rate_for(&self, route: &RouteKey, mode: &Mode) -> Option<f64> {
        let base = self.rate(mode)?;
        if self.overrides.is_empty() {
            return Some(base);
        }
        Some(
            self.overrides
                .get(&(route.clone(), mode.clone()))
                .copied()
                .unwrap_or(base),
        )
    }

    /// Tie-break priority of the mode (0 = highest), if declared.
    pub fn priority(&self, mode: &Mode) -> Option<usize> {
        self.rates.iter().position(|r| &r.mode == mode)
    }

    /// Declared modes in priority order.
    pub fn modes(&self) -> impl Iterator<Item = &Mode> {
        self.rates.iter().map(|r| &r.mode)
    }

    /// Declared base rates in priority order.
    pub fn rates(&self) -> &[ModeRate] {
        &self.rates
    }

    /// Number of declared modes.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns `true` if no mode is declared.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl TryFrom<CostModelData> for CostModel {
    type Error = ModalError;

    fn try_from(data: CostModelData) -> Result<Self> {
        let mut model = Self::new();
        for rate in data.rates {
            model.set_rate(rate.mode, rate.cost_per_km)?;
        }
        for o in data.overrides {
            model.set_route_rate(o.route, o.mode, o.cost_per_km)?;
        }
        Ok(model)
    }
}

impl From<CostModel> for CostModelData {
    fn from(model: CostModel) -> Self {
        let mut overrides: Vec<RouteRate> = model
            .overrides
            .into_iter()
            .map(|((route, mode), cost_per_km)| RouteRate {
                route,
                mode,
                cost_per_km,
            })
            .collect();
        overrides.sort_by(|a, b| (&a.route, &a.mode).cmp(&(&b.route, &b.mode)));
        Self {
            rates: model.rates,
            overrides,
        }
    }
}
