//! Simulation result type.

use serde::{Deserialize, Serialize};

use super::Histogram;
use crate::error::ModalError;
use crate::models::{Mode, RouteKey};

#[derive(Serialize, Deserialize)]
struct SimulationResultData {
    route: RouteKey,
    mode: Mode,
    nominal_cost: f64,
    samples: Vec<f64>,
}

/// The cost samples drawn for one route/mode pair.
///
/// Samples are kept in draw order, so two runs with the same seed produce
/// identical results. A result always holds at least one sample.
///
/// Deserialization rejects an empty sample list and recomputes the mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SimulationResultData", into = "SimulationResultData")]
pub struct SimulationResult {
    route: RouteKey,
    mode: Mode,
    nominal_cost: f64,
    samples: Vec<f64>,
    mean: f64,
}

impl SimulationResult {
    pub(crate) fn new(route: RouteKey, mode: Mode, nominal_cost: f64, samples: Vec<f64>) -> Self {
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        Self {
            route,
            mode,
            nominal_cost,
            samples,
            mean,
        }
    }

    /// Simulated route.
    pub fn route(&self) -> &RouteKey {
        &self.route
    }

    /// Simulated mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Unperturbed cost: distance × nominal rate.
    pub fn nominal_cost(&self) -> f64 {
        self.nominal_cost
    }

    /// Cost samples in draw order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consumes the result, returning the samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`; a result holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Arithmetic mean of the samples.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Smallest sample.
    pub fn min(&self) -> f64 {
        self.samples.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest sample.
    pub fn max(&self) -> f64 {
        self.samples.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Sample standard deviation (n - 1 denominator); zero for one sample.
    pub fn std_dev(&self) -> f64 {
        let n = self.samples.len();
        if n < 2 {
            return 0.0;
        }
        let ss: f64 = self.samples.iter().map(|x| (x - self.mean).powi(2)).sum();
        (ss / (n - 1) as f64).sqrt()
    }

    /// The `q`-th quantile (`q` clamped to `[0, 1]`), linearly interpolated
    /// between the closest ranks. NaN if there are no samples.
    pub fn percentile(&self, q: f64) -> f64 {
        if self.samples.is_empty() {
            return f64::NAN;
        }
        let mut sorted = self.samples.clone();
        sorted.sort_by(f64::total_cmp);
        let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
        let lo = pos.floor() as usize;
        let hi = pos.ceil() as usize;
        sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
    }

    /// Bins the samples into an equal-width histogram.
    pub fn histogram(&self, bins: usize) -> Option<Histogram> {
        Histogram::from_samples(&self.samples, bins)
    }
}

impl TryFrom<SimulationResultData> for SimulationResult {
    type Error = ModalError;

    fn try_from(data: SimulationResultData) -> Result<Self, ModalError> {
        if data.samples.is_empty() {
            return Err(ModalError::ZeroSimulations);
        }
        Ok(Self::new(data.route, data.mode, data.nominal_cost, data.samples))
    }
}

impl From<SimulationResult> for SimulationResultData {
    fn from(result: SimulationResult) -> Self {
        Self {
            route: result.route,
            mode: result.mode,
            nominal_cost: result.nominal_cost,
            samples: result.samples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(samples: Vec<f64>) -> SimulationResult {
        SimulationResult::new(RouteKey::new("A", "B"), Mode::Rail, 2.0, samples)
    }

    #[test]
    fn test_summary_statistics() {
        let r = result(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(r.len(), 4);
        assert!((r.mean() - 2.5).abs() < 1e-12);
        assert_eq!(r.min(), 1.0);
        assert_eq!(r.max(), 4.0);
        // variance = (2.25 + 0.25 + 0.25 + 2.25) / 3
        assert!((r.std_dev() - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_percentile() {
        let r = result(vec![4.0, 1.0, 3.0, 2.0, 5.0]);
        assert_eq!(r.percentile(0.0), 1.0);
        assert_eq!(r.percentile(0.5), 3.0);
        assert_eq!(r.percentile(1.0), 5.0);
        assert!((r.percentile(0.25) - 2.0).abs() < 1e-12);
        assert!((r.percentile(0.1) - 1.4).abs() < 1e-12);
    }

    #[test]
    fn test_single_sample() {
        let r = result(vec![7.0]);
        assert_eq!(r.std_dev(), 0.0);
        assert_eq!(r.percentile(0.9), 7.0);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_try_from_rejects_empty_samples() {
        let data = SimulationResultData {
            route: RouteKey::new("A", "B"),
            mode: Mode::Rail,
            nominal_cost: 2.0,
            samples: vec![],
        };
        assert_eq!(
            SimulationResult::try_from(data).unwrap_err(),
            ModalError::ZeroSimulations
        );
    }

    #[test]
    fn test_try_from_recomputes_mean() {
        let data = SimulationResultData {
            route: RouteKey::new("A", "B"),
            mode: Mode::Rail,
            nominal_cost: 2.0,
            samples: vec![1.0, 3.0],
        };
        let r = SimulationResult::try_from(data).unwrap();
        assert!((r.mean() - 2.0).abs() < 1e-12);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_rejects_empty_samples() {
        let json = r#"{
            "route": { "origin": "A", "destination": "B" },
            "mode": "rail",
            "nominal_cost": 2.0,
            "samples": []
        }"#;
        assert!(serde_json::from_str::<SimulationResult>(json).is_err());
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_ignores_stored_mean() {
        let r = result(vec![1.0, 2.0, 6.0]);
        let mut value = serde_json::to_value(&r).unwrap();
        value["mean"] = serde_json::json!(99.0);
        let back: SimulationResult = serde_json::from_value(value).unwrap();
        assert!((back.mean() - 3.0).abs() < 1e-12);
        assert_eq!(back, r);
    }

    #[test]
    fn test_percentile_without_samples() {
        let r = SimulationResult {
            route: RouteKey::new("A", "B"),
            mode: Mode::Rail,
            nominal_cost: 2.0,
            samples: vec![],
            mean: 0.0,
        };
        assert!(r.percentile(0.5).is_nan());
    }

    #[test]
    fn test_histogram() {
        let r = result(vec![1.0, 2.0, 3.0]);
        let h = r.histogram(2).unwrap();
        assert_eq!(h.total(), 3);
    }
}
