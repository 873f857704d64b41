//! Equal-width histogram of simulated costs.

use serde::{Deserialize, Serialize};

/// Default number of bins.
pub const DEFAULT_BINS: usize = 30;

/// An equal-width histogram over `[lower, upper]`.
///
/// Every bin is half-open `[lo, hi)` except the last, which also includes
/// `upper`, so the counts always sum to the number of samples. When all
/// samples are equal the range is widened to `[v - 0.5, v + 0.5]`.
///
/// # Examples
///
/// ```
/// use u_modal::simulation::Histogram;
///
/// let h = Histogram::from_samples(&[1.0, 2.0, 2.5, 4.0], 3).unwrap();
/// assert_eq!(h.counts(), &[1, 2, 1]);
/// assert_eq!(h.total(), 4);
/// assert!((h.bin_width() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    lower: f64,
    upper: f64,
    counts: Vec<usize>,
}

impl Histogram {
    /// Bins the samples into `bins` equal-width buckets.
    ///
    /// Returns `None` if `samples` is empty or `bins` is zero.
    pub fn from_samples(samples: &[f64], bins: usize) -> Option<Self> {
        if samples.is_empty() || bins == 0 {
            return None;
        }
        let (mut lower, mut upper) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        if lower == upper {
            lower -= 0.5;
            upper += 0.5;
        }

        let width = (upper - lower) / bins as f64;
        let mut counts = vec![0; bins];
        for &x in samples {
            let idx = ((x - lower) / width) as usize;
            counts[idx.min(bins - 1)] += 1;
        }

        Some(Self {
            lower,
            upper,
            counts,
        })
    }

    /// Lower edge of the first bin.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper edge of the last bin.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Width of every bin.
    pub fn bin_width(&self) -> f64 {
        (self.upper - self.lower) / self.counts.len() as f64
    }

    /// Sample count per bin.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of bins.
    pub fn num_bins(&self) -> usize {
        self.counts.len()
    }

    /// Total number of binned samples.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Iterates over `(lo, hi, count)` per bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        let width = self.bin_width();
        self.counts.iter().enumerate().map(move |(i, &count)| {
            let lo = self.lower + width * i as f64;
            (lo, lo + width, count)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_or_zero_bins() {
        assert!(Histogram::from_samples(&[], 10).is_none());
        assert!(Histogram::from_samples(&[1.0], 0).is_none());
    }

    #[test]
    fn test_max_lands_in_last_bin() {
        let h = Histogram::from_samples(&[0.0, 10.0], 5).unwrap();
        assert_eq!(h.counts(), &[1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_degenerate_range() {
        let h = Histogram::from_samples(&[0.0, 0.0, 0.0], 30).unwrap();
        assert_eq!(h.total(), 3);
        assert!((h.lower() + 0.5).abs() < 1e-12);
        assert!((h.upper() - 0.5).abs() < 1e-12);
        assert_eq!(h.counts().iter().filter(|&&c| c == 3).count(), 1);
    }

    #[test]
    fn test_bins_cover_range() {
        let h = Histogram::from_samples(&[2.0, 3.0, 4.0, 6.0], 4).unwrap();
        let edges: Vec<(f64, f64, usize)> = h.bins().collect();
        assert_eq!(edges.len(), 4);
        assert!((edges[0].0 - 2.0).abs() < 1e-12);
        assert!((edges[3].1 - 6.0).abs() < 1e-12);
        assert_eq!(h.total(), 4);
    }
}
