//! Equal-width loss histograms for charting.

use serde::{Deserialize, Serialize};

/// Default number of histogram bins.
pub const DEFAULT_BINS: usize = 50;

/// An equal-width histogram over a loss vector.
///
/// Bin values are bin centres, not edges; counts always sum to the number
/// of input samples.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Centre value of each bin.
    pub bin_centers: Vec<f64>,
    /// Sample count per bin.
    pub counts: Vec<u64>,
}

impl Histogram {
    /// Returns the total number of samples binned.
    pub fn total_count(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Returns true when the histogram holds no bins.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Builds an equal-width histogram over `[min, max]` of the losses.
///
/// Empty input yields an empty histogram. A degenerate vector whose
/// samples are all equal collapses to a single occupied bin at that value.
/// Samples on the upper edge land in the last bin.
///
/// # Examples
///
/// ```
/// use quant_risk::generate_histogram;
///
/// let hist = generate_histogram(&[1.0, 2.0, 3.0, 4.0], 2);
/// assert_eq!(hist.counts, vec![2, 2]);
/// assert_eq!(hist.total_count(), 4);
/// ```
pub fn generate_histogram(losses: &[f64], n_bins: usize) -> Histogram {
    if losses.is_empty() || n_bins == 0 {
        return Histogram::default();
    }

    let min = losses.iter().copied().fold(f64::INFINITY, f64::min);
    let max = losses.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return Histogram {
            bin_centers: vec![min],
            counts: vec![losses.len() as u64],
        };
    }

    let width = (max - min) / n_bins as f64;
    let mut counts = vec![0u64; n_bins];
    for &loss in losses {
        let idx = (((loss - min) / width) as usize).min(n_bins - 1);
        counts[idx] += 1;
    }

    let bin_centers = (0..n_bins)
        .map(|i| min + (i as f64 + 0.5) * width)
        .collect();

    Histogram { bin_centers, counts }
}
