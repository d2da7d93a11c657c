//! Frequency and severity distribution sampling.
//!
//! Frequency uses an uncertain Poisson process: for each trial a rate is
//! first drawn from a triangular distribution over the (low, mid, high)
//! estimates, then an event count is drawn from Poisson at that rate. This
//! stacks parameter uncertainty on top of process uncertainty and must not
//! be collapsed into a single fixed-rate Poisson.
//!
//! Severity dispatch is an exhaustive match over [`DistributionKind`];
//! there is no fallback family. All estimate bounds are clamped, not
//! asserted, so out-of-order inputs degrade instead of erroring.

use quant_core::inputs::DistributionKind;
use quant_core::rng::QuantRng;
use rand_distr::{Distribution, LogNormal, Poisson, Triangular, Uniform};

/// z-score of the 95th percentile of the standard normal distribution.
///
/// Calibrates the lognormal severity so its 95th percentile lands near the
/// high estimate under a normal-tail approximation.
const LOGNORMAL_P95_Z: f64 = 1.645;

/// Default lognormal shape when the high estimate gives no spread.
const DEFAULT_SIGMA: f64 = 0.5;

/// Lower bound on the lognormal shape parameter.
const SIGMA_FLOOR: f64 = 0.01;

/// Samples per-trial event counts using the uncertain Poisson process.
///
/// Bounds are clamped into `0 <= low <= mid <= high`. A non-positive high
/// estimate yields all-zero counts; equal low and high estimates collapse
/// the rate draw to the constant mid estimate.
///
/// # Arguments
///
/// * `rng` - Caller-owned random source for this run
/// * `freq_low` / `freq_mid` / `freq_high` - Annual frequency estimates
/// * `n_trials` - Number of trials to sample
pub fn frequency_counts(
    rng: &mut QuantRng,
    freq_low: f64,
    freq_mid: f64,
    freq_high: f64,
    n_trials: usize,
) -> Vec<u64> {
    let low = freq_low.max(0.0);
    let mid = freq_mid.max(low);
    let high = freq_high.max(mid);

    if high <= 0.0 {
        return vec![0; n_trials];
    }

    if low == high {
        // Degenerate spread: constant rate, process uncertainty only.
        return (0..n_trials).map(|_| poisson_count(rng, mid)).collect();
    }

    let rate_dist =
        Triangular::new(low, high, mid).expect("clamped bounds are ordered with low < high");
    (0..n_trials)
        .map(|_| {
            let rate = rate_dist.sample(rng).max(0.0);
            poisson_count(rng, rate)
        })
        .collect()
}

/// Draws one Poisson event count, treating non-positive rates as zero.
fn poisson_count(rng: &mut QuantRng, rate: f64) -> u64 {
    if rate <= 0.0 {
        return 0;
    }
    let dist = Poisson::new(rate).expect("rate is positive and finite");
    dist.sample(rng) as u64
}

/// Samples severity amounts from the scenario's distribution family.
///
/// Dispatches on `kind`; each family clamps its own parameters. Returns
/// exactly `n_samples` amounts.
pub fn severity_amounts(
    rng: &mut QuantRng,
    kind: DistributionKind,
    sev_low: f64,
    sev_mid: f64,
    sev_high: f64,
    n_samples: usize,
) -> Vec<f64> {
    match kind {
        DistributionKind::Lognormal => severity_lognormal(rng, sev_mid, sev_high, n_samples),
        DistributionKind::Triangular => {
            severity_triangular(rng, sev_low, sev_mid, sev_high, n_samples)
        }
        DistributionKind::Uniform => severity_uniform(rng, sev_low, sev_high, n_samples),
    }
}

/// Lognormal severity calibrated so the median equals the mid estimate and
/// the 95th percentile lands near the high estimate.
///
/// `mu = ln(mid)`; `sigma = (ln(high) - mu) / 1.645` when `high > mid`,
/// else [`DEFAULT_SIGMA`], floored at [`SIGMA_FLOOR`]. A non-positive mid
/// estimate yields all zeros.
fn severity_lognormal(rng: &mut QuantRng, sev_mid: f64, sev_high: f64, n_samples: usize) -> Vec<f64> {
    if sev_mid <= 0.0 {
        return vec![0.0; n_samples];
    }
    let mu = sev_mid.ln();
    let sigma = if sev_high > sev_mid {
        (sev_high.ln() - mu) / LOGNORMAL_P95_Z
    } else {
        DEFAULT_SIGMA
    };
    let sigma = sigma.max(SIGMA_FLOOR);

    let dist = LogNormal::new(mu, sigma).expect("sigma is floored strictly positive");
    (0..n_samples).map(|_| dist.sample(rng)).collect()
}

/// Triangular severity over the clamped (low, mid, high) estimates.
fn severity_triangular(
    rng: &mut QuantRng,
    sev_low: f64,
    sev_mid: f64,
    sev_high: f64,
    n_samples: usize,
) -> Vec<f64> {
    let low = sev_low.max(0.0);
    let mid = sev_mid.max(low);
    let high = sev_high.max(mid + 0.01);

    let dist = Triangular::new(low, high, mid).expect("clamped bounds are ordered with low < high");
    (0..n_samples).map(|_| dist.sample(rng)).collect()
}

/// Uniform severity over the clamped (low, high) estimates.
fn severity_uniform(rng: &mut QuantRng, sev_low: f64, sev_high: f64, n_samples: usize) -> Vec<f64> {
    let low = sev_low.max(0.0);
    let high = sev_high.max(low + 0.01);

    let dist = Uniform::new(low, high);
    (0..n_samples).map(|_| dist.sample(rng)).collect()
}
