//! Risk metric calculations over loss vectors.
//!
//! All metrics are derived fresh from a single loss vector; nothing here
//! mutates across vectors. Empty input yields all-zero metrics rather than
//! an error, matching the engine's degrade-to-zero policy for numeric edge
//! cases.

use serde::{Deserialize, Serialize};

/// Computed risk metrics for one loss distribution.
///
/// `var_95`/`var_99` duplicate `p95`/`p99` under their risk-management
/// names; both spellings are kept because downstream consumers read them
/// in different contexts (dashboards vs. percentile tables).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Mean loss across all trials.
    pub expected_loss: f64,
    /// Value-at-Risk at 95%: the 95th percentile loss.
    pub var_95: f64,
    /// Tail Value-at-Risk at 95%: mean loss among trials at or beyond
    /// `var_95`.
    pub tvar_95: f64,
    /// Value-at-Risk at 99%: the 99th percentile loss.
    pub var_99: f64,
    /// 5th percentile loss.
    pub p5: f64,
    /// 25th percentile loss.
    pub p25: f64,
    /// Median loss.
    pub p50: f64,
    /// 75th percentile loss.
    pub p75: f64,
    /// 95th percentile loss.
    pub p95: f64,
    /// 99th percentile loss.
    pub p99: f64,
}

impl RiskMetrics {
    /// All-zero metrics, the result for an empty loss vector.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Computes standard risk metrics from a vector of loss samples.
///
/// Percentiles use linear interpolation between order statistics. The tail
/// average falls back to `var_95` if no sample meets the threshold, which
/// cannot happen for a non-degenerate empirical percentile but is handled
/// defensively for tiny samples.
///
/// # Examples
///
/// ```
/// use quant_risk::compute_metrics;
///
/// let metrics = compute_metrics(&[10.0, 20.0, 30.0, 40.0, 50.0]);
/// assert_eq!(metrics.expected_loss, 30.0);
/// assert_eq!(metrics.p50, 30.0);
/// ```
pub fn compute_metrics(losses: &[f64]) -> RiskMetrics {
    if losses.is_empty() {
        return RiskMetrics::zero();
    }

    let expected_loss = losses.iter().sum::<f64>() / losses.len() as f64;

    let mut sorted = losses.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let p5 = percentile_sorted(&sorted, 5.0);
    let p25 = percentile_sorted(&sorted, 25.0);
    let p50 = percentile_sorted(&sorted, 50.0);
    let p75 = percentile_sorted(&sorted, 75.0);
    let p95 = percentile_sorted(&sorted, 95.0);
    let p99 = percentile_sorted(&sorted, 99.0);

    let tail: Vec<f64> = sorted.iter().copied().filter(|&l| l >= p95).collect();
    let tvar_95 = if tail.is_empty() {
        p95
    } else {
        tail.iter().sum::<f64>() / tail.len() as f64
    };

    RiskMetrics {
        expected_loss,
        var_95: p95,
        tvar_95,
        var_99: p99,
        p5,
        p25,
        p50,
        p75,
        p95,
        p99,
    }
}

/// Linear-interpolation percentile over pre-sorted samples.
///
/// Matches the conventional definition: rank `p/100 * (n - 1)`, value
/// interpolated between the two surrounding order statistics.
fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = p / 100.0 * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (lower + 1).min(n - 1);
    let frac = rank - lower as f64;
    sorted[lower] + frac * (sorted[upper] - sorted[lower])
}

/// Ratio of the 95th percentile loss to the contract value.
///
/// Values above 1 indicate tail losses exceeding the deal's nominal value.
/// A non-positive contract value yields 0.
pub fn risk_asymmetry_ratio(var_95: f64, contract_value: f64) -> f64 {
    if contract_value <= 0.0 {
        return 0.0;
    }
    var_95 / contract_value
}

/// Fraction of losses strictly greater than the threshold.
///
/// Empty input yields 0.
pub fn loss_exceedance_probability(losses: &[f64], threshold: f64) -> f64 {
    if losses.is_empty() {
        return 0.0;
    }
    losses.iter().filter(|&&l| l > threshold).count() as f64 / losses.len() as f64
}

/// Return on investment of mitigation: `(EL reduction - cost) / cost`.
///
/// A non-positive cost yields positive infinity when mitigation reduced
/// expected loss, and 0 otherwise.
pub fn mitigation_value(unmitigated_el: f64, mitigated_el: f64, mitigation_cost: f64) -> f64 {
    if mitigation_cost <= 0.0 {
        return if unmitigated_el > mitigated_el {
            f64::INFINITY
        } else {
            0.0
        };
    }
    let reduction = unmitigated_el - mitigated_el;
    (reduction - mitigation_cost) / mitigation_cost
}
