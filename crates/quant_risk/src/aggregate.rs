//! Aggregation of simulation results across failure modes and parties.
//!
//! Produces the ranked-contribution view and the per-party exposure view of
//! a [`SimulationResult`]. Both are derived values; nothing here is
//! persisted by the engine.

use crate::metrics::{compute_metrics, RiskMetrics};
use quant_core::ids::{FailureModeId, PartyId};
use quant_engine::SimulationResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A failure mode ranked by expected-loss contribution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedScenario {
    /// Failure mode identifier.
    pub failure_mode_id: FailureModeId,
    /// Failure mode name.
    pub name: String,
    /// Expected loss of this failure mode alone.
    pub expected_loss: f64,
    /// 95th percentile loss of this failure mode alone.
    pub var_95: f64,
    /// Share of the total expected loss, in percent.
    pub contribution_pct: f64,
}

/// Aggregated exposure for a single affected party.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartyExposure {
    /// Party identifier.
    pub party_id: PartyId,
    /// Risk metrics over this party's accumulated losses.
    pub metrics: RiskMetrics,
}

/// Complete aggregated analysis of one simulation output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggregatedResult {
    /// Metrics over the run's total losses.
    pub total_metrics: RiskMetrics,
    /// Failure modes sorted descending by expected loss; ties keep input
    /// order.
    pub ranked_scenarios: Vec<RankedScenario>,
    /// Per-party exposures in ascending party-id order.
    pub party_exposures: Vec<PartyExposure>,
}

/// Accumulates per-party loss vectors across every scenario of every
/// failure mode.
///
/// Parties absent from all scenarios never appear. The map is ordered by
/// party id so downstream output is reproducible.
pub fn party_loss_vectors(result: &SimulationResult) -> BTreeMap<PartyId, Vec<f64>> {
    let mut by_party: BTreeMap<PartyId, Vec<f64>> = BTreeMap::new();
    for fm_result in &result.failure_mode_results {
        for scenario in &fm_result.scenario_results {
            let acc = by_party
                .entry(scenario.party_id)
                .or_insert_with(|| vec![0.0; result.n_simulations]);
            for (total, loss) in acc.iter_mut().zip(&scenario.losses) {
                *total += loss;
            }
        }
    }
    by_party
}

/// Aggregates a simulation result into ranked and party-level views.
///
/// Contribution percentages divide by the total expected loss, substituting
/// 1.0 when it is non-positive; in that degenerate case contributions are
/// meaningless but finite, by policy not an error.
pub fn aggregate_results(result: &SimulationResult) -> AggregatedResult {
    let total_metrics = compute_metrics(&result.total_losses);
    let total_el_safe = if total_metrics.expected_loss > 0.0 {
        total_metrics.expected_loss
    } else {
        1.0
    };

    let mut ranked: Vec<RankedScenario> = result
        .failure_mode_results
        .iter()
        .map(|fm_result| {
            let fm_metrics = compute_metrics(&fm_result.total_losses);
            RankedScenario {
                failure_mode_id: fm_result.id,
                name: fm_result.name.clone(),
                expected_loss: fm_metrics.expected_loss,
                var_95: fm_metrics.var_95,
                contribution_pct: fm_metrics.expected_loss / total_el_safe * 100.0,
            }
        })
        .collect();
    // Stable sort: ties keep input order.
    ranked.sort_by(|a, b| {
        b.expected_loss
            .partial_cmp(&a.expected_loss)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let party_exposures = party_loss_vectors(result)
        .into_iter()
        .map(|(party_id, losses)| PartyExposure {
            party_id,
            metrics: compute_metrics(&losses),
        })
        .collect();

    AggregatedResult {
        total_metrics,
        ranked_scenarios: ranked,
        party_exposures,
    }
}
