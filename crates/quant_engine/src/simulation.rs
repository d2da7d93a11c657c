//! Per-trial Monte Carlo simulation loop.
//!
//! One run walks every failure mode once: sample per-trial event counts,
//! then for each loss scenario draw one severity per event and sum them per
//! trial. Scenario vectors accumulate into failure-mode totals, which
//! accumulate into the run total, element-wise per trial index.
//!
//! Event aggregation is ragged: exactly `sum(event_counts)` severities are
//! drawn per scenario, in trial order, and scatter-summed into per-trial
//! buckets. This reproduces the sum of k independent severity draws for a
//! trial with k events while keeping memory proportional to the realised
//! event total rather than `n_trials x max(event_counts)`.

use crate::error::SimulationError;
use crate::mitigation::combine_mitigations;
use crate::sampling;
use quant_core::config::SimulationConfig;
use quant_core::ids::{FailureModeId, PartyId, ScenarioId};
use quant_core::inputs::{DistributionKind, FailureModeInput};
use quant_core::rng::QuantRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Upper bound on the sampled event count of a single trial.
///
/// The triangular rate draw occasionally produces an outlier rate; without
/// a cap a single trial could dominate the severity workload for its whole
/// scenario. Counts above the cap are truncated.
pub const MAX_EVENTS_PER_TRIAL: u64 = 10_000;

/// Per-trial losses for a single loss scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Scenario identifier.
    pub id: ScenarioId,
    /// Party bearing this scenario's losses.
    pub party_id: PartyId,
    /// Free-form loss category label, passed through untouched.
    pub loss_category: String,
    /// Per-trial losses, one entry per simulation trial.
    pub losses: Vec<f64>,
}

/// Per-trial losses for a single failure mode across all its scenarios.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FailureModeResult {
    /// Failure mode identifier.
    pub id: FailureModeId,
    /// Failure mode name, passed through for reporting.
    pub name: String,
    /// Element-wise sum of this failure mode's scenario losses.
    pub total_losses: Vec<f64>,
    /// Per-scenario results in input order.
    pub scenario_results: Vec<ScenarioResult>,
}

/// Complete simulation output.
///
/// Invariant: `total_losses[t]` equals the sum over failure modes of
/// `failure_mode_results[i].total_losses[t]`, which in turn equals the sum
/// of that failure mode's scenario losses at `t`, for every trial index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Per-trial total losses across all failure modes.
    pub total_losses: Vec<f64>,
    /// Per-failure-mode results in input order.
    pub failure_mode_results: Vec<FailureModeResult>,
    /// Number of trials simulated.
    pub n_simulations: usize,
}

/// Runs a Monte Carlo simulation across all failure modes.
///
/// For each trial: sample an event count per failure mode (uncertain
/// Poisson), draw one severity per event for each loss scenario, sum the
/// severities within each scenario, and optionally apply mitigation
/// reduction factors to the frequency and severity estimates first.
///
/// The run is deterministic for a fixed seed and holds no state between
/// calls. Numeric degeneracy (zero or negative estimates) produces
/// zero-loss vectors; only structural problems error.
///
/// # Errors
///
/// - [`SimulationError::InvalidConfig`] if the configuration fails validation
/// - [`SimulationError::NoFailureModes`] for an empty failure-mode list
/// - [`SimulationError::NoScenarios`] for a failure mode without scenarios
pub fn run_simulation(
    failure_modes: &[FailureModeInput],
    config: &SimulationConfig,
) -> Result<SimulationResult, SimulationError> {
    config.validate()?;
    if failure_modes.is_empty() {
        return Err(SimulationError::NoFailureModes);
    }
    for fm in failure_modes {
        if fm.loss_scenarios.is_empty() {
            return Err(SimulationError::NoScenarios { failure_mode: fm.id });
        }
    }

    let n = config.n_simulations();
    let mut rng = QuantRng::for_run(config.seed());
    debug!(
        trials = n,
        failure_modes = failure_modes.len(),
        mitigated = config.apply_mitigations(),
        seed = ?config.seed(),
        "starting simulation run"
    );

    let mut total_losses = vec![0.0; n];
    let mut fm_results = Vec::with_capacity(failure_modes.len());

    for fm in failure_modes {
        let combined = (config.apply_mitigations() && !fm.mitigations.is_empty())
            .then(|| combine_mitigations(&fm.mitigations));

        let mut freq_low = fm.frequency_low;
        let mut freq_mid = fm.frequency_mid;
        let mut freq_high = fm.frequency_high;
        if let Some(effect) = &combined {
            let residual = 1.0 - effect.frequency_reduction;
            freq_low *= residual;
            freq_mid *= residual;
            freq_high *= residual;
        }

        let mut event_counts = sampling::frequency_counts(&mut rng, freq_low, freq_mid, freq_high, n);
        for count in &mut event_counts {
            *count = (*count).min(MAX_EVENTS_PER_TRIAL);
        }

        let mut fm_total = vec![0.0; n];
        let mut scenario_results = Vec::with_capacity(fm.loss_scenarios.len());

        for scenario in &fm.loss_scenarios {
            let mut sev_low = scenario.severity_low;
            let mut sev_mid = scenario.severity_mid;
            let mut sev_high = scenario.severity_high;
            if let Some(effect) = &combined {
                let residual = 1.0 - effect.severity_reduction;
                sev_low *= residual;
                sev_mid *= residual;
                sev_high *= residual;
            }

            let losses = scenario_losses(
                &mut rng,
                scenario.distribution,
                sev_low,
                sev_mid,
                sev_high,
                &event_counts,
            );
            for (acc, loss) in fm_total.iter_mut().zip(&losses) {
                *acc += loss;
            }
            scenario_results.push(ScenarioResult {
                id: scenario.id,
                party_id: scenario.party_id,
                loss_category: scenario.loss_category.clone(),
                losses,
            });
        }

        for (acc, loss) in total_losses.iter_mut().zip(&fm_total) {
            *acc += loss;
        }
        debug!(
            failure_mode = %fm.id,
            name = %fm.name,
            scenarios = scenario_results.len(),
            events = event_counts.iter().sum::<u64>(),
            "failure mode simulated"
        );
        fm_results.push(FailureModeResult {
            id: fm.id,
            name: fm.name.clone(),
            total_losses: fm_total,
            scenario_results,
        });
    }

    Ok(SimulationResult {
        total_losses,
        failure_mode_results: fm_results,
        n_simulations: n,
    })
}

/// Builds one scenario's per-trial loss vector from the event counts.
///
/// Draws exactly `sum(event_counts)` severities in trial order and sums
/// each trial's slice. Trials with zero events contribute zero without
/// consuming any draws.
fn scenario_losses(
    rng: &mut QuantRng,
    kind: DistributionKind,
    sev_low: f64,
    sev_mid: f64,
    sev_high: f64,
    event_counts: &[u64],
) -> Vec<f64> {
    let total_events: u64 = event_counts.iter().sum();
    let mut losses = vec![0.0; event_counts.len()];
    if total_events == 0 {
        return losses;
    }

    let amounts = sampling::severity_amounts(
        rng,
        kind,
        sev_low,
        sev_mid,
        sev_high,
        total_events as usize,
    );

    let mut offset = 0;
    for (loss, &count) in losses.iter_mut().zip(event_counts) {
        let count = count as usize;
        *loss = amounts[offset..offset + count].iter().sum();
        offset += count;
    }
    losses
}
