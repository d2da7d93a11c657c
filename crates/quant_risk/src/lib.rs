//! # Quant Risk (L3: Analysis)
//!
//! Risk metrics, loss aggregation and mitigation studies over the output of
//! the `quant_engine` Monte Carlo simulator.
//!
//! This crate provides:
//! - Standard risk statistics over any loss vector (expected loss, VaR,
//!   TVaR, percentiles)
//! - Equal-width histograms for charting
//! - Ranking of failure modes by expected-loss contribution and
//!   re-aggregation of losses per affected party
//! - Paired unmitigated/mitigated studies with mitigation ROI
//!
//! ## Example
//!
//! ```
//! use quant_core::config::SimulationConfig;
//! use quant_core::ids::{FailureModeId, PartyId, ScenarioId};
//! use quant_core::inputs::{DistributionKind, FailureModeInput, LossScenarioInput};
//! use quant_engine::run_simulation;
//! use quant_risk::aggregate_results;
//!
//! let fm = FailureModeInput::new(FailureModeId::new(1), "Late delivery", 0.5, 1.0, 1.5)
//!     .with_scenarios(vec![LossScenarioInput::new(
//!         ScenarioId::new(1),
//!         "Expedite freight",
//!         PartyId::new(1),
//!         "direct",
//!         DistributionKind::Lognormal,
//!         1_000.0,
//!         10_000.0,
//!         100_000.0,
//!     )]);
//! let config = SimulationConfig::builder()
//!     .n_simulations(2_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let result = run_simulation(&[fm], &config).unwrap();
//! let aggregated = aggregate_results(&result);
//! assert_eq!(aggregated.ranked_scenarios.len(), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod aggregate;
pub mod histogram;
pub mod metrics;
pub mod study;

pub use aggregate::{aggregate_results, party_loss_vectors, AggregatedResult, PartyExposure, RankedScenario};
pub use histogram::{generate_histogram, Histogram, DEFAULT_BINS};
pub use metrics::{
    compute_metrics, loss_exceedance_probability, mitigation_value, risk_asymmetry_ratio,
    RiskMetrics,
};
pub use study::{
    run_study, summarize_run, FailureModeSummary, PartySummary, RunKind, RunSummary, StudyResult,
    MITIGATED_SEED_TWEAK,
};
