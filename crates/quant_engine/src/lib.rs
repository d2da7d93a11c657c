//! # Quant Engine (L2: Simulation)
//!
//! Monte Carlo loss simulation engine for supply-relationship risk.
//!
//! This crate provides:
//! - Frequency sampling via an uncertain Poisson process (a triangular rate
//!   draw per trial, then a Poisson count at that rate)
//! - Severity sampling from calibrated lognormal, triangular and uniform
//!   distributions
//! - Multiplicative combination of mitigation effects
//! - The per-trial simulation loop producing structured loss vectors
//!
//! A run is a pure function of its inputs, configuration and seed; the
//! engine holds no state between runs and performs no I/O.
//!
//! ## Example
//!
//! ```
//! use quant_core::config::SimulationConfig;
//! use quant_core::ids::{FailureModeId, PartyId, ScenarioId};
//! use quant_core::inputs::{DistributionKind, FailureModeInput, LossScenarioInput};
//! use quant_engine::run_simulation;
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
//!
//! let config = SimulationConfig::builder()
//!     .n_simulations(1_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let result = run_simulation(&[fm], &config).unwrap();
//! assert_eq!(result.total_losses.len(), 1_000);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod mitigation;
pub mod sampling;
pub mod simulation;

pub use error::SimulationError;
pub use mitigation::{combine_mitigations, mitigation_savings};
pub use simulation::{
    run_simulation, FailureModeResult, ScenarioResult, SimulationResult, MAX_EVENTS_PER_TRIAL,
};
