//! # Quant Core (L1: Foundation)
//!
//! Foundation types for the lossquant supply-risk quantification engine.
//!
//! This crate provides:
//! - Strongly-typed identifiers for failure modes, scenarios, parties and
//!   mitigations
//! - The simulation input model (failure modes, loss scenarios, mitigation
//!   effects)
//! - Simulation configuration with builder-based validation
//! - Structured error types
//! - A seeded random number generator for reproducible runs
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            service_cli (S)              │
//! ├─────────────────────────────────────────┤
//! │            quant_risk (L3)              │
//! │  metrics / histogram / aggregate /      │
//! │  study                                  │
//! ├─────────────────────────────────────────┤
//! │            quant_engine (L2)            │
//! │  sampling / mitigation / simulation     │
//! ├─────────────────────────────────────────┤
//! │            quant_core (L1)              │
//! │  ids / inputs / config / error / rng    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use quant_core::config::SimulationConfig;
//! use quant_core::inputs::{DistributionKind, FailureModeInput, LossScenarioInput};
//! use quant_core::ids::{FailureModeId, PartyId, ScenarioId};
//!
//! let scenario = LossScenarioInput::new(
//!     ScenarioId::new(1),
//!     "Line-down penalty",
//!     PartyId::new(10),
//!     "direct",
//!     DistributionKind::Lognormal,
//!     1_000.0,
//!     10_000.0,
//!     100_000.0,
//! );
//!
//! let failure_mode = FailureModeInput::new(
//!     FailureModeId::new(1),
//!     "Late delivery",
//!     0.5,
//!     1.0,
//!     1.5,
//! )
//! .with_scenarios(vec![scenario]);
//!
//! let config = SimulationConfig::builder()
//!     .n_simulations(10_000)
//!     .seed(42)
//!     .build()
//!     .expect("valid configuration");
//!
//! assert_eq!(config.n_simulations(), 10_000);
//! assert_eq!(failure_mode.loss_scenarios.len(), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod ids;
pub mod inputs;
pub mod rng;

pub use config::{SimulationConfig, SimulationConfigBuilder, MAX_TRIALS};
pub use error::{ConfigError, KindParseError};
pub use ids::{FailureModeId, MitigationId, PartyId, ScenarioId};
pub use inputs::{DistributionKind, FailureModeInput, LossScenarioInput, MitigationEffect};
pub use rng::QuantRng;
