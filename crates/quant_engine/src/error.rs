//! Error types for the simulation engine.
//!
//! Structural malformed input fails fast with [`SimulationError`]; numeric
//! edge cases (zero or negative frequency and severity parameters) are
//! expected domain inputs and degrade to zero-loss vectors instead.

use quant_core::error::ConfigError;
use quant_core::ids::FailureModeId;
use thiserror::Error;

/// Structural errors raised before any sampling happens.
///
/// These are deterministic and not retryable; callers surface them as
/// validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// The failure-mode list was empty.
    #[error("no failure modes to simulate: supply at least one included failure mode")]
    NoFailureModes,

    /// A failure mode carried no loss scenarios.
    #[error("failure mode {failure_mode} has no loss scenarios")]
    NoScenarios {
        /// The offending failure mode.
        failure_mode: FailureModeId,
    },

    /// The run configuration failed validation.
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_scenarios_display_names_failure_mode() {
        let err = SimulationError::NoScenarios {
            failure_mode: FailureModeId::new(4),
        };
        assert!(err.to_string().contains('4'));
    }

    #[test]
    fn test_config_error_converts() {
        let err: SimulationError = ConfigError::InvalidTrialCount(0).into();
        assert!(matches!(err, SimulationError::InvalidConfig(_)));
    }
}
