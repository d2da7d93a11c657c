//! Simulation run configuration.
//!
//! Configuration is immutable once built; use [`SimulationConfigBuilder`]
//! to construct instances with validation at build time.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Maximum number of simulation trials allowed.
pub const MAX_TRIALS: usize = 10_000_000;

/// Monte Carlo simulation configuration.
///
/// A run is a pure function of its inputs and this configuration: identical
/// inputs and an identical seed produce bit-identical loss vectors. With no
/// seed, each run draws fresh entropy and is non-deterministic.
///
/// # Examples
///
/// ```
/// use quant_core::config::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_simulations(50_000)
///     .seed(42)
///     .apply_mitigations(true)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_simulations(), 50_000);
/// assert_eq!(config.seed(), Some(42));
/// assert!(config.apply_mitigations());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of simulation trials.
    n_simulations: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Whether mitigation effects are applied during sampling.
    apply_mitigations: bool,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of simulation trials.
    #[inline]
    pub fn n_simulations(&self) -> usize {
        self.n_simulations
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns whether mitigation effects are applied.
    #[inline]
    pub fn apply_mitigations(&self) -> bool {
        self.apply_mitigations
    }

    /// Returns a copy of this configuration with mitigations forced on.
    pub fn mitigated(&self) -> Self {
        Self {
            apply_mitigations: true,
            ..self.clone()
        }
    }

    /// Returns a copy of this configuration with mitigations forced off.
    pub fn unmitigated(&self) -> Self {
        Self {
            apply_mitigations: false,
            ..self.clone()
        }
    }

    /// Returns a copy of this configuration with the given seed.
    pub fn with_seed(&self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self.clone()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTrialCount`] if `n_simulations` is 0 or
    /// greater than [`MAX_TRIALS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_simulations == 0 || self.n_simulations > MAX_TRIALS {
            return Err(ConfigError::InvalidTrialCount(self.n_simulations));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// # Examples
///
/// ```
/// use quant_core::config::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_simulations(10_000)
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.seed(), None);
/// assert!(!config.apply_mitigations());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_simulations: Option<usize>,
    seed: Option<u64>,
    apply_mitigations: bool,
}

impl SimulationConfigBuilder {
    /// Sets the number of simulation trials, in [1, [`MAX_TRIALS`]].
    #[inline]
    pub fn n_simulations(mut self, n_simulations: usize) -> Self {
        self.n_simulations = Some(n_simulations);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets whether mitigation effects are applied during sampling.
    #[inline]
    pub fn apply_mitigations(mut self, apply: bool) -> Self {
        self.apply_mitigations = apply;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_simulations` is not set or outside
    /// [1, [`MAX_TRIALS`]].
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let n_simulations = self.n_simulations.ok_or(ConfigError::InvalidParameter {
            name: "n_simulations",
            value: "must be specified".to_string(),
        })?;

        let config = SimulationConfig {
            n_simulations,
            seed: self.seed,
            apply_mitigations: self.apply_mitigations,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_valid() {
        let config = SimulationConfig::builder()
            .n_simulations(10_000)
            .build()
            .unwrap();

        assert_eq!(config.n_simulations(), 10_000);
        assert_eq!(config.seed(), None);
        assert!(!config.apply_mitigations());
    }

    #[test]
    fn test_config_builder_with_seed_and_mitigations() {
        let config = SimulationConfig::builder()
            .n_simulations(1_000)
            .seed(42)
            .apply_mitigations(true)
            .build()
            .unwrap();

        assert_eq!(config.seed(), Some(42));
        assert!(config.apply_mitigations());
    }

    #[test]
    fn test_config_invalid_zero_trials() {
        let result = SimulationConfig::builder().n_simulations(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidTrialCount(0))));
    }

    #[test]
    fn test_config_invalid_too_many_trials() {
        let result = SimulationConfig::builder()
            .n_simulations(MAX_TRIALS + 1)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidTrialCount(_))));
    }

    #[test]
    fn test_config_missing_trials() {
        let result = SimulationConfig::builder().seed(1).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "n_simulations",
                ..
            })
        ));
    }

    #[test]
    fn test_mitigated_and_unmitigated_copies() {
        let config = SimulationConfig::builder()
            .n_simulations(100)
            .seed(7)
            .build()
            .unwrap();

        let mitigated = config.mitigated();
        assert!(mitigated.apply_mitigations());
        assert_eq!(mitigated.seed(), Some(7));
        assert_eq!(mitigated.n_simulations(), 100);

        let unmitigated = mitigated.unmitigated();
        assert!(!unmitigated.apply_mitigations());
    }

    #[test]
    fn test_with_seed_copy() {
        let config = SimulationConfig::builder()
            .n_simulations(100)
            .build()
            .unwrap();
        assert_eq!(config.with_seed(99).seed(), Some(99));
    }
}
