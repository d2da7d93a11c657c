//! Error types for configuration and input parsing.
//!
//! This module defines structured error types raised while constructing
//! simulation inputs. Numeric edge cases in the engine itself (zero or
//! negative frequency and severity parameters) are expected domain inputs
//! and degrade to zero-valued results instead of erroring; only structural
//! problems surface here.

use std::fmt;
use thiserror::Error;

/// Configuration error for the simulation engine.
///
/// These errors occur during construction when invalid parameters are
/// provided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Trial count outside valid range [1, [`crate::config::MAX_TRIALS`]].
    InvalidTrialCount(usize),
    /// Invalid parameter value with name and description.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTrialCount(count) => {
                write!(
                    f,
                    "Invalid trial count {}: must be in range [1, 10_000_000]",
                    count
                )
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter '{}': {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Error raised when parsing an unknown distribution kind name.
///
/// The distribution kind is a closed enumeration; a name outside
/// {`lognormal`, `triangular`, `uniform`} is a configuration error at the
/// boundary, never a silent fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown distribution kind '{name}': expected one of lognormal, triangular, uniform")]
pub struct KindParseError {
    /// The unrecognised kind name.
    pub name: String,
}
