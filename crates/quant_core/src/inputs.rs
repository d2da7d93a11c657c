//! Simulation input model.
//!
//! Inputs are supplied by an external persistence/validation layer, already
//! filtered to included failure modes that carry at least one loss scenario.
//! Frequency and severity bounds are not asserted here; the sampling layer
//! clamps them into valid ranges, so out-of-order bounds degrade gracefully
//! instead of erroring.

use crate::error::KindParseError;
use crate::ids::{FailureModeId, MitigationId, PartyId, ScenarioId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity distribution family for a loss scenario.
///
/// A closed enumeration: unknown kind names fail to parse with
/// [`KindParseError`] rather than falling back to a default family.
///
/// # Examples
///
/// ```
/// use quant_core::inputs::DistributionKind;
///
/// let kind: DistributionKind = "triangular".parse().unwrap();
/// assert_eq!(kind, DistributionKind::Triangular);
/// assert!("gaussian".parse::<DistributionKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionKind {
    /// Lognormal severity, calibrated so the median lands on the mid
    /// estimate and the 95th percentile near the high estimate.
    Lognormal,
    /// Triangular severity over (low, mid, high).
    Triangular,
    /// Uniform severity over (low, high); the mid estimate is ignored.
    Uniform,
}

impl DistributionKind {
    /// Returns the canonical lowercase name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            DistributionKind::Lognormal => "lognormal",
            DistributionKind::Triangular => "triangular",
            DistributionKind::Uniform => "uniform",
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistributionKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lognormal" => Ok(DistributionKind::Lognormal),
            "triangular" => Ok(DistributionKind::Triangular),
            "uniform" => Ok(DistributionKind::Uniform),
            other => Err(KindParseError {
                name: other.to_string(),
            }),
        }
    }
}

/// Reduction factors from a single mitigation applied to a failure mode.
///
/// Reductions are fractional (0.3 means a 30% cut), not absolute amounts.
/// The constructor clamps both factors into [0, 1]. Immutable once built;
/// owned by the failure mode(s) it is linked to for the duration of a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MitigationEffect {
    /// Mitigation identifier.
    pub id: MitigationId,
    /// Human-readable mitigation name.
    pub name: String,
    /// Fractional frequency reduction in [0, 1].
    pub frequency_reduction: f64,
    /// Fractional severity reduction in [0, 1].
    pub severity_reduction: f64,
}

impl MitigationEffect {
    /// Creates a mitigation effect, clamping both reductions into [0, 1].
    pub fn new(
        id: MitigationId,
        name: impl Into<String>,
        frequency_reduction: f64,
        severity_reduction: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            frequency_reduction: frequency_reduction.clamp(0.0, 1.0),
            severity_reduction: severity_reduction.clamp(0.0, 1.0),
        }
    }
}

/// Input parameters for a single loss scenario within a failure mode.
///
/// A loss scenario is one way a failure mode harms a specific party, with a
/// severity-amount distribution described by (low, mid, high) estimates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LossScenarioInput {
    /// Scenario identifier.
    pub id: ScenarioId,
    /// Human-readable scenario name.
    pub name: String,
    /// Identifier of the party bearing this loss.
    pub party_id: PartyId,
    /// Free-form loss category label (opaque grouping key).
    pub loss_category: String,
    /// Severity distribution family.
    pub distribution: DistributionKind,
    /// Low severity estimate.
    pub severity_low: f64,
    /// Mid (most likely / median) severity estimate.
    pub severity_mid: f64,
    /// High severity estimate.
    pub severity_high: f64,
}

impl LossScenarioInput {
    /// Creates a loss scenario input.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ScenarioId,
        name: impl Into<String>,
        party_id: PartyId,
        loss_category: impl Into<String>,
        distribution: DistributionKind,
        severity_low: f64,
        severity_mid: f64,
        severity_high: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            party_id,
            loss_category: loss_category.into(),
            distribution,
            severity_low,
            severity_mid,
            severity_high,
        }
    }
}

/// Input parameters for a single failure mode to simulate.
///
/// Carries the annual event-frequency estimates, the ordered loss scenarios
/// triggered per event, and any mitigations attached to this failure mode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FailureModeInput {
    /// Failure mode identifier.
    pub id: FailureModeId,
    /// Human-readable failure mode name.
    pub name: String,
    /// Low annual frequency estimate (events/year).
    pub frequency_low: f64,
    /// Mid annual frequency estimate.
    pub frequency_mid: f64,
    /// High annual frequency estimate.
    pub frequency_high: f64,
    /// Ordered loss scenarios triggered per event.
    #[serde(default)]
    pub loss_scenarios: Vec<LossScenarioInput>,
    /// Mitigations attached to this failure mode.
    #[serde(default)]
    pub mitigations: Vec<MitigationEffect>,
}

impl FailureModeInput {
    /// Creates a failure mode input with no scenarios or mitigations.
    pub fn new(
        id: FailureModeId,
        name: impl Into<String>,
        frequency_low: f64,
        frequency_mid: f64,
        frequency_high: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            frequency_low,
            frequency_mid,
            frequency_high,
            loss_scenarios: Vec::new(),
            mitigations: Vec::new(),
        }
    }

    /// Sets the loss scenarios.
    pub fn with_scenarios(mut self, scenarios: Vec<LossScenarioInput>) -> Self {
        self.loss_scenarios = scenarios;
        self
    }

    /// Sets the attached mitigations.
    pub fn with_mitigations(mut self, mitigations: Vec<MitigationEffect>) -> Self {
        self.mitigations = mitigations;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_known_names() {
        assert_eq!(
            "lognormal".parse::<DistributionKind>().unwrap(),
            DistributionKind::Lognormal
        );
        assert_eq!(
            "triangular".parse::<DistributionKind>().unwrap(),
            DistributionKind::Triangular
        );
        assert_eq!(
            "uniform".parse::<DistributionKind>().unwrap(),
            DistributionKind::Uniform
        );
    }

    #[test]
    fn test_kind_parse_unknown_name_is_error() {
        let err = "normal".parse::<DistributionKind>().unwrap_err();
        assert_eq!(err.name, "normal");
    }

    #[test]
    fn test_kind_roundtrip_str() {
        for kind in [
            DistributionKind::Lognormal,
            DistributionKind::Triangular,
            DistributionKind::Uniform,
        ] {
            assert_eq!(kind.as_str().parse::<DistributionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_serde_rejects_unknown() {
        let ok: DistributionKind = serde_json::from_str("\"uniform\"").unwrap();
        assert_eq!(ok, DistributionKind::Uniform);
        assert!(serde_json::from_str::<DistributionKind>("\"gaussian\"").is_err());
    }

    #[test]
    fn test_mitigation_effect_clamps_reductions() {
        let effect = MitigationEffect::new(MitigationId::new(1), "Dual sourcing", 1.7, -0.2);
        assert_eq!(effect.frequency_reduction, 1.0);
        assert_eq!(effect.severity_reduction, 0.0);
    }

    #[test]
    fn test_failure_mode_builder_methods() {
        let scenario = LossScenarioInput::new(
            ScenarioId::new(1),
            "Expedite freight",
            PartyId::new(2),
            "direct",
            DistributionKind::Triangular,
            100.0,
            500.0,
            2_000.0,
        );
        let fm = FailureModeInput::new(FailureModeId::new(1), "Late delivery", 0.5, 1.0, 1.5)
            .with_scenarios(vec![scenario])
            .with_mitigations(vec![MitigationEffect::new(
                MitigationId::new(1),
                "Buffer stock",
                0.3,
                0.1,
            )]);

        assert_eq!(fm.loss_scenarios.len(), 1);
        assert_eq!(fm.mitigations.len(), 1);
        assert_eq!(fm.loss_scenarios[0].party_id, PartyId::new(2));
    }

    #[test]
    fn test_failure_mode_deserialises_without_optional_lists() {
        let json = r#"{
            "id": 1,
            "name": "Late delivery",
            "frequency_low": 0.5,
            "frequency_mid": 1.0,
            "frequency_high": 1.5
        }"#;
        let fm: FailureModeInput = serde_json::from_str(json).unwrap();
        assert!(fm.loss_scenarios.is_empty());
        assert!(fm.mitigations.is_empty());
    }
}
