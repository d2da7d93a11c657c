//! Engagement input documents.
//!
//! The engagement JSON file is the CLI's stand-in for the external
//! persistence layer: it carries the deal context (name, contract value,
//! currency, party labels) plus the failure-mode definitions the engine
//! consumes. Contract value, currency and party names are opaque to the
//! engine; only the CLI report interprets them.

use crate::{CliError, Result};
use quant_core::ids::PartyId;
use quant_core::inputs::FailureModeInput;
use serde::Deserialize;
use std::path::Path;

fn default_true() -> bool {
    true
}

/// A named party, for report labels only.
#[derive(Clone, Debug, Deserialize)]
pub struct PartyRecord {
    /// Party identifier referenced by loss scenarios.
    pub id: PartyId,
    /// Display name.
    pub name: String,
}

/// A failure-mode definition with its inclusion flag.
///
/// Excluded failure modes stay in the document but never reach the engine,
/// mirroring the external layer's pre-filtering contract.
#[derive(Clone, Debug, Deserialize)]
pub struct FailureModeRecord {
    /// The engine-facing definition.
    #[serde(flatten)]
    pub input: FailureModeInput,
    /// Whether this failure mode participates in the simulation.
    #[serde(default = "default_true")]
    pub included: bool,
}

/// A complete engagement document.
#[derive(Clone, Debug, Deserialize)]
pub struct EngagementFile {
    /// Engagement display name.
    pub name: String,
    /// Nominal contract value, used for the risk asymmetry ratio.
    #[serde(default)]
    pub contract_value: f64,
    /// Currency label, passed through to the report untouched.
    #[serde(default)]
    pub currency: Option<String>,
    /// Party labels for the report.
    #[serde(default)]
    pub parties: Vec<PartyRecord>,
    /// Failure-mode definitions.
    #[serde(default)]
    pub failure_modes: Vec<FailureModeRecord>,
    /// Total cost of all mitigations, for ROI.
    #[serde(default)]
    pub mitigation_cost: f64,
}

impl EngagementFile {
    /// Loads and parses an engagement document.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Err(CliError::FileNotFound(path.to_string()));
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Builds the engine input list: included failure modes that carry at
    /// least one loss scenario.
    pub fn engine_inputs(&self) -> Vec<FailureModeInput> {
        self.failure_modes
            .iter()
            .filter(|fm| fm.included && !fm.input.loss_scenarios.is_empty())
            .map(|fm| fm.input.clone())
            .collect()
    }

    /// Looks up a party's display name.
    pub fn party_name(&self, id: PartyId) -> Option<&str> {
        self.parties
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "name": "Acme supply agreement",
        "contract_value": 500000.0,
        "currency": "USD",
        "parties": [
            {"id": 1, "name": "Buyer"},
            {"id": 2, "name": "Supplier"}
        ],
        "failure_modes": [
            {
                "id": 1,
                "name": "Late delivery",
                "frequency_low": 0.5,
                "frequency_mid": 1.0,
                "frequency_high": 1.5,
                "loss_scenarios": [
                    {
                        "id": 1,
                        "name": "Expedite freight",
                        "party_id": 1,
                        "loss_category": "direct",
                        "distribution": "lognormal",
                        "severity_low": 1000.0,
                        "severity_mid": 10000.0,
                        "severity_high": 100000.0
                    }
                ]
            },
            {
                "id": 2,
                "name": "Shelved idea",
                "frequency_low": 0.1,
                "frequency_mid": 0.2,
                "frequency_high": 0.3,
                "included": false,
                "loss_scenarios": [
                    {
                        "id": 2,
                        "name": "Unused",
                        "party_id": 2,
                        "loss_category": "indirect",
                        "distribution": "uniform",
                        "severity_low": 100.0,
                        "severity_mid": 200.0,
                        "severity_high": 300.0
                    }
                ]
            },
            {
                "id": 3,
                "name": "No scenarios yet",
                "frequency_low": 0.1,
                "frequency_mid": 0.2,
                "frequency_high": 0.3
            }
        ],
        "mitigation_cost": 2500.0
    }"#;

    #[test]
    fn test_parse_sample_document() {
        let engagement: EngagementFile = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(engagement.name, "Acme supply agreement");
        assert_eq!(engagement.failure_modes.len(), 3);
        assert_eq!(engagement.mitigation_cost, 2500.0);
        assert_eq!(engagement.party_name(PartyId::new(2)), Some("Supplier"));
    }

    #[test]
    fn test_engine_inputs_filter_excluded_and_empty() {
        let engagement: EngagementFile = serde_json::from_str(SAMPLE).unwrap();
        let inputs = engagement.engine_inputs();
        // Excluded and scenario-less failure modes never reach the engine.
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].name, "Late delivery");
    }

    #[test]
    fn test_unknown_distribution_kind_fails_parse() {
        let doc = SAMPLE.replace("\"lognormal\"", "\"gaussian\"");
        assert!(serde_json::from_str::<EngagementFile>(&doc).is_err());
    }
}
