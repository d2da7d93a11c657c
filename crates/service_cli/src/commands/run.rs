//! Run command implementation
//!
//! Runs a paired unmitigated/mitigated study over an engagement file and
//! renders the report.

use tracing::info;

use crate::input::EngagementFile;
use crate::settings::Settings;
use crate::{CliError, Result};
use quant_core::config::SimulationConfig;
use quant_risk::{run_study, RunSummary, StudyResult};

/// Run the quantification study command.
pub fn run(
    settings_path: &str,
    engagement_path: &str,
    trials: Option<usize>,
    seed: Option<u64>,
    format: &str,
) -> Result<()> {
    let settings = Settings::load(settings_path)?;
    let engagement = EngagementFile::load(engagement_path)?;
    let inputs = engagement.engine_inputs();

    let trials = trials.unwrap_or(settings.trials);
    let mut builder = SimulationConfig::builder().n_simulations(trials);
    if let Some(seed) = seed.or(settings.seed) {
        builder = builder.seed(seed);
    }
    let config = builder.build()?;

    info!("Starting quantification study...");
    info!("  Engagement: {}", engagement.name);
    info!("  Failure modes: {}", inputs.len());
    info!("  Trials: {}", trials);

    let study = run_study(
        &inputs,
        &config,
        engagement.contract_value,
        engagement.mitigation_cost,
    )?;

    match format {
        "json" => {
            let rendered = serde_json::to_string_pretty(&study)?;
            println!("{}", rendered);
        }
        "table" => {
            render_table(&engagement, &study);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            )));
        }
    }

    info!("Study complete");
    Ok(())
}

fn render_table(engagement: &EngagementFile, study: &StudyResult) {
    let currency = engagement.currency.as_deref().unwrap_or("");

    println!("\nEngagement: {}", engagement.name);
    if engagement.contract_value > 0.0 {
        println!("Contract value: {:.0} {}", engagement.contract_value, currency);
    }

    println!("\n┌──────────────────┬──────────────┬──────────────┐");
    println!("│ Metric           │ Unmitigated  │ Mitigated    │");
    println!("├──────────────────┼──────────────┼──────────────┤");
    metric_row("Expected loss", study, |s| s.total_metrics.expected_loss);
    metric_row("VaR 95", study, |s| s.total_metrics.var_95);
    metric_row("TVaR 95", study, |s| s.total_metrics.tvar_95);
    metric_row("VaR 99", study, |s| s.total_metrics.var_99);
    metric_row("Risk asymmetry", study, |s| s.risk_asymmetry_ratio);
    println!("└──────────────────┴──────────────┴──────────────┘");

    println!("\nTop failure modes (unmitigated):");
    for fm in &study.unmitigated.failure_modes {
        println!(
            "  {:<32} EL {:>12.0}  VaR95 {:>12.0}  {:>5.1}%",
            fm.name, fm.metrics.expected_loss, fm.metrics.var_95, fm.contribution_pct
        );
    }

    println!("\nParty exposures (unmitigated):");
    for party in &study.unmitigated.parties {
        let label = engagement
            .party_name(party.party_id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Party {}", party.party_id));
        println!(
            "  {:<32} EL {:>12.0}  VaR95 {:>12.0}",
            label, party.metrics.expected_loss, party.metrics.var_95
        );
    }

    println!("\nMitigation:");
    println!("  Cost:         {:>12.0} {}", study.mitigation_cost, currency);
    println!("  EL reduction: {:>12.0} {}", study.el_reduction, currency);
    if study.roi.is_finite() {
        println!("  ROI:          {:>12.2}x", study.roi);
    } else {
        println!("  ROI:          costless mitigation");
    }
}

fn metric_row(label: &str, study: &StudyResult, field: fn(&RunSummary) -> f64) {
    println!(
        "│ {:<16} │ {:>12.2} │ {:>12.2} │",
        label,
        field(&study.unmitigated),
        field(&study.mitigated)
    );
}
