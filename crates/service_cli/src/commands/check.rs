//! Check command implementation
//!
//! Reports resolved settings and engine limits.

use crate::settings::Settings;
use crate::Result;
use quant_core::config::MAX_TRIALS;
use quant_engine::MAX_EVENTS_PER_TRIAL;
use quant_risk::DEFAULT_BINS;

/// Run the check command.
pub fn run(settings_path: &str) -> Result<()> {
    let settings = Settings::load(settings_path)?;

    println!("lossquant configuration");
    println!("  Settings file:        {}", settings_path);
    println!("  Trials:               {}", settings.trials);
    match settings.seed {
        Some(seed) => println!("  Seed:                 {}", seed),
        None => println!("  Seed:                 (entropy)"),
    }
    println!("  Max trials:           {}", MAX_TRIALS);
    println!("  Max events per trial: {}", MAX_EVENTS_PER_TRIAL);
    println!("  Histogram bins:       {}", DEFAULT_BINS);
    println!("  Severity families:    lognormal, triangular, uniform");

    Ok(())
}
