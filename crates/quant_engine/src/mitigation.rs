//! Mitigation combination and savings.
//!
//! Multiple mitigations compose multiplicatively on the residual risk: a
//! 30% and a 20% frequency reduction leave a residual of 0.7 x 0.8 = 0.56,
//! i.e. a combined 44% reduction. This models independent reductions and
//! keeps the combined effect below 100%, unlike naive summation.

use quant_core::ids::MitigationId;
use quant_core::inputs::MitigationEffect;

/// Combines mitigation effects into a single equivalent effect.
///
/// An empty slice combines to the identity effect (no reduction).
///
/// # Examples
///
/// ```
/// use quant_core::ids::MitigationId;
/// use quant_core::inputs::MitigationEffect;
/// use quant_engine::combine_mitigations;
///
/// let combined = combine_mitigations(&[
///     MitigationEffect::new(MitigationId::new(1), "A", 0.3, 0.0),
///     MitigationEffect::new(MitigationId::new(2), "B", 0.2, 0.0),
/// ]);
/// assert!((combined.frequency_reduction - 0.44).abs() < 1e-12);
/// ```
pub fn combine_mitigations(effects: &[MitigationEffect]) -> MitigationEffect {
    let mut freq_residual = 1.0;
    let mut sev_residual = 1.0;
    for effect in effects {
        freq_residual *= 1.0 - effect.frequency_reduction;
        sev_residual *= 1.0 - effect.severity_reduction;
    }

    MitigationEffect::new(
        MitigationId::new(0),
        "combined",
        1.0 - freq_residual,
        1.0 - sev_residual,
    )
}

/// Absolute expected-loss reduction achieved by mitigation.
pub fn mitigation_savings(unmitigated_el: f64, mitigated_el: f64) -> f64 {
    unmitigated_el - mitigated_el
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_list_is_identity() {
        let combined = combine_mitigations(&[]);
        assert_eq!(combined.frequency_reduction, 0.0);
        assert_eq!(combined.severity_reduction, 0.0);
    }

    #[test]
    fn test_residual_combination() {
        let combined = combine_mitigations(&[
            MitigationEffect::new(MitigationId::new(1), "A", 0.3, 0.1),
            MitigationEffect::new(MitigationId::new(2), "B", 0.2, 0.5),
        ]);
        assert_relative_eq!(combined.frequency_reduction, 0.44, epsilon = 1e-12);
        assert_relative_eq!(combined.severity_reduction, 0.55, epsilon = 1e-12);
    }

    #[test]
    fn test_combination_never_exceeds_full_reduction() {
        let combined = combine_mitigations(&[
            MitigationEffect::new(MitigationId::new(1), "A", 0.9, 0.9),
            MitigationEffect::new(MitigationId::new(2), "B", 0.9, 0.9),
            MitigationEffect::new(MitigationId::new(3), "C", 0.9, 0.9),
        ]);
        assert!(combined.frequency_reduction < 1.0);
        assert!(combined.frequency_reduction > 0.99);
    }

    #[test]
    fn test_full_reduction_dominates() {
        let combined = combine_mitigations(&[
            MitigationEffect::new(MitigationId::new(1), "Full block", 1.0, 0.0),
            MitigationEffect::new(MitigationId::new(2), "Minor", 0.1, 0.0),
        ]);
        assert_eq!(combined.frequency_reduction, 1.0);
    }

    #[test]
    fn test_savings() {
        assert_eq!(mitigation_savings(10_000.0, 4_000.0), 6_000.0);
        assert_eq!(mitigation_savings(4_000.0, 10_000.0), -6_000.0);
    }
}
