use crate::{scenario::CalamityScenario, species::SpeciesProfile};

/// Per-species outcome of one scenario evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImpactNumbers {
    /// Percentage of the population expected to survive, floored at 5
    /// (residual survivors are always modeled).
    pub survival_rate: u32,
    /// Percentage reduction in growth, capped at 95.
    pub growth_impact: u32,
    /// Months for growth metrics to return to baseline.
    pub recovery_time: u32,
}

/// Evaluates one species against one scenario. Pure arithmetic; total
/// over the validated input domain, so there is no failure path.
///
/// Rounding is half-away-from-zero (`f64::round`) throughout.
pub fn impact_for(scenario: &CalamityScenario, profile: &SpeciesProfile) -> ImpactNumbers {
    let base_sensitivity = profile.sensitivity_to(scenario.kind);
    let severity_factor = scenario.severity_factor();
    let area_factor = scenario.area_factor();
    let duration_factor = scenario.duration_factor();

    let mortality_rate =
        base_sensitivity * severity_factor * area_factor * (1.0 + duration_factor * 0.5);

    // Long severe events can push mortality past 1.0; the survival floor
    // absorbs the resulting negative raw percentage.
    let survival_rate = (((1.0 - mortality_rate) * 100.0).round() as i64).max(5) as u32;
    let growth_impact = (mortality_rate * 120.0).min(95.0).round() as u32;
    let recovery_time =
        (scenario.duration_months * (1.0 / profile.recovery_rate) * (1.0 + severity_factor))
            .round() as u32;

    ImpactNumbers {
        survival_rate,
        growth_impact,
        recovery_time,
    }
}
