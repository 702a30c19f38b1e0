use serde::{Deserialize, Serialize};

use crate::scenario::{CalamityKind, CalamityScenario};

use super::SpeciesImpactResult;

/// Signed percentage-point deltas for the four tracked environmental
/// metrics. Heuristic estimates, deliberately unclamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsImpact {
    pub ndvi: i32,
    pub moisture: i32,
    pub soil_health: i32,
    pub carbon_capture: i32,
}

pub fn metrics_for(scenario: &CalamityScenario, impacts: &[SpeciesImpactResult]) -> MetricsImpact {
    let severity_factor = scenario.severity_factor();
    let area_factor = scenario.area_factor();

    // Divisor floored to 1 so an empty selection yields a mean of 0
    // rather than a division by zero.
    let survival_sum: f64 = impacts.iter().map(|r| f64::from(r.survival_rate)).sum();
    let avg_survival = survival_sum / impacts.len().max(1) as f64;

    let ndvi = -((severity_factor * area_factor * 40.0).round() as i32);
    let moisture = match scenario.kind {
        CalamityKind::Drought => -((severity_factor * 50.0).round() as i32),
        CalamityKind::Flood => (severity_factor * 30.0).round() as i32,
        _ => -((severity_factor * 20.0).round() as i32),
    };
    let soil_health = match scenario.kind {
        CalamityKind::MineralDepletion => -((severity_factor * 60.0).round() as i32),
        _ => -((severity_factor * 20.0).round() as i32),
    };
    let carbon_capture = -(((100.0 - avg_survival) * 0.8).round() as i32);

    MetricsImpact {
        ndvi,
        moisture,
        soil_health,
        carbon_capture,
    }
}
