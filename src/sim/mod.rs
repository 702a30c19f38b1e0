//! The simulation core: pure, synchronous, and stateless. Every output
//! is a function of the request alone; nothing carries between calls.

pub mod impact;
pub mod metrics;
pub mod recommend;

pub use impact::{impact_for, ImpactNumbers};
pub use metrics::{metrics_for, MetricsImpact};
pub use recommend::recommendations_for;

use serde::{Deserialize, Serialize};

use crate::{
    scenario::CalamityScenario,
    species::{SpeciesCatalog, SpeciesInfo},
};

/// Body of `POST /api/simulation/run`. `lat`/`lng` locate the site for
/// the caller's bookkeeping; the calculation itself is site-independent.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    pub scenario: CalamityScenario,
    pub selected_species: Vec<String>,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesImpactResult {
    pub species: SpeciesInfo,
    pub survival_rate: u32,
    pub growth_impact: u32,
    pub recovery_time: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub scenario: CalamityScenario,
    pub species_impact: Vec<SpeciesImpactResult>,
    pub metrics_impact: MetricsImpact,
    pub recommendations: Vec<String>,
}

/// Runs the full pipeline for one validated scenario: per-species impact
/// in input order, then aggregate metric deltas, then the recommendation
/// list.
pub fn run_simulation(
    scenario: &CalamityScenario,
    selected_species: &[String],
    catalog: &SpeciesCatalog,
) -> SimulationResult {
    let species_impact: Vec<SpeciesImpactResult> = selected_species
        .iter()
        .map(|name| {
            let record = catalog.lookup_or_default(name);
            let numbers = impact_for(scenario, &record.profile);
            SpeciesImpactResult {
                species: record.info,
                survival_rate: numbers.survival_rate,
                growth_impact: numbers.growth_impact,
                recovery_time: numbers.recovery_time,
            }
        })
        .collect();

    let metrics_impact = metrics_for(scenario, &species_impact);
    let recommendations = recommendations_for(scenario, &species_impact);

    SimulationResult {
        scenario: scenario.clone(),
        species_impact,
        metrics_impact,
        recommendations,
    }
}
