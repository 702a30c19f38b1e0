use crate::scenario::{CalamityKind, CalamityScenario};

use super::SpeciesImpactResult;

const LOW_SURVIVAL_THRESHOLD: u32 = 50;
const DROUGHT_EXTRA_SEVERITY: f64 = 60.0;
const ESCALATION_SEVERITY: f64 = 70.0;

/// Two fixed mitigation lines per hazard class. Order within the pair is
/// significant and mirrored by the API contract.
pub fn mitigation_lines(kind: CalamityKind) -> [&'static str; 2] {
    match kind {
        CalamityKind::Drought => [
            "Install drip irrigation to sustain high-value stands through the dry spell.",
            "Apply mulch around saplings to reduce soil moisture loss.",
        ],
        CalamityKind::Flood => [
            "Dig drainage channels to move standing water off the planting zones.",
            "Mound soil around stems to keep root collars above the waterline.",
        ],
        CalamityKind::HeatWave => [
            "Erect temporary shade netting over young and exposed plantings.",
            "Shift watering to early morning to limit evaporative loss.",
        ],
        CalamityKind::Frost => [
            "Cover frost-tender saplings with fleece before forecast cold nights.",
            "Irrigate before sundown; moist soil buffers overnight temperature drops.",
        ],
        CalamityKind::PestOutbreak => [
            "Deploy pheromone traps to monitor and suppress the outbreak front.",
            "Introduce biological controls before resorting to broad treatment.",
        ],
        CalamityKind::MineralDepletion => [
            "Amend soil with compost and slow-release mineral supplements.",
            "Interplant nitrogen-fixing species to rebuild soil fertility.",
        ],
    }
}

pub const DROUGHT_SEVERE_LINE: &str =
    "Prioritize water deliveries to the most drought-sensitive stands; rationing will be needed.";

pub const ESCALATION_LINES: [&str; 2] = [
    "Activate emergency response protocols for the affected area.",
    "Prepare a replanting program for stands unlikely to recover.",
];

/// Builds the ordered recommendation list: at-risk species line first
/// (when any species falls under the survival threshold), then the
/// per-hazard mitigation pair, then severity escalations.
pub fn recommendations_for(
    scenario: &CalamityScenario,
    impacts: &[SpeciesImpactResult],
) -> Vec<String> {
    let mut lines = Vec::new();

    let at_risk: Vec<&str> = impacts
        .iter()
        .filter(|r| r.survival_rate < LOW_SURVIVAL_THRESHOLD)
        .map(|r| r.species.name.as_str())
        .collect();
    if !at_risk.is_empty() {
        lines.push(format!(
            "Survival outlook is poor for {}; consider resilient alternatives for these plantings.",
            at_risk.join(", ")
        ));
    }

    for line in mitigation_lines(scenario.kind) {
        lines.push(line.to_string());
    }
    if scenario.kind == CalamityKind::Drought && scenario.severity > DROUGHT_EXTRA_SEVERITY {
        lines.push(DROUGHT_SEVERE_LINE.to_string());
    }

    if scenario.severity > ESCALATION_SEVERITY {
        for line in ESCALATION_LINES {
            lines.push(line.to_string());
        }
    }

    lines
}
