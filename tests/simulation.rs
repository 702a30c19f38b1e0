use calamity_sim::{
    run_simulation,
    sim::{
        impact_for,
        recommend::{mitigation_lines, DROUGHT_SEVERE_LINE, ESCALATION_LINES},
    },
    species::default_profile,
    CalamityKind, CalamityScenario, SpeciesCatalog,
};

fn scenario(kind: CalamityKind, severity: f64, affected_area: f64, duration: f64) -> CalamityScenario {
    CalamityScenario {
        kind,
        severity,
        affected_area,
        duration_months: duration,
    }
}

const ALL_KINDS: [CalamityKind; 6] = [
    CalamityKind::Drought,
    CalamityKind::Flood,
    CalamityKind::HeatWave,
    CalamityKind::Frost,
    CalamityKind::PestOutbreak,
    CalamityKind::MineralDepletion,
];

#[test]
fn survival_and_growth_stay_in_bounds_across_the_catalog() {
    let catalog = SpeciesCatalog::builtin();
    for kind in ALL_KINDS {
        for severity in [0.0, 25.0, 50.0, 80.0, 100.0] {
            for area in [0.0, 40.0, 100.0] {
                for duration in [0.0, 3.0, 12.0, 36.0] {
                    let sc = scenario(kind, severity, area, duration);
                    for name in catalog.names() {
                        let record = catalog.lookup_or_default(name);
                        let numbers = impact_for(&sc, &record.profile);
                        assert!(
                            (5..=100).contains(&numbers.survival_rate),
                            "survival {} out of [5,100] for {} under {:?}",
                            numbers.survival_rate,
                            name,
                            sc
                        );
                        assert!(
                            numbers.growth_impact <= 95,
                            "growth {} above 95 for {} under {:?}",
                            numbers.growth_impact,
                            name,
                            sc
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn golden_drought_case_for_neem() {
    // severityFactor 0.8, areaFactor 0.6, durationFactor 0.5 ->
    // mortality 0.1 * 0.8 * 0.6 * 1.25 = 0.06
    let catalog = SpeciesCatalog::builtin();
    let sc = scenario(CalamityKind::Drought, 80.0, 60.0, 6.0);
    let result = run_simulation(&sc, &["Neem".to_string()], &catalog);

    assert_eq!(result.species_impact.len(), 1);
    let neem = &result.species_impact[0];
    assert_eq!(neem.species.name, "Neem");
    assert_eq!(neem.survival_rate, 94, "round((1-0.06)*100)");
    assert_eq!(neem.growth_impact, 7, "round(min(95, 0.06*120))");
    // round(6 * (1/0.8) * 1.8) = round(13.5) = 14, half away from zero
    assert_eq!(neem.recovery_time, 14);
}

#[test]
fn unknown_species_matches_an_explicit_default_profile() {
    let catalog = SpeciesCatalog::builtin();
    let sc = scenario(CalamityKind::Frost, 65.0, 45.0, 4.0);

    let fallback = catalog.lookup_or_default("Martian Fern");
    assert_eq!(fallback.profile, default_profile());
    assert_eq!(fallback.info.name, "Martian Fern");

    let via_fallback = impact_for(&sc, &fallback.profile);
    let via_explicit = impact_for(&sc, &default_profile());
    assert_eq!(via_fallback, via_explicit);
}

#[test]
fn empty_selection_yields_empty_impacts_and_the_floor_carbon_delta() {
    let catalog = SpeciesCatalog::builtin();
    let sc = scenario(CalamityKind::Drought, 80.0, 60.0, 6.0);
    let result = run_simulation(&sc, &[], &catalog);

    assert!(result.species_impact.is_empty());
    // mean over an empty selection is 0, so carbon delta hits its floor
    assert_eq!(result.metrics_impact.carbon_capture, -80);
    assert_eq!(result.metrics_impact.ndvi, -19, "-round(0.8*0.6*40)");
    assert_eq!(result.metrics_impact.moisture, -40, "drought: -round(0.8*50)");
    assert_eq!(result.metrics_impact.soil_health, -16, "-round(0.8*20)");
}

#[test]
fn metric_deltas_follow_the_hazard_class() {
    let catalog = SpeciesCatalog::builtin();
    let species = vec!["Neem".to_string(), "Bamboo".to_string()];

    let flood = run_simulation(&scenario(CalamityKind::Flood, 50.0, 50.0, 2.0), &species, &catalog);
    assert_eq!(flood.metrics_impact.moisture, 15, "flood adds moisture: +round(0.5*30)");

    let minerals = run_simulation(
        &scenario(CalamityKind::MineralDepletion, 50.0, 50.0, 2.0),
        &species,
        &catalog,
    );
    assert_eq!(minerals.metrics_impact.soil_health, -30, "-round(0.5*60)");

    let frost = run_simulation(&scenario(CalamityKind::Frost, 50.0, 50.0, 2.0), &species, &catalog);
    assert_eq!(frost.metrics_impact.moisture, -10, "default: -round(0.5*20)");
    assert_eq!(frost.metrics_impact.soil_health, -10);
}

#[test]
fn recommendations_always_carry_the_mitigation_pair_in_order() {
    let catalog = SpeciesCatalog::builtin();
    for kind in ALL_KINDS {
        // mild scenario: no at-risk species, no escalation
        let result = run_simulation(
            &scenario(kind, 30.0, 30.0, 2.0),
            &["Neem".to_string()],
            &catalog,
        );
        let pair = mitigation_lines(kind);
        assert_eq!(
            result.recommendations,
            vec![pair[0].to_string(), pair[1].to_string()],
            "mild {kind:?} scenario should yield exactly the mitigation pair"
        );
    }
}

#[test]
fn severe_scenarios_append_the_escalation_lines_last() {
    let catalog = SpeciesCatalog::builtin();
    let result = run_simulation(
        &scenario(CalamityKind::PestOutbreak, 95.0, 80.0, 6.0),
        &["Mango".to_string()],
        &catalog,
    );
    let n = result.recommendations.len();
    assert!(n >= 4, "expected mitigation pair plus escalations, got {n}");
    assert_eq!(result.recommendations[n - 2], ESCALATION_LINES[0]);
    assert_eq!(result.recommendations[n - 1], ESCALATION_LINES[1]);
}

#[test]
fn severe_drought_gets_the_extra_water_rationing_line() {
    let catalog = SpeciesCatalog::builtin();
    let result = run_simulation(
        &scenario(CalamityKind::Drought, 65.0, 50.0, 3.0),
        &["Neem".to_string()],
        &catalog,
    );
    let pair = mitigation_lines(CalamityKind::Drought);
    assert_eq!(
        result.recommendations,
        vec![
            pair[0].to_string(),
            pair[1].to_string(),
            DROUGHT_SEVERE_LINE.to_string()
        ],
        "severity above 60 but not 70 adds only the rationing line"
    );
}

#[test]
fn extra_lines_require_strictly_exceeding_their_thresholds() {
    let catalog = SpeciesCatalog::builtin();
    let pair = mitigation_lines(CalamityKind::Drought);

    // Severity exactly 60: the rationing line is not yet added.
    let at_sixty = run_simulation(
        &scenario(CalamityKind::Drought, 60.0, 50.0, 3.0),
        &["Neem".to_string()],
        &catalog,
    );
    assert_eq!(
        at_sixty.recommendations,
        vec![pair[0].to_string(), pair[1].to_string()],
        "severity 60 is not above the rationing threshold"
    );

    // Severity exactly 70: rationing line yes, escalations not yet.
    let at_seventy = run_simulation(
        &scenario(CalamityKind::Drought, 70.0, 50.0, 3.0),
        &["Neem".to_string()],
        &catalog,
    );
    assert_eq!(
        at_seventy.recommendations,
        vec![
            pair[0].to_string(),
            pair[1].to_string(),
            DROUGHT_SEVERE_LINE.to_string()
        ],
        "severity 70 is not above the escalation threshold"
    );

    for line in ESCALATION_LINES {
        assert!(
            !at_sixty.recommendations.contains(&line.to_string()),
            "no escalation at severity 60"
        );
        assert!(
            !at_seventy.recommendations.contains(&line.to_string()),
            "no escalation at severity 70"
        );
    }
}

#[test]
fn at_risk_species_are_named_first_in_input_order() {
    let catalog = SpeciesCatalog::builtin();
    // Severe flood: Teak (flood 0.6) and Acacia (flood 0.55) both fall
    // under 50% survival at full severity, area, and saturated duration.
    let sc = scenario(CalamityKind::Flood, 100.0, 100.0, 12.0);
    let species = vec![
        "Teak".to_string(),
        "Jamun".to_string(),
        "Acacia".to_string(),
    ];
    let result = run_simulation(&sc, &species, &catalog);

    let teak = &result.species_impact[0];
    let jamun = &result.species_impact[1];
    let acacia = &result.species_impact[2];
    assert!(teak.survival_rate < 50, "Teak survival {}", teak.survival_rate);
    assert!(jamun.survival_rate >= 50, "Jamun survival {}", jamun.survival_rate);
    assert!(acacia.survival_rate < 50, "Acacia survival {}", acacia.survival_rate);

    let first = &result.recommendations[0];
    assert!(
        first.contains("Teak, Acacia"),
        "at-risk line should list species in input order, got: {first}"
    );
    assert!(!first.contains("Jamun"), "Jamun is not at risk: {first}");
}

#[test]
fn mortality_past_total_loss_floors_survival_at_five() {
    // Mango under a year-long total frost: 0.85 * 1.0 * 1.0 * 1.5 = 1.275
    let catalog = SpeciesCatalog::builtin();
    let sc = scenario(CalamityKind::Frost, 100.0, 100.0, 24.0);
    let mango = catalog.lookup_or_default("Mango");
    let numbers = impact_for(&sc, &mango.profile);
    assert_eq!(numbers.survival_rate, 5);
    assert_eq!(numbers.growth_impact, 95, "growth capped even past total loss");
}

#[test]
fn results_preserve_selection_order() {
    let catalog = SpeciesCatalog::builtin();
    let species = vec![
        "Bamboo".to_string(),
        "Neem".to_string(),
        "Bamboo".to_string(),
    ];
    let result = run_simulation(
        &scenario(CalamityKind::HeatWave, 40.0, 40.0, 3.0),
        &species,
        &catalog,
    );
    let names: Vec<&str> = result
        .species_impact
        .iter()
        .map(|r| r.species.name.as_str())
        .collect();
    assert_eq!(names, vec!["Bamboo", "Neem", "Bamboo"]);
}

#[test]
fn scenario_bounds_are_rejected_not_clamped() {
    let bad = [
        scenario(CalamityKind::Drought, 150.0, 50.0, 3.0),
        scenario(CalamityKind::Drought, -1.0, 50.0, 3.0),
        scenario(CalamityKind::Drought, 50.0, 101.0, 3.0),
        scenario(CalamityKind::Drought, 50.0, 50.0, -2.0),
        scenario(CalamityKind::Drought, f64::NAN, 50.0, 3.0),
    ];
    for sc in bad {
        assert!(sc.validate().is_err(), "expected rejection of {sc:?}");
    }
    assert!(scenario(CalamityKind::Drought, 0.0, 0.0, 0.0).validate().is_ok());
    assert!(scenario(CalamityKind::Drought, 100.0, 100.0, 240.0).validate().is_ok());
}
