use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::scenario::CalamityKind;

/// Per-species hazard coefficients, each in [0,1]; higher = more
/// vulnerable. `recovery_rate` is in (0,1] and divides recovery time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesProfile {
    pub drought_sensitivity: f64,
    pub flood_sensitivity: f64,
    pub heat_sensitivity: f64,
    pub frost_sensitivity: f64,
    pub pest_sensitivity: f64,
    pub mineral_dependency: f64,
    pub recovery_rate: f64,
}

impl SpeciesProfile {
    /// Checks the coefficient domains: the six hazard coefficients must
    /// lie in [0,1] and `recovery_rate` in (0,1]. A zero recovery rate
    /// would turn recovery time into a division by zero.
    pub fn validate(&self) -> Result<()> {
        let coefficients = [
            ("droughtSensitivity", self.drought_sensitivity),
            ("floodSensitivity", self.flood_sensitivity),
            ("heatSensitivity", self.heat_sensitivity),
            ("frostSensitivity", self.frost_sensitivity),
            ("pestSensitivity", self.pest_sensitivity),
            ("mineralDependency", self.mineral_dependency),
        ];
        for (field, value) in coefficients {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                bail!("{field} must be in [0,1], got {value}");
            }
        }
        if !self.recovery_rate.is_finite()
            || self.recovery_rate <= 0.0
            || self.recovery_rate > 1.0
        {
            bail!(
                "recoveryRate must be in (0,1], got {}",
                self.recovery_rate
            );
        }
        Ok(())
    }

    pub fn sensitivity_to(&self, kind: CalamityKind) -> f64 {
        match kind {
            CalamityKind::Drought => self.drought_sensitivity,
            CalamityKind::Flood => self.flood_sensitivity,
            CalamityKind::HeatWave => self.heat_sensitivity,
            CalamityKind::Frost => self.frost_sensitivity,
            CalamityKind::PestOutbreak => self.pest_sensitivity,
            CalamityKind::MineralDepletion => self.mineral_dependency,
        }
    }
}

/// Descriptive record echoed back inside each impact result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub suitability: u32,
    pub water_requirement: String,
    pub carbon_capture: String,
    pub description: String,
    pub drought_tolerance: String,
    pub mineral_sensitivity: String,
}

/// One catalog row: the descriptive record plus the hazard profile,
/// flattened so a YAML species file reads as a single flat mapping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    #[serde(flatten)]
    pub info: SpeciesInfo,
    #[serde(flatten)]
    pub profile: SpeciesProfile,
}

#[derive(Debug, Deserialize)]
struct SpeciesFile {
    species: Vec<SpeciesRecord>,
}

/// Immutable species table, built once at startup. Unknown names resolve
/// to a shared default profile rather than an error; the permissiveness
/// is deliberate, so callers go through `lookup_or_default` explicitly.
#[derive(Debug)]
pub struct SpeciesCatalog {
    records: BTreeMap<String, SpeciesRecord>,
}

impl SpeciesCatalog {
    /// The built-in restoration catalog.
    pub fn builtin() -> Self {
        let mut records = BTreeMap::new();
        for record in builtin_records() {
            records.insert(record.info.name.clone(), record);
        }
        Self { records }
    }

    /// Catalog loaded from a YAML species file, replacing the built-in
    /// table entirely.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read species file {}", path.display()))?;
        let file: SpeciesFile = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        let mut records = BTreeMap::new();
        for record in file.species {
            record.profile.validate().with_context(|| {
                format!(
                    "Invalid species '{}' in {}",
                    record.info.name,
                    path.display()
                )
            })?;
            records.insert(record.info.name.clone(), record);
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&SpeciesRecord> {
        self.records.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Exact-name lookup; unknown names get the default profile and a
    /// placeholder descriptive record carrying the requested name.
    pub fn lookup_or_default(&self, name: &str) -> SpeciesRecord {
        match self.records.get(name) {
            Some(record) => record.clone(),
            None => SpeciesRecord {
                info: SpeciesInfo {
                    name: name.to_string(),
                    kind: "unknown".into(),
                    suitability: 50,
                    water_requirement: "moderate".into(),
                    carbon_capture: "moderate".into(),
                    description: "Species not in catalog; default resilience profile applied."
                        .into(),
                    drought_tolerance: "moderate".into(),
                    mineral_sensitivity: "moderate".into(),
                },
                profile: default_profile(),
            },
        }
    }
}

/// Profile used for any species the catalog does not know.
pub fn default_profile() -> SpeciesProfile {
    SpeciesProfile {
        drought_sensitivity: 0.4,
        flood_sensitivity: 0.4,
        heat_sensitivity: 0.3,
        frost_sensitivity: 0.5,
        pest_sensitivity: 0.3,
        mineral_dependency: 0.4,
        recovery_rate: 0.6,
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    name: &str,
    kind: &str,
    suitability: u32,
    water: &str,
    carbon: &str,
    description: &str,
    drought_tolerance: &str,
    mineral_sensitivity: &str,
    profile: SpeciesProfile,
) -> SpeciesRecord {
    SpeciesRecord {
        info: SpeciesInfo {
            name: name.into(),
            kind: kind.into(),
            suitability,
            water_requirement: water.into(),
            carbon_capture: carbon.into(),
            description: description.into(),
            drought_tolerance: drought_tolerance.into(),
            mineral_sensitivity: mineral_sensitivity.into(),
        },
        profile,
    }
}

fn builtin_records() -> Vec<SpeciesRecord> {
    vec![
        record(
            "Neem",
            "tree",
            92,
            "low",
            "medium",
            "Hardy evergreen suited to degraded, dry soils; strong pest resistance.",
            "high",
            "low",
            SpeciesProfile {
                drought_sensitivity: 0.1,
                flood_sensitivity: 0.5,
                heat_sensitivity: 0.15,
                frost_sensitivity: 0.7,
                pest_sensitivity: 0.1,
                mineral_dependency: 0.3,
                recovery_rate: 0.8,
            },
        ),
        record(
            "Banyan",
            "tree",
            85,
            "moderate",
            "high",
            "Large canopy fig; deep roots and heavy shade, slow to establish.",
            "medium",
            "low",
            SpeciesProfile {
                drought_sensitivity: 0.3,
                flood_sensitivity: 0.4,
                heat_sensitivity: 0.25,
                frost_sensitivity: 0.8,
                pest_sensitivity: 0.2,
                mineral_dependency: 0.35,
                recovery_rate: 0.5,
            },
        ),
        record(
            "Peepal",
            "tree",
            88,
            "moderate",
            "high",
            "Fast-growing sacred fig; tolerant of poor urban soils.",
            "medium",
            "low",
            SpeciesProfile {
                drought_sensitivity: 0.25,
                flood_sensitivity: 0.45,
                heat_sensitivity: 0.2,
                frost_sensitivity: 0.75,
                pest_sensitivity: 0.2,
                mineral_dependency: 0.3,
                recovery_rate: 0.7,
            },
        ),
        record(
            "Teak",
            "tree",
            78,
            "moderate",
            "high",
            "Premium deciduous hardwood; demands drained fertile soil.",
            "medium",
            "high",
            SpeciesProfile {
                drought_sensitivity: 0.35,
                flood_sensitivity: 0.6,
                heat_sensitivity: 0.3,
                frost_sensitivity: 0.7,
                pest_sensitivity: 0.3,
                mineral_dependency: 0.6,
                recovery_rate: 0.55,
            },
        ),
        record(
            "Bamboo",
            "grass",
            90,
            "high",
            "very high",
            "Fastest biomass accumulator in the catalog; regrows from rhizome.",
            "low",
            "medium",
            SpeciesProfile {
                drought_sensitivity: 0.55,
                flood_sensitivity: 0.3,
                heat_sensitivity: 0.35,
                frost_sensitivity: 0.6,
                pest_sensitivity: 0.25,
                mineral_dependency: 0.45,
                recovery_rate: 0.9,
            },
        ),
        record(
            "Acacia",
            "tree",
            86,
            "low",
            "medium",
            "Nitrogen-fixing pioneer for arid and saline ground.",
            "high",
            "low",
            SpeciesProfile {
                drought_sensitivity: 0.15,
                flood_sensitivity: 0.55,
                heat_sensitivity: 0.2,
                frost_sensitivity: 0.5,
                pest_sensitivity: 0.35,
                mineral_dependency: 0.25,
                recovery_rate: 0.75,
            },
        ),
        record(
            "Jamun",
            "tree",
            80,
            "high",
            "medium",
            "Fruit tree for riparian edges; handles waterlogging well.",
            "low",
            "medium",
            SpeciesProfile {
                drought_sensitivity: 0.5,
                flood_sensitivity: 0.2,
                heat_sensitivity: 0.3,
                frost_sensitivity: 0.65,
                pest_sensitivity: 0.3,
                mineral_dependency: 0.4,
                recovery_rate: 0.65,
            },
        ),
        record(
            "Mango",
            "tree",
            75,
            "moderate",
            "medium",
            "Orchard staple; frost-tender and pest-prone but high value.",
            "medium",
            "medium",
            SpeciesProfile {
                drought_sensitivity: 0.4,
                flood_sensitivity: 0.5,
                heat_sensitivity: 0.3,
                frost_sensitivity: 0.85,
                pest_sensitivity: 0.5,
                mineral_dependency: 0.5,
                recovery_rate: 0.6,
            },
        ),
    ]
}
