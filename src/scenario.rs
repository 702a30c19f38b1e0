use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// The six hazard classes the simulator understands. The wire tag is the
/// snake_case name (`heat_wave`, `pest_outbreak`, ...); anything else is
/// rejected at deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalamityKind {
    Drought,
    Flood,
    HeatWave,
    Frost,
    PestOutbreak,
    MineralDepletion,
}

impl CalamityKind {
    pub fn label(&self) -> &'static str {
        match self {
            CalamityKind::Drought => "drought",
            CalamityKind::Flood => "flood",
            CalamityKind::HeatWave => "heat wave",
            CalamityKind::Frost => "frost",
            CalamityKind::PestOutbreak => "pest outbreak",
            CalamityKind::MineralDepletion => "mineral depletion",
        }
    }
}

/// A calamity event description driving the impact calculation.
/// `severity` and `affected_area` are percentages in [0,100];
/// `duration_months` is a non-negative month count.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalamityScenario {
    #[serde(rename = "type")]
    pub kind: CalamityKind,
    pub severity: f64,
    pub affected_area: f64,
    #[serde(rename = "duration")]
    pub duration_months: f64,
}

impl CalamityScenario {
    /// Rejects out-of-domain numbers instead of clamping them, so the
    /// arithmetic downstream stays inside the range its invariants were
    /// stated for.
    pub fn validate(&self) -> Result<(), ApiError> {
        if !self.severity.is_finite() || !(0.0..=100.0).contains(&self.severity) {
            return Err(ApiError::Validation(format!(
                "scenario severity must be in [0,100], got {}",
                self.severity
            )));
        }
        if !self.affected_area.is_finite() || !(0.0..=100.0).contains(&self.affected_area) {
            return Err(ApiError::Validation(format!(
                "scenario affected area must be in [0,100], got {}",
                self.affected_area
            )));
        }
        if !self.duration_months.is_finite() || self.duration_months < 0.0 {
            return Err(ApiError::Validation(format!(
                "scenario duration must be a non-negative month count, got {}",
                self.duration_months
            )));
        }
        Ok(())
    }

    pub fn severity_factor(&self) -> f64 {
        self.severity / 100.0
    }

    pub fn area_factor(&self) -> f64 {
        self.affected_area / 100.0
    }

    /// Saturates at one year: beyond 12 months extra duration no longer
    /// compounds mortality.
    pub fn duration_factor(&self) -> f64 {
        (self.duration_months / 12.0).min(1.0)
    }
}
