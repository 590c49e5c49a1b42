//! Herfindahl-Hirschman concentration analysis.

use serde::{Deserialize, Serialize};

use super::drivers::CompanyDriver;
use crate::constants::{HHI_LOW_THRESHOLD, HHI_MODERATE_THRESHOLD};

/// Concentration banding derived from the HHI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcentrationLevel {
    Low,
    Moderate,
    High,
}

impl ConcentrationLevel {
    /// Below 0.15 is low, below 0.25 moderate, else high; the
    /// boundaries themselves land in the higher band.
    pub fn from_hhi(hhi: f64) -> Self {
        if hhi < HHI_LOW_THRESHOLD {
            ConcentrationLevel::Low
        } else if hhi < HHI_MODERATE_THRESHOLD {
            ConcentrationLevel::Moderate
        } else {
            ConcentrationLevel::High
        }
    }

    /// User-facing reading of the level.
    pub fn interpretation(&self) -> &'static str {
        match self {
            ConcentrationLevel::Low => "Portfolio risk is well diversified across companies.",
            ConcentrationLevel::Moderate => "Portfolio risk shows moderate concentration.",
            ConcentrationLevel::High => {
                "Portfolio risk is highly concentrated in a few companies."
            }
        }
    }
}

/// HHI together with its banding and reading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConcentrationMetrics {
    pub hhi: f64,
    pub concentration_level: ConcentrationLevel,
    pub interpretation: String,
}

impl ConcentrationMetrics {
    pub fn from_hhi(hhi: f64) -> Self {
        let concentration_level = ConcentrationLevel::from_hhi(hhi);
        Self {
            hhi,
            concentration_level,
            interpretation: concentration_level.interpretation().to_string(),
        }
    }

    /// HHI over ranked company drivers' percent shares.
    pub fn from_company_drivers(drivers: &[CompanyDriver]) -> Self {
        Self::from_hhi(herfindahl_index(
            drivers.iter().map(|d| d.contribution_percent / 100.0),
        ))
    }
}

/// Sum of squared shares. Empty input yields 0.
pub fn herfindahl_index(shares: impl Iterator<Item = f64>) -> f64 {
    shares.map(|share| share * share).sum()
}
