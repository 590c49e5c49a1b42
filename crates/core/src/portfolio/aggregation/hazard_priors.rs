//! Sector-to-hazard attribution priors.
//!
//! The risk API reports scalar metrics per company, not per hazard, so
//! hazard driver rankings are estimated by allocating each company's
//! metric across hazards with a fixed prior keyed on its sector. The
//! table is a heuristic, not measured data; it sits behind
//! [`HazardAttribution`] so a measured source can replace it without
//! touching the ranking algorithm.

use climatefolio_risk_data::Hazard;

/// Hazard allocation weights in [`Hazard::ALL`] order, summing to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardWeights(pub [f64; 6]);

impl HazardWeights {
    pub fn weight(&self, hazard: Hazard) -> f64 {
        let index = Hazard::ALL
            .iter()
            .position(|h| *h == hazard)
            .unwrap_or_default();
        self.0[index]
    }
}

/// Source of per-sector hazard allocation weights.
pub trait HazardAttribution: Send + Sync {
    /// Allocation weights for a sector label; unrecognized sectors get
    /// the default distribution.
    fn weights(&self, sector: &str) -> HazardWeights;
}

/// Static sector priors: heat / flood / wildfire / wind / drought /
/// coastal shares per sector, each row summing to 1.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectorHazardPriors;

/// Fallback row for sectors outside the table.
const DEFAULT_WEIGHTS: HazardWeights = HazardWeights([0.30, 0.25, 0.20, 0.15, 0.05, 0.05]);

const SECTOR_WEIGHTS: [(&str, HazardWeights); 10] = [
    ("Energy", HazardWeights([0.25, 0.30, 0.20, 0.15, 0.05, 0.05])),
    ("Tech", HazardWeights([0.40, 0.20, 0.15, 0.10, 0.10, 0.05])),
    ("Financials", HazardWeights([0.35, 0.25, 0.15, 0.15, 0.05, 0.05])),
    ("Materials", HazardWeights([0.20, 0.35, 0.25, 0.10, 0.05, 0.05])),
    ("Utilities", HazardWeights([0.15, 0.40, 0.20, 0.15, 0.05, 0.05])),
    ("Real Estate", HazardWeights([0.30, 0.35, 0.15, 0.10, 0.05, 0.05])),
    ("Healthcare", HazardWeights([0.40, 0.20, 0.15, 0.15, 0.05, 0.05])),
    ("Consumer", HazardWeights([0.35, 0.25, 0.20, 0.10, 0.05, 0.05])),
    ("Industrial", HazardWeights([0.25, 0.30, 0.20, 0.15, 0.05, 0.05])),
    (
        "Communication",
        HazardWeights([0.30, 0.25, 0.20, 0.15, 0.05, 0.05]),
    ),
];

impl HazardAttribution for SectorHazardPriors {
    fn weights(&self, sector: &str) -> HazardWeights {
        SECTOR_WEIGHTS
            .iter()
            .find(|(name, _)| *name == sector)
            .map(|(_, weights)| *weights)
            .unwrap_or(DEFAULT_WEIGHTS)
    }
}
