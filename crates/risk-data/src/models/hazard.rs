//! Physical hazard taxonomy.

use serde::{Deserialize, Serialize};

/// Physical climate hazard tracked per company.
///
/// Score records may carry a direct signal for each hazard under the
/// wire key (e.g. `heat`) or its `_score` suffixed form (`heat_score`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hazard {
    Heat,
    Flood,
    Wildfire,
    Wind,
    Drought,
    Coastal,
}

impl Hazard {
    /// All hazards in canonical display order.
    pub const ALL: [Hazard; 6] = [
        Hazard::Heat,
        Hazard::Flood,
        Hazard::Wildfire,
        Hazard::Wind,
        Hazard::Drought,
        Hazard::Coastal,
    ];

    /// Wire key for the direct per-hazard signal field.
    pub fn key(&self) -> &'static str {
        match self {
            Hazard::Heat => "heat",
            Hazard::Flood => "flood",
            Hazard::Wildfire => "wildfire",
            Hazard::Wind => "wind",
            Hazard::Drought => "drought",
            Hazard::Coastal => "coastal",
        }
    }

    /// Human-readable hazard label.
    pub fn label(&self) -> &'static str {
        match self {
            Hazard::Heat => "Heat Stress",
            Hazard::Flood => "Flood",
            Hazard::Wildfire => "Wildfire",
            Hazard::Wind => "Wind",
            Hazard::Drought => "Drought",
            Hazard::Coastal => "Coastal",
        }
    }

    /// Fixed display color. A presentation hint only, carried so every
    /// consumer renders the same hazard in the same color.
    pub fn color(&self) -> &'static str {
        match self {
            Hazard::Heat => "#ff6b6b",
            Hazard::Flood => "#4ecdc4",
            Hazard::Wildfire => "#ffa726",
            Hazard::Wind => "#42a5f5",
            Hazard::Drought => "#8d6e63",
            Hazard::Coastal => "#26c6da",
        }
    }
}
