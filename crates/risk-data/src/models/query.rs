//! Query parameter types for climate score requests.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::RiskDataError;

/// Analysis horizons accepted by the risk API, in ascending order.
pub const ANALYSIS_HORIZONS: [u16; 9] = [2025, 2030, 2040, 2050, 2060, 2070, 2080, 2090, 2100];

/// Subset of horizons exposed by parameter selectors. The API itself
/// accepts any member of [`ANALYSIS_HORIZONS`].
pub const SELECTABLE_HORIZONS: [u16; 3] = [2030, 2040, 2050];

/// A validated analysis horizon year.
///
/// Construction is restricted to the members of [`ANALYSIS_HORIZONS`],
/// so a `Horizon` held anywhere in the system is always a year the
/// upstream API understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Horizon(u16);

impl Horizon {
    /// Validate `year` against the fixed horizon set.
    pub fn new(year: u16) -> Result<Self, RiskDataError> {
        if ANALYSIS_HORIZONS.contains(&year) {
            Ok(Self(year))
        } else {
            Err(RiskDataError::InvalidQuery(format!(
                "unsupported horizon year: {}",
                year
            )))
        }
    }

    /// The default horizon used when none is selected.
    pub fn default_year() -> Self {
        Self(2050)
    }

    /// All valid horizons, for iteration in horizon breakdowns.
    pub fn all() -> impl Iterator<Item = Horizon> {
        ANALYSIS_HORIZONS.into_iter().map(Horizon)
    }

    pub fn year(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for Horizon {
    type Error = RiskDataError;

    fn try_from(year: u16) -> Result<Self, Self::Error> {
        Self::new(year)
    }
}

/// Shared socioeconomic pathway (climate scenario).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Pathway {
    Ssp126,
    #[default]
    Ssp245,
    Ssp370,
    Ssp585,
}

impl Pathway {
    /// Wire value expected by the risk API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pathway::Ssp126 => "ssp126",
            Pathway::Ssp245 => "ssp245",
            Pathway::Ssp370 => "ssp370",
            Pathway::Ssp585 => "ssp585",
        }
    }

    /// Human-readable scenario label.
    pub fn label(&self) -> &'static str {
        match self {
            Pathway::Ssp126 => "SSP1-2.6 (Low emissions)",
            Pathway::Ssp245 => "SSP2-4.5 (Intermediate emissions)",
            Pathway::Ssp370 => "SSP3-7.0 (High emissions)",
            Pathway::Ssp585 => "SSP5-8.5 (Very high emissions)",
        }
    }

    pub fn all() -> [Pathway; 4] {
        [
            Pathway::Ssp126,
            Pathway::Ssp245,
            Pathway::Ssp370,
            Pathway::Ssp585,
        ]
    }
}

/// Risk class dimension of a score query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskClass {
    #[default]
    Physical,
    Transition,
}

impl RiskClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskClass::Physical => "physical",
            RiskClass::Transition => "transition",
        }
    }
}

/// Risk metric requested from the API and used for driver ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RiskMetric {
    #[default]
    #[serde(rename = "dcr_score")]
    DcrScore,
    #[serde(rename = "expected_impact")]
    ExpectedImpact,
    #[serde(rename = "cvar_50")]
    Cvar50,
    #[serde(rename = "cvar_95")]
    Cvar95,
    #[serde(rename = "cvar_99")]
    Cvar99,
    #[serde(rename = "var_50")]
    Var50,
    #[serde(rename = "var_95")]
    Var95,
    #[serde(rename = "var_99")]
    Var99,
}

impl RiskMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskMetric::DcrScore => "dcr_score",
            RiskMetric::ExpectedImpact => "expected_impact",
            RiskMetric::Cvar50 => "cvar_50",
            RiskMetric::Cvar95 => "cvar_95",
            RiskMetric::Cvar99 => "cvar_99",
            RiskMetric::Var50 => "var_50",
            RiskMetric::Var95 => "var_95",
            RiskMetric::Var99 => "var_99",
        }
    }

    pub fn all() -> [RiskMetric; 8] {
        [
            RiskMetric::DcrScore,
            RiskMetric::ExpectedImpact,
            RiskMetric::Cvar50,
            RiskMetric::Cvar95,
            RiskMetric::Cvar99,
            RiskMetric::Var50,
            RiskMetric::Var95,
            RiskMetric::Var99,
        ]
    }
}

/// Grouping dimension for asset-level score aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    AssetType,
    Country,
    State,
}

impl GroupBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::AssetType => "asset_type",
            GroupBy::Country => "country",
            GroupBy::State => "state",
        }
    }
}

/// Full parameter tuple for a climate score request.
///
/// Every score fetched for a portfolio view carries one of these; views
/// issuing the same query for every company is what makes their batches
/// comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreQuery {
    pub horizon: Horizon,
    pub pathway: Pathway,
    pub risk: RiskClass,
    pub metric: RiskMetric,
}

impl Default for ScoreQuery {
    fn default() -> Self {
        Self {
            horizon: Horizon::default_year(),
            pathway: Pathway::default(),
            risk: RiskClass::default(),
            metric: RiskMetric::default(),
        }
    }
}

impl ScoreQuery {
    /// Build a query with an explicit horizon and defaults elsewhere.
    pub fn for_horizon(horizon: Horizon) -> Self {
        Self {
            horizon,
            ..Self::default()
        }
    }
}
