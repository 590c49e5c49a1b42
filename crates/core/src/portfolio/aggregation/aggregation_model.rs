//! Breakdown records produced by the aggregation engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD};
use climatefolio_risk_data::Hazard;

/// Qualitative banding of a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    /// No score data was observed for the bucket.
    Unknown,
}

impl RiskLevel {
    /// Bands a score: above 0.6 is high, above 0.3 medium, else low.
    pub fn from_score(score: f64) -> Self {
        if score > HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if score > MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Bands an optional score; a missing score is `Unknown` rather
    /// than defaulting to low.
    pub fn from_optional_score(score: Option<f64>) -> Self {
        match score {
            Some(value) => Self::from_score(value),
            None => RiskLevel::Unknown,
        }
    }
}

/// One sector's share of the portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectorBucket {
    pub sector: String,
    /// Sum of member company weights (percent).
    pub total_weight: Decimal,
    /// Representative score for the bucket: the highest score observed
    /// among members. `None` when no member had score data.
    pub avg_score: Option<f64>,
    /// Number of member companies.
    pub companies: usize,
    pub risk_level: RiskLevel,
    /// Share of portfolio-wide weighted risk, in [0, 1].
    pub weighted_contribution: f64,
}

/// One country's share of the portfolio.
///
/// A company whose grouped result spans several countries contributes
/// its full weight to each of them, so geography weights can exceed
/// the portfolio total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeographyBucket {
    pub country: String,
    pub total_weight: Decimal,
    /// Highest score observed among contributing entries, if any.
    pub avg_score: Option<f64>,
    /// Number of distinct companies contributing to the bucket.
    pub companies: usize,
    pub risk_level: RiskLevel,
    pub weighted_contribution: f64,
}

/// One hazard's share of the portfolio risk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HazardBucket {
    pub hazard: Hazard,
    /// Sum of weight/100 over companies exhibiting the hazard.
    pub portfolio_exposure: f64,
    /// Highest hazard-specific score among exposed companies.
    pub avg_risk_score: f64,
    /// Number of exposed companies.
    pub companies: usize,
    pub risk_level: RiskLevel,
    /// Normalized share of exposure-weighted risk across hazards.
    pub value: f64,
    /// Display hint.
    pub color: String,
}

/// One analysis year's weight-normalized risk totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HorizonBucket {
    /// Analysis year.
    pub horizon: u16,
    /// Weight-normalized sum of per-company scores for the year.
    pub score: f64,
    /// Weight-normalized sum of per-company impacts for the year.
    pub impact: f64,
    /// Horizons always span the whole portfolio.
    pub weight: Decimal,
    pub weighted_contribution: f64,
}

/// Coarse diversification label for the summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diversification {
    Good,
    Moderate,
    Low,
}

impl Diversification {
    /// More than 10 holdings is good, more than 5 moderate, else low.
    pub fn from_company_count(count: usize) -> Self {
        if count > 10 {
            Diversification::Good
        } else if count > 5 {
            Diversification::Moderate
        } else {
            Diversification::Low
        }
    }
}

/// Headline metrics summarizing the portfolio's sector breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_companies: usize,
    pub total_weight: Decimal,
    /// Weight-averaged sector score; zero for an empty or zero-weight
    /// portfolio.
    pub avg_risk_score: f64,
    /// Number of sector buckets banded High.
    pub high_risk_sectors: usize,
    pub diversification: Diversification,
}
