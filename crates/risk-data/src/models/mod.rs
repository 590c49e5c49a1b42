//! Risk data models
//!
//! This module contains the core data types for climate risk operations:
//! - `company` - Company records and search queries (Company, CompanySearchQuery)
//! - `query` - Score query parameters (Horizon, Pathway, RiskClass, RiskMetric, GroupBy)
//! - `score` - Per-company score records with fallback accessors (ClimateScore)
//! - `aggregation` - Grouped aggregation results (ScoreAggregation, GroupedScore)
//! - `hazard` - The physical hazard taxonomy (Hazard)

mod aggregation;
mod company;
mod hazard;
mod query;
mod score;

pub use aggregation::{GroupedScore, ScoreAggregation};
pub use company::{
    Company, CompanySearchQuery, SearchMethod, SearchResults, DEFAULT_SEARCH_LIMIT,
};
pub use hazard::Hazard;
pub use query::{
    GroupBy, Horizon, Pathway, RiskClass, RiskMetric, ScoreQuery, ANALYSIS_HORIZONS,
    SELECTABLE_HORIZONS,
};
pub use score::ClimateScore;
