//! Climatefolio Risk Data Crate
//!
//! This crate provides provider-agnostic climate risk data fetching for
//! portfolio analytics.
//!
//! # Overview
//!
//! The risk data crate supports:
//! - Scalar climate score records per company and query
//! - Asset-level score aggregation grouped by asset type, country or state
//! - Company search by name, ticker, ISIN or sector
//! - Best-effort batch fan-out with per-company outcomes
//! - Generation stamping so stale batches are provably discarded
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  Analytics Layer | --> |   ScoreQuery     |  (horizon, pathway, risk, metric)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |      batch       |  (parallel fan-out, per-item Result)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          | RiskDataProvider |  (DCR API, ...)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  ClimateScore    |  (fallback-chain accessors)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`ScoreQuery`] - Validated query parameter tuple
//! - [`ClimateScore`] - Scalar score record with dynamic per-horizon fields
//! - [`ScoreAggregation`] - Grouped asset-level aggregation
//! - [`Company`] - Search/list record
//! - [`Hazard`] - Fixed physical hazard taxonomy
//! - [`QueryGeneration`] - Latest-batch-wins stamping

pub mod batch;
pub mod errors;
pub mod generation;
pub mod models;
pub mod provider;

// Re-export all public types from models
pub use models::{
    ClimateScore, Company, CompanySearchQuery, GroupBy, GroupedScore, Hazard, Horizon, Pathway,
    RiskClass, RiskMetric, ScoreAggregation, ScoreQuery, SearchMethod, SearchResults,
    ANALYSIS_HORIZONS, DEFAULT_SEARCH_LIMIT, SELECTABLE_HORIZONS,
};

// Re-export batch types
pub use batch::{
    fetch_climate_scores, fetch_score_aggregations, BatchOutcome, CompanyScoreAggregation,
    CompanyScores,
};

// Re-export generation types
pub use generation::{Generation, QueryGeneration};

// Re-export provider types
pub use errors::RiskDataError;
pub use provider::dcr_api::{DcrApiConfig, DcrApiProvider};
pub use provider::RiskDataProvider;
