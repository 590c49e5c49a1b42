//! Aggregation module - pure breakdown, ranking, and concentration
//! computation over per-company risk query results.

mod aggregation_engine;
mod aggregation_model;
mod concentration;
mod drivers;
mod hazard_priors;

#[cfg(test)]
mod aggregation_engine_tests;


// Re-export the public interface
pub use aggregation_engine::{
    aggregate_by_geography, aggregate_by_hazard, aggregate_by_horizon, aggregate_by_sector,
    summarize,
};
pub use aggregation_model::{
    Diversification, GeographyBucket, HazardBucket, HorizonBucket, PortfolioSummary, RiskLevel,
    SectorBucket,
};
pub use concentration::{herfindahl_index, ConcentrationLevel, ConcentrationMetrics};
pub use drivers::{analyze_drivers, CompanyDriver, DriverAnalysis, HazardDriver};
pub use hazard_priors::{HazardAttribution, HazardWeights, SectorHazardPriors};
