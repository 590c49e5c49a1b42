//! Portfolio module - holdings and weights, the pure risk aggregation
//! engine, analytics orchestration, and portable import/export.

pub mod aggregation;
pub mod analytics;
pub mod companies;
pub mod transfer;

// Re-export common types
pub use aggregation::{
    aggregate_by_geography, aggregate_by_hazard, aggregate_by_horizon, aggregate_by_sector,
    analyze_drivers, herfindahl_index, summarize, CompanyDriver, ConcentrationLevel,
    ConcentrationMetrics, Diversification, DriverAnalysis, GeographyBucket, HazardAttribution,
    HazardBucket, HazardDriver, HazardWeights, HorizonBucket, PortfolioSummary, RiskLevel,
    SectorBucket, SectorHazardPriors,
};
pub use analytics::{PortfolioAnalyticsService, PortfolioAnalyticsServiceTrait};
pub use companies::{
    PortfolioCompany, PortfolioService, PortfolioServiceTrait, PortfolioState, WeightStatus,
};
pub use transfer::{
    export_csv, export_file_name, export_json, import_csv, import_json, ImportError,
    PortfolioExport, CSV_HEADERS,
};
