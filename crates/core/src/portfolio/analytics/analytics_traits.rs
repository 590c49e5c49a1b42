//! Portfolio analytics trait definitions.

use async_trait::async_trait;
use climatefolio_risk_data::ScoreQuery;

use crate::errors::Result;
use crate::portfolio::aggregation::{
    DriverAnalysis, GeographyBucket, HazardBucket, HorizonBucket, PortfolioSummary, SectorBucket,
};
use crate::portfolio::companies::PortfolioCompany;

/// Trait for portfolio analytics orchestration.
///
/// Each operation fetches the risk data one breakdown needs, joins the
/// batch and runs the matching pure aggregation. Operations return
/// [`Error::Superseded`](crate::errors::Error::Superseded) when a newer
/// request for the same view started while this one was in flight, so
/// callers never apply stale results.
#[async_trait]
pub trait PortfolioAnalyticsServiceTrait: Send + Sync {
    /// Sector breakdown of the portfolio, sorted by descending weight.
    async fn sector_breakdown(
        &self,
        companies: &[PortfolioCompany],
        query: &ScoreQuery,
    ) -> Result<Vec<SectorBucket>>;

    /// Geography breakdown across asset countries, sorted by descending
    /// weight.
    async fn geography_breakdown(
        &self,
        companies: &[PortfolioCompany],
        query: &ScoreQuery,
    ) -> Result<Vec<GeographyBucket>>;

    /// Physical hazard breakdown in taxonomy order.
    async fn hazard_breakdown(
        &self,
        companies: &[PortfolioCompany],
        query: &ScoreQuery,
    ) -> Result<Vec<HazardBucket>>;

    /// Risk evolution across the fixed analysis horizons.
    async fn horizon_breakdown(
        &self,
        companies: &[PortfolioCompany],
        query: &ScoreQuery,
    ) -> Result<Vec<HorizonBucket>>;

    /// Ranked company and hazard drivers plus concentration metrics,
    /// using the metric selected on `query`.
    async fn driver_analysis(
        &self,
        companies: &[PortfolioCompany],
        query: &ScoreQuery,
    ) -> Result<DriverAnalysis>;

    /// Headline portfolio summary derived from the sector breakdown.
    async fn portfolio_summary(
        &self,
        companies: &[PortfolioCompany],
        query: &ScoreQuery,
    ) -> Result<PortfolioSummary>;
}
