//! Risk data provider trait definition.

use async_trait::async_trait;

use crate::errors::RiskDataError;
use crate::models::{
    ClimateScore, Company, CompanySearchQuery, GroupBy, ScoreAggregation, ScoreQuery,
};

/// Trait for climate risk data providers.
///
/// Implement this trait to add support for a new upstream risk source.
/// The batch fan-out and the analytics layer only ever see this trait,
/// so swapping the upstream is a construction-time decision.
#[async_trait]
pub trait RiskDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "DCR_API". Used for logging and
    /// error attribution.
    fn id(&self) -> &'static str;

    /// Fetch the scalar climate score record for one company.
    ///
    /// # Arguments
    ///
    /// * `company_id` - The provider-side company identifier
    /// * `query` - Horizon, pathway, risk class and metric for the score
    async fn climate_scores(
        &self,
        company_id: &str,
        query: &ScoreQuery,
    ) -> Result<ClimateScore, RiskDataError>;

    /// Fetch the asset-level score aggregation for one company, grouped
    /// by the requested dimension.
    async fn climate_scores_aggregation(
        &self,
        company_id: &str,
        query: &ScoreQuery,
        by: GroupBy,
    ) -> Result<ScoreAggregation, RiskDataError>;

    /// Search for companies matching the query.
    async fn search_companies(
        &self,
        query: &CompanySearchQuery,
    ) -> Result<Vec<Company>, RiskDataError>;
}
