//! Portfolio analytics orchestration service.
//!
//! Bridges the stored portfolio to the risk data layer: each breakdown
//! issues the batch it needs, stamps it with that view's generation and
//! feeds the joined results to the pure aggregation engine. Stale
//! batches surface as [`Error::Superseded`] instead of overwriting a
//! newer view.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use climatefolio_risk_data::{
    fetch_climate_scores, fetch_score_aggregations, CompanyScoreAggregation, CompanyScores,
    GroupBy, QueryGeneration, RiskDataProvider, ScoreQuery,
};

use crate::errors::{Error, Result};
use crate::portfolio::aggregation::{
    aggregate_by_geography, aggregate_by_hazard, aggregate_by_horizon, aggregate_by_sector,
    analyze_drivers, summarize, DriverAnalysis, GeographyBucket, HazardAttribution, HazardBucket,
    HorizonBucket, PortfolioSummary, SectorBucket, SectorHazardPriors,
};
use crate::portfolio::companies::PortfolioCompany;

use super::analytics_traits::PortfolioAnalyticsServiceTrait;

/// One generation counter per breakdown, so refetching one view never
/// discards another view's in-flight batch.
#[derive(Debug, Default)]
struct ViewGenerations {
    sector: QueryGeneration,
    geography: QueryGeneration,
    hazard: QueryGeneration,
    horizon: QueryGeneration,
    drivers: QueryGeneration,
    summary: QueryGeneration,
}

impl ViewGenerations {
    fn invalidate_all(&self) {
        self.sector.invalidate();
        self.geography.invalidate();
        self.hazard.invalidate();
        self.horizon.invalidate();
        self.drivers.invalidate();
        self.summary.invalidate();
    }
}

/// Service for computing portfolio risk breakdowns.
pub struct PortfolioAnalyticsService {
    provider: Arc<dyn RiskDataProvider>,
    attribution: Arc<dyn HazardAttribution>,
    generations: ViewGenerations,
}

impl PortfolioAnalyticsService {
    /// Creates a new analytics service with the static sector prior
    /// table for hazard attribution.
    pub fn new(provider: Arc<dyn RiskDataProvider>) -> Self {
        Self::with_attribution(provider, Arc::new(SectorHazardPriors))
    }

    /// Creates a new analytics service with a custom hazard
    /// attribution source.
    pub fn with_attribution(
        provider: Arc<dyn RiskDataProvider>,
        attribution: Arc<dyn HazardAttribution>,
    ) -> Self {
        Self {
            provider,
            attribution,
            generations: ViewGenerations::default(),
        }
    }

    /// Invalidates every outstanding batch. Call when the portfolio
    /// changes while requests may still be in flight.
    pub fn invalidate(&self) {
        debug!("Invalidating all in-flight analytics batches");
        self.generations.invalidate_all();
    }

    async fn scalar_results(
        &self,
        generation: &QueryGeneration,
        companies: &[PortfolioCompany],
        query: &ScoreQuery,
    ) -> Result<Vec<CompanyScores>> {
        let stamp = generation.begin();
        let ids = company_ids(companies);
        fetch_climate_scores(self.provider.as_ref(), &ids, query, Some(&stamp))
            .await
            .into_results()
            .ok_or(Error::Superseded)
    }

    async fn aggregation_results(
        &self,
        generation: &QueryGeneration,
        companies: &[PortfolioCompany],
        query: &ScoreQuery,
        by: GroupBy,
    ) -> Result<Vec<CompanyScoreAggregation>> {
        let stamp = generation.begin();
        let ids = company_ids(companies);
        fetch_score_aggregations(self.provider.as_ref(), &ids, query, by, Some(&stamp))
            .await
            .into_results()
            .ok_or(Error::Superseded)
    }
}

fn company_ids(companies: &[PortfolioCompany]) -> Vec<String> {
    companies.iter().map(|c| c.id.clone()).collect()
}

#[async_trait]
impl PortfolioAnalyticsServiceTrait for PortfolioAnalyticsService {
    async fn sector_breakdown(
        &self,
        companies: &[PortfolioCompany],
        query: &ScoreQuery,
    ) -> Result<Vec<SectorBucket>> {
        debug!("Computing sector breakdown for {} companies", companies.len());
        let results = self
            .aggregation_results(&self.generations.sector, companies, query, GroupBy::AssetType)
            .await?;
        Ok(aggregate_by_sector(companies, &results))
    }

    async fn geography_breakdown(
        &self,
        companies: &[PortfolioCompany],
        query: &ScoreQuery,
    ) -> Result<Vec<GeographyBucket>> {
        debug!(
            "Computing geography breakdown for {} companies",
            companies.len()
        );
        let results = self
            .aggregation_results(&self.generations.geography, companies, query, GroupBy::Country)
            .await?;
        Ok(aggregate_by_geography(companies, &results))
    }

    async fn hazard_breakdown(
        &self,
        companies: &[PortfolioCompany],
        query: &ScoreQuery,
    ) -> Result<Vec<HazardBucket>> {
        debug!("Computing hazard breakdown for {} companies", companies.len());
        let results = self
            .scalar_results(&self.generations.hazard, companies, query)
            .await?;
        Ok(aggregate_by_hazard(companies, &results))
    }

    async fn horizon_breakdown(
        &self,
        companies: &[PortfolioCompany],
        query: &ScoreQuery,
    ) -> Result<Vec<HorizonBucket>> {
        debug!(
            "Computing horizon breakdown for {} companies",
            companies.len()
        );
        let results = self
            .scalar_results(&self.generations.horizon, companies, query)
            .await?;
        Ok(aggregate_by_horizon(companies, &results))
    }

    async fn driver_analysis(
        &self,
        companies: &[PortfolioCompany],
        query: &ScoreQuery,
    ) -> Result<DriverAnalysis> {
        debug!(
            "Computing driver analysis for {} companies with metric {}",
            companies.len(),
            query.metric.as_str()
        );
        let results = self
            .scalar_results(&self.generations.drivers, companies, query)
            .await?;
        Ok(analyze_drivers(
            companies,
            &results,
            query.metric,
            self.attribution.as_ref(),
        ))
    }

    async fn portfolio_summary(
        &self,
        companies: &[PortfolioCompany],
        query: &ScoreQuery,
    ) -> Result<PortfolioSummary> {
        debug!(
            "Computing portfolio summary for {} companies",
            companies.len()
        );
        let results = self
            .aggregation_results(&self.generations.summary, companies, query, GroupBy::AssetType)
            .await?;
        let sectors = aggregate_by_sector(companies, &results);
        Ok(summarize(companies, &sectors))
    }
}
