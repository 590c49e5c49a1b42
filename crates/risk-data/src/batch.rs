//! Best-effort batch fetching of per-company scores.
//!
//! Portfolio views need one score (or aggregation) per company under a
//! single query. The fan-out here issues all requests in parallel and
//! always resolves: each company's outcome is captured individually, so
//! one failing company never fails the batch. Output order matches the
//! input id order.

use futures::future::join_all;
use log::{debug, warn};

use crate::errors::RiskDataError;
use crate::generation::Generation;
use crate::models::{ClimateScore, GroupBy, ScoreAggregation, ScoreQuery};
use crate::provider::RiskDataProvider;

/// Per-company outcome of a scalar score batch.
#[derive(Debug)]
pub struct CompanyScores {
    pub company_id: String,
    pub result: Result<ClimateScore, RiskDataError>,
}

impl CompanyScores {
    pub fn success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn data(&self) -> Option<&ClimateScore> {
        self.result.as_ref().ok()
    }
}

/// Per-company outcome of an aggregation batch.
#[derive(Debug)]
pub struct CompanyScoreAggregation {
    pub company_id: String,
    pub result: Result<ScoreAggregation, RiskDataError>,
}

impl CompanyScoreAggregation {
    pub fn success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn data(&self) -> Option<&ScoreAggregation> {
        self.result.as_ref().ok()
    }
}

/// Result of awaiting a batch that was stamped with a generation.
#[derive(Debug)]
pub enum BatchOutcome<T> {
    /// The batch is still the newest one; results are usable.
    Complete(Vec<T>),
    /// A newer batch was started while this one was in flight. The
    /// results were discarded and must not reach any consumer.
    Superseded,
}

impl<T> BatchOutcome<T> {
    pub fn is_superseded(&self) -> bool {
        matches!(self, BatchOutcome::Superseded)
    }

    pub fn into_results(self) -> Option<Vec<T>> {
        match self {
            BatchOutcome::Complete(results) => Some(results),
            BatchOutcome::Superseded => None,
        }
    }
}

fn log_batch_failures(kind: &str, provider: &str, failed: usize, total: usize) {
    if failed > 0 {
        warn!(
            "{} batch via {}: {}/{} companies failed",
            kind, provider, failed, total
        );
    }
}

/// Fetch scalar climate scores for every company id, in parallel.
///
/// When `generation` is given and a newer generation has begun by the
/// time all requests resolve, the batch reports [`BatchOutcome::Superseded`]
/// and drops its results.
pub async fn fetch_climate_scores(
    provider: &dyn RiskDataProvider,
    company_ids: &[String],
    query: &ScoreQuery,
    generation: Option<&Generation>,
) -> BatchOutcome<CompanyScores> {
    debug!(
        "Fetching climate scores for {} companies via {}",
        company_ids.len(),
        provider.id()
    );

    let results = join_all(company_ids.iter().map(|id| async move {
        CompanyScores {
            company_id: id.clone(),
            result: provider.climate_scores(id, query).await,
        }
    }))
    .await;

    if let Some(generation) = generation {
        if !generation.is_current() {
            debug!(
                "Discarding stale climate score batch (generation {})",
                generation.id()
            );
            return BatchOutcome::Superseded;
        }
    }

    let failed = results.iter().filter(|r| !r.success()).count();
    log_batch_failures("Climate score", provider.id(), failed, results.len());

    BatchOutcome::Complete(results)
}

/// Fetch grouped score aggregations for every company id, in parallel.
///
/// Same discard semantics as [`fetch_climate_scores`].
pub async fn fetch_score_aggregations(
    provider: &dyn RiskDataProvider,
    company_ids: &[String],
    query: &ScoreQuery,
    by: GroupBy,
    generation: Option<&Generation>,
) -> BatchOutcome<CompanyScoreAggregation> {
    debug!(
        "Fetching {} aggregations for {} companies via {}",
        by.as_str(),
        company_ids.len(),
        provider.id()
    );

    let results = join_all(company_ids.iter().map(|id| async move {
        CompanyScoreAggregation {
            company_id: id.clone(),
            result: provider.climate_scores_aggregation(id, query, by).await,
        }
    }))
    .await;

    if let Some(generation) = generation {
        if !generation.is_current() {
            debug!(
                "Discarding stale aggregation batch (generation {})",
                generation.id()
            );
            return BatchOutcome::Superseded;
        }
    }

    let failed = results.iter().filter(|r| !r.success()).count();
    log_batch_failures("Aggregation", provider.id(), failed, results.len());

    BatchOutcome::Complete(results)
}
