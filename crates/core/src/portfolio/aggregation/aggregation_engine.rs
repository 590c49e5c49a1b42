//! Pure aggregation over per-company risk query results.
//!
//! Every function here is synchronous and deterministic: a portfolio
//! plus a settled result batch in, bucket vectors out. A company whose
//! query failed contributes nothing to any bucket and never aborts the
//! aggregation. Division-by-zero cases (empty portfolio, zero weighted
//! risk) short-circuit to zero contributions.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::aggregation_model::{
    Diversification, GeographyBucket, HazardBucket, HorizonBucket, PortfolioSummary, RiskLevel,
    SectorBucket,
};
use crate::portfolio::companies::{weights, PortfolioCompany};
use climatefolio_risk_data::{
    CompanyScoreAggregation, CompanyScores, Hazard, ANALYSIS_HORIZONS,
};

pub(super) fn weight_f64(weight: Decimal) -> f64 {
    weight.to_f64().unwrap_or_default()
}

pub(super) fn scalar_data<'a>(
    results: &'a [CompanyScores],
    company_id: &str,
) -> Option<&'a climatefolio_risk_data::ClimateScore> {
    results
        .iter()
        .find(|r| r.company_id == company_id)
        .and_then(|r| r.data())
}

struct GroupAccum {
    key: String,
    total_weight: Decimal,
    // Max observed score; zero means nothing real was seen.
    score: f64,
    companies: usize,
}

impl GroupAccum {
    fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            total_weight: Decimal::ZERO,
            score: 0.0,
            companies: 0,
        }
    }

    fn observed_score(&self) -> Option<f64> {
        if self.score > 0.0 {
            Some(self.score)
        } else {
            None
        }
    }
}

fn accum_index(accums: &mut Vec<GroupAccum>, key: &str) -> usize {
    match accums.iter().position(|a| a.key == key) {
        Some(index) => index,
        None => {
            accums.push(GroupAccum::new(key));
            accums.len() - 1
        }
    }
}

/// Groups the portfolio by company sector.
///
/// Every holding lands in a bucket keyed by its sector label; the
/// bucket score is the highest `primary_score` observed among member
/// companies' first grouped entries. Buckets that never observe a real
/// score carry `avg_score: None` and `RiskLevel::Unknown`. Sorted by
/// total weight, descending.
pub fn aggregate_by_sector(
    companies: &[PortfolioCompany],
    results: &[CompanyScoreAggregation],
) -> Vec<SectorBucket> {
    let mut accums: Vec<GroupAccum> = Vec::new();

    for company in companies {
        let index = accum_index(&mut accums, company.sector_label());
        let accum = &mut accums[index];
        accum.total_weight += company.weight;
        accum.companies += 1;

        let observed = results
            .iter()
            .find(|r| r.company_id == company.id)
            .and_then(|r| r.data())
            .and_then(|data| data.first())
            .and_then(|entry| entry.primary_score());
        if let Some(score) = observed {
            accum.score = accum.score.max(score);
        }
    }

    let total_weighted_risk: f64 = accums
        .iter()
        .map(|a| weight_f64(a.total_weight) * a.score)
        .sum();

    let mut buckets: Vec<SectorBucket> = accums
        .into_iter()
        .map(|accum| {
            let weighted = weight_f64(accum.total_weight) * accum.score;
            let avg_score = accum.observed_score();
            SectorBucket {
                sector: accum.key,
                total_weight: accum.total_weight,
                avg_score,
                companies: accum.companies,
                risk_level: RiskLevel::from_optional_score(avg_score),
                weighted_contribution: if total_weighted_risk > 0.0 {
                    weighted / total_weighted_risk
                } else {
                    0.0
                },
            }
        })
        .collect();

    buckets.sort_by(|a, b| b.total_weight.cmp(&a.total_weight));
    buckets
}

/// Groups the portfolio by the countries in each company's grouped
/// result.
///
/// A company contributes its full weight to every country its result
/// names, so one holding can feed several buckets. Companies without a
/// successful result contribute nothing. Sorted by total weight,
/// descending.
pub fn aggregate_by_geography(
    companies: &[PortfolioCompany],
    results: &[CompanyScoreAggregation],
) -> Vec<GeographyBucket> {
    let mut accums: Vec<GroupAccum> = Vec::new();

    for company in companies {
        let data = match results
            .iter()
            .find(|r| r.company_id == company.id)
            .and_then(|r| r.data())
        {
            Some(data) => data,
            None => continue,
        };

        let mut touched: Vec<usize> = Vec::new();
        for entry in &data.results {
            let index = accum_index(&mut accums, entry.region_label());
            let accum = &mut accums[index];
            accum.total_weight += company.weight;
            if let Some(score) = entry.primary_score() {
                accum.score = accum.score.max(score);
            }
            if !touched.contains(&index) {
                touched.push(index);
                accum.companies += 1;
            }
        }
    }

    let total_weighted_risk: f64 = accums
        .iter()
        .map(|a| weight_f64(a.total_weight) * a.score)
        .sum();

    let mut buckets: Vec<GeographyBucket> = accums
        .into_iter()
        .map(|accum| {
            let weighted = weight_f64(accum.total_weight) * accum.score;
            let avg_score = accum.observed_score();
            GeographyBucket {
                country: accum.key,
                total_weight: accum.total_weight,
                avg_score,
                companies: accum.companies,
                risk_level: RiskLevel::from_optional_score(avg_score),
                weighted_contribution: if total_weighted_risk > 0.0 {
                    weighted / total_weighted_risk
                } else {
                    0.0
                },
            }
        })
        .collect();

    buckets.sort_by(|a, b| b.total_weight.cmp(&a.total_weight));
    buckets
}

/// Breaks portfolio risk down across the fixed hazard taxonomy.
///
/// A company counts toward a hazard when its scalar record carries a
/// positive signal for it. `value` is each hazard's share of the
/// exposure-weighted risk; zero-share buckets are dropped. Emitted in
/// taxonomy order.
pub fn aggregate_by_hazard(
    companies: &[PortfolioCompany],
    results: &[CompanyScores],
) -> Vec<HazardBucket> {
    struct HazardAccum {
        exposure: f64,
        score: f64,
        companies: usize,
    }

    let mut accums: [Option<HazardAccum>; 6] = Default::default();

    for company in companies {
        let data = match scalar_data(results, &company.id) {
            Some(data) => data,
            None => continue,
        };
        let weight = weight_f64(company.weight);

        for (index, hazard) in Hazard::ALL.iter().enumerate() {
            let signal = match data.hazard_signal(*hazard) {
                Some(signal) if signal > 0.0 => signal,
                _ => continue,
            };
            let accum = accums[index].get_or_insert(HazardAccum {
                exposure: 0.0,
                score: 0.0,
                companies: 0,
            });
            accum.exposure += weight / 100.0;
            accum.score = accum.score.max(signal);
            accum.companies += 1;
        }
    }

    let total_weighted_score: f64 = accums
        .iter()
        .flatten()
        .map(|a| a.exposure * a.score)
        .sum();

    Hazard::ALL
        .iter()
        .zip(accums.iter())
        .filter_map(|(hazard, accum)| {
            let accum = accum.as_ref()?;
            let value = if total_weighted_score > 0.0 {
                (accum.exposure * accum.score) / total_weighted_score
            } else {
                0.0
            };
            if value <= 0.0 {
                return None;
            }
            Some(HazardBucket {
                hazard: *hazard,
                portfolio_exposure: accum.exposure,
                avg_risk_score: accum.score,
                companies: accum.companies,
                risk_level: RiskLevel::from_score(accum.score),
                value,
                color: hazard.color().to_string(),
            })
        })
        .collect()
}

/// Totals weight-normalized scores and impacts per analysis year.
///
/// Only companies with a successful scalar result contribute; a record
/// lacking both the per-year field and the base metric contributes
/// zero for that year but still marks the year as covered. Years no
/// company covers produce no bucket. Horizon list order is preserved.
pub fn aggregate_by_horizon(
    companies: &[PortfolioCompany],
    results: &[CompanyScores],
) -> Vec<HorizonBucket> {
    let mut buckets: Vec<HorizonBucket> = Vec::new();

    for year in ANALYSIS_HORIZONS {
        let mut total_score = 0.0;
        let mut total_impact = 0.0;
        let mut contributing = 0usize;

        for company in companies {
            let data = match scalar_data(results, &company.id) {
                Some(data) => data,
                None => continue,
            };
            let weight_share = weight_f64(company.weight) / 100.0;
            total_score += data.horizon_score(year).unwrap_or(0.0) * weight_share;
            total_impact += data.horizon_impact(year).unwrap_or(0.0) * weight_share;
            contributing += 1;
        }

        if contributing > 0 {
            buckets.push(HorizonBucket {
                horizon: year,
                score: total_score,
                impact: total_impact,
                weight: dec!(100),
                weighted_contribution: 0.0,
            });
        }
    }

    let total_weighted_risk: f64 = buckets
        .iter()
        .map(|b| weight_f64(b.weight) * b.score)
        .sum();
    for bucket in buckets.iter_mut() {
        bucket.weighted_contribution = if total_weighted_risk > 0.0 {
            (weight_f64(bucket.weight) * bucket.score) / total_weighted_risk
        } else {
            0.0
        };
    }

    buckets
}

/// Headline metrics over an already-computed sector breakdown.
pub fn summarize(
    companies: &[PortfolioCompany],
    sector_buckets: &[SectorBucket],
) -> PortfolioSummary {
    let total_weight = weights::total_weight(companies);
    let total_weight_f = weight_f64(total_weight);

    let avg_risk_score = if total_weight_f > 0.0 {
        sector_buckets
            .iter()
            .map(|b| b.avg_score.unwrap_or(0.0) * weight_f64(b.total_weight))
            .sum::<f64>()
            / total_weight_f
    } else {
        0.0
    };

    PortfolioSummary {
        total_companies: companies.len(),
        total_weight,
        avg_risk_score,
        high_risk_sectors: sector_buckets
            .iter()
            .filter(|b| b.risk_level == RiskLevel::High)
            .count(),
        diversification: Diversification::from_company_count(companies.len()),
    }
}
