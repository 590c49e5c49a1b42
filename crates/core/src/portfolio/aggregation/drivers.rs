//! Top-N risk driver ranking.
//!
//! Ranks companies by their contribution to total portfolio risk under
//! the selected metric, and estimates a per-hazard allocation of that
//! risk through the sector priors. The hazard side is an approximation:
//! the API reports no hazard-resolved metrics, so shares come from the
//! attribution table, not measurement.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::aggregation_engine::{scalar_data, weight_f64};
use super::concentration::ConcentrationMetrics;
use super::hazard_priors::HazardAttribution;
use crate::constants::FALLBACK_METRIC_VALUE;
use crate::portfolio::companies::PortfolioCompany;
use climatefolio_risk_data::{CompanyScores, Hazard, RiskMetric};

/// One company's ranked contribution to portfolio risk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDriver {
    pub company_id: String,
    pub company_name: String,
    pub sector: String,
    pub weight: Decimal,
    /// Value of the selected metric used for the ranking.
    pub metric_value: f64,
    /// `weight/100 × metric_value`.
    pub contribution: f64,
    /// Share of total portfolio risk, as a percentage.
    pub contribution_percent: f64,
    /// 1-based position after sorting by contribution, descending.
    pub rank: usize,
}

/// One hazard's estimated, ranked share of portfolio risk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HazardDriver {
    pub hazard: Hazard,
    pub total_contribution: f64,
    /// Percentage of total portfolio risk (the company-side total).
    pub contribution_percent: f64,
    pub rank: usize,
    /// Display hint.
    pub color: String,
}

/// Complete driver analysis bundle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DriverAnalysis {
    pub companies: Vec<CompanyDriver>,
    pub hazards: Vec<HazardDriver>,
    pub concentration: ConcentrationMetrics,
    pub total_portfolio_risk: f64,
}

fn weight_share(weight: Decimal) -> f64 {
    weight_f64(weight) / 100.0
}

/// Ranks companies and hazards by risk contribution.
///
/// A company whose record carries none of the metric fields is floored
/// at 0.1 so it still registers; a company whose query failed
/// contributes exactly zero. Ties rank in input order.
pub fn analyze_drivers(
    companies: &[PortfolioCompany],
    results: &[CompanyScores],
    metric: RiskMetric,
    attribution: &dyn HazardAttribution,
) -> DriverAnalysis {
    let mut drivers: Vec<CompanyDriver> = companies
        .iter()
        .map(|company| {
            let metric_value = match scalar_data(results, &company.id) {
                Some(data) => data.best_metric(metric).unwrap_or(FALLBACK_METRIC_VALUE),
                None => 0.0,
            };
            let contribution = weight_share(company.weight) * metric_value;
            CompanyDriver {
                company_id: company.id.clone(),
                company_name: company.display_name().to_string(),
                sector: company.sector_label().to_string(),
                weight: company.weight,
                metric_value,
                contribution,
                contribution_percent: 0.0,
                rank: 0,
            }
        })
        .collect();

    let total_portfolio_risk: f64 = drivers.iter().map(|d| d.contribution).sum();

    for driver in drivers.iter_mut() {
        driver.contribution_percent = if total_portfolio_risk > 0.0 {
            driver.contribution / total_portfolio_risk * 100.0
        } else {
            0.0
        };
    }
    drivers.sort_by(|a, b| b.contribution.total_cmp(&a.contribution));
    for (index, driver) in drivers.iter_mut().enumerate() {
        driver.rank = index + 1;
    }

    // Hazard allocation: contribution_h += weight/100 × value × prior.
    let mut contributions = [0.0f64; 6];
    let mut saw_data = false;
    for company in companies {
        let data = match scalar_data(results, &company.id) {
            Some(data) => data,
            None => continue,
        };
        saw_data = true;
        let value = data
            .best_risk_score(metric)
            .unwrap_or(FALLBACK_METRIC_VALUE);
        let priors = attribution.weights(company.sector_label());
        for (index, contribution) in contributions.iter_mut().enumerate() {
            *contribution += weight_share(company.weight) * value * priors.0[index];
        }
    }

    let mut hazards: Vec<HazardDriver> = if saw_data {
        Hazard::ALL
            .iter()
            .zip(contributions.iter())
            .map(|(hazard, contribution)| HazardDriver {
                hazard: *hazard,
                total_contribution: *contribution,
                contribution_percent: if total_portfolio_risk > 0.0 {
                    contribution / total_portfolio_risk * 100.0
                } else {
                    0.0
                },
                rank: 0,
                color: hazard.color().to_string(),
            })
            .collect()
    } else {
        Vec::new()
    };
    hazards.sort_by(|a, b| b.total_contribution.total_cmp(&a.total_contribution));
    for (index, hazard) in hazards.iter_mut().enumerate() {
        hazard.rank = index + 1;
    }

    let concentration = ConcentrationMetrics::from_company_drivers(&drivers);

    DriverAnalysis {
        companies: drivers,
        hazards,
        concentration,
        total_portfolio_risk,
    }
}
