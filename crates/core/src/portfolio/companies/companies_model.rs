//! Portfolio holding domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{UNKNOWN_COMPANY_NAME, UNKNOWN_SECTOR};
use climatefolio_risk_data::Company;

/// A single equity holding in the portfolio.
///
/// Field names match the provider wire format (`stock_tickers`,
/// `isin_codes`) so exported portfolios stay readable by the same
/// tooling that produced the search results.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PortfolioCompany {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub stock_tickers: Vec<String>,
    #[serde(default)]
    pub isin_codes: Vec<String>,
    /// Portfolio weight as a percentage in [0, 100], two-decimal precision.
    pub weight: Decimal,
}

impl PortfolioCompany {
    /// Sector label used for grouping. Companies the provider returns
    /// without a sector (or with an empty one) land in "Unknown".
    pub fn sector_label(&self) -> &str {
        match self.sector.as_deref() {
            Some(sector) if !sector.is_empty() => sector,
            _ => UNKNOWN_SECTOR,
        }
    }

    /// Display name with a stable fallback for unnamed companies.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            UNKNOWN_COMPANY_NAME
        } else {
            &self.name
        }
    }
}

impl From<&Company> for PortfolioCompany {
    /// Builds a zero-weight holding from a company search result.
    fn from(company: &Company) -> Self {
        Self {
            id: company.id.clone(),
            name: company
                .name
                .clone()
                .unwrap_or_else(|| UNKNOWN_COMPANY_NAME.to_string()),
            sector: company.sector.clone(),
            stock_tickers: company.stock_tickers.clone(),
            isin_codes: company.isin_codes.clone(),
            weight: Decimal::ZERO,
        }
    }
}

/// Result of checking the sum-to-100 weight invariant.
///
/// Violations are surfaced through this record, never silently
/// corrected; only the explicit normalize/equal-weight operations
/// repair weights.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeightStatus {
    /// Sum of all holding weights.
    pub total: Decimal,
    /// True when the total is within tolerance of 100.
    pub is_balanced: bool,
    /// Signed distance from the 100% target.
    pub deviation: Decimal,
}

/// The complete persisted portfolio: holdings, the weighting mode, and
/// the ids currently marked as selected in the picker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioState {
    pub companies: Vec<PortfolioCompany>,
    pub use_equal_weights: bool,
    pub selected_company_ids: Vec<String>,
}

impl PortfolioState {
    pub fn is_selected(&self, company_id: &str) -> bool {
        self.selected_company_ids.iter().any(|id| id == company_id)
    }

    pub fn contains(&self, company_id: &str) -> bool {
        self.companies.iter().any(|c| c.id == company_id)
    }
}
