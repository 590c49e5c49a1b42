//! Portfolio transfer domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_PORTFOLIO_NAME, PORTFOLIO_EXPORT_VERSION};
use crate::portfolio::companies::{PortfolioCompany, PortfolioState};

/// Errors produced while importing a portfolio document.
///
/// Messages are stable and shown to users verbatim, so they name the
/// wire-format fields (`useEqualWeights`, `selectedCompanyIds`) rather
/// than the Rust ones.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Invalid JSON file format")]
    InvalidJson,

    #[error("Invalid data format")]
    InvalidFormat,

    #[error("Missing or invalid version field")]
    MissingVersion,

    #[error("Missing or invalid companies array")]
    MissingCompanies,

    #[error("Missing or invalid useEqualWeights field")]
    MissingEqualWeightsFlag,

    #[error("Missing or invalid selectedCompanyIds array")]
    MissingSelectedIds,

    #[error("Invalid company data: missing or invalid id")]
    InvalidCompanyId,

    #[error("Invalid company data: weight must be between 0 and 100")]
    InvalidCompanyWeight,

    #[error("Invalid company data: missing or invalid name")]
    InvalidCompanyName,

    #[error("CSV file must have at least a header and one data row")]
    CsvTooShort,

    #[error("Expected {expected} columns, found {found}")]
    CsvColumnCount { expected: usize, found: usize },

    #[error("No valid data rows found")]
    NoValidRows,

    #[error("No valid weights found in CSV file")]
    NoValidWeights,

    #[error("Invalid CSV format")]
    CsvInvalid,
}

/// The portable portfolio document, as written to and read from
/// exported files.
///
/// Top-level keys are camelCase on the wire; the nested companies keep
/// the provider's snake_case field names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioExport {
    pub version: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub companies: Vec<PortfolioCompany>,
    pub use_equal_weights: bool,
    pub selected_company_ids: Vec<String>,
}

impl PortfolioExport {
    /// Builds an export document for the current portfolio state.
    pub fn from_state(state: &PortfolioState, name: Option<&str>) -> Self {
        let name = name.unwrap_or(DEFAULT_PORTFOLIO_NAME);
        Self {
            version: PORTFOLIO_EXPORT_VERSION.to_string(),
            name: name.to_string(),
            description: Some(format!(
                "Portfolio with {} companies",
                state.companies.len()
            )),
            created_at: Some(Utc::now()),
            companies: state.companies.clone(),
            use_equal_weights: state.use_equal_weights,
            selected_company_ids: state.selected_company_ids.clone(),
        }
    }

    /// The portfolio state an imported document resolves to. Importing
    /// replaces holdings, the weighting mode and the selection wholesale.
    pub fn into_state(self) -> PortfolioState {
        PortfolioState {
            companies: self.companies,
            use_equal_weights: self.use_equal_weights,
            selected_company_ids: self.selected_company_ids,
        }
    }
}

/// Download file name for an exported portfolio: ASCII alphanumerics
/// are kept lowercased, everything else collapses to underscores.
pub fn export_file_name(portfolio_name: &str, extension: &str) -> String {
    let safe: String = portfolio_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{}_portfolio.{}", safe, extension)
}
