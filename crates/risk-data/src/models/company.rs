//! Company search and listing models.

use serde::{Deserialize, Serialize};

/// A company as returned by the risk API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(default)]
    pub stock_tickers: Vec<String>,
    #[serde(default)]
    pub isin_codes: Vec<String>,
}

/// Search response envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub results: Vec<Company>,
}

/// Matching strategy for company search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchMethod {
    #[default]
    Fuzzy,
    Strict,
}

impl SearchMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMethod::Fuzzy => "fuzzy",
            SearchMethod::Strict => "strict",
        }
    }
}

/// Query parameters for company search.
///
/// All criteria are optional; the API combines whichever are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanySearchQuery {
    pub name: Option<String>,
    pub stock_ticker: Option<String>,
    pub isin_code: Option<String>,
    pub sector: Option<String>,
    pub method: SearchMethod,
    pub limit: Option<u32>,
}

/// Default page size when the caller does not set a limit.
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

impl CompanySearchQuery {
    /// Search by company name.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Search by stock ticker.
    pub fn by_ticker(ticker: impl Into<String>) -> Self {
        Self {
            stock_ticker: Some(ticker.into()),
            ..Self::default()
        }
    }

    /// Search by ISIN code.
    pub fn by_isin(isin: impl Into<String>) -> Self {
        Self {
            isin_code: Some(isin.into()),
            ..Self::default()
        }
    }

    /// Set the maximum number of results.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Effective page size sent to the API.
    pub fn effective_limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_SEARCH_LIMIT)
    }
}
