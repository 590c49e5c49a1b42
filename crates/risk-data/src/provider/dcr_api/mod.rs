//! DCR climate risk API provider implementation.
//!
//! Routes used:
//! - `/v3/company-search` for company lookup
//! - `/v3/companies/{id}/climate-scores` for scalar score records
//! - `/v3/companies/{id}/assets/climate-scores/aggregation` for grouped
//!   asset-level aggregation
//!
//! Requests are authenticated with a bearer API key. Responses are JSON.
//! The provider performs no retries; callers decide what a failure means.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::errors::RiskDataError;
use crate::models::{
    ClimateScore, Company, CompanySearchQuery, GroupBy, ScoreAggregation, ScoreQuery,
    SearchResults,
};
use crate::provider::RiskDataProvider;

const PROVIDER_ID: &str = "DCR_API";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the API base URL.
pub const ENV_BASE_URL: &str = "DCR_API_URL";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "DCR_API_KEY";

/// Configuration for [`DcrApiProvider`].
#[derive(Debug, Clone)]
pub struct DcrApiConfig {
    /// Base URL without a trailing slash, e.g. `https://api.example.com`.
    pub base_url: String,
    /// Bearer token sent with every request.
    pub api_key: String,
}

impl DcrApiConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Read configuration from `DCR_API_URL` and `DCR_API_KEY`.
    pub fn from_env() -> Result<Self, RiskDataError> {
        let base_url = env::var(ENV_BASE_URL)
            .map_err(|_| RiskDataError::MissingConfig(ENV_BASE_URL.to_string()))?;
        let api_key = env::var(ENV_API_KEY)
            .map_err(|_| RiskDataError::MissingConfig(ENV_API_KEY.to_string()))?;
        Ok(Self::new(base_url, api_key))
    }
}

/// HTTP provider for the DCR climate risk API.
pub struct DcrApiProvider {
    client: Client,
    config: DcrApiConfig,
}

impl DcrApiProvider {
    /// Create a new provider with the given configuration.
    pub fn new(config: DcrApiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    /// Create a provider configured from the environment.
    pub fn from_env() -> Result<Self, RiskDataError> {
        Ok(Self::new(DcrApiConfig::from_env()?))
    }

    /// GET `path` with `params` and decode the JSON response.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, RiskDataError> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!("DCR API request: {} params={:?}", path, params);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.api_key)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RiskDataError::Timeout {
                        provider: PROVIDER_ID.to_string(),
                    }
                } else {
                    RiskDataError::Network(e)
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RiskDataError::CompanyNotFound(path.to_string()));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RiskDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }
        if !status.is_success() {
            return Err(RiskDataError::Provider {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let body = response.text().await.map_err(RiskDataError::Network)?;
        serde_json::from_str(&body).map_err(|e| RiskDataError::Decode(e.to_string()))
    }

    fn score_params(query: &ScoreQuery) -> Vec<(&'static str, String)> {
        vec![
            ("horizon", query.horizon.year().to_string()),
            ("pathway", query.pathway.as_str().to_string()),
            ("risk", query.risk.as_str().to_string()),
            ("metric", query.metric.as_str().to_string()),
        ]
    }
}

#[async_trait]
impl RiskDataProvider for DcrApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn climate_scores(
        &self,
        company_id: &str,
        query: &ScoreQuery,
    ) -> Result<ClimateScore, RiskDataError> {
        let path = format!("/v3/companies/{}/climate-scores", company_id);
        self.get_json(&path, &Self::score_params(query))
            .await
            .map_err(|e| match e {
                RiskDataError::CompanyNotFound(_) => {
                    RiskDataError::CompanyNotFound(company_id.to_string())
                }
                other => other,
            })
    }

    async fn climate_scores_aggregation(
        &self,
        company_id: &str,
        query: &ScoreQuery,
        by: GroupBy,
    ) -> Result<ScoreAggregation, RiskDataError> {
        let path = format!(
            "/v3/companies/{}/assets/climate-scores/aggregation",
            company_id
        );
        let mut params = Self::score_params(query);
        params.push(("by", by.as_str().to_string()));
        self.get_json(&path, &params).await.map_err(|e| match e {
            RiskDataError::CompanyNotFound(_) => {
                RiskDataError::CompanyNotFound(company_id.to_string())
            }
            other => other,
        })
    }

    async fn search_companies(
        &self,
        query: &CompanySearchQuery,
    ) -> Result<Vec<Company>, RiskDataError> {
        let mut params: Vec<(&str, String)> =
            vec![("limit", query.effective_limit().to_string())];
        if let Some(ref name) = query.name {
            params.push(("name", name.clone()));
        }
        if let Some(ref ticker) = query.stock_ticker {
            params.push(("stock_ticker", ticker.clone()));
        }
        if let Some(ref isin) = query.isin_code {
            params.push(("isin_code", isin.clone()));
        }
        if let Some(ref sector) = query.sector {
            params.push(("sector", sector.clone()));
        }
        params.push(("method", query.method.as_str().to_string()));

        let results: SearchResults = self.get_json("/v3/company-search", &params).await?;
        Ok(results.results)
    }
}
