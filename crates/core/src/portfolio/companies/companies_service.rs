//! Portfolio service backed by a key-value state store.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use super::companies_model::{PortfolioCompany, PortfolioState, WeightStatus};
use super::companies_traits::PortfolioServiceTrait;
use super::weights;
use crate::constants::{
    PORTFOLIO_COMPANIES_KEY, PORTFOLIO_SELECTED_COMPANY_IDS_KEY, PORTFOLIO_USE_EQUAL_WEIGHTS_KEY,
};
use crate::errors::{Error, Result, ValidationError};
use crate::store::StateStoreTrait;
use climatefolio_risk_data::Company;

/// Service for managing the persisted portfolio.
///
/// State lives in the store under three keys (holdings, equal-weights
/// flag, selected ids), mirroring how the UI persists them, so each key
/// stays individually readable by other tooling.
pub struct PortfolioService {
    store: Arc<dyn StateStoreTrait>,
}

impl PortfolioService {
    /// Creates a new PortfolioService instance.
    pub fn new(store: Arc<dyn StateStoreTrait>) -> Self {
        Self { store }
    }

    /// Reads one state key, tolerating absent and unreadable values.
    ///
    /// An unreadable value is logged and replaced by the default rather
    /// than failing the whole load; store-level failures still propagate.
    async fn read_key<T>(&self, key: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.store.get_item(key).await? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(value),
                Err(e) => {
                    warn!("Discarding unreadable portfolio state under '{}': {}", key, e);
                    Ok(T::default())
                }
            },
            None => Ok(T::default()),
        }
    }

    async fn save(&self, state: &PortfolioState) -> Result<()> {
        self.store
            .set_item(
                PORTFOLIO_COMPANIES_KEY,
                &serde_json::to_string(&state.companies)?,
            )
            .await?;
        self.store
            .set_item(
                PORTFOLIO_USE_EQUAL_WEIGHTS_KEY,
                &serde_json::to_string(&state.use_equal_weights)?,
            )
            .await?;
        self.store
            .set_item(
                PORTFOLIO_SELECTED_COMPANY_IDS_KEY,
                &serde_json::to_string(&state.selected_company_ids)?,
            )
            .await?;
        Ok(())
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn load(&self) -> Result<PortfolioState> {
        Ok(PortfolioState {
            companies: self.read_key(PORTFOLIO_COMPANIES_KEY).await?,
            use_equal_weights: self.read_key(PORTFOLIO_USE_EQUAL_WEIGHTS_KEY).await?,
            selected_company_ids: self.read_key(PORTFOLIO_SELECTED_COMPANY_IDS_KEY).await?,
        })
    }

    async fn add_company(&self, company: &Company) -> Result<PortfolioState> {
        if company.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }

        debug!("Adding company {} to portfolio", company.id);
        let mut state = self.load().await?;

        if !state.contains(&company.id) {
            state.companies.push(PortfolioCompany::from(company));
            if state.use_equal_weights {
                weights::set_equal_weights(&mut state.companies);
            }
        }
        if !state.is_selected(&company.id) {
            state.selected_company_ids.push(company.id.clone());
        }

        self.save(&state).await?;
        Ok(state)
    }

    async fn remove_company(&self, company_id: &str) -> Result<PortfolioState> {
        debug!("Removing company {} from portfolio", company_id);
        let mut state = self.load().await?;

        state.companies.retain(|c| c.id != company_id);
        if state.use_equal_weights && !state.companies.is_empty() {
            weights::set_equal_weights(&mut state.companies);
        }
        state.selected_company_ids.retain(|id| id != company_id);

        self.save(&state).await?;
        Ok(state)
    }

    async fn update_weight(&self, company_id: &str, weight: Decimal) -> Result<PortfolioState> {
        let mut state = self.load().await?;

        let company = state
            .companies
            .iter_mut()
            .find(|c| c.id == company_id)
            .ok_or_else(|| Error::CompanyNotFound(company_id.to_string()))?;
        company.weight = weights::clamp_weight(weight);

        self.save(&state).await?;
        Ok(state)
    }

    async fn normalize_weights(&self) -> Result<PortfolioState> {
        let mut state = self.load().await?;
        weights::normalize(&mut state.companies);
        self.save(&state).await?;
        Ok(state)
    }

    async fn set_equal_weights(&self, enabled: bool) -> Result<PortfolioState> {
        let mut state = self.load().await?;

        state.use_equal_weights = enabled;
        if enabled && !state.companies.is_empty() {
            weights::set_equal_weights(&mut state.companies);
        }

        self.save(&state).await?;
        Ok(state)
    }

    async fn toggle_equal_weights(&self) -> Result<PortfolioState> {
        let current = self.load().await?.use_equal_weights;
        self.set_equal_weights(!current).await
    }

    async fn replace(&self, state: PortfolioState) -> Result<PortfolioState> {
        debug!(
            "Replacing portfolio with {} companies",
            state.companies.len()
        );
        self.save(&state).await?;
        Ok(state)
    }

    async fn weight_status(&self) -> Result<WeightStatus> {
        let state = self.load().await?;
        Ok(weights::weight_status(&state.companies))
    }
}
