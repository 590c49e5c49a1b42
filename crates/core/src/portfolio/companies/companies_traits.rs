//! Portfolio service trait.
//!
//! Defines the contract for portfolio mutations without naming a
//! storage backend; concrete services persist through a
//! `StateStoreTrait` implementation.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::companies_model::{PortfolioState, WeightStatus};
use crate::errors::Result;
use climatefolio_risk_data::Company;

/// Trait defining the contract for portfolio operations.
///
/// Every mutation loads the persisted state, applies the change, saves,
/// and returns the updated state so callers can render it directly.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Loads the persisted portfolio, falling back to an empty one.
    async fn load(&self) -> Result<PortfolioState>;

    /// Adds a search result as a zero-weight holding and selects it.
    ///
    /// Adding an id already in the portfolio only re-selects it. When
    /// equal weighting is on, weights are re-spread across all holdings.
    async fn add_company(&self, company: &Company) -> Result<PortfolioState>;

    /// Removes a holding and deselects its id. Removing an unknown id
    /// is a no-op. Re-spreads weights when equal weighting is on.
    async fn remove_company(&self, company_id: &str) -> Result<PortfolioState>;

    /// Sets one holding's weight, clamped to [0, 100] at two decimals.
    async fn update_weight(&self, company_id: &str, weight: Decimal) -> Result<PortfolioState>;

    /// Rescales all weights to sum to 100; no-op on a zero total.
    async fn normalize_weights(&self) -> Result<PortfolioState>;

    /// Turns equal weighting on or off; enabling applies the equal
    /// spread immediately.
    async fn set_equal_weights(&self, enabled: bool) -> Result<PortfolioState>;

    /// Flips the equal-weighting flag.
    async fn toggle_equal_weights(&self) -> Result<PortfolioState>;

    /// Replaces the whole portfolio, e.g. from an import.
    async fn replace(&self, state: PortfolioState) -> Result<PortfolioState>;

    /// Reports the sum-to-100 invariant without mutating anything.
    async fn weight_status(&self) -> Result<WeightStatus>;
}
