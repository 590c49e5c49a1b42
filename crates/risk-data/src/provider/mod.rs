//! Risk data provider abstractions and implementations.
//!
//! This module contains:
//! - The `RiskDataProvider` trait that all providers implement
//! - The DCR API provider, the one concrete implementation
//!
//! Providers are intentionally thin: no retries, no caching, no
//! rate-limit handling. The batch layer above decides how individual
//! failures are surfaced.

mod traits;

pub mod dcr_api;

pub use dcr_api::{DcrApiConfig, DcrApiProvider};
pub use traits::RiskDataProvider;
