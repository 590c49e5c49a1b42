//! Analytics module - orchestrates risk data batches and the pure
//! aggregation engine into per-view portfolio breakdowns.

mod analytics_service;
mod analytics_traits;


// Re-export the public interface
pub use analytics_service::PortfolioAnalyticsService;
pub use analytics_traits::PortfolioAnalyticsServiceTrait;
