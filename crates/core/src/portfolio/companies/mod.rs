//! Portfolio holdings module - domain models, weight math, and the
//! persistence-backed service.

mod companies_model;
mod companies_service;
mod companies_traits;
pub mod weights;


// Re-export the public interface
pub use companies_model::{PortfolioCompany, PortfolioState, WeightStatus};
pub use companies_service::PortfolioService;
pub use companies_traits::PortfolioServiceTrait;
