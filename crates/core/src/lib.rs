//! Climatefolio Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Climatefolio:
//! portfolio holdings and weight management, the pure risk aggregation
//! engine, analytics orchestration over a climate risk data provider,
//! and portable portfolio import/export. It is storage-agnostic and
//! talks to persistence only through [`store::StateStoreTrait`].

pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod store;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export store types
pub use store::{FileStateStore, MemoryStateStore, StateStoreTrait};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
