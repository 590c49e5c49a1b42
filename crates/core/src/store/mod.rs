//! State store module - the persistence seam for portfolio state.
//!
//! The portfolio service only sees [`StateStoreTrait`]; the backing
//! store is a construction-time choice. Two implementations ship here:
//! a single-file JSON store and an in-memory store.

mod file_store;
mod memory_store;
mod store_traits;

pub use file_store::FileStateStore;
pub use memory_store::MemoryStateStore;
pub use store_traits::StateStoreTrait;
