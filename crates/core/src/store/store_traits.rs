//! State store trait definition.

use async_trait::async_trait;

use crate::errors::Result;

/// Key-value store for small persisted UI/domain state.
///
/// Values are opaque strings; callers own the serialization. Keys are
/// flat, application-chosen constants (see `crate::constants`).
/// Implementations must tolerate unknown keys: `get_item` for a key
/// never written returns `Ok(None)`.
#[async_trait]
pub trait StateStoreTrait: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`. Removing an absent key is
    /// not an error.
    async fn remove_item(&self, key: &str) -> Result<()>;
}
