use async_trait::async_trait;

use crate::error::Result;

/// Durable key-value store provided by the host.
///
/// `set` replaces the whole value under `key`. A write the backend cannot
/// honor must come back as [`crate::NoteMapError::StorageWrite`].
#[async_trait]
pub trait KvBackend: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: String) -> Result<()>;
}
