//! In-memory backend.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::KvBackend;
use crate::error::Result;

#[derive(Debug, Default)]
pub struct MemoryBackend {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing any note store.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut data = HashMap::new();
        data.insert(key.to_string(), value.to_string());
        Self {
            data: RwLock::new(data),
        }
    }

    pub async fn keys(&self) -> Vec<String> {
        self.data.read().await.keys().cloned().collect()
    }
}

#[async_trait]
impl KvBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.data.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let kv = MemoryBackend::new();
        assert!(kv.get("nonexistent").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_replaces_value() {
        let kv = MemoryBackend::new();
        kv.set("k", "one".to_string()).await.unwrap();
        kv.set("k", "two".to_string()).await.unwrap();
        assert_eq!(kv.get("k").await.unwrap().as_deref(), Some("two"));
        assert_eq!(kv.keys().await, vec!["k".to_string()]);
    }

    #[tokio::test]
    async fn test_with_entry() {
        let kv = MemoryBackend::with_entry("k", "v");
        assert_eq!(kv.get("k").await.unwrap().as_deref(), Some("v"));
    }
}
