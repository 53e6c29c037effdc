//! In-memory CartStore implementation.
//!
//! Backs tests and database-free local runs. The `set_fail_on_*` switches
//! inject storage faults so fault propagation can be exercised.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cart::CartDocument;
use crate::storage::{CartStore, Result, StorageError};

/// Cart store that keeps documents in memory.
#[derive(Default)]
pub struct MemoryCartStore {
    carts: RwLock<HashMap<String, CartDocument>>,
    save_count: RwLock<usize>,
    fail_on_find: RwLock<bool>,
    fail_on_save: RwLock<bool>,
    fail_on_delete: RwLock<bool>,
}

impl MemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_fail_on_find(&self, fail: bool) {
        *self.fail_on_find.write().await = fail;
    }

    pub async fn set_fail_on_save(&self, fail: bool) {
        *self.fail_on_save.write().await = fail;
    }

    pub async fn set_fail_on_delete(&self, fail: bool) {
        *self.fail_on_delete.write().await = fail;
    }

    /// Number of persisted documents.
    pub async fn stored_count(&self) -> usize {
        self.carts.read().await.len()
    }

    /// Number of `save` calls that reached the store.
    pub async fn save_count(&self) -> usize {
        *self.save_count.read().await
    }

    /// Direct read of a persisted document, bypassing the trait.
    pub async fn get_stored(&self, user_id: &str) -> Option<CartDocument> {
        self.carts.read().await.get(user_id).cloned()
    }
}

#[async_trait]
impl CartStore for MemoryCartStore {
    async fn find_one(&self, user_id: &str) -> Result<Option<CartDocument>> {
        if *self.fail_on_find.read().await {
            return Err(StorageError::Unavailable("injected find failure".into()));
        }
        let carts = self.carts.read().await;
        Ok(carts.get(user_id).cloned())
    }

    async fn save(&self, cart: &CartDocument) -> Result<()> {
        if *self.fail_on_save.read().await {
            return Err(StorageError::Unavailable("injected save failure".into()));
        }
        let mut document = cart.clone();
        document.updated_at = Some(chrono::Utc::now().to_rfc3339());

        self.carts
            .write()
            .await
            .insert(document.user_id.clone(), document);
        *self.save_count.write().await += 1;
        Ok(())
    }

    async fn delete_one(&self, user_id: &str) -> Result<()> {
        if *self.fail_on_delete.read().await {
            return Err(StorageError::Unavailable("injected delete failure".into()));
        }
        self.carts.write().await.remove(user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests;
