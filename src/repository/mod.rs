//! Cart repository.
//!
//! Thin layer over an injected [`CartStore`] that owns the
//! load-or-default pattern shared by the read paths.

use std::sync::Arc;

use crate::cart::CartDocument;
use crate::storage::{CartStore, Result};

/// Repository for cart documents.
#[derive(Clone)]
pub struct CartRepository {
    store: Arc<dyn CartStore>,
}

impl CartRepository {
    pub fn new(store: Arc<dyn CartStore>) -> Self {
        Self { store }
    }

    /// Load the persisted cart for `user_id`, if any.
    pub async fn find(&self, user_id: &str) -> Result<Option<CartDocument>> {
        self.store.find_one(user_id).await
    }

    /// Load the persisted cart for `user_id`, or an empty in-memory cart
    /// if none exists. The default is not persisted; it only becomes a
    /// document on the first successful save.
    pub async fn load_or_default(&self, user_id: &str) -> Result<CartDocument> {
        Ok(self
            .store
            .find_one(user_id)
            .await?
            .unwrap_or_else(|| CartDocument::new(user_id)))
    }

    /// Persist a cart document (upsert).
    pub async fn save(&self, cart: &CartDocument) -> Result<()> {
        self.store.save(cart).await
    }

    /// Delete the cart document for `user_id` unconditionally.
    pub async fn delete(&self, user_id: &str) -> Result<()> {
        self.store.delete_one(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartItem;
    use crate::storage::MemoryCartStore;

    #[tokio::test]
    async fn load_or_default_returns_empty_cart_for_new_user() {
        let store = Arc::new(MemoryCartStore::new());
        let repository = CartRepository::new(store.clone());

        let cart = repository.load_or_default("u1").await.unwrap();
        assert_eq!(cart.user_id, "u1");
        assert!(cart.items.is_empty());
        // Reading must not create a document
        assert_eq!(store.stored_count().await, 0);
    }

    #[tokio::test]
    async fn load_or_default_returns_persisted_cart() {
        let store = Arc::new(MemoryCartStore::new());
        let repository = CartRepository::new(store.clone());

        let mut cart = CartDocument::new("u1");
        cart.merge_item(CartItem {
            product_id: "p1".to_string(),
            product_name: "Widget".to_string(),
            price: 10.0,
            quantity: 2,
        });
        repository.save(&cart).await.unwrap();

        let loaded = repository.load_or_default("u1").await.unwrap();
        assert_eq!(loaded.items.len(), 1);
        assert_eq!(loaded.items[0].quantity, 2);
    }
}
