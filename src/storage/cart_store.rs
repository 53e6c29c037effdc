//! Cart storage interface.

use async_trait::async_trait;

use crate::cart::CartDocument;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
///
/// A missing cart is state, not an error: `find_one` returns `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),

    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

/// Interface for cart document persistence.
///
/// A minimal keyed get/put/delete contract with upsert semantics on
/// `save`. One document per `user_id`; implementations enforce the
/// uniqueness constraint.
///
/// Implementations:
/// - `MongoCartStore`: MongoDB storage
/// - `MemoryCartStore`: In-memory storage for tests and local runs
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Retrieve the cart document for a user.
    ///
    /// Returns `None` if no document exists.
    async fn find_one(&self, user_id: &str) -> Result<Option<CartDocument>>;

    /// Store a cart document, replacing any existing document for the
    /// same `user_id` (upsert).
    async fn save(&self, cart: &CartDocument) -> Result<()>;

    /// Delete the cart document for a user. Deleting a missing document
    /// is not an error.
    async fn delete_one(&self, user_id: &str) -> Result<()>;
}
