//! Storage implementations.

use std::sync::Arc;

use tracing::info;

use crate::config::{StorageConfig, StorageType};

mod cart_store;
pub mod memory;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use cart_store::{CartStore, Result, StorageError};
pub use memory::MemoryCartStore;

#[cfg(feature = "mongodb")]
pub use mongodb::MongoCartStore;

/// Initialize storage based on configuration.
///
/// Returns the `CartStore` implementation selected by the configured
/// storage type. The handle is constructed here, once, and injected into
/// the service; nothing holds process-global storage state.
pub async fn init_storage(
    config: &StorageConfig,
) -> std::result::Result<Arc<dyn CartStore>, Box<dyn std::error::Error>> {
    match config.storage_type {
        StorageType::Memory => {
            info!("Storage: in-memory (not persistent)");
            Ok(Arc::new(MemoryCartStore::new()))
        }
        #[cfg(feature = "mongodb")]
        StorageType::Mongodb => {
            info!(
                uri = %config.mongodb.uri,
                database = %config.mongodb.database,
                "Storage: mongodb"
            );
            let client = ::mongodb::Client::with_uri_str(&config.mongodb.uri).await?;
            let store = MongoCartStore::new(&client, &config.mongodb.database).await?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "mongodb"))]
        StorageType::Mongodb => {
            tracing::error!("MongoDB storage requested but 'mongodb' feature is not enabled");
            Err("MongoDB feature not enabled".into())
        }
    }
}
