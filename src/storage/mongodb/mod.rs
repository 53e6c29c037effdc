//! MongoDB implementation of cart storage.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::{IndexOptions, ReplaceOptions};
use mongodb::{Client, Collection, IndexModel};

use crate::cart::CartDocument;
use crate::storage::{CartStore, Result};

/// Collection name.
pub(crate) const CARTS_COLLECTION: &str = "carts";

/// MongoDB implementation of CartStore.
///
/// Documents are keyed by `userId` with a unique index, so at most one
/// cart document exists per user. `save` replaces the whole document with
/// upsert semantics.
pub struct MongoCartStore {
    carts: Collection<CartDocument>,
}

impl MongoCartStore {
    /// Create a new MongoDB cart store.
    pub async fn new(client: &Client, database_name: &str) -> Result<Self> {
        let database = client.database(database_name);
        let carts = database.collection(CARTS_COLLECTION);

        let store = Self { carts };
        store.init().await?;

        Ok(store)
    }

    /// Initialize indexes.
    async fn init(&self) -> Result<()> {
        // Unique index on userId - one cart document per user
        let index = IndexModel::builder()
            .keys(doc! { "userId": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.carts.create_index(index).await?;

        Ok(())
    }
}

#[async_trait]
impl CartStore for MongoCartStore {
    async fn find_one(&self, user_id: &str) -> Result<Option<CartDocument>> {
        let filter = doc! { "userId": user_id };

        Ok(self.carts.find_one(filter).await?)
    }

    async fn save(&self, cart: &CartDocument) -> Result<()> {
        let filter = doc! { "userId": &cart.user_id };

        let mut document = cart.clone();
        document.updated_at = Some(chrono::Utc::now().to_rfc3339());

        let options = ReplaceOptions::builder().upsert(true).build();

        self.carts
            .replace_one(filter, document)
            .with_options(options)
            .await?;

        Ok(())
    }

    async fn delete_one(&self, user_id: &str) -> Result<()> {
        let filter = doc! { "userId": user_id };

        self.carts.delete_one(filter).await?;

        Ok(())
    }
}
