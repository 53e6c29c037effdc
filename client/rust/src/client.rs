//! Cart service client.

use tonic::transport::Channel;
use tracing::info;

use crate::proto::cart_service_client::CartServiceClient;
use crate::proto::{
    AddItemRequest, Cart, ClearCartRequest, GetCartRequest, RemoveItemRequest,
};

/// Errors returned by [`CartClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("RPC failed: {0}")]
    Rpc(#[from] tonic::Status),
}

/// Typed client for the cart service.
///
/// The caller is expected to pass an already-authenticated user id; the
/// service trusts it verbatim.
pub struct CartClient {
    inner: CartServiceClient<Channel>,
}

impl CartClient {
    /// Connect to the cart service at `address` (host:port).
    pub async fn connect(address: &str) -> Result<Self, ClientError> {
        let uri = if address.starts_with("http://") || address.starts_with("https://") {
            address.to_string()
        } else {
            format!("http://{}", address)
        };

        let channel = Channel::from_shared(uri)
            .map_err(|e| ClientError::InvalidEndpoint(e.to_string()))?
            .connect()
            .await?;

        info!(address = %address, "Connected to cart service");

        Ok(Self {
            inner: CartServiceClient::new(channel),
        })
    }

    /// Wrap an existing channel.
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            inner: CartServiceClient::new(channel),
        }
    }

    /// Fetch the recomputed cart view for a user.
    pub async fn get_cart(&mut self, user_id: &str) -> Result<Cart, ClientError> {
        let response = self
            .inner
            .get_cart(GetCartRequest {
                user_id: user_id.to_string(),
            })
            .await?;
        Ok(response.into_inner())
    }

    /// Add a product line, accumulating quantity if already present.
    pub async fn add_item(
        &mut self,
        user_id: &str,
        product_id: &str,
        product_name: &str,
        price: f64,
        quantity: u32,
    ) -> Result<Cart, ClientError> {
        let response = self
            .inner
            .add_item(AddItemRequest {
                user_id: user_id.to_string(),
                product_id: product_id.to_string(),
                product_name: product_name.to_string(),
                price,
                quantity,
            })
            .await?;
        Ok(response.into_inner())
    }

    /// Remove a product line. Unknown products are a no-op.
    pub async fn remove_item(
        &mut self,
        user_id: &str,
        product_id: &str,
    ) -> Result<Cart, ClientError> {
        let response = self
            .inner
            .remove_item(RemoveItemRequest {
                user_id: user_id.to_string(),
                product_id: product_id.to_string(),
            })
            .await?;
        Ok(response.into_inner())
    }

    /// Delete the user's cart. Acknowledgment only, no view.
    pub async fn clear_cart(&mut self, user_id: &str) -> Result<(), ClientError> {
        self.inner
            .clear_cart(ClearCartRequest {
                user_id: user_id.to_string(),
            })
            .await?;
        Ok(())
    }
}
