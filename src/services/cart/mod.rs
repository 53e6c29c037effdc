//! Cart service (gRPC).

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::{error, info};

use crate::cart::{CartDocument, CartItem};
use crate::proto::cart_service_server::CartService as CartServiceTrait;
use crate::proto::{
    AddItemRequest, Cart, ClearCartRequest, ClearCartResponse, GetCartRequest, RemoveItemRequest,
};
use crate::repository::CartRepository;
use crate::storage::CartStore;

/// Cart service.
///
/// Loads the cart document, applies the operation, persists, and returns
/// the recomputed view. Each call is handled independently: there is no
/// ordering or locking across concurrent operations on the same user, so
/// concurrent writes to one cart are last-write-wins.
pub struct CartService {
    repository: CartRepository,
}

impl CartService {
    /// Create a new cart service over an injected storage handle.
    pub fn new(store: Arc<dyn CartStore>) -> Self {
        Self {
            repository: CartRepository::new(store),
        }
    }
}

/// The one schema-level check: a cart keyed on the empty string is not
/// addressable. Everything else in a request is accepted as given.
fn require_user_id(user_id: &str) -> Result<(), Status> {
    if user_id.is_empty() {
        return Err(Status::invalid_argument("user_id must not be empty"));
    }
    Ok(())
}

#[tonic::async_trait]
impl CartServiceTrait for CartService {
    async fn get_cart(&self, request: Request<GetCartRequest>) -> Result<Response<Cart>, Status> {
        let req = request.into_inner();
        require_user_id(&req.user_id)?;

        let cart = self
            .repository
            .load_or_default(&req.user_id)
            .await
            .map_err(|e| {
                error!(user_id = %req.user_id, error = %e, "GetCart load failed");
                Status::internal(e.to_string())
            })?;

        info!(user_id = %req.user_id, items = cart.items.len(), "GetCart");
        Ok(Response::new(cart.to_view()))
    }

    async fn add_item(&self, request: Request<AddItemRequest>) -> Result<Response<Cart>, Status> {
        let req = request.into_inner();
        require_user_id(&req.user_id)?;

        let mut cart = self
            .repository
            .load_or_default(&req.user_id)
            .await
            .map_err(|e| {
                error!(user_id = %req.user_id, error = %e, "AddItem load failed");
                Status::internal(e.to_string())
            })?;

        cart.merge_item(CartItem {
            product_id: req.product_id.clone(),
            product_name: req.product_name,
            price: req.price,
            quantity: req.quantity,
        });

        self.repository.save(&cart).await.map_err(|e| {
            error!(user_id = %req.user_id, error = %e, "AddItem save failed");
            Status::internal(e.to_string())
        })?;

        info!(
            user_id = %req.user_id,
            product_id = %req.product_id,
            items = cart.items.len(),
            "AddItem persisted"
        );
        Ok(Response::new(cart.to_view()))
    }

    async fn remove_item(
        &self,
        request: Request<RemoveItemRequest>,
    ) -> Result<Response<Cart>, Status> {
        let req = request.into_inner();
        require_user_id(&req.user_id)?;

        // A user without a cart gets an empty view back; no document is
        // created for them.
        let Some(mut cart) = self.repository.find(&req.user_id).await.map_err(|e| {
            error!(user_id = %req.user_id, error = %e, "RemoveItem load failed");
            Status::internal(e.to_string())
        })?
        else {
            info!(user_id = %req.user_id, "RemoveItem on missing cart");
            return Ok(Response::new(CartDocument::new(&req.user_id).to_view()));
        };

        cart.remove_item(&req.product_id);

        // Re-saved even when nothing matched
        self.repository.save(&cart).await.map_err(|e| {
            error!(user_id = %req.user_id, error = %e, "RemoveItem save failed");
            Status::internal(e.to_string())
        })?;

        info!(
            user_id = %req.user_id,
            product_id = %req.product_id,
            items = cart.items.len(),
            "RemoveItem persisted"
        );
        Ok(Response::new(cart.to_view()))
    }

    async fn clear_cart(
        &self,
        request: Request<ClearCartRequest>,
    ) -> Result<Response<ClearCartResponse>, Status> {
        let req = request.into_inner();
        require_user_id(&req.user_id)?;

        self.repository.delete(&req.user_id).await.map_err(|e| {
            error!(user_id = %req.user_id, error = %e, "ClearCart delete failed");
            Status::internal(e.to_string())
        })?;

        info!(user_id = %req.user_id, "ClearCart");
        Ok(Response::new(ClearCartResponse {}))
    }
}
