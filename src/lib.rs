//! cart-service - gRPC shopping cart service
//!
//! Owns per-user cart state, persists it in a document store, and returns
//! a recomputed view (`subtotal`/`total` derived on every read) from each
//! operation.

pub mod cart;
pub mod config;
pub mod repository;
pub mod services;
pub mod storage;
pub mod transport;
pub mod utils;

pub mod proto {
    tonic::include_proto!("cart");
}
