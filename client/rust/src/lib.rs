//! Typed client for the cart-service gRPC API.
//!
//! The gateway-side counterpart of the service: connect once, then issue
//! the four cart operations with plain arguments and get proto views back.

mod client;

pub use client::{CartClient, ClientError};

pub mod proto {
    tonic::include_proto!("cart");
}
