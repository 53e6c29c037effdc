//! gRPC service implementations.

pub mod cart;

pub use cart::CartService;
