//! cart-service: per-user shopping cart over gRPC.
//!
//! Loads configuration, connects the configured document store, and
//! serves `cart.CartService` (plus gRPC health) until SIGINT/SIGTERM.
//!
//! ## Configuration
//! - First CLI argument or CART_CONFIG: path to a YAML config file
//! - CART__STORAGE__TYPE: `mongodb` (default) or `memory`
//! - CART__STORAGE__MONGODB__URI / ...__DATABASE: MongoDB connection
//! - CART__TRANSPORT__TCP__PORT: listen port (default 50052)
//! - CART_LOG: tracing filter (default `info`)

use tonic::transport::Server;
use tonic_health::server::health_reporter;
use tracing::{error, info};

use cart_service::config::Config;
use cart_service::proto::cart_service_server::CartServiceServer;
use cart_service::services::CartService;
use cart_service::storage::init_storage;
use cart_service::transport::serve_with_shutdown;
use cart_service::utils::bootstrap;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    bootstrap::init_tracing();

    let config_path = bootstrap::parse_config_path();
    let config = Config::load(config_path.as_deref()).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!("Starting cart-service");

    let store = init_storage(&config.storage).await?;
    info!("Storage initialized");

    let cart_service = CartService::new(store);

    // Create health reporter
    let (mut health_reporter, health_service) = health_reporter();
    health_reporter
        .set_service_status("", tonic_health::ServingStatus::Serving)
        .await;

    let router = Server::builder()
        .add_service(health_service)
        .add_service(CartServiceServer::new(cart_service));

    serve_with_shutdown(
        router,
        &config.transport,
        "cart",
        bootstrap::shutdown_signal(),
    )
    .await?;

    info!("cart-service stopped");
    Ok(())
}
