//! Wire-level round trip: real tonic server on a loopback socket, driven
//! through the published client crate.

use std::sync::Arc;

use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;

use cart_service::proto::cart_service_server::CartServiceServer;
use cart_service::services::CartService;
use cart_service::storage::MemoryCartStore;
use cart_service_client::CartClient;

async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");

    let service = CartService::new(Arc::new(MemoryCartStore::new()));
    tokio::spawn(async move {
        Server::builder()
            .add_service(CartServiceServer::new(service))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .expect("serve");
    });

    addr.to_string()
}

#[tokio::test]
async fn cart_operations_over_the_wire() {
    let address = spawn_server().await;
    let mut client = CartClient::connect(&address).await.expect("connect");

    let cart = client.get_cart("u1").await.expect("get");
    assert!(cart.items.is_empty());
    assert_eq!(cart.total, 0.0);

    let cart = client
        .add_item("u1", "p1", "Widget", 10.0, 2)
        .await
        .expect("add");
    assert_eq!(cart.total, 20.0);
    assert_eq!(cart.items[0].subtotal, 20.0);

    let cart = client
        .add_item("u1", "p1", "Widget", 10.0, 3)
        .await
        .expect("add again");
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 5);
    assert_eq!(cart.total, 50.0);

    let cart = client.remove_item("u1", "p1").await.expect("remove");
    assert!(cart.items.is_empty());
    assert_eq!(cart.total, 0.0);

    client.clear_cart("u1").await.expect("clear");
    let cart = client.get_cart("u1").await.expect("get after clear");
    assert_eq!(cart.user_id, "u1");
    assert!(cart.items.is_empty());
}

#[tokio::test]
async fn invalid_argument_is_propagated_to_the_client() {
    let address = spawn_server().await;
    let mut client = CartClient::connect(&address).await.expect("connect");

    let err = client.get_cart("").await.expect_err("empty user_id");
    match err {
        cart_service_client::ClientError::Rpc(status) => {
            assert_eq!(status.code(), tonic::Code::InvalidArgument);
        }
        other => panic!("unexpected error: {other}"),
    }
}
