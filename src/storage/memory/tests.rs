use super::*;
use crate::cart::CartItem;

fn cart_with_widget(user_id: &str) -> CartDocument {
    let mut cart = CartDocument::new(user_id);
    cart.merge_item(CartItem {
        product_id: "p1".to_string(),
        product_name: "Widget".to_string(),
        price: 10.0,
        quantity: 2,
    });
    cart
}

#[tokio::test]
async fn find_one_missing_returns_none() {
    let store = MemoryCartStore::new();
    let found = store.find_one("u1").await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn save_then_find_round_trips() {
    let store = MemoryCartStore::new();
    store.save(&cart_with_widget("u1")).await.unwrap();

    let found = store.find_one("u1").await.unwrap().unwrap();
    assert_eq!(found.user_id, "u1");
    assert_eq!(found.items.len(), 1);
    // The store stamps the save time
    assert!(found.updated_at.is_some());
}

#[tokio::test]
async fn save_upserts_same_user() {
    let store = MemoryCartStore::new();
    store.save(&cart_with_widget("u1")).await.unwrap();

    let mut updated = cart_with_widget("u1");
    updated.items[0].quantity = 7;
    store.save(&updated).await.unwrap();

    assert_eq!(store.stored_count().await, 1);
    let found = store.find_one("u1").await.unwrap().unwrap();
    assert_eq!(found.items[0].quantity, 7);
}

#[tokio::test]
async fn delete_one_removes_document() {
    let store = MemoryCartStore::new();
    store.save(&cart_with_widget("u1")).await.unwrap();

    store.delete_one("u1").await.unwrap();
    assert_eq!(store.stored_count().await, 0);

    // Deleting a missing document is not an error
    store.delete_one("u1").await.unwrap();
}

#[tokio::test]
async fn injected_faults_surface_as_unavailable() {
    let store = MemoryCartStore::new();

    store.set_fail_on_find(true).await;
    let err = store.find_one("u1").await.unwrap_err();
    assert!(matches!(err, StorageError::Unavailable(_)));

    store.set_fail_on_save(true).await;
    let err = store.save(&cart_with_widget("u1")).await.unwrap_err();
    assert!(matches!(err, StorageError::Unavailable(_)));

    store.set_fail_on_delete(true).await;
    let err = store.delete_one("u1").await.unwrap_err();
    assert!(matches!(err, StorageError::Unavailable(_)));
}
