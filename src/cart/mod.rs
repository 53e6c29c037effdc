//! Cart domain model.
//!
//! The persisted document holds raw `price`/`quantity` per line; the wire
//! view with `subtotal` and `total` is projected from it on every read and
//! is never stored.

use serde::{Deserialize, Serialize};

use crate::proto;

/// One product line as persisted.
///
/// `price` and `product_name` are denormalized copies taken at add time;
/// they are not refreshed from any catalog afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub product_name: String,
    pub price: f64,
    pub quantity: u32,
}

/// The persisted cart document, one per user.
///
/// Items keep insertion order. No two items share a `product_id`:
/// [`CartDocument::merge_item`] accumulates quantity instead of appending
/// a duplicate line.
///
/// Field names serialize as camelCase so the collection stays compatible
/// with documents written by earlier deployments of this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDocument {
    pub user_id: String,
    #[serde(default)]
    pub items: Vec<CartItem>,
    /// Stamped by the storage layer on save; not exposed on the wire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl CartDocument {
    /// An empty, unpersisted cart for `user_id`.
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            items: Vec::new(),
            updated_at: None,
        }
    }

    /// Merge a line into the cart.
    ///
    /// If an item with the same `product_id` exists, its quantity is
    /// incremented by the incoming quantity and the stored price/name are
    /// kept. Otherwise the line is appended as-is.
    pub fn merge_item(&mut self, item: CartItem) {
        match self
            .items
            .iter_mut()
            .find(|existing| existing.product_id == item.product_id)
        {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            }
            None => self.items.push(item),
        }
    }

    /// Drop every line matching `product_id`. Unknown ids are a no-op.
    pub fn remove_item(&mut self, product_id: &str) {
        self.items.retain(|item| item.product_id != product_id);
    }

    /// Project the wire view: `subtotal = price * quantity` per line,
    /// `total` the sum over lines. Pure; summation order does not matter.
    pub fn to_view(&self) -> proto::Cart {
        let mut total = 0.0;
        let items = self
            .items
            .iter()
            .map(|item| {
                let subtotal = item.price * f64::from(item.quantity);
                total += subtotal;
                proto::CartItem {
                    product_id: item.product_id.clone(),
                    product_name: item.product_name.clone(),
                    price: item.price,
                    quantity: item.quantity,
                    subtotal,
                }
            })
            .collect();

        proto::Cart {
            user_id: self.user_id.clone(),
            items,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(quantity: u32) -> CartItem {
        CartItem {
            product_id: "p1".to_string(),
            product_name: "Widget".to_string(),
            price: 10.0,
            quantity,
        }
    }

    #[test]
    fn merge_item_appends_new_product() {
        let mut cart = CartDocument::new("u1");
        cart.merge_item(widget(2));
        assert_eq!(cart.items.len(), 1);

        cart.merge_item(CartItem {
            product_id: "p2".to_string(),
            product_name: "Gadget".to_string(),
            price: 5.0,
            quantity: 1,
        });
        assert_eq!(cart.items.len(), 2);
        // Insertion order is kept
        assert_eq!(cart.items[0].product_id, "p1");
        assert_eq!(cart.items[1].product_id, "p2");
    }

    #[test]
    fn merge_item_accumulates_quantity() {
        let mut cart = CartDocument::new("u1");
        cart.merge_item(widget(2));
        cart.merge_item(widget(3));

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 5);
    }

    #[test]
    fn merge_item_keeps_stored_price_and_name() {
        let mut cart = CartDocument::new("u1");
        cart.merge_item(widget(2));
        cart.merge_item(CartItem {
            product_id: "p1".to_string(),
            product_name: "Widget v2".to_string(),
            price: 99.0,
            quantity: 1,
        });

        // Accumulation, not replacement: the first add wins
        assert_eq!(cart.items[0].price, 10.0);
        assert_eq!(cart.items[0].product_name, "Widget");
        assert_eq!(cart.items[0].quantity, 3);
    }

    #[test]
    fn remove_item_unknown_product_is_noop() {
        let mut cart = CartDocument::new("u1");
        cart.merge_item(widget(2));
        cart.remove_item("nope");
        assert_eq!(cart.items.len(), 1);
    }

    #[test]
    fn to_view_recomputes_subtotals_and_total() {
        let mut cart = CartDocument::new("u1");
        cart.merge_item(widget(2));
        cart.merge_item(CartItem {
            product_id: "p2".to_string(),
            product_name: "Gadget".to_string(),
            price: 2.5,
            quantity: 4,
        });

        let view = cart.to_view();
        assert_eq!(view.user_id, "u1");
        assert_eq!(view.items[0].subtotal, 20.0);
        assert_eq!(view.items[1].subtotal, 10.0);
        assert_eq!(view.total, 30.0);
    }

    #[test]
    fn to_view_empty_cart_has_zero_total() {
        let view = CartDocument::new("u1").to_view();
        assert_eq!(view.user_id, "u1");
        assert!(view.items.is_empty());
        assert_eq!(view.total, 0.0);
    }
}
