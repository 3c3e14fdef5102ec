//! Cart to order placement against a mocked backend: the submitted payload
//! carries the cart snapshot plus the flat tax, and the cart empties only
//! after the backend accepts the order.

use httpmock::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;

use pawly_client::api::types::{OrderInput, Product};
use pawly_client::{ApiClient, CartManager, MemoryStore};
use pawly_core::ProductId;

#[tokio::test]
async fn checkout_submits_snapshot_and_clears_cart() {
    let server = MockServer::start();
    let api = ApiClient::new(format!("{}/api", server.base_url()));

    let _products = server.mock(|when, then| {
        when.method(GET).path("/api/products/7");
        then.status(200)
            .json_body(json!({"id": 7, "name": "Chew Toy", "price": 14.5}));
    });
    let order_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/orders")
            .query_param("userEmail", "a@b.com")
            // 29.00 cart total + 10.50 flat tax
            .json_body_includes(r#"{"totalAmount": 39.5}"#);
        then.status(200).json_body(json!({"id": 1, "totalAmount": 39.5}));
    });

    let mut cart = CartManager::new(MemoryStore::new());
    let product: Product = api.get_product(ProductId::new(7)).await.expect("product");

    // The double-add scenario: two rapid adds fold into one line item.
    cart.add_item(&product, 1);
    cart.add_item(&product, 1);

    let snapshot = cart.snapshot();
    assert_eq!(snapshot.item_count, 2);
    assert_eq!(snapshot.total, Decimal::new(2900, 2));

    let input = OrderInput::from_snapshot(&snapshot);
    assert_eq!(input.total_amount, Decimal::new(3950, 2));

    let order = api.create_order(&input, "a@b.com").await.expect("order");
    assert_eq!(order.total_amount, Decimal::new(3950, 2));
    order_mock.assert();

    cart.clear();
    assert!(cart.snapshot().is_empty());
}

#[tokio::test]
async fn failed_order_leaves_cart_intact() {
    let server = MockServer::start();
    let api = ApiClient::new(format!("{}/api", server.base_url()));

    let _order = server.mock(|when, then| {
        when.method(POST).path("/api/orders");
        then.status(500).body("backend down");
    });

    let mut cart = CartManager::new(MemoryStore::new());
    cart.add_item(
        &Product {
            id: ProductId::new(1),
            name: "Leash".to_owned(),
            description: None,
            price: Decimal::new(999, 2),
            image: None,
            category: None,
            stock: None,
        },
        2,
    );

    let snapshot = cart.snapshot();
    let input = OrderInput::from_snapshot(&snapshot);
    let result = api.create_order(&input, "a@b.com").await;
    assert!(result.is_err());

    // State did not change; try again.
    assert_eq!(cart.snapshot(), snapshot);
}
