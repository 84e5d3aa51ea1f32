//! Statistics aggregation tests: totals, top rankings, and behavior on an
//! empty store or dangling references.

mod common;

use store_server::ServerState;
use store_server::db::models::{ClientCreate, OrderCreate, OrderItemRequest, ProductCreate};
use store_server::db::repository::{
    ClientRepository, OrderRepository, ProductRepository, StatisticsRepository,
};

fn repos(
    state: &ServerState,
) -> (
    ClientRepository,
    ProductRepository,
    OrderRepository,
    StatisticsRepository,
) {
    (
        ClientRepository::new(state.db.clone(), state.sequences.clone()),
        ProductRepository::new(state.db.clone(), state.sequences.clone()),
        OrderRepository::new(state.db.clone(), state.sequences.clone()),
        StatisticsRepository::new(state.db.clone()),
    )
}

fn client(id: &str, name: &str) -> ClientCreate {
    ClientCreate {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        email: Some(format!("{name}@example.com")),
    }
}

fn product(id: &str, name: &str, price: f64) -> ProductCreate {
    ProductCreate {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        category: None,
        price: Some(price),
        description: None,
    }
}

fn order(client_ref: &str, items: Vec<(&str, i64)>) -> OrderCreate {
    OrderCreate {
        client_id: Some(client_ref.to_string()),
        items: Some(
            items
                .into_iter()
                .map(|(pid, qty)| OrderItemRequest {
                    product_id: Some(pid.to_string()),
                    quantity: Some(qty),
                })
                .collect(),
        ),
    }
}

#[tokio::test]
async fn totals_and_rankings() {
    let (_tmp, state) = common::test_state().await;
    let (clients, products, orders, stats) = repos(&state);

    clients.create(client("1", "alice")).await.unwrap();
    clients.create(client("2", "bob")).await.unwrap();
    products.create(product("p1", "Espresso", 10.0)).await.unwrap();
    products.create(product("p2", "Croissant", 5.5)).await.unwrap();

    orders.create(order("1", vec![("p1", 2)])).await.unwrap(); // 20.0
    orders
        .create(order("1", vec![("p1", 1), ("p2", 5)]))
        .await
        .unwrap(); // 37.5
    orders.create(order("2", vec![("p2", 1)])).await.unwrap(); // 5.5

    assert_eq!(stats.total_orders().await.unwrap(), 3);
    assert_eq!(stats.total_value().await.unwrap(), 63.0);

    let top_clients = stats.top_clients().await.unwrap();
    assert_eq!(top_clients.len(), 2);
    assert_eq!(top_clients[0].id, "1");
    assert_eq!(top_clients[0].name, "alice");
    assert_eq!(top_clients[0].total_orders, 2);
    assert_eq!(top_clients[1].id, "2");
    assert_eq!(top_clients[1].total_orders, 1);

    let top_products = stats.top_products().await.unwrap();
    assert_eq!(top_products.len(), 2);
    assert_eq!(top_products[0].product_id, "p2");
    assert_eq!(top_products[0].name, "Croissant");
    assert_eq!(top_products[0].quantity, 6);
    assert_eq!(top_products[1].product_id, "p1");
    assert_eq!(top_products[1].quantity, 3);
}

#[tokio::test]
async fn empty_store_yields_zero_totals() {
    let (_tmp, state) = common::test_state().await;
    let (_, _, _, stats) = repos(&state);

    assert_eq!(stats.total_orders().await.unwrap(), 0);
    assert_eq!(stats.total_value().await.unwrap(), 0.0);
    assert!(stats.top_clients().await.unwrap().is_empty());
    assert!(stats.top_products().await.unwrap().is_empty());
}

#[tokio::test]
async fn dangling_product_reference_reports_unknown() {
    let (_tmp, state) = common::test_state().await;
    let (clients, products, orders, stats) = repos(&state);

    clients.create(client("1", "alice")).await.unwrap();
    products.create(product("p1", "Espresso", 10.0)).await.unwrap();
    orders.create(order("1", vec![("p1", 4)])).await.unwrap();

    // Remove the product record directly, bypassing line-item pruning,
    // to leave a dangling reference in the order
    let _: Option<serde_json::Value> = state.db.delete(("product", "p1")).await.unwrap();

    let top_products = stats.top_products().await.unwrap();
    assert_eq!(top_products.len(), 1);
    assert_eq!(top_products[0].product_id, "p1");
    assert_eq!(top_products[0].name, "Unknown");
    assert_eq!(top_products[0].quantity, 4);
}

#[tokio::test]
async fn dangling_client_reference_is_dropped_from_ranking() {
    let (_tmp, state) = common::test_state().await;
    let (clients, products, orders, stats) = repos(&state);

    clients.create(client("1", "alice")).await.unwrap();
    clients.create(client("2", "bob")).await.unwrap();
    products.create(product("p1", "Espresso", 10.0)).await.unwrap();
    orders.create(order("1", vec![("p1", 1)])).await.unwrap();
    orders.create(order("2", vec![("p1", 1)])).await.unwrap();

    // Remove a client without its cascade, leaving its order behind
    let _: Option<serde_json::Value> = state.db.delete(("client", "client_2")).await.unwrap();

    let top_clients = stats.top_clients().await.unwrap();
    assert_eq!(top_clients.len(), 1);
    assert_eq!(top_clients[0].id, "1");
}
