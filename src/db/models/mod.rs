//! Database Models
//!
//! Document shapes stored in SurrealDB. The logical entity identifier
//! (`client_5`, `p1`, `order_0`) doubles as the record key, so the `id`
//! field on each model is the full record id assigned by the store.

pub mod client;
pub mod counter;
pub mod order;
pub mod product;

// Re-exports
pub use client::{Client, ClientCreate};
pub use counter::Counter;
pub use order::{Order, OrderCreate, OrderItemRequest, OrderLine};
pub use product::{Product, ProductCreate};
