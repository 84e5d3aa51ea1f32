//! Order Repository
//!
//! Order assembly is the only write path for orders: it validates the
//! request against the client and product collections, computes per-line
//! and total pricing, allocates an order id, and persists the composed
//! record. Orders are never created with a caller-supplied id.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, SequenceRepository};
use crate::db::models::{Client, Order, OrderCreate, OrderLine, Product};
use crate::ident::EntityKind;

const CLIENT_TABLE: &str = "client";
const PRODUCT_TABLE: &str = "product";
const ORDER_TABLE: &str = "order";

const INVALID_ORDER: &str =
    "Invalid input, 'clientId' must be a string and 'items' must be a non-empty array";
const INVALID_ITEM: &str =
    "Invalid item format: 'productId' must be a string and 'quantity' must be a positive integer";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
    sequences: SequenceRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>, sequences: SequenceRepository) -> Self {
        Self {
            base: BaseRepository::new(db),
            sequences,
        }
    }

    /// Assemble and persist an order
    ///
    /// Validation order, each a distinct failure mode:
    /// 1. non-empty `clientId` and non-empty `items`;
    /// 2. client exists at `client_<clientId>`;
    /// 3. per item: non-empty `productId`, positive `quantity` — the first
    ///    failing item aborts the whole request;
    /// 4. per item: product exists under its raw id.
    ///
    /// No sequence number is consumed and nothing is persisted for a request
    /// that fails validation. If the insert fails after allocation, the
    /// number stays consumed: gaps are acceptable, duplicate ids are not.
    pub async fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        let client_ref = data
            .client_id
            .filter(|s| !s.is_empty())
            .ok_or_else(|| RepoError::Validation(INVALID_ORDER.to_string()))?;
        let item_requests = data
            .items
            .filter(|items| !items.is_empty())
            .ok_or_else(|| RepoError::Validation(INVALID_ORDER.to_string()))?;

        let client_key = format!("{}{}", EntityKind::Client.prefix(), client_ref);
        let client: Option<Client> = self
            .base
            .db()
            .select((CLIENT_TABLE, client_key.as_str()))
            .await?;
        if client.is_none() {
            return Err(RepoError::NotFound("Client not found".to_string()));
        }

        let mut items = Vec::with_capacity(item_requests.len());
        let mut total_price = 0.0_f64;

        for request in item_requests {
            let product_id = request
                .product_id
                .filter(|s| !s.is_empty())
                .ok_or_else(|| RepoError::Validation(INVALID_ITEM.to_string()))?;
            let quantity = request
                .quantity
                .filter(|q| *q > 0)
                .ok_or_else(|| RepoError::Validation(INVALID_ITEM.to_string()))?;

            // Raw lookup: product ids are stored as created, prefixed or not
            let product: Product = self
                .base
                .db()
                .select((PRODUCT_TABLE, product_id.as_str()))
                .await?
                .ok_or_else(|| {
                    RepoError::NotFound(format!("Product with ID {product_id} not found"))
                })?;

            // Price snapshot; accumulation order is the input item order
            let line_total = product.price * quantity as f64;
            total_price += line_total;

            items.push(OrderLine {
                product_id,
                quantity,
                unit_price: product.price,
                total_price: line_total,
            });
        }

        // All items validated — only now consume a sequence number
        let n = self.sequences.next(EntityKind::Order).await?;
        let key = EntityKind::Order.id_for(n);

        let created: Option<Order> = self
            .base
            .db()
            .create((ORDER_TABLE, key.as_str()))
            .content(Order {
                id: None,
                client_id: client_key,
                items,
                total_price,
            })
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// All orders belonging to a client (full `client_<n>` identifier)
    pub async fn find_by_client(&self, client_key: &str) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order WHERE client_id = $cid")
            .bind(("cid", client_key.to_string()))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Point lookup by numeric suffix or full identifier
    pub async fn find(&self, id: &str) -> RepoResult<Option<Order>> {
        let key = EntityKind::Order.qualify(id);
        let order: Option<Order> = self.base.db().select((ORDER_TABLE, key.as_str())).await?;
        Ok(order)
    }
}
