//! Statistics Repository
//!
//! Read-only aggregation over the order collection. Counts and sums use
//! `GROUP ALL` aggregate queries; the top-N rollups fetch the referencing
//! fields and aggregate in memory, then join display names via point
//! lookups (the embedded engine's grouped ORDER BY has proven unreliable,
//! and the dataset is a single store's orders).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};
use crate::db::models::{Client, OrderLine, Product};
use crate::ident::EntityKind;

const CLIENT_TABLE: &str = "client";
const PRODUCT_TABLE: &str = "product";

const TOP_LIMIT: usize = 10;

/// Top client by order count, joined to the client's name
#[derive(Debug, Clone, Serialize)]
pub struct TopClient {
    pub id: String,
    pub name: String,
    #[serde(rename = "totalOrders")]
    pub total_orders: i64,
}

/// Top product by total ordered quantity, joined to the product's name
#[derive(Debug, Clone, Serialize)]
pub struct TopProduct {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub name: String,
    pub quantity: i64,
}

#[derive(Clone)]
pub struct StatisticsRepository {
    base: BaseRepository,
}

impl StatisticsRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Top 10 clients by order count, descending
    ///
    /// Orders referencing a since-deleted client are dropped from the
    /// result rather than shown as unknown.
    pub async fn top_clients(&self) -> RepoResult<Vec<TopClient>> {
        #[derive(Deserialize)]
        struct Row {
            client_id: String,
        }

        let rows: Vec<Row> = self
            .base
            .db()
            .query("SELECT client_id FROM order")
            .await?
            .take(0)?;

        let mut counts: HashMap<String, i64> = HashMap::new();
        for row in rows {
            *counts.entry(row.client_id).or_insert(0) += 1;
        }

        let mut grouped: Vec<(String, i64)> = counts.into_iter().collect();
        grouped.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let mut top = Vec::new();
        for (client_key, total_orders) in grouped {
            if top.len() == TOP_LIMIT {
                break;
            }
            let client: Option<Client> = self
                .base
                .db()
                .select((CLIENT_TABLE, client_key.as_str()))
                .await?;
            if let Some(client) = client {
                top.push(TopClient {
                    id: EntityKind::Client.strip(&client_key).to_string(),
                    name: client.name,
                    total_orders,
                });
            }
        }
        Ok(top)
    }

    /// Top 10 products by total ordered quantity, descending
    ///
    /// Line items referencing a since-deleted product are kept, with the
    /// name reported as "Unknown".
    pub async fn top_products(&self) -> RepoResult<Vec<TopProduct>> {
        #[derive(Deserialize)]
        struct Row {
            items: Vec<OrderLine>,
        }

        let rows: Vec<Row> = self
            .base
            .db()
            .query("SELECT items FROM order")
            .await?
            .take(0)?;

        let mut quantities: HashMap<String, i64> = HashMap::new();
        for row in rows {
            for line in row.items {
                *quantities.entry(line.product_id).or_insert(0) += line.quantity;
            }
        }

        let mut grouped: Vec<(String, i64)> = quantities.into_iter().collect();
        grouped.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        grouped.truncate(TOP_LIMIT);

        let mut top = Vec::new();
        for (product_key, quantity) in grouped {
            let product: Option<Product> = self
                .base
                .db()
                .select((PRODUCT_TABLE, product_key.as_str()))
                .await?;
            top.push(TopProduct {
                product_id: EntityKind::Product.strip(&product_key).to_string(),
                name: product.map_or_else(|| "Unknown".to_string(), |p| p.name),
                quantity,
            });
        }
        Ok(top)
    }

    /// Total number of orders
    pub async fn total_orders(&self) -> RepoResult<i64> {
        #[derive(Deserialize)]
        struct Row {
            total: i64,
        }

        let row: Option<Row> = self
            .base
            .db()
            .query("SELECT count() AS total FROM order GROUP ALL")
            .await?
            .take(0)?;
        Ok(row.map(|r| r.total).unwrap_or(0))
    }

    /// Sum of `total_price` across all orders, `0` if none
    pub async fn total_value(&self) -> RepoResult<f64> {
        #[derive(Deserialize)]
        struct Row {
            total_value: f64,
        }

        let row: Option<Row> = self
            .base
            .db()
            .query("SELECT math::sum(total_price) AS total_value FROM order GROUP ALL")
            .await?
            .take(0)?;
        Ok(row.map(|r| r.total_value).unwrap_or(0.0))
    }
}
