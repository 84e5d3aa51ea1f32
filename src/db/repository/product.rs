//! Product Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, SequenceRepository, record_key};
use crate::db::models::{Order, OrderLine, Product, ProductCreate};
use crate::ident::EntityKind;

const PRODUCT_TABLE: &str = "product";
const ORDER_TABLE: &str = "order";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
    sequences: SequenceRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>, sequences: SequenceRepository) -> Self {
        Self {
            base: BaseRepository::new(db),
            sequences,
        }
    }

    /// Create a product, returning its storage identifier
    ///
    /// A caller-supplied id is stored as-is (raw string convention); absent
    /// means a `product_<n>` id is allocated.
    pub async fn create(&self, data: ProductCreate) -> RepoResult<String> {
        let name = data.name.filter(|s| !s.is_empty()).ok_or_else(|| {
            RepoError::Validation("Invalid input, missing name or price".to_string())
        })?;
        let price = data.price.ok_or_else(|| {
            RepoError::Validation("Invalid input, missing name or price".to_string())
        })?;

        let key = match data.id {
            Some(id) if !id.is_empty() => id,
            _ => {
                let n = self.sequences.next(EntityKind::Product).await?;
                EntityKind::Product.id_for(n)
            }
        };

        let created: Option<Product> = self
            .base
            .db()
            .create((PRODUCT_TABLE, key.as_str()))
            .content(Product {
                id: None,
                name,
                category: data.category,
                price,
                description: data.description,
            })
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))?;

        Ok(key)
    }

    /// Find a product by exact storage identifier (no prefix handling)
    ///
    /// Order assembly resolves line items this way: callers pass whatever
    /// id form product creation returned.
    pub async fn find_raw(&self, id: &str) -> RepoResult<Option<Product>> {
        let product: Option<Product> = self.base.db().select((PRODUCT_TABLE, id)).await?;
        Ok(product)
    }

    /// Resolve caller input to a stored product, trying the raw id first
    /// and falling back to the `product_<n>` form for numeric suffixes.
    ///
    /// Returns the resolved storage identifier together with the record.
    pub async fn resolve(&self, id: &str) -> RepoResult<Option<(String, Product)>> {
        if let Some(product) = self.find_raw(id).await? {
            return Ok(Some((id.to_string(), product)));
        }
        let qualified = EntityKind::Product.qualify(id);
        if qualified != id
            && let Some(product) = self.find_raw(&qualified).await?
        {
            return Ok(Some((qualified, product)));
        }
        Ok(None)
    }

    /// All products, optionally filtered by category
    pub async fn find_all(&self, category: Option<String>) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = match category {
            Some(cat) => {
                self.base
                    .db()
                    .query("SELECT * FROM product WHERE category = $cat")
                    .bind(("cat", cat))
                    .await?
                    .take(0)?
            }
            None => self.base.db().select(PRODUCT_TABLE).await?,
        };
        Ok(products)
    }

    /// Delete a product, prune its line items from orders, and remove its
    /// inventory records
    ///
    /// The pruned orders' `total_price` is intentionally left stale
    /// (historical-total semantics): it reflects what was charged at order
    /// time, not the remaining items.
    pub async fn delete_with_prune(&self, id: &str) -> RepoResult<()> {
        let Some((key, _)) = self.resolve(id).await? else {
            return Err(RepoError::NotFound("Product not found".to_string()));
        };

        let _deleted: Option<Product> =
            self.base.db().delete((PRODUCT_TABLE, key.as_str())).await?;

        // Remove the matching line item from every order referencing it
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM order WHERE items.productId CONTAINS $pid")
            .bind(("pid", key.clone()))
            .await?;
        let orders: Vec<Order> = result.take(0)?;

        for order in orders {
            let Some(order_id) = order.id else { continue };
            let items: Vec<OrderLine> = order
                .items
                .into_iter()
                .filter(|line| line.product_id != key)
                .collect();
            self.base
                .db()
                .query(format!("UPDATE type::thing('{ORDER_TABLE}', $key) SET items = $items"))
                .bind(("key", record_key(&order_id)))
                .bind(("items", items))
                .await?
                .check()?;
        }

        self.base
            .db()
            .query("DELETE inventory WHERE product_id = $pid")
            .bind(("pid", key.clone()))
            .await?
            .check()?;

        tracing::debug!(product = %key, "Product deleted, orders pruned");
        Ok(())
    }
}
