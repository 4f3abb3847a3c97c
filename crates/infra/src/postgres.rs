//! Postgres-backed catalog store (feature `postgres`).
//!
//! Read-only: the service never creates, updates, or deletes rows. Expected
//! tables: `items` (pk `item_id`), `stock` (indexed by `item_id`),
//! `tracking` (pk `tracking_no`), `tracking_events` (indexed by
//! `tracking_no`). `price` is `double precision`; timestamps are
//! `timestamptz`. Connection pooling, transactions, and retries are the
//! driver's concern, not ours.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use storefront_catalog::{Item, ItemRepository, Stock, StockRepository};
use storefront_core::StoreError;
use storefront_tracking::{Tracking, TrackingEventRecord, TrackingRepository};

/// Catalog store delegating to a Postgres pool.
#[derive(Clone)]
pub struct PostgresCatalogStore {
    pool: PgPool,
}

impl PostgresCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn store_err(e: sqlx::Error) -> StoreError {
    StoreError::query(e.to_string())
}

#[derive(sqlx::FromRow)]
struct ItemRow {
    item_id: String,
    name: String,
    price: f64,
    description: String,
    category: String,
    brand: String,
    sku: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            item_id: row.item_id,
            name: row.name,
            price: row.price,
            description: row.description,
            category: row.category,
            brand: row.brand,
            sku: row.sku,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct StockRow {
    item_id: String,
    in_stock: bool,
    quantity: i64,
    warehouse: String,
    last_updated: DateTime<Utc>,
}

impl From<StockRow> for Stock {
    fn from(row: StockRow) -> Self {
        Stock {
            item_id: row.item_id,
            in_stock: row.in_stock,
            quantity: row.quantity,
            warehouse: row.warehouse,
            last_updated: row.last_updated,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TrackingRow {
    tracking_no: String,
    status: String,
    current_location: String,
    estimated_delivery: DateTime<Utc>,
    delivery_date: Option<DateTime<Utc>>,
}

impl From<TrackingRow> for Tracking {
    fn from(row: TrackingRow) -> Self {
        Tracking {
            tracking_no: row.tracking_no,
            status: row.status,
            current_location: row.current_location,
            estimated_delivery: row.estimated_delivery,
            delivery_date: row.delivery_date,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TrackingEventRow {
    tracking_no: String,
    timestamp: DateTime<Utc>,
    location: String,
    status: String,
    description: String,
}

impl From<TrackingEventRow> for TrackingEventRecord {
    fn from(row: TrackingEventRow) -> Self {
        TrackingEventRecord {
            tracking_no: row.tracking_no,
            timestamp: row.timestamp,
            location: row.location,
            status: row.status,
            description: row.description,
        }
    }
}

#[async_trait]
impl ItemRepository for PostgresCatalogStore {
    async fn find_by_id(&self, item_id: &str) -> Result<Option<Item>, StoreError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT item_id, name, price, description, category, brand, sku,
                   created_at, updated_at
            FROM items
            WHERE item_id = $1
            "#,
        )
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(row.map(Item::from))
    }

    async fn find_all(&self) -> Result<Vec<Item>, StoreError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT item_id, name, price, description, category, brand, sku,
                   created_at, updated_at
            FROM items
            ORDER BY item_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(rows.into_iter().map(Item::from).collect())
    }
}

#[async_trait]
impl StockRepository for PostgresCatalogStore {
    async fn find_by_item_id(&self, item_id: &str) -> Result<Option<Stock>, StoreError> {
        let row = sqlx::query_as::<_, StockRow>(
            r#"
            SELECT item_id, in_stock, quantity, warehouse, last_updated
            FROM stock
            WHERE item_id = $1
            "#,
        )
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(row.map(Stock::from))
    }
}

#[async_trait]
impl TrackingRepository for PostgresCatalogStore {
    async fn find_by_tracking_no(
        &self,
        tracking_no: &str,
    ) -> Result<Option<Tracking>, StoreError> {
        let row = sqlx::query_as::<_, TrackingRow>(
            r#"
            SELECT tracking_no, status, current_location, estimated_delivery,
                   delivery_date
            FROM tracking
            WHERE tracking_no = $1
            "#,
        )
        .bind(tracking_no)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(row.map(Tracking::from))
    }

    async fn find_events_by_tracking_no(
        &self,
        tracking_no: &str,
    ) -> Result<Vec<TrackingEventRecord>, StoreError> {
        let rows = sqlx::query_as::<_, TrackingEventRow>(
            r#"
            SELECT tracking_no, timestamp, location, status, description
            FROM tracking_events
            WHERE tracking_no = $1
            ORDER BY timestamp DESC
            "#,
        )
        .bind(tracking_no)
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(rows.into_iter().map(TrackingEventRecord::from).collect())
    }
}
