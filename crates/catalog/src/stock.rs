use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error, info};

use storefront_core::{LookupError, LookupResult, ResourceKind};

use crate::repository::StockRepository;

/// Internal stock record.
///
/// `in_stock` is expected to be consistent with `quantity > 0`, but the store
/// does not enforce it.
#[derive(Debug, Clone, PartialEq)]
pub struct Stock {
    pub item_id: String,
    pub in_stock: bool,
    pub quantity: i64,
    pub warehouse: String,
    pub last_updated: DateTime<Utc>,
}

/// Stock projection exposed by `GET /v1/stock/{itemId}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockInfo {
    pub item_id: String,
    pub in_stock: bool,
    pub quantity: i64,
    pub warehouse: String,
    pub last_updated: DateTime<Utc>,
}

impl From<Stock> for StockInfo {
    fn from(stock: Stock) -> Self {
        Self {
            item_id: stock.item_id,
            in_stock: stock.in_stock,
            quantity: stock.quantity,
            warehouse: stock.warehouse,
            last_updated: stock.last_updated,
        }
    }
}

/// Lookup service for stock records.
#[derive(Clone)]
pub struct StockService {
    repo: Arc<dyn StockRepository>,
}

impl StockService {
    pub fn new(repo: Arc<dyn StockRepository>) -> Self {
        Self { repo }
    }

    /// Stock for one item, or `NotFound` carrying that exact item id.
    pub async fn get_stock(&self, item_id: &str) -> LookupResult<StockInfo> {
        debug!(item_id, "fetching stock");
        let stock = self
            .repo
            .find_by_item_id(item_id)
            .await
            .map_err(|e| {
                error!(item_id, error = %e, "failed to fetch stock");
                LookupError::from(e)
            })?
            .ok_or_else(|| LookupError::not_found(ResourceKind::Stock, item_id))?;
        info!(item_id = %stock.item_id, "retrieved stock");
        Ok(StockInfo::from(stock))
    }
}
