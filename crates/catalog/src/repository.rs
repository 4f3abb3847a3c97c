//! Data access seams for the catalog.
//!
//! Absence is a normal value (`Ok(None)`), never an error. Implementations
//! must not apply any not-found mapping themselves; that belongs to the
//! lookup services.

use async_trait::async_trait;

use storefront_core::StoreError;

use crate::item::Item;
use crate::stock::Stock;

/// Key-based access to item records.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn find_by_id(&self, item_id: &str) -> Result<Option<Item>, StoreError>;

    /// All items, in ascending `item_id` order.
    async fn find_all(&self) -> Result<Vec<Item>, StoreError>;
}

/// Key-based access to stock records (keyed by the item they belong to).
#[async_trait]
pub trait StockRepository: Send + Sync {
    async fn find_by_item_id(&self, item_id: &str) -> Result<Option<Stock>, StoreError>;
}
