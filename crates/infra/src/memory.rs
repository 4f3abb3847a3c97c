//! Seeded in-memory catalog store.
//!
//! All records are built once at construction and never mutated, so reads
//! need no locking. Items live in a `BTreeMap` to give `find_all` a stable
//! ascending `item_id` order.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use storefront_catalog::{Item, ItemRepository, Stock, StockRepository};
use storefront_core::StoreError;
use storefront_tracking::{Tracking, TrackingEventRecord, TrackingRepository};

/// In-memory catalog store (dev/test).
#[derive(Debug)]
pub struct InMemoryCatalogStore {
    items: BTreeMap<String, Item>,
    stock: HashMap<String, Stock>,
    tracking: HashMap<String, Tracking>,
    events: Vec<TrackingEventRecord>,
}

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

impl InMemoryCatalogStore {
    /// Empty store; mostly useful for tests that seed their own records.
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            stock: HashMap::new(),
            tracking: HashMap::new(),
            events: Vec::new(),
        }
    }

    /// Store seeded with the fixed catalog records.
    pub fn seeded() -> Self {
        let mut store = Self::new();

        for (item_id, name, price, description, category, brand, sku) in [
            (
                "item-001",
                "Classic T-Shirt",
                29.99,
                "A comfortable cotton t-shirt perfect for everyday wear",
                "Apparel",
                "Urban Basics",
                "UB-TSH-001",
            ),
            (
                "item-002",
                "Denim Jeans",
                79.99,
                "Premium denim jeans with a modern fit",
                "Apparel",
                "Denim Works",
                "DW-JNS-002",
            ),
            (
                "item-003",
                "Running Shoes",
                129.99,
                "Lightweight running shoes for maximum comfort",
                "Footwear",
                "Stride",
                "ST-SHO-003",
            ),
        ] {
            store.insert_item(Item {
                item_id: item_id.to_string(),
                name: name.to_string(),
                price,
                description: description.to_string(),
                category: category.to_string(),
                brand: brand.to_string(),
                sku: sku.to_string(),
                created_at: ts(2025, 9, 1, 9, 0),
                updated_at: ts(2025, 10, 1, 9, 0),
            });
        }

        for (item_id, in_stock, quantity) in [
            ("item-001", true, 150),
            ("item-002", true, 75),
            ("item-003", false, 0),
        ] {
            store.insert_stock(Stock {
                item_id: item_id.to_string(),
                in_stock,
                quantity,
                warehouse: "Main Warehouse".to_string(),
                last_updated: ts(2025, 10, 25, 6, 30),
            });
        }

        store.insert_tracking(Tracking {
            tracking_no: "TRK-2025-001".to_string(),
            status: "In Transit".to_string(),
            current_location: "Distribution Center - Copenhagen".to_string(),
            estimated_delivery: ts(2025, 11, 2, 12, 0),
            delivery_date: None,
        });
        store.insert_tracking(Tracking {
            tracking_no: "TRK-2025-002".to_string(),
            status: "Delivered".to_string(),
            current_location: "Customer Address".to_string(),
            estimated_delivery: ts(2025, 10, 28, 12, 0),
            delivery_date: Some(ts(2025, 10, 28, 14, 45)),
        });

        for (tracking_no, day, hour, location, status, description) in [
            (
                "TRK-2025-001",
                24,
                8,
                "Warehouse - Aarhus",
                "Picked Up",
                "Package picked up from warehouse",
            ),
            (
                "TRK-2025-001",
                26,
                15,
                "Sorting Facility - Kolding",
                "In Transit",
                "Package sorted and dispatched",
            ),
            (
                "TRK-2025-001",
                28,
                10,
                "Distribution Center - Copenhagen",
                "In Transit",
                "Arrived at distribution center",
            ),
            (
                "TRK-2025-002",
                26,
                9,
                "Warehouse - Aarhus",
                "Picked Up",
                "Package picked up from warehouse",
            ),
            (
                "TRK-2025-002",
                28,
                14,
                "Customer Address",
                "Delivered",
                "Package delivered to customer",
            ),
        ] {
            store.insert_event(TrackingEventRecord {
                tracking_no: tracking_no.to_string(),
                timestamp: ts(2025, 10, day, hour, 0),
                location: location.to_string(),
                status: status.to_string(),
                description: description.to_string(),
            });
        }

        store
    }

    pub fn insert_item(&mut self, item: Item) {
        self.items.insert(item.item_id.clone(), item);
    }

    pub fn insert_stock(&mut self, stock: Stock) {
        self.stock.insert(stock.item_id.clone(), stock);
    }

    pub fn insert_tracking(&mut self, tracking: Tracking) {
        self.tracking.insert(tracking.tracking_no.clone(), tracking);
    }

    pub fn insert_event(&mut self, event: TrackingEventRecord) {
        self.events.push(event);
    }
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for InMemoryCatalogStore {
    async fn find_by_id(&self, item_id: &str) -> Result<Option<Item>, StoreError> {
        Ok(self.items.get(item_id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.items.values().cloned().collect())
    }
}

#[async_trait]
impl StockRepository for InMemoryCatalogStore {
    async fn find_by_item_id(&self, item_id: &str) -> Result<Option<Stock>, StoreError> {
        Ok(self.stock.get(item_id).cloned())
    }
}

#[async_trait]
impl TrackingRepository for InMemoryCatalogStore {
    async fn find_by_tracking_no(
        &self,
        tracking_no: &str,
    ) -> Result<Option<Tracking>, StoreError> {
        Ok(self.tracking.get(tracking_no).cloned())
    }

    async fn find_events_by_tracking_no(
        &self,
        tracking_no: &str,
    ) -> Result<Vec<TrackingEventRecord>, StoreError> {
        let mut events: Vec<_> = self
            .events
            .iter()
            .filter(|e| e.tracking_no == tracking_no)
            .cloned()
            .collect();
        events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_items_are_listed_in_ascending_id_order() {
        let store = InMemoryCatalogStore::seeded();
        let items = store.find_all().await.unwrap();
        assert_eq!(
            items.iter().map(|i| i.item_id.as_str()).collect::<Vec<_>>(),
            vec!["item-001", "item-002", "item-003"]
        );
    }

    #[tokio::test]
    async fn seeded_item_001_matches_the_demo_record() {
        let store = InMemoryCatalogStore::seeded();
        let item = store.find_by_id("item-001").await.unwrap().unwrap();
        assert_eq!(item.name, "Classic T-Shirt");
        assert_eq!(item.price, 29.99);
        assert_eq!(item.category, "Apparel");
    }

    #[tokio::test]
    async fn unknown_key_is_absent_not_an_error() {
        let store = InMemoryCatalogStore::seeded();
        assert!(store.find_by_id("item-999").await.unwrap().is_none());
        assert!(
            StockRepository::find_by_item_id(&store, "item-999")
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            store
                .find_by_tracking_no("TRK-0000-000")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn events_come_back_sorted_most_recent_first() {
        let store = InMemoryCatalogStore::seeded();
        let events = store
            .find_events_by_tracking_no("TRK-2025-001")
            .await
            .unwrap();
        assert_eq!(events.len(), 3);
        assert!(events.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[tokio::test]
    async fn unknown_tracking_number_has_an_empty_event_sequence() {
        let store = InMemoryCatalogStore::seeded();
        let events = store
            .find_events_by_tracking_no("TRK-0000-000")
            .await
            .unwrap();
        assert!(events.is_empty());
    }
}
