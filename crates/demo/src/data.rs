//! Fixed demo records, built once at construction and never mutated.
//!
//! This is deliberately an explicitly constructed value owned by whoever
//! builds the router, not an ambient singleton.

use std::collections::HashMap;

/// Demo item record (flat shape; no brand/sku here).
#[derive(Debug, Clone, PartialEq)]
pub struct DemoItem {
    pub item_id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
}

/// Demo stock record.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoStock {
    pub item_id: String,
    pub in_stock: bool,
    pub quantity: i64,
    pub warehouse: String,
}

/// Demo tracking record (`estimated_delivery` is a plain date string here).
#[derive(Debug, Clone, PartialEq)]
pub struct DemoTracking {
    pub tracking_no: String,
    pub status: String,
    pub current_location: String,
    pub estimated_delivery: String,
}

/// Read-only lookup structure backing the demo plugins.
#[derive(Debug)]
pub struct DemoDataStore {
    items: HashMap<String, DemoItem>,
    stock: HashMap<String, DemoStock>,
    tracking: HashMap<String, DemoTracking>,
}

impl DemoDataStore {
    /// Build the store with the fixed demo records.
    pub fn new() -> Self {
        let mut items = HashMap::new();
        for (item_id, name, price, description, category) in [
            (
                "item-001",
                "Classic T-Shirt",
                29.99,
                "A comfortable cotton t-shirt perfect for everyday wear",
                "Apparel",
            ),
            (
                "item-002",
                "Denim Jeans",
                79.99,
                "Premium denim jeans with a modern fit",
                "Apparel",
            ),
            (
                "item-003",
                "Running Shoes",
                129.99,
                "Lightweight running shoes for maximum comfort",
                "Footwear",
            ),
        ] {
            items.insert(
                item_id.to_string(),
                DemoItem {
                    item_id: item_id.to_string(),
                    name: name.to_string(),
                    price,
                    description: description.to_string(),
                    category: category.to_string(),
                },
            );
        }

        let mut stock = HashMap::new();
        for (item_id, in_stock, quantity) in [
            ("item-001", true, 150),
            ("item-002", true, 75),
            ("item-003", false, 0),
        ] {
            stock.insert(
                item_id.to_string(),
                DemoStock {
                    item_id: item_id.to_string(),
                    in_stock,
                    quantity,
                    warehouse: "Main Warehouse".to_string(),
                },
            );
        }

        let mut tracking = HashMap::new();
        for (tracking_no, status, current_location, estimated_delivery) in [
            (
                "TRK-2025-001",
                "In Transit",
                "Distribution Center - Copenhagen",
                "2025-11-02",
            ),
            (
                "TRK-2025-002",
                "Delivered",
                "Customer Address",
                "2025-10-28",
            ),
        ] {
            tracking.insert(
                tracking_no.to_string(),
                DemoTracking {
                    tracking_no: tracking_no.to_string(),
                    status: status.to_string(),
                    current_location: current_location.to_string(),
                    estimated_delivery: estimated_delivery.to_string(),
                },
            );
        }

        Self {
            items,
            stock,
            tracking,
        }
    }

    pub fn find_item_by_id(&self, item_id: &str) -> Option<&DemoItem> {
        self.items.get(item_id)
    }

    pub fn find_stock_by_item_id(&self, item_id: &str) -> Option<&DemoStock> {
        self.stock.get(item_id)
    }

    pub fn find_tracking_by_number(&self, tracking_no: &str) -> Option<&DemoTracking> {
        self.tracking.get(tracking_no)
    }
}

impl Default for DemoDataStore {
    fn default() -> Self {
        Self::new()
    }
}
