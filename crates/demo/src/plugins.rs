//! Demo plugins: lookup-and-format operations over the demo store.
//!
//! Every operation returns text. Not-found outcomes are reported in-band as
//! text too, matching the plugin-function contract.

use std::sync::Arc;

use crate::data::DemoDataStore;

/// Item information functions.
#[derive(Clone)]
pub struct ItemPlugin {
    store: Arc<DemoDataStore>,
}

impl ItemPlugin {
    pub fn new(store: Arc<DemoDataStore>) -> Self {
        Self { store }
    }

    /// Detailed item information as a multi-line block.
    pub fn get_item_info(&self, item_id: &str) -> String {
        match self.store.find_item_by_id(item_id) {
            Some(item) => format!(
                "Item ID: {}\nName: {}\nPrice: ${:.2}\nCategory: {}\nDescription: {}",
                item.item_id, item.name, item.price, item.category, item.description
            ),
            None => format!("Item not found with ID: {item_id}"),
        }
    }

    /// Category search over the two known demo categories.
    pub fn search_items_by_category(&self, category: &str) -> String {
        if category.eq_ignore_ascii_case("Apparel") {
            "Found items in Apparel category: Classic T-Shirt (item-001), Denim Jeans (item-002)"
                .to_string()
        } else if category.eq_ignore_ascii_case("Footwear") {
            "Found items in Footwear category: Running Shoes (item-003)".to_string()
        } else {
            format!("No items found in category: {category}")
        }
    }
}

/// Stock availability functions.
#[derive(Clone)]
pub struct StockPlugin {
    store: Arc<DemoDataStore>,
}

impl StockPlugin {
    pub fn new(store: Arc<DemoDataStore>) -> Self {
        Self { store }
    }

    /// One-line stock summary.
    pub fn get_stock_info(&self, item_id: &str) -> String {
        match self.store.find_stock_by_item_id(item_id) {
            Some(stock) => format!(
                "Item ID: {}, In Stock: {}, Quantity: {}, Warehouse: {}",
                stock.item_id,
                if stock.in_stock { "Yes" } else { "No" },
                stock.quantity,
                stock.warehouse
            ),
            None => format!("Stock information not found for item ID: {item_id}"),
        }
    }

    /// Yes/no availability sentence.
    pub fn check_availability(&self, item_id: &str) -> String {
        match self.store.find_stock_by_item_id(item_id) {
            Some(stock) if stock.in_stock => format!(
                "Yes, {} is available with {} units in stock",
                item_id, stock.quantity
            ),
            Some(_) => format!("No, {item_id} is currently out of stock"),
            None => format!("Cannot check availability - item not found: {item_id}"),
        }
    }
}

/// Shipment tracking functions.
#[derive(Clone)]
pub struct TrackingPlugin {
    store: Arc<DemoDataStore>,
}

impl TrackingPlugin {
    pub fn new(store: Arc<DemoDataStore>) -> Self {
        Self { store }
    }

    /// One-line tracking summary.
    pub fn get_tracking_info(&self, tracking_no: &str) -> String {
        match self.store.find_tracking_by_number(tracking_no) {
            Some(tracking) => format!(
                "Tracking Number: {}, Status: {}, Current Location: {}, Estimated Delivery: {}",
                tracking.tracking_no,
                tracking.status,
                tracking.current_location,
                tracking.estimated_delivery
            ),
            None => format!("Tracking information not found for tracking number: {tracking_no}"),
        }
    }

    /// Delivered vs in-transit phrasing.
    pub fn get_delivery_status(&self, tracking_no: &str) -> String {
        match self.store.find_tracking_by_number(tracking_no) {
            Some(tracking) if tracking.status.eq_ignore_ascii_case("Delivered") => format!(
                "Your package has been delivered to: {}",
                tracking.current_location
            ),
            Some(tracking) => format!(
                "Your package is {}. Current location: {}. Expected delivery: {}",
                tracking.status, tracking.current_location, tracking.estimated_delivery
            ),
            None => {
                format!("Cannot get delivery status - tracking number not found: {tracking_no}")
            }
        }
    }
}
