//! Static function router.
//!
//! A dispatch table from `(plugin, function)` to a handler closure, built
//! once at startup. Lookups are exact but case-insensitive. Unknown plugin or
//! unknown function-within-known-plugin are reported as *successful* text
//! payloads, never as errors; callers depend on that behavior.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::data::DemoDataStore;
use crate::plugins::{ItemPlugin, StockPlugin, TrackingPlugin};

type Handler = Box<dyn Fn(&str) -> String + Send + Sync>;

struct RegisteredFunction {
    name: &'static str,
    description: &'static str,
    handler: Handler,
}

struct RegisteredPlugin {
    name: &'static str,
    functions: HashMap<String, RegisteredFunction>,
}

/// Fixed dispatch table over the six demo functions.
pub struct FunctionRouter {
    plugins: HashMap<String, RegisteredPlugin>,
}

impl FunctionRouter {
    /// Build the table against a demo store.
    pub fn new(store: Arc<DemoDataStore>) -> Self {
        let item = ItemPlugin::new(store.clone());
        let stock = StockPlugin::new(store.clone());
        let tracking = TrackingPlugin::new(store);

        let mut router = Self {
            plugins: HashMap::new(),
        };

        {
            let p = item.clone();
            router.register(
                "ItemPlugin",
                "getItemInfo",
                "Get detailed item information by ID",
                Box::new(move |param| p.get_item_info(param)),
            );
        }
        {
            let p = item;
            router.register(
                "ItemPlugin",
                "searchItemsByCategory",
                "Search items by category",
                Box::new(move |param| p.search_items_by_category(param)),
            );
        }
        {
            let p = stock.clone();
            router.register(
                "StockPlugin",
                "getStockInfo",
                "Get stock information by item ID",
                Box::new(move |param| p.get_stock_info(param)),
            );
        }
        {
            let p = stock;
            router.register(
                "StockPlugin",
                "checkAvailability",
                "Check if item is available",
                Box::new(move |param| p.check_availability(param)),
            );
        }
        {
            let p = tracking.clone();
            router.register(
                "TrackingPlugin",
                "getTrackingInfo",
                "Get tracking information by tracking number",
                Box::new(move |param| p.get_tracking_info(param)),
            );
        }
        {
            let p = tracking;
            router.register(
                "TrackingPlugin",
                "getDeliveryStatus",
                "Get delivery status by tracking number",
                Box::new(move |param| p.get_delivery_status(param)),
            );
        }

        router
    }

    fn register(
        &mut self,
        plugin: &'static str,
        function: &'static str,
        description: &'static str,
        handler: Handler,
    ) {
        self.plugins
            .entry(plugin.to_lowercase())
            .or_insert_with(|| RegisteredPlugin {
                name: plugin,
                functions: HashMap::new(),
            })
            .functions
            .insert(
                function.to_lowercase(),
                RegisteredFunction {
                    name: function,
                    description,
                    handler,
                },
            );
    }

    /// Dispatch one invocation. Always yields a text result.
    pub fn invoke(&self, plugin_name: &str, function_name: &str, parameter: &str) -> String {
        info!(
            plugin = plugin_name,
            function = function_name,
            parameter,
            "invoking plugin function"
        );

        let result = match self.plugins.get(&plugin_name.to_lowercase()) {
            None => format!("Unknown plugin: {plugin_name}"),
            Some(plugin) => match plugin.functions.get(&function_name.to_lowercase()) {
                None => format!("Unknown function: {function_name}"),
                Some(function) => (function.handler)(parameter),
            },
        };

        info!(result = %result, "plugin function result");
        result
    }

    /// Registered functions as `plugin -> ["name - description", ...]`,
    /// sorted for stable listings.
    pub fn catalog(&self) -> Vec<(&'static str, Vec<String>)> {
        let mut plugins: Vec<_> = self.plugins.values().collect();
        plugins.sort_by_key(|p| p.name);

        plugins
            .into_iter()
            .map(|p| {
                let mut functions: Vec<_> = p
                    .functions
                    .values()
                    .map(|f| format!("{} - {}", f.name, f.description))
                    .collect();
                functions.sort();
                (p.name, functions)
            })
            .collect()
    }
}
