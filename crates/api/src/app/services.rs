//! Service wiring: which store backs the catalog surface, plus the demo
//! router and chat seam.

use std::sync::Arc;

use storefront_catalog::{ItemRepository, ItemService, StockRepository, StockService};
use storefront_demo::{ChatProvider, ChatService, DemoDataStore, FunctionRouter, UnconfiguredChat};
use storefront_infra::InMemoryCatalogStore;
use storefront_tracking::{TrackingRepository, TrackingService};

/// Everything the handlers need, built once at startup.
pub struct AppServices {
    pub items: ItemService,
    pub stock: StockService,
    pub tracking: TrackingService,
    pub functions: FunctionRouter,
    pub chat: ChatService,
}

impl AppServices {
    fn from_store(
        items: Arc<dyn ItemRepository>,
        stock: Arc<dyn StockRepository>,
        tracking: Arc<dyn TrackingRepository>,
        chat: Arc<dyn ChatProvider>,
    ) -> Self {
        // The demo surface always runs on its own fixed records.
        let demo_store = Arc::new(DemoDataStore::new());

        Self {
            items: ItemService::new(items),
            stock: StockService::new(stock),
            tracking: TrackingService::new(tracking),
            functions: FunctionRouter::new(demo_store),
            chat: ChatService::new(chat),
        }
    }
}

/// Select the backing store from the environment.
///
/// `USE_PERSISTENT_STORE=true` plus the `postgres` feature switches the
/// catalog surface to Postgres; everything else runs on the seeded in-memory
/// store.
pub async fn build_services() -> AppServices {
    let use_persistent = std::env::var("USE_PERSISTENT_STORE")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    if use_persistent {
        #[cfg(feature = "postgres")]
        {
            return postgres_services().await;
        }
        #[cfg(not(feature = "postgres"))]
        tracing::warn!(
            "USE_PERSISTENT_STORE=true but postgres feature not enabled, falling back to in-memory"
        );
    }

    in_memory_services()
}

/// In-memory wiring (dev/test): seeded store, no chat provider.
pub fn in_memory_services() -> AppServices {
    in_memory_services_with_chat(Arc::new(UnconfiguredChat))
}

/// In-memory wiring with a caller-supplied chat provider (tests script one).
pub fn in_memory_services_with_chat(chat: Arc<dyn ChatProvider>) -> AppServices {
    let store = Arc::new(InMemoryCatalogStore::seeded());
    AppServices::from_store(store.clone(), store.clone(), store, chat)
}

#[cfg(feature = "postgres")]
async fn postgres_services() -> AppServices {
    use storefront_infra::PostgresCatalogStore;

    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set when USE_PERSISTENT_STORE=true");

    let pool = sqlx::PgPool::connect(&database_url)
        .await
        .expect("failed to connect to Postgres");

    let store = Arc::new(PostgresCatalogStore::new(pool));
    AppServices::from_store(
        store.clone(),
        store.clone(),
        store,
        Arc::new(UnconfiguredChat),
    )
}
