use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error, info};

use storefront_core::{LookupError, LookupResult, ResourceKind};

use crate::repository::ItemRepository;

/// Internal item record as held by the backing store.
///
/// The audit timestamps are store bookkeeping; no DTO ever exposes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub item_id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub brand: String,
    pub sku: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List projection: id, name, and price only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    pub item_id: String,
    pub name: String,
    pub price: f64,
}

impl From<&Item> for ItemSummary {
    fn from(item: &Item) -> Self {
        Self {
            item_id: item.item_id.clone(),
            name: item.name.clone(),
            price: item.price,
        }
    }
}

/// Detail projection exposed by `GET /v1/items/{itemId}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
    pub item_id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub brand: String,
    pub sku: String,
}

impl From<Item> for ItemDetail {
    fn from(item: Item) -> Self {
        Self {
            item_id: item.item_id,
            name: item.name,
            price: item.price,
            description: item.description,
            category: item.category,
            brand: item.brand,
            sku: item.sku,
        }
    }
}

/// Lookup service for item records.
#[derive(Clone)]
pub struct ItemService {
    repo: Arc<dyn ItemRepository>,
}

impl ItemService {
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        Self { repo }
    }

    /// All items projected to [`ItemSummary`], ascending `item_id` order.
    pub async fn get_all_items(&self) -> LookupResult<Vec<ItemSummary>> {
        debug!("fetching all items");
        let items = self.repo.find_all().await.map_err(|e| {
            error!(error = %e, "failed to list items");
            LookupError::from(e)
        })?;
        info!(count = items.len(), "retrieved all items");
        Ok(items.iter().map(ItemSummary::from).collect())
    }

    /// One item by id, or `NotFound` carrying that exact id.
    pub async fn get_item(&self, item_id: &str) -> LookupResult<ItemDetail> {
        debug!(item_id, "fetching item");
        let item = self
            .repo
            .find_by_id(item_id)
            .await
            .map_err(|e| {
                error!(item_id, error = %e, "failed to fetch item");
                LookupError::from(e)
            })?
            .ok_or_else(|| LookupError::not_found(ResourceKind::Item, item_id))?;
        info!(item_id = %item.item_id, "retrieved item");
        Ok(ItemDetail::from(item))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use async_trait::async_trait;
    use proptest::prelude::*;
    use storefront_core::StoreError;

    use super::*;

    /// Fake store: BTreeMap so `find_all` is naturally id-ordered.
    struct FakeItems {
        items: BTreeMap<String, Item>,
        fail: bool,
    }

    fn item(id: &str, name: &str, price: f64, category: &str) -> Item {
        Item {
            item_id: id.to_string(),
            name: name.to_string(),
            price,
            description: format!("{name} description"),
            category: category.to_string(),
            brand: "Acme".to_string(),
            sku: format!("SKU-{id}"),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn fake(items: Vec<Item>) -> FakeItems {
        FakeItems {
            items: items.into_iter().map(|i| (i.item_id.clone(), i)).collect(),
            fail: false,
        }
    }

    #[async_trait]
    impl ItemRepository for FakeItems {
        async fn find_by_id(&self, item_id: &str) -> Result<Option<Item>, StoreError> {
            if self.fail {
                return Err(StoreError::query("boom"));
            }
            Ok(self.items.get(item_id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<Item>, StoreError> {
            if self.fail {
                return Err(StoreError::query("boom"));
            }
            Ok(self.items.values().cloned().collect())
        }
    }

    #[tokio::test]
    async fn get_item_projects_the_detail_shape() {
        let svc = ItemService::new(Arc::new(fake(vec![item(
            "item-001",
            "Classic T-Shirt",
            29.99,
            "Apparel",
        )])));

        let detail = svc.get_item("item-001").await.unwrap();
        assert_eq!(detail.item_id, "item-001");
        assert_eq!(detail.name, "Classic T-Shirt");
        assert_eq!(detail.price, 29.99);
        assert_eq!(detail.category, "Apparel");
        assert_eq!(detail.sku, "SKU-item-001");
    }

    #[tokio::test]
    async fn get_item_absent_fails_with_not_found_carrying_the_key() {
        let svc = ItemService::new(Arc::new(fake(vec![])));
        let err = svc.get_item("item-999").await.unwrap_err();
        assert_eq!(err, LookupError::not_found(ResourceKind::Item, "item-999"));
    }

    #[tokio::test]
    async fn get_all_items_projects_only_summary_fields() {
        let svc = ItemService::new(Arc::new(fake(vec![
            item("item-002", "Denim Jeans", 79.99, "Apparel"),
            item("item-001", "Classic T-Shirt", 29.99, "Apparel"),
        ])));

        let all = svc.get_all_items().await.unwrap();
        assert_eq!(
            all.iter().map(|i| i.item_id.as_str()).collect::<Vec<_>>(),
            vec!["item-001", "item-002"]
        );

        // No extra fields leak through the summary projection.
        let json = serde_json::to_value(&all[0]).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["itemId", "name", "price"]);
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_internal() {
        let mut repo = fake(vec![]);
        repo.fail = true;
        let svc = ItemService::new(Arc::new(repo));
        assert!(matches!(
            svc.get_item("item-001").await.unwrap_err(),
            LookupError::Internal(_)
        ));
    }

    proptest! {
        #[test]
        fn known_keys_resolve_and_unknown_keys_fail_with_that_key(
            ids in proptest::collection::btree_set("item-[0-9]{3}", 1..8),
            probe in "item-[0-9]{3}",
        ) {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            rt.block_on(async {
                let items = ids
                    .iter()
                    .map(|id| item(id, "Thing", 9.99, "Apparel"))
                    .collect::<Vec<_>>();
                let svc = ItemService::new(Arc::new(fake(items)));

                for id in &ids {
                    let detail = svc.get_item(id).await.unwrap();
                    assert_eq!(&detail.item_id, id);
                }

                if !ids.contains(&probe) {
                    let err = svc.get_item(&probe).await.unwrap_err();
                    assert_eq!(err, LookupError::not_found(ResourceKind::Item, &probe));
                }
            });
        }
    }
}
