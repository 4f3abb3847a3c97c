//! `storefront-infra` — concrete catalog stores.
//!
//! `InMemoryCatalogStore` backs dev/test runs with seeded read-only data;
//! `PostgresCatalogStore` (feature `postgres`) delegates to a relational
//! store via sqlx. Both implement the repository traits from
//! `storefront-catalog` and `storefront-tracking`.

pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use memory::InMemoryCatalogStore;
#[cfg(feature = "postgres")]
pub use postgres::PostgresCatalogStore;
