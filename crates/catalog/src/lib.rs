//! `storefront-catalog` — item and stock records, their public DTO
//! projections, and the per-kind lookup services.
//!
//! Storage is behind the [`ItemRepository`] / [`StockRepository`] trait seams;
//! concrete stores live in `storefront-infra`.

pub mod item;
pub mod repository;
pub mod stock;

pub use item::{Item, ItemDetail, ItemService, ItemSummary};
pub use repository::{ItemRepository, StockRepository};
pub use stock::{Stock, StockInfo, StockService};
