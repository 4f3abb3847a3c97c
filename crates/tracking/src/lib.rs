//! `storefront-tracking` — shipment tracking records, their DTO projection,
//! and the lookup service joining a tracking record with its event history.

pub mod repository;
pub mod tracking;

pub use repository::TrackingRepository;
pub use tracking::{Tracking, TrackingEvent, TrackingEventRecord, TrackingInfo, TrackingService};
