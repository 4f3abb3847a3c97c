//! Data access seam for tracking records.

use async_trait::async_trait;

use storefront_core::StoreError;

use crate::tracking::{Tracking, TrackingEventRecord};

/// Key-based access to tracking records and their event histories.
///
/// Absence of a tracking record is `Ok(None)`. An unknown tracking number has
/// an empty (not missing) event sequence.
#[async_trait]
pub trait TrackingRepository: Send + Sync {
    async fn find_by_tracking_no(
        &self,
        tracking_no: &str,
    ) -> Result<Option<Tracking>, StoreError>;

    /// Events for one tracking number, sorted by timestamp descending.
    async fn find_events_by_tracking_no(
        &self,
        tracking_no: &str,
    ) -> Result<Vec<TrackingEventRecord>, StoreError>;
}
