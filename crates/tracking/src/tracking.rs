use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error, info};

use storefront_core::{LookupError, LookupResult, ResourceKind};

use crate::repository::TrackingRepository;

/// Internal tracking record.
///
/// `status` is an open set of free-text values ("In Transit", "Delivered", ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Tracking {
    pub tracking_no: String,
    pub status: String,
    pub current_location: String,
    pub estimated_delivery: DateTime<Utc>,
    pub delivery_date: Option<DateTime<Utc>>,
}

/// Internal tracking event row, belonging to exactly one tracking record.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingEventRecord {
    pub tracking_no: String,
    pub timestamp: DateTime<Utc>,
    pub location: String,
    pub status: String,
    pub description: String,
}

/// Event projection carried inside [`TrackingInfo::history`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    pub timestamp: DateTime<Utc>,
    pub location: String,
    pub status: String,
    pub description: String,
}

impl From<TrackingEventRecord> for TrackingEvent {
    fn from(record: TrackingEventRecord) -> Self {
        Self {
            timestamp: record.timestamp,
            location: record.location,
            status: record.status,
            description: record.description,
        }
    }
}

/// Tracking projection exposed by `GET /v1/track/{trackingNo}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingInfo {
    pub tracking_no: String,
    pub status: String,
    pub current_location: String,
    pub estimated_delivery: DateTime<Utc>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub history: Vec<TrackingEvent>,
}

impl TrackingInfo {
    fn compose(tracking: Tracking, events: Vec<TrackingEventRecord>) -> Self {
        Self {
            tracking_no: tracking.tracking_no,
            status: tracking.status,
            current_location: tracking.current_location,
            estimated_delivery: tracking.estimated_delivery,
            delivery_date: tracking.delivery_date,
            history: events.into_iter().map(TrackingEvent::from).collect(),
        }
    }
}

/// Lookup service for tracking records.
#[derive(Clone)]
pub struct TrackingService {
    repo: Arc<dyn TrackingRepository>,
}

impl TrackingService {
    pub fn new(repo: Arc<dyn TrackingRepository>) -> Self {
        Self { repo }
    }

    /// Tracking record joined with its event history.
    ///
    /// Both lookups run concurrently and both must succeed; a missing
    /// tracking record fails the whole join with `NotFound` regardless of the
    /// event-sequence state. An empty history is valid.
    pub async fn get_tracking(&self, tracking_no: &str) -> LookupResult<TrackingInfo> {
        debug!(tracking_no, "fetching tracking info");

        let tracking_fut = async {
            self.repo
                .find_by_tracking_no(tracking_no)
                .await
                .map_err(LookupError::from)?
                .ok_or_else(|| LookupError::not_found(ResourceKind::Tracking, tracking_no))
        };
        let events_fut = async {
            self.repo
                .find_events_by_tracking_no(tracking_no)
                .await
                .map_err(LookupError::from)
        };

        let (tracking, events) = tokio::try_join!(tracking_fut, events_fut).inspect_err(|e| {
            match e {
                LookupError::NotFound { .. } => {}
                other => error!(tracking_no, error = %other, "failed to fetch tracking info"),
            }
        })?;

        info!(tracking_no = %tracking.tracking_no, events = events.len(), "retrieved tracking info");
        Ok(TrackingInfo::compose(tracking, events))
    }
}
