//! Error taxonomy for the lookup pipeline.
//!
//! The data access layer reports absence as `Ok(None)`, never as an error.
//! Lookup services convert absence into [`LookupError::NotFound`]; the HTTP
//! layer is the single place translating these into status codes.

use thiserror::Error;

/// Result type used across the lookup services.
pub type LookupResult<T> = Result<T, LookupError>;

/// The kind of resource a lookup was asked for.
///
/// Carried inside [`LookupError::NotFound`] so the HTTP layer can render a
/// kind-specific message without inspecting which service failed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Item,
    Stock,
    Tracking,
}

impl ResourceKind {
    /// Client-visible message for a missing resource of this kind.
    pub fn not_found_message(&self, key: &str) -> String {
        match self {
            ResourceKind::Item => format!("Item not found: {key}"),
            ResourceKind::Stock => format!("Stock information not found for item: {key}"),
            ResourceKind::Tracking => format!("Tracking number not found: {key}"),
        }
    }
}

impl core::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            ResourceKind::Item => "item",
            ResourceKind::Stock => "stock",
            ResourceKind::Tracking => "tracking",
        };
        f.write_str(s)
    }
}

/// Failure raised by the backing store (connection loss, bad row, ...).
///
/// Absence of a record is **not** a `StoreError`; repositories return
/// `Ok(None)` for unknown keys.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A query against the backing store failed.
    #[error("store query failed: {0}")]
    Query(String),
}

impl StoreError {
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }
}

/// Domain-level lookup error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The requested resource does not exist. Carries the exact key the
    /// caller asked for.
    #[error("{kind} not found: {key}")]
    NotFound { kind: ResourceKind, key: String },

    /// A required input was missing or blank.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Anything unexpected (store failure, provider failure). The cause is
    /// logged but never serialized to clients.
    #[error("internal error: {0}")]
    Internal(String),
}

impl LookupError {
    pub fn not_found(kind: ResourceKind, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<StoreError> for LookupError {
    fn from(err: StoreError) -> Self {
        LookupError::Internal(err.to_string())
    }
}
