//! `storefront-core` — shared domain primitives.
//!
//! This crate contains the error taxonomy used across the lookup pipeline.
//! It has no HTTP or storage concerns.

pub mod error;

pub use error::{LookupError, LookupResult, ResourceKind, StoreError};
