//! # MediTrack Core
//!
//! Shared domain types for the MediTrack medication-tracking service.
//! This crate defines the entity models and request/response types used by
//! the API and database layers, the error taxonomy, and a couple of small
//! domain utilities (timezone conversion, known drug-interaction pairs).

/// Error types shared across the workspace
pub mod errors;
/// Programmatic drug-interaction lookup over a fixed known-pair list
pub mod interactions;
/// Entity models and API request/response types
pub mod models;
/// Conversion between UTC and user-local time
pub mod timezone;
