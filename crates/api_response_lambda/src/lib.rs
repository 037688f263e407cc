//! AWS-oriented handlers for the API response helpers.
//!
//! This crate owns runtime integration details (Lambda handlers, storage
//! ports, event normalization and tracing setup) on top of the pure
//! response taxonomy in `api_response_core`.

pub mod adapters;
pub mod config;
pub mod event;
pub mod handlers;
pub mod observability;
pub mod runtime;
