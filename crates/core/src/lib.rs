//! Domain building blocks shared by the BCR API: the error model, the
//! uniform error envelope, and page-based pagination.
//!
//! This crate has no HTTP dependency so the same types can back any
//! transport.

pub mod envelope;
pub mod error;
pub mod pagination;
