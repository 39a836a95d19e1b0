//! BCR API server library.
//!
//! Exposes the core building blocks (config, state, error handling, the
//! shared controller, routes) so integration tests and the binary
//! entrypoint can both access them.

pub mod config;
pub mod controller;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
