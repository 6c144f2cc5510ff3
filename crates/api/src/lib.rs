//! Showreel API server library.
//!
//! Exposes the building blocks (config, state, error handling, auth, storage,
//! routes) so integration tests and the binary entrypoints can both reach them.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod storage;
