//! Request extractors.
//!
//! - [`auth::AdminSession`] -- the signed-in admin, from a JWT Bearer token.

pub mod auth;
