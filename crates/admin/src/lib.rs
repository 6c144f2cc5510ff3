//! Headless admin CMS for the showreel service.
//!
//! - [`client`] -- typed HTTP client for the admin API.
//! - [`api`] -- the [`api::AdminApi`] seam the screens are driven through.
//! - [`list`] -- project list with drag-to-reorder and delete.
//! - [`form`] -- create/edit form with slug derivation and team credits.
//! - [`upload`] -- per-field image upload state.
//!
//! The screens own their state explicitly and never panic on a failed call:
//! errors surface as an inline message or a logged warning.

pub mod api;
pub mod client;
pub mod form;
pub mod list;
pub mod models;
pub mod upload;

#[cfg(test)]
pub(crate) mod fake;
