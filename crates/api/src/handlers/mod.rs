//! HTTP request handlers, one module per resource.

pub mod admin_project;
pub mod auth;
pub mod site;
pub mod upload;
