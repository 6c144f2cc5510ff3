//! Domain logic for the showreel portfolio: project field rules, slug
//! derivation, team credits, drag-to-reorder, video embedding, gallery
//! navigation, and upload validation. Nothing in this crate performs I/O.

pub mod error;
pub mod lightbox;
pub mod project;
pub mod reorder;
pub mod slug;
pub mod team;
pub mod types;
pub mod upload;
pub mod video;
