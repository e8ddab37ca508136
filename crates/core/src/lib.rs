//! Domain logic for the scribe wiki backend.
//!
//! This crate has no internal dependencies so it can be used by the API
//! layer, the repository layer, and any future CLI tooling.

pub mod article;
pub mod diff;
pub mod error;
pub mod pagination;
pub mod render;
pub mod types;
pub mod wikilink;
