//! HTTP request handlers, grouped by resource.

pub mod articles;
pub mod auth;
pub mod favorites;
pub mod tags;
pub mod versions;
