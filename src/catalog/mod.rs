//! Client layer for the remote game-catalog service.
//!
//! - `http`: the raw fetch and the [`http::CatalogSource`] seam
//! - `types`: serde types for the catalog payload
//! - `normalize`: flattening a raw record into store-ready rows
//! - `cache`: the run-scoped seen-id cache

pub mod cache;
pub mod http;
pub mod normalize;
pub mod types;
