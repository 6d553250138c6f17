//! Typed access to the remote creature catalog.

mod client;
mod error;
mod model;

pub use client::CatalogClient;
pub use error::{CatalogError, FALLBACK_ERROR_MESSAGE};
pub use model::{capitalize, Attribute, CatalogSummary, Category, ItemDetail, ListEntry};
