//! Application configuration: TOML file with CLI overrides applied on top.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_PAGE_SIZE};
pub use types::{CatalogConfig, Config, UiConfig, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
