//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

pub use mock_catalog::{CapturedRequest, MockCatalog, MockResponse};

use pokedex::catalog::CatalogClient;
use pokedex::config::CatalogConfig;
use pokedex::sync::SyncState;
use std::time::Duration;
use tokio::sync::watch;

/// Client pointed at `base_url` with short timeouts.
pub fn client_for(base_url: &str) -> CatalogClient {
    let config = CatalogConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        ..CatalogConfig::default()
    };
    CatalogClient::new(&config).expect("Failed to build client")
}

/// A detail record in the catalog's wire format.
pub fn detail_json(name: &str, id: u32, types: &[&str]) -> String {
    let types: Vec<serde_json::Value> = types
        .iter()
        .enumerate()
        .map(|(i, t)| {
            serde_json::json!({
                "slot": i + 1,
                "type": { "name": t, "url": format!("https://pokeapi.co/api/v2/type/{t}/") }
            })
        })
        .collect();

    serde_json::json!({
        "name": name,
        "id": id,
        "height": 7,
        "weight": 69,
        "sprites": {
            "front_default": format!("https://img.example/{id}.png"),
            "back_default": format!("https://img.example/back/{id}.png")
        },
        "types": types,
        "stats": [
            { "base_stat": 45, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 49, "stat": { "name": "attack", "url": "" } }
        ]
    })
    .to_string()
}

/// A listing page whose detail URLs point back at `base_url`.
pub fn page_json(base_url: &str, names: &[&str]) -> String {
    let results: Vec<serde_json::Value> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "name": name,
                "url": format!("{base_url}/pokemon/{name}/")
            })
        })
        .collect();

    serde_json::json!({
        "count": results.len(),
        "next": null,
        "previous": null,
        "results": results
    })
    .to_string()
}

/// Wait until the state is Ready or Error, failing the test after 5s.
pub async fn settle<T: Clone>(mut rx: watch::Receiver<SyncState<T>>) -> SyncState<T> {
    let state = tokio::time::timeout(Duration::from_secs(5), rx.wait_for(|s| s.is_settled()))
        .await
        .expect("Synchronizer did not settle in time")
        .expect("Synchronizer dropped")
        .clone();
    state
}
