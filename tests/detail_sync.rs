//! Detail synchronizer against a mock catalog.

mod common;

use common::*;
use pokedex::catalog::CatalogClient;
use pokedex::config::CatalogConfig;
use pokedex::sync::{DetailSynchronizer, SyncState};
use std::time::Duration;
use tokio::runtime::Handle;

async fn synchronizer(mock: &MockCatalog) -> DetailSynchronizer {
    DetailSynchronizer::new(client_for(&mock.base_url()), Handle::current())
}

#[tokio::test]
async fn loads_detail_for_key() {
    let mock = MockCatalog::start().await;
    mock.route(
        "/pokemon/pikachu",
        MockResponse::json(detail_json("pikachu", 25, &["electric"])),
    )
    .await;

    let mut sync = synchronizer(&mock).await;
    assert!(sync.set_key("pikachu"));
    assert!(sync.loading());

    let state = settle(sync.subscribe()).await;
    let detail = state.data().expect("ready");
    assert_eq!(detail.name, "pikachu");
    assert_eq!(detail.id, 25);
    assert_eq!(detail.categories[0].label, "electric");
    assert!(!sync.loading());
    assert!(sync.error().is_none());
    assert_eq!(sync.data().map(|d| d.id), Some(25));
}

#[tokio::test]
async fn missing_item_surfaces_status_error() {
    let mock = MockCatalog::start().await;
    let mut sync = synchronizer(&mock).await;
    sync.set_key("missingno");

    let state = settle(sync.subscribe()).await;
    let message = state.error().expect("error state");
    assert!(message.contains("404"), "unexpected message: {message}");
    assert!(sync.data().is_none());
}

#[tokio::test]
async fn malformed_body_is_an_error() {
    let mock = MockCatalog::start().await;
    mock.route("/pokemon/ditto", MockResponse::json(r#"{"name": "ditto"}"#))
        .await;

    let mut sync = synchronizer(&mock).await;
    sync.set_key("ditto");

    let state = settle(sync.subscribe()).await;
    assert!(state.error().unwrap().starts_with("Malformed response"));
}

#[tokio::test]
async fn empty_key_issues_no_request() {
    let mock = MockCatalog::start().await;
    let mut sync = synchronizer(&mock).await;

    assert!(!sync.set_key(""));
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert!(sync.state().is_idle());
    assert!(!sync.loading());
    assert!(mock.captured_requests().await.is_empty());
}

#[tokio::test]
async fn key_is_lowercased_for_request() {
    let mock = MockCatalog::start().await;
    mock.route(
        "/pokemon/pikachu",
        MockResponse::json(detail_json("pikachu", 25, &["electric"])),
    )
    .await;

    let mut sync = synchronizer(&mock).await;
    sync.set_key("Pikachu");
    assert_eq!(sync.key(), "Pikachu");

    assert!(settle(sync.subscribe()).await.is_ready());
    assert_eq!(mock.hits("/pokemon/pikachu").await, 1);
}

#[tokio::test]
async fn unchanged_key_does_not_refetch() {
    let mock = MockCatalog::start().await;
    mock.route(
        "/pokemon/eevee",
        MockResponse::json(detail_json("eevee", 133, &["normal"])),
    )
    .await;

    let mut sync = synchronizer(&mock).await;
    assert!(sync.set_key("eevee"));
    settle(sync.subscribe()).await;
    assert!(!sync.set_key("eevee"));

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(mock.hits("/pokemon/eevee").await, 1);
}

#[tokio::test]
async fn latest_key_wins_over_slow_earlier_response() {
    let mock = MockCatalog::start().await;
    mock.route(
        "/pokemon/slowpoke",
        MockResponse::json(detail_json("slowpoke", 79, &["water", "psychic"])).with_delay(300),
    )
    .await;
    mock.route(
        "/pokemon/jolteon",
        MockResponse::json(detail_json("jolteon", 135, &["electric"])),
    )
    .await;

    let mut sync = synchronizer(&mock).await;
    sync.set_key("slowpoke");
    sync.set_key("jolteon");

    let state = settle(sync.subscribe()).await;
    assert_eq!(state.data().map(|d| d.id), Some(135));

    // The superseded response arrives later and must not replace it.
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(sync.data().map(|d| d.id), Some(135));
}

#[tokio::test]
async fn disposed_synchronizer_ignores_late_result() {
    let mock = MockCatalog::start().await;
    mock.route(
        "/pokemon/snorlax",
        MockResponse::json(detail_json("snorlax", 143, &["normal"])).with_delay(200),
    )
    .await;

    let mut sync = synchronizer(&mock).await;
    sync.set_key("snorlax");
    sync.dispose();
    assert!(sync.is_disposed());

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(!sync.state().is_ready());
    assert!(sync.data().is_none());
    assert!(!sync.set_key("mew"));
}

#[tokio::test]
async fn clearing_key_returns_to_idle() {
    let mock = MockCatalog::start().await;
    mock.route(
        "/pokemon/mew",
        MockResponse::json(detail_json("mew", 151, &["psychic"])),
    )
    .await;

    let mut sync = synchronizer(&mock).await;
    sync.set_key("mew");
    settle(sync.subscribe()).await;

    sync.set_key("");
    assert_eq!(sync.state(), SyncState::Idle);
}

#[tokio::test]
async fn timeout_is_an_error() {
    let mock = MockCatalog::start().await;
    mock.route(
        "/pokemon/slowbro",
        MockResponse::json(detail_json("slowbro", 80, &["water"])).with_delay(2500),
    )
    .await;

    let config = CatalogConfig {
        base_url: mock.base_url(),
        timeout_seconds: 1,
        connect_timeout_seconds: 1,
        ..CatalogConfig::default()
    };
    let client = CatalogClient::new(&config).unwrap();
    let mut sync = DetailSynchronizer::new(client, Handle::current());
    sync.set_key("slowbro");

    let state = settle(sync.subscribe()).await;
    assert_eq!(state, SyncState::Error("Request timed out after 1s".to_string()));
}
