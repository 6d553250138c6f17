//! Detail synchronizer: one item's full record, keyed by name.

use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::catalog::{CatalogClient, ItemDetail};

use super::lifecycle::Synchronizer;
use super::state::SyncState;

/// Keeps one [`ItemDetail`] in sync with a reactive key.
///
/// Each key change cancels the previous cycle and, for a non-empty key,
/// starts exactly one request for the lower-cased key. Change detection is by
/// string value.
pub struct DetailSynchronizer {
    client: CatalogClient,
    runtime: Handle,
    core: Synchronizer<ItemDetail>,
    key: Option<String>,
}

impl DetailSynchronizer {
    pub fn new(client: CatalogClient, runtime: Handle) -> Self {
        Self {
            client,
            runtime,
            core: Synchronizer::new(),
            key: None,
        }
    }

    /// Current key; empty before the first `set_key` or when nothing is selected.
    pub fn key(&self) -> &str {
        self.key.as_deref().unwrap_or("")
    }

    /// Watch the key: on change, cancel the prior cycle and start a new one.
    ///
    /// Returns true when a request was issued.
    pub fn set_key(&mut self, key: &str) -> bool {
        if self.core.is_disposed() || self.key.as_deref() == Some(key) {
            return false;
        }
        self.key = Some(key.to_string());

        if key.is_empty() {
            self.core.reset();
            return false;
        }

        let Some(cycle) = self.core.begin() else {
            return false;
        };

        let client = self.client.clone();
        let key = key.to_lowercase();
        self.runtime.spawn(async move {
            let result = client.fetch_detail(&key).await;
            if let Err(e) = &result {
                tracing::debug!(key = %key, kind = e.kind(), error = %e, "Detail fetch failed");
            }
            if cycle.commit(result) {
                tracing::info!(key = %key, "Detail committed");
            }
        });
        true
    }

    pub fn state(&self) -> SyncState<ItemDetail> {
        self.core.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<SyncState<ItemDetail>> {
        self.core.subscribe()
    }

    pub fn loading(&self) -> bool {
        self.core.state().is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.core.state().error().map(str::to_string)
    }

    pub fn data(&self) -> Option<ItemDetail> {
        self.core.state().data().cloned()
    }

    /// Tear down. The in-flight request, if any, runs to completion but
    /// never commits.
    pub fn dispose(&mut self) {
        self.core.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.core.is_disposed()
    }
}
