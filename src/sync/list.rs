//! List synchronizer: first catalog page joined with per-item details.

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinSet;

use crate::catalog::{CatalogClient, CatalogError, ItemDetail, ListEntry};

use super::lifecycle::Synchronizer;
use super::state::SyncState;

/// Fetches a page of summaries, then every summary's detail concurrently,
/// and commits the joined list in page order as one update.
///
/// All-or-nothing: if any request fails nothing is committed, the previous
/// list stays available through [`ListSynchronizer::entries`] and the state
/// becomes `Error`.
pub struct ListSynchronizer {
    client: CatalogClient,
    runtime: Handle,
    page_size: u32,
    core: Synchronizer<Vec<ListEntry>>,
    activated: bool,
}

impl ListSynchronizer {
    pub fn new(client: CatalogClient, runtime: Handle, page_size: u32) -> Self {
        Self {
            client,
            runtime,
            page_size,
            core: Synchronizer::new(),
            activated: false,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Start the first cycle. Later calls do nothing; use [`refresh`](Self::refresh).
    pub fn activate(&mut self) -> bool {
        if self.activated {
            return false;
        }
        self.activated = true;
        self.start()
    }

    /// Start a new cycle, cancelling any in-flight one.
    pub fn refresh(&mut self) -> bool {
        self.activated = true;
        self.start()
    }

    fn start(&mut self) -> bool {
        let Some(cycle) = self.core.begin() else {
            return false;
        };

        let client = self.client.clone();
        let page_size = self.page_size;
        self.runtime.spawn(async move {
            let id = cycle.id();
            let result = fetch_joined(&client, page_size).await;
            match &result {
                Ok(entries) => {
                    tracing::debug!(cycle = id, count = entries.len(), "List join complete")
                }
                Err(e) => tracing::warn!(
                    cycle = id,
                    kind = e.kind(),
                    error = %e,
                    "Catalog list fetch failed"
                ),
            }
            if cycle.commit(result) {
                tracing::info!(cycle = id, "List committed");
            }
        });
        true
    }

    pub fn state(&self) -> SyncState<Vec<ListEntry>> {
        self.core.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<SyncState<Vec<ListEntry>>> {
        self.core.subscribe()
    }

    /// Entries of the last successful cycle; empty until one succeeds.
    pub fn entries(&self) -> Vec<ListEntry> {
        self.core.last_ready().unwrap_or_default()
    }

    pub fn dispose(&mut self) {
        self.core.dispose();
    }
}

/// Fetch the page, fan out one detail request per summary and join in
/// page order. Completion order of the detail requests does not matter.
async fn fetch_joined(
    client: &CatalogClient,
    page_size: u32,
) -> Result<Vec<ListEntry>, CatalogError> {
    let summaries = client.fetch_page(page_size).await?;

    let mut tasks = JoinSet::new();
    for (index, summary) in summaries.iter().enumerate() {
        let client = client.clone();
        let url = summary.detail_url.clone();
        tasks.spawn(async move { (index, client.fetch_detail_at(&url).await) });
    }

    let mut details: Vec<Option<ItemDetail>> = summaries.iter().map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        let (index, result) = joined.map_err(|e| CatalogError::Task(e.to_string()))?;
        // Dropping `tasks` on early return aborts the remaining requests.
        details[index] = Some(result?);
    }

    summaries
        .into_iter()
        .zip(details)
        .map(|(summary, detail)| match detail {
            Some(detail) => Ok(ListEntry::join(summary, detail)),
            None => Err(CatalogError::Task(format!(
                "Missing detail for '{}'",
                summary.name
            ))),
        })
        .collect()
}
