use std::sync::mpsc;

use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::catalog::{CatalogClient, ItemDetail, ListEntry};
use crate::params::RouteParams;
use crate::sync::{DetailSynchronizer, ListSynchronizer, SyncState};
use crate::ui::events::AppEvent;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    List,
    Detail,
}

/// An open detail screen: its route and its own synchronizer.
///
/// Dropping it disposes the synchronizer, so a late response from a screen
/// the user already left never commits.
struct DetailScreen {
    route: RouteParams,
    sync: DetailSynchronizer,
}

pub struct App {
    should_quit: bool,
    client: CatalogClient,
    runtime: Handle,
    list: ListSynchronizer,
    selection: usize,
    detail: Option<DetailScreen>,
    notifier: Option<mpsc::Sender<AppEvent>>,
}

impl App {
    pub fn new(client: CatalogClient, runtime: Handle, page_size: u32) -> Self {
        let list = ListSynchronizer::new(client.clone(), runtime.clone(), page_size);
        Self {
            should_quit: false,
            client,
            runtime,
            list,
            selection: 0,
            detail: None,
            notifier: None,
        }
    }

    /// Redraw requests are sent here whenever a synchronizer changes state.
    pub fn attach_notifier(&mut self, tx: mpsc::Sender<AppEvent>) {
        self.forward_changes(self.list.subscribe(), &tx);
        self.notifier = Some(tx);
    }

    /// Mount the list screen: starts its first fetch.
    pub fn activate(&mut self) -> bool {
        self.list.activate()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        if self.detail.is_some() {
            Screen::Detail
        } else {
            Screen::List
        }
    }

    // -- List screen ----------------------------------------------------------

    pub fn list_state(&self) -> SyncState<Vec<ListEntry>> {
        self.list.state()
    }

    pub fn entries(&self) -> Vec<ListEntry> {
        self.list.entries()
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.list.entries().len();
        if len == 0 {
            self.selection = 0;
            return;
        }
        let next = self.selection as isize + delta;
        self.selection = next.clamp(0, len as isize - 1) as usize;
    }

    pub fn refresh_list(&mut self) -> bool {
        self.list.refresh()
    }

    /// Navigate to the detail screen of the selected entry.
    pub fn open_selected(&mut self) -> bool {
        let Some(entry) = self.list.entries().get(self.selection).cloned() else {
            return false;
        };
        self.navigate(RouteParams::from_entry(&entry));
        true
    }

    // -- Detail screen --------------------------------------------------------

    /// Mount a fresh detail screen for `route`, replacing any open one.
    pub fn navigate(&mut self, route: RouteParams) {
        let mut sync = DetailSynchronizer::new(self.client.clone(), self.runtime.clone());
        if let Some(tx) = &self.notifier {
            self.forward_changes(sync.subscribe(), tx);
        }
        sync.set_key(&route.key());
        self.detail = Some(DetailScreen { route, sync });
    }

    /// Leave the detail screen, tearing it down.
    pub fn back(&mut self) {
        if let Some(mut screen) = self.detail.take() {
            screen.sync.dispose();
        }
    }

    pub fn route(&self) -> Option<&RouteParams> {
        self.detail.as_ref().map(|screen| &screen.route)
    }

    /// Decoded key of the open detail screen; empty when none is selected.
    pub fn detail_key(&self) -> String {
        self.route().map(RouteParams::key).unwrap_or_default()
    }

    pub fn detail_state(&self) -> SyncState<ItemDetail> {
        self.detail
            .as_ref()
            .map(|screen| screen.sync.state())
            .unwrap_or_default()
    }

    /// Dispose every synchronizer before exit.
    pub fn shutdown(&mut self) {
        self.back();
        self.list.dispose();
    }

    fn forward_changes<T>(&self, mut rx: watch::Receiver<SyncState<T>>, tx: &mpsc::Sender<AppEvent>)
    where
        T: Send + Sync + 'static,
    {
        let tx = tx.clone();
        self.runtime.spawn(async move {
            while rx.changed().await.is_ok() {
                if tx.send(AppEvent::SyncChanged).is_err() {
                    break;
                }
            }
        });
    }
}
