//! Async query controller
//!
//! Wraps the [`Orchestrator`] for use from an event-driven UI. Input
//! handlers mutate state synchronously under one lock and return right
//! away; catalog requests run on spawned tokio tasks and commit back
//! through the same lock. A fresh [`ViewModel`] is published on a watch
//! channel after every committed change.

use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use crate::catalog::Catalog;
use crate::config::QueryPolicy;
use crate::orchestrator::{DetailTicket, FetchDecision, Orchestrator, SearchTicket, Settlement};
use crate::state::ViewModel;
use crate::types::ContentType;

struct Shared<C> {
    catalog: C,
    orchestrator: Mutex<Orchestrator>,
    view_tx: watch::Sender<ViewModel>,
}

impl<C> Shared<C> {
    fn publish(&self, orchestrator: &Orchestrator) {
        self.view_tx.send_replace(orchestrator.view_model());
    }
}

/// Query controller shared between the UI and in-flight requests.
///
/// Cloning is cheap; all clones drive the same state.
///
/// # Example
/// ```no_run
/// use omdb_core::{ClientConfig, OmdbCatalog, QueryController, QueryPolicy};
///
/// # async fn example() -> Result<(), omdb_core::OmdbError> {
/// let catalog = OmdbCatalog::with_config(ClientConfig::from_env())?;
/// let controller = QueryController::new(catalog, QueryPolicy::default());
///
/// if let Some(request) = controller.on_search_input("Batman").await {
///     let _ = request.await;
/// }
/// println!("{} pages", controller.view().total_pages);
/// # Ok(())
/// # }
/// ```
pub struct QueryController<C> {
    shared: Arc<Shared<C>>,
}

impl<C> Clone for QueryController<C> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<C: Catalog> QueryController<C> {
    pub fn new(catalog: C, policy: QueryPolicy) -> Self {
        let orchestrator = Orchestrator::new(policy);
        let (view_tx, _) = watch::channel(orchestrator.view_model());

        Self {
            shared: Arc::new(Shared {
                catalog,
                orchestrator: Mutex::new(orchestrator),
                view_tx,
            }),
        }
    }

    /// Receive every published view model
    pub fn subscribe(&self) -> watch::Receiver<ViewModel> {
        self.shared.view_tx.subscribe()
    }

    /// Latest published view model
    pub fn view(&self) -> ViewModel {
        self.shared.view_tx.borrow().clone()
    }

    /// Run the initial evaluation (eager fetch when configured).
    ///
    /// Like every handler, returns the handle of the spawned request if
    /// one was issued.
    pub async fn start(&self) -> Option<JoinHandle<()>> {
        self.apply(|o| o.start()).await
    }

    pub async fn on_search_input(&self, text: impl Into<String>) -> Option<JoinHandle<()>> {
        let text = text.into();
        self.apply(move |o| o.set_search_term(text)).await
    }

    pub async fn on_filter_select(&self, type_filter: ContentType) -> Option<JoinHandle<()>> {
        self.apply(move |o| o.set_type_filter(type_filter)).await
    }

    pub async fn on_page_select(&self, page: u32) -> Option<JoinHandle<()>> {
        self.apply(move |o| o.set_page(page)).await
    }

    pub async fn on_page_next(&self) -> Option<JoinHandle<()>> {
        self.apply(|o| o.next_page()).await
    }

    pub async fn on_page_prev(&self) -> Option<JoinHandle<()>> {
        self.apply(|o| o.prev_page()).await
    }

    /// Open the detail view; runs independently of the search lane.
    pub async fn on_item_select(&self, imdb_id: &str) -> Option<JoinHandle<()>> {
        let mut orchestrator = self.shared.orchestrator.lock().await;
        let ticket = orchestrator.select_item(imdb_id);
        self.shared.publish(&orchestrator);
        drop(orchestrator);

        ticket.map(|ticket| self.spawn_detail(ticket))
    }

    pub async fn on_detail_close(&self) {
        let mut orchestrator = self.shared.orchestrator.lock().await;
        orchestrator.close_detail();
        self.shared.publish(&orchestrator);
    }

    async fn apply<F>(&self, event: F) -> Option<JoinHandle<()>>
    where
        F: FnOnce(&mut Orchestrator) -> FetchDecision + Send,
    {
        let mut orchestrator = self.shared.orchestrator.lock().await;
        match event(&mut *orchestrator) {
            FetchDecision::Unchanged => None,
            FetchDecision::Cleared => {
                self.shared.publish(&orchestrator);
                None
            }
            FetchDecision::Fetch(ticket) => {
                self.shared.publish(&orchestrator);
                drop(orchestrator);
                Some(self.spawn_search(ticket))
            }
        }
    }

    /// Run a search and commit it. A page clamp after commit reissues the
    /// search on the same task, so the handle covers the follow-up too.
    fn spawn_search(&self, ticket: SearchTicket) -> JoinHandle<()> {
        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move {
            let mut ticket = ticket;
            loop {
                let result = shared.catalog.search(&ticket.request).await;

                let mut orchestrator = shared.orchestrator.lock().await;
                match orchestrator.commit_search(ticket.token, result) {
                    Settlement::Stale => return,
                    Settlement::Committed => {
                        shared.publish(&orchestrator);
                        return;
                    }
                    Settlement::Refetch(follow_up) => {
                        shared.publish(&orchestrator);
                        ticket = follow_up;
                    }
                }
            }
        })
    }

    fn spawn_detail(&self, ticket: DetailTicket) -> JoinHandle<()> {
        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move {
            let result = shared.catalog.film(&ticket.imdb_id).await;

            let mut orchestrator = shared.orchestrator.lock().await;
            if orchestrator.commit_detail(ticket.token, result) {
                shared.publish(&orchestrator);
            }
        })
    }
}
