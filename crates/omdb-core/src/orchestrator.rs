//! Query orchestration
//!
//! Turns input events into at most one live catalog request and decides
//! which settlements are allowed to reach [`QueryState`]. Everything here is
//! synchronous; the async shell in [`crate::controller`] runs the fetches.
//!
//! Every issued request carries a [`RequestToken`]. Only a settlement whose
//! token is still current is committed, so the visible outcome always
//! belongs to the most recently issued input regardless of the order in
//! which responses arrive.

use crate::config::QueryPolicy;
use crate::error::{OmdbError, Result};
use crate::state::{QueryState, ViewModel};
use crate::types::{
    ContentType, DetailOutcome, FilmDetail, QueryInput, QueryOutcome, SearchPage, SearchRequest,
};

/// Identity of one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Monotonic token counter with a single current slot
#[derive(Debug, Default)]
pub struct RequestGate {
    issued: u64,
    current: Option<RequestToken>,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new token; it supersedes every earlier one.
    pub fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        let token = RequestToken(self.issued);
        self.current = Some(token);
        token
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current == Some(token)
    }

    /// Make every outstanding token stale.
    pub fn invalidate(&mut self) {
        self.current = None;
    }

    /// Accept a settlement for `token` at most once.
    fn settle(&mut self, token: RequestToken) -> bool {
        if self.is_current(token) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

/// A search the shell must run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub token: RequestToken,
    /// Input the request was issued for
    pub snapshot: QueryInput,
    pub request: SearchRequest,
}

/// A detail lookup the shell must run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    pub token: RequestToken,
    pub imdb_id: String,
}

/// What an input event requires from the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchDecision {
    /// Input did not change; nothing to do
    Unchanged,
    /// Settled locally to `Idle`; no request needed
    Cleared,
    /// Outcome is now `Loading`; run this search
    Fetch(SearchTicket),
}

/// Result of committing a settlement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// Token was superseded; state untouched
    Stale,
    /// Outcome committed
    Committed,
    /// Outcome committed, but the new total moved the page back inside
    /// `[1, total_pages]`; run this search for the clamped page
    Refetch(SearchTicket),
}

impl Settlement {
    /// Whether the settlement reached the state
    pub fn is_committed(&self) -> bool {
        !matches!(self, Settlement::Stale)
    }
}

impl FetchDecision {
    pub fn ticket(&self) -> Option<&SearchTicket> {
        match self {
            FetchDecision::Fetch(ticket) => Some(ticket),
            _ => None,
        }
    }
}

/// Pure state machine behind the query controller
#[derive(Debug)]
pub struct Orchestrator {
    state: QueryState,
    policy: QueryPolicy,
    search_gate: RequestGate,
    detail_gate: RequestGate,
}

impl Orchestrator {
    pub fn new(policy: QueryPolicy) -> Self {
        Self {
            state: QueryState::new(),
            policy,
            search_gate: RequestGate::new(),
            detail_gate: RequestGate::new(),
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn policy(&self) -> &QueryPolicy {
        &self.policy
    }

    pub fn view_model(&self) -> ViewModel {
        self.state.view_model()
    }

    /// Initial evaluation; only acts when eager fetching is configured.
    pub fn start(&mut self) -> FetchDecision {
        if self.policy.eager_initial_fetch {
            self.on_input_changed()
        } else {
            FetchDecision::Unchanged
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) -> FetchDecision {
        self.state.set_search_term(term);
        self.evaluate()
    }

    pub fn set_type_filter(&mut self, type_filter: ContentType) -> FetchDecision {
        self.state
            .set_type_filter(type_filter, self.policy.reset_page_on_filter_change);
        self.evaluate()
    }

    pub fn set_page(&mut self, page: u32) -> FetchDecision {
        self.state.set_page(page);
        self.evaluate()
    }

    /// Advance one page; no-op on the last page or when no page count is known.
    pub fn next_page(&mut self) -> FetchDecision {
        let page = self.state.input().page;
        if page >= self.state.total_pages() {
            return FetchDecision::Unchanged;
        }
        self.set_page(page.saturating_add(1))
    }

    /// Go back one page; no-op on page 1.
    pub fn prev_page(&mut self) -> FetchDecision {
        let page = self.state.input().page;
        if page <= 1 {
            return FetchDecision::Unchanged;
        }
        self.set_page(page - 1)
    }

    fn evaluate(&mut self) -> FetchDecision {
        if self.state.take_dirty() {
            self.on_input_changed()
        } else {
            FetchDecision::Unchanged
        }
    }

    /// Decide what the current input needs.
    ///
    /// A blank term under `TreatAsNoQuery` settles locally to `Idle` and
    /// makes any in-flight search stale. Otherwise a new token is issued
    /// and the outcome becomes `Loading`.
    pub fn on_input_changed(&mut self) -> FetchDecision {
        let snapshot = self.state.snapshot();

        match SearchRequest::from_input(&snapshot, self.policy.empty_search) {
            None => {
                self.search_gate.invalidate();
                self.state.set_outcome(QueryOutcome::Idle);
                tracing::debug!("blank search term; cleared results without a request");
                FetchDecision::Cleared
            }
            Some(request) => {
                let token = self.search_gate.issue();
                self.state.set_outcome(QueryOutcome::Loading);
                tracing::debug!(
                    token = token.value(),
                    term = %request.term,
                    page = request.page,
                    content_type = request.content_type.as_str(),
                    "issuing catalog search"
                );
                FetchDecision::Fetch(SearchTicket {
                    token,
                    snapshot,
                    request,
                })
            }
        }
    }

    /// Commit a search settlement.
    ///
    /// A superseded token yields `Settlement::Stale` and the result is
    /// dropped without touching the state. When a committed total no longer
    /// covers the current page, the page is clamped and a follow-up search
    /// is issued.
    pub fn commit_search(
        &mut self,
        token: RequestToken,
        result: Result<SearchPage>,
    ) -> Settlement {
        if !self.search_gate.settle(token) {
            tracing::debug!(token = token.value(), "discarding stale search response");
            return Settlement::Stale;
        }

        let outcome = match result {
            Ok(page) => QueryOutcome::Success {
                items: page.items,
                total_results: page.total_results,
            },
            Err(err) => QueryOutcome::Failure {
                message: failure_message(token, &err),
            },
        };
        self.state.set_outcome(outcome);

        let page = self.state.input().page;
        let clamped = self.state.clamp_page(page);
        if clamped == page {
            return Settlement::Committed;
        }

        tracing::debug!(page, clamped, "page beyond committed total; reloading last page");
        self.state.set_page(clamped);
        self.state.take_dirty();
        match self.on_input_changed() {
            FetchDecision::Fetch(ticket) => Settlement::Refetch(ticket),
            _ => Settlement::Committed,
        }
    }

    /// Open the detail view for a title.
    ///
    /// Returns `None` for a blank identifier, which closes the view instead.
    pub fn select_item(&mut self, imdb_id: &str) -> Option<DetailTicket> {
        let imdb_id = imdb_id.trim();
        if imdb_id.is_empty() {
            self.close_detail();
            return None;
        }

        let token = self.detail_gate.issue();
        self.state.set_detail(DetailOutcome::Loading {
            id: imdb_id.to_string(),
        });
        tracing::debug!(token = token.value(), imdb_id, "issuing catalog detail lookup");
        Some(DetailTicket {
            token,
            imdb_id: imdb_id.to_string(),
        })
    }

    /// Commit a detail settlement; `false` when stale.
    pub fn commit_detail(&mut self, token: RequestToken, result: Result<FilmDetail>) -> bool {
        if !self.detail_gate.settle(token) {
            tracing::debug!(token = token.value(), "discarding stale detail response");
            return false;
        }

        let detail = match result {
            Ok(film) => DetailOutcome::Success { film },
            Err(err) => DetailOutcome::Failure {
                message: failure_message(token, &err),
            },
        };
        self.state.set_detail(detail);
        true
    }

    /// Close the detail view; any pending lookup becomes stale.
    pub fn close_detail(&mut self) {
        self.detail_gate.invalidate();
        self.state.set_detail(DetailOutcome::Idle);
    }
}

/// Log a committed failure and pick the message the user sees.
fn failure_message(token: RequestToken, err: &OmdbError) -> String {
    if err.is_catalog_failure() {
        tracing::info!(token = token.value(), "catalog reported failure: {err}");
    } else {
        tracing::warn!(token = token.value(), "catalog request failed: {err}");
    }
    err.failure_message()
}
