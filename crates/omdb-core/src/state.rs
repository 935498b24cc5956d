//! Query state
//!
//! The authoritative record of what the user asked for and what the
//! catalog answered. Pure in-memory bookkeeping; never performs I/O.

use serde::{Deserialize, Serialize};

use crate::types::{
    total_pages, ContentType, DetailOutcome, LoadingState, QueryInput, QueryOutcome, ResultItem,
};

/// Read-only projection handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    pub search_term: String,
    pub type_filter: ContentType,
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u64,
    pub items: Vec<ResultItem>,
    pub loading_state: LoadingState,
    pub error_message: Option<String>,
    pub has_prev_page: bool,
    pub has_next_page: bool,
    pub detail: DetailOutcome,
}

/// Input fields plus the derived outcome of the current search cycle.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    input: QueryInput,
    outcome: QueryOutcome,
    /// Last committed total; kept while a request is in flight so the
    /// pagination bounds do not collapse during loading.
    total_results: u64,
    detail: DetailOutcome,
    dirty: bool,
}

impl QueryState {
    /// Fresh state: empty term, no filter, page 1, idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the search term. Always returns to page 1.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.input.search_term || self.input.page != 1 {
            self.input.search_term = term;
            self.input.page = 1;
            self.dirty = true;
        }
    }

    /// Update the type filter, optionally returning to page 1.
    pub fn set_type_filter(&mut self, type_filter: ContentType, reset_page: bool) {
        if type_filter != self.input.type_filter {
            self.input.type_filter = type_filter;
            self.dirty = true;
        }
        if reset_page && self.input.page != 1 {
            self.input.page = 1;
            self.dirty = true;
        }
    }

    /// Jump to a page, clamped to `[1, total_pages]` when the total is known.
    pub fn set_page(&mut self, page: u32) {
        let page = self.clamp_page(page);
        if page != self.input.page {
            self.input.page = page;
            self.dirty = true;
        }
    }

    /// Clamp a page number against the known bounds
    pub fn clamp_page(&self, page: u32) -> u32 {
        let page = page.max(1);
        match self.total_pages() {
            0 => page,
            last => page.min(last),
        }
    }

    /// Immutable copy of the current input
    pub fn snapshot(&self) -> QueryInput {
        self.input.clone()
    }

    /// Whether the input changed since the last call; clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn input(&self) -> &QueryInput {
        &self.input
    }

    pub fn outcome(&self) -> &QueryOutcome {
        &self.outcome
    }

    pub fn detail(&self) -> &DetailOutcome {
        &self.detail
    }

    pub fn total_results(&self) -> u64 {
        self.total_results
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_results)
    }

    /// Replace the search outcome.
    ///
    /// `Loading` keeps the previous total; every other outcome defines it.
    pub fn set_outcome(&mut self, outcome: QueryOutcome) {
        match &outcome {
            QueryOutcome::Loading => {}
            QueryOutcome::Success { total_results, .. } => self.total_results = *total_results,
            QueryOutcome::Idle | QueryOutcome::Failure { .. } => self.total_results = 0,
        }
        self.outcome = outcome;
    }

    pub fn set_detail(&mut self, detail: DetailOutcome) {
        self.detail = detail;
    }

    /// Project the state for rendering
    pub fn view_model(&self) -> ViewModel {
        let items = match &self.outcome {
            QueryOutcome::Success { items, .. } => items.clone(),
            _ => Vec::new(),
        };
        let total_pages = self.total_pages();

        ViewModel {
            search_term: self.input.search_term.clone(),
            type_filter: self.input.type_filter,
            page: self.input.page,
            total_pages,
            total_results: self.total_results,
            items,
            loading_state: self.outcome.loading_state(),
            error_message: self.outcome.error_message().map(str::to_string),
            has_prev_page: self.input.page > 1,
            has_next_page: self.input.page < total_pages,
            detail: self.detail.clone(),
        }
    }
}
