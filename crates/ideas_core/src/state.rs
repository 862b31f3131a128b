use chrono::NaiveDate;

use crate::pagination::total_pages;
use crate::{Effect, UrlQuery};

/// Monotonic id attached to every issued fetch. `0` means nothing was issued yet.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Error,
    Ready,
}

/// One entry of the listing, already validated at the gateway boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub published_at: Option<NaiveDate>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Http { status: u16 },
    UnexpectedContentType,
    Network,
    MalformedResponse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub summary: String,
}

impl FetchFailure {
    pub fn new(kind: FailureKind, summary: impl Into<String>) -> Self {
        Self {
            kind,
            summary: summary.into(),
        }
    }
}

/// Cached projection of the URL query plus the last fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListState {
    query: UrlQuery,
    items: Vec<ContentItem>,
    total_count: u64,
    status: LoadStatus,
    failure: Option<FetchFailure>,
    latest_request: RequestId,
    dirty: bool,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state whose request ids continue after `latest_request`, so
    /// responses addressed to a previous mount can never match.
    pub fn resume_after(latest_request: RequestId) -> Self {
        Self {
            latest_request,
            ..Self::default()
        }
    }

    pub fn query(&self) -> UrlQuery {
        self.query
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn failure(&self) -> Option<&FetchFailure> {
        self.failure.as_ref()
    }

    pub fn latest_request(&self) -> RequestId {
        self.latest_request
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_count, self.query.page_size)
    }

    /// Returns whether the state changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_query(&mut self, query: UrlQuery) {
        if self.query != query {
            self.query = query;
            self.dirty = true;
        }
    }

    /// Enters `Loading` and returns the fetch effect for the current query.
    pub(crate) fn issue_fetch(&mut self) -> Effect {
        self.latest_request += 1;
        self.status = LoadStatus::Loading;
        self.failure = None;
        self.dirty = true;
        Effect::FetchPage {
            request_id: self.latest_request,
            query: self.query,
        }
    }

    pub(crate) fn apply_success(&mut self, items: Vec<ContentItem>, total_count: u64) {
        self.items = items;
        self.total_count = total_count;
        self.status = LoadStatus::Ready;
        self.failure = None;
        self.dirty = true;
    }

    pub(crate) fn apply_failure(&mut self, failure: FetchFailure) {
        self.items.clear();
        self.total_count = 0;
        self.status = LoadStatus::Error;
        self.failure = Some(failure);
        self.dirty = true;
    }
}
