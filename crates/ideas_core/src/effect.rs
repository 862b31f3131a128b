use crate::{RequestId, UrlQuery};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the current history entry's query (no new entry).
    ReplaceUrl { query: String },
    /// Push a new history entry for `path`.
    Navigate { path: String },
    /// Fetch one page of content for `query`.
    FetchPage { request_id: RequestId, query: UrlQuery },
}
