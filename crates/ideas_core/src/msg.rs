use crate::{ContentItem, FetchFailure, PageSize, PageTarget, RequestId, SortOrder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Listing view entered at the given query string.
    Mounted(String),
    /// Location query changed from outside (back/forward, typed URL).
    UrlChanged(String),
    /// User picked a page size from the dropdown.
    PageSizeSelected(PageSize),
    /// User picked a sort order from the dropdown.
    SortSelected(SortOrder),
    /// User clicked a pagination control.
    PageRequested(PageTarget),
    /// User clicked "Try Again" in the error state.
    RetryClicked,
    /// User opened a listed item.
    ItemActivated(String),
    /// Gateway returned a page.
    FetchSucceeded {
        request_id: RequestId,
        items: Vec<ContentItem>,
        total_count: u64,
    },
    /// Gateway failed.
    FetchFailed {
        request_id: RequestId,
        failure: FetchFailure,
    },
}
