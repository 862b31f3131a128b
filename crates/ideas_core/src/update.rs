use ideas_logging::{ideas_debug, ideas_info, ideas_warn};

use crate::view_model::item_path;
use crate::{Effect, ListState, LoadStatus, Msg, UrlQuery};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ListState, msg: Msg) -> (ListState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted(raw) => {
            let query = UrlQuery::decode(&raw);
            ideas_info!("Listing mounted at {}", query.encode());
            state.set_query(query);
            vec![state.issue_fetch()]
        }
        Msg::UrlChanged(raw) => {
            let query = UrlQuery::decode(&raw);
            // Our own replacements echo back unchanged; those must not refetch.
            if query == state.query() && state.status() != LoadStatus::Idle {
                Vec::new()
            } else {
                ideas_debug!("Location changed to {}", query.encode());
                state.set_query(query);
                vec![state.issue_fetch()]
            }
        }
        Msg::PageSizeSelected(page_size) => {
            let query = UrlQuery {
                page: 1,
                page_size,
                ..state.query()
            };
            move_to(&mut state, query)
        }
        Msg::SortSelected(sort) => {
            let query = UrlQuery {
                page: 1,
                sort,
                ..state.query()
            };
            move_to(&mut state, query)
        }
        Msg::PageRequested(target) => {
            // Controls are only shown once the total is known.
            if state.status() != LoadStatus::Ready {
                ideas_debug!("Ignoring {:?} while {:?}", target, state.status());
                return (state, Vec::new());
            }
            let current = state.query();
            let page = target.resolve(current.page, state.total_pages());
            move_to(&mut state, current.with_page(page))
        }
        Msg::RetryClicked => {
            if state.status() == LoadStatus::Error {
                vec![state.issue_fetch()]
            } else {
                Vec::new()
            }
        }
        Msg::ItemActivated(id) => vec![Effect::Navigate {
            path: item_path(&id),
        }],
        Msg::FetchSucceeded {
            request_id,
            items,
            total_count,
        } => {
            if request_id != state.latest_request() {
                ideas_debug!(
                    "Discarding stale response {} (latest {})",
                    request_id,
                    state.latest_request()
                );
                return (state, Vec::new());
            }
            state.apply_success(items, total_count);
            let query = state.query();
            let last_page = state.total_pages();
            if query.page > last_page {
                ideas_info!("Page {} beyond last page {}, clamping", query.page, last_page);
                move_to(&mut state, query.with_page(last_page))
            } else {
                Vec::new()
            }
        }
        Msg::FetchFailed {
            request_id,
            failure,
        } => {
            if request_id != state.latest_request() {
                ideas_debug!(
                    "Discarding stale failure {} (latest {})",
                    request_id,
                    state.latest_request()
                );
                return (state, Vec::new());
            }
            ideas_warn!("Fetch {} failed: {}", request_id, failure.summary);
            state.apply_failure(failure);
            Vec::new()
        }
    };

    (state, effects)
}

/// Replaces the URL with `query` and fetches it, unless nothing changed.
fn move_to(state: &mut ListState, query: UrlQuery) -> Vec<Effect> {
    if query == state.query() {
        return Vec::new();
    }
    state.set_query(query);
    vec![
        Effect::ReplaceUrl {
            query: query.encode(),
        },
        state.issue_fetch(),
    ]
}
