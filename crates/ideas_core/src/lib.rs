//! Ideas core: pure listing state machine, URL codec and view-model helpers.
mod effect;
mod msg;
mod pagination;
mod query;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use pagination::{
    item_range, pagination_window, total_pages, ItemRange, PageTarget, WINDOW_WIDTH,
};
pub use query::{PageSize, SortOrder, UrlQuery, PAGE_KEY, PAGE_SIZE_KEY, SORT_KEY};
pub use state::{ContentItem, FailureKind, FetchFailure, ListState, LoadStatus, RequestId};
pub use update::update;
pub use view_model::{
    format_publish_date, item_path, thumbnail_or_fallback, ErrorView, ItemCardView,
    ListViewModel, FALLBACK_ALT_TEXT, FALLBACK_THUMBNAIL_URL, RESOURCE_PATH,
};
