use chrono::{Datelike, NaiveDate};

use crate::pagination::{item_range, pagination_window, ItemRange};
use crate::{ContentItem, FailureKind, ListState, LoadStatus, PageSize, SortOrder};

/// Route prefix of a single listed item.
pub const RESOURCE_PATH: &str = "/ideas";
/// Shown when an item has no thumbnail or the thumbnail URL is unusable.
pub const FALLBACK_THUMBNAIL_URL: &str =
    "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?auto=format&fit=crop&w=400&q=80";
pub const FALLBACK_ALT_TEXT: &str = "Article thumbnail";

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListViewModel {
    pub status: LoadStatus,
    pub page: u32,
    pub page_size: PageSize,
    pub sort: SortOrder,
    pub total_count: u64,
    pub total_pages: u32,
    pub range: ItemRange,
    pub items: Vec<ItemCardView>,
    /// Page buttons; empty whenever pagination is hidden.
    pub window: Vec<u32>,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub error: Option<ErrorView>,
}

impl ListViewModel {
    pub fn show_pagination(&self) -> bool {
        !self.window.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.status == LoadStatus::Ready && self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub kind: FailureKind,
    pub summary: String,
    pub retry_available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCardView {
    pub id: String,
    pub title: String,
    pub alt_text: String,
    pub date_label: String,
    pub thumbnail_url: String,
    pub link: String,
}

impl ListState {
    pub fn view(&self) -> ListViewModel {
        let query = self.query();
        let total_pages = self.total_pages();
        let status = self.status();
        let page = query.page;

        let window = if status == LoadStatus::Ready && total_pages > 1 {
            pagination_window(page, total_pages)
        } else {
            Vec::new()
        };

        ListViewModel {
            status,
            page,
            page_size: query.page_size,
            sort: query.sort,
            total_count: self.total_count(),
            total_pages,
            range: item_range(page, query.page_size, self.total_count(), self.items().len()),
            items: self.items().iter().map(ItemCardView::from_item).collect(),
            window,
            can_go_back: page > 1,
            can_go_forward: page < total_pages,
            error: self.failure().map(|failure| ErrorView {
                kind: failure.kind,
                summary: failure.summary.clone(),
                retry_available: true,
            }),
        }
    }
}

impl ItemCardView {
    fn from_item(item: &ContentItem) -> Self {
        let alt_text = if item.title.trim().is_empty() {
            FALLBACK_ALT_TEXT.to_string()
        } else {
            item.title.clone()
        };
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            alt_text,
            date_label: format_publish_date(item.published_at),
            thumbnail_url: thumbnail_or_fallback(item.thumbnail_url.as_deref()).to_string(),
            link: item_path(&item.id),
        }
    }
}

/// Navigation target of a listed item.
pub fn item_path(id: &str) -> String {
    format!("{RESOURCE_PATH}/{id}")
}

/// `"<day> <Month> <year>"`, or `"-"` when the date is unknown.
pub fn format_publish_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!(
            "{} {} {}",
            date.day(),
            MONTHS[date.month0() as usize],
            date.year()
        ),
        None => "-".to_string(),
    }
}

/// Keeps absolute http(s) thumbnails, anything else is treated as broken.
pub fn thumbnail_or_fallback(url: Option<&str>) -> &str {
    match url.map(str::trim) {
        Some(candidate) if is_loadable(candidate) => candidate,
        _ => FALLBACK_THUMBNAIL_URL,
    }
}

fn is_loadable(candidate: &str) -> bool {
    url::Url::parse(candidate)
        .map(|parsed| matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some())
        .unwrap_or(false)
}
