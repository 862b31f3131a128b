//! Translation of listing state into the content service's query dialect.

use reqwest::Url;

use crate::PublishOrder;

pub const PAGE_NUMBER_KEY: &str = "page[number]";
pub const PAGE_SIZE_KEY: &str = "page[size]";
pub const APPEND_KEY: &str = "append[]";
pub const SORT_KEY: &str = "sort";

pub const NEWEST_FIRST_TOKEN: &str = "-published_at";
pub const OLDEST_FIRST_TOKEN: &str = "published_at";

/// Relations expanded inline so thumbnails arrive with the page.
pub const APPENDED_RELATIONS: [&str; 2] = ["small_image", "medium_image"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteParams {
    pub page_number: u32,
    pub page_size: u32,
    pub sort: &'static str,
    pub append: &'static [&'static str],
}

impl RemoteParams {
    pub fn build(page: u32, page_size: u32, order: PublishOrder) -> Self {
        Self {
            page_number: page,
            page_size,
            sort: sort_token(order),
            append: &APPENDED_RELATIONS,
        }
    }

    /// Query pairs in the order they are sent.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3 + self.append.len());
        pairs.push((PAGE_NUMBER_KEY, self.page_number.to_string()));
        pairs.push((PAGE_SIZE_KEY, self.page_size.to_string()));
        pairs.extend(
            self.append
                .iter()
                .map(|relation| (APPEND_KEY, (*relation).to_string())),
        );
        pairs.push((SORT_KEY, self.sort.to_string()));
        pairs
    }

    pub fn apply_to(&self, url: &mut Url) {
        let mut query = url.query_pairs_mut();
        for (key, value) in self.pairs() {
            query.append_pair(key, &value);
        }
    }
}

pub fn sort_token(order: PublishOrder) -> &'static str {
    match order {
        PublishOrder::Newest => NEWEST_FIRST_TOKEN,
        PublishOrder::Oldest => OLDEST_FIRST_TOKEN,
    }
}
