//! Mapping between listing state and the navigable URL query string.
//!
//! The query string is the single source of truth across reloads and
//! back/forward navigation. Decoding never fails: any missing or malformed
//! facet falls back to its default.

use std::fmt;

use url::form_urlencoded;

pub const PAGE_KEY: &str = "page";
pub const PAGE_SIZE_KEY: &str = "pageSize";
pub const SORT_KEY: &str = "sort";

/// Allowed page densities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    Fifty,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Ten, PageSize::Twenty, PageSize::Fifty];

    pub fn get(self) -> u32 {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
        }
    }

    pub fn from_count(count: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.get() == count)
    }

    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u32>().ok().and_then(Self::from_count)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Publish-date ordering of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Newest, SortOrder::Oldest];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest",
            SortOrder::Oldest => "Oldest",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three URL facets of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UrlQuery {
    pub page: u32,
    pub page_size: PageSize,
    pub sort: SortOrder,
}

impl Default for UrlQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PageSize::default(),
            sort: SortOrder::default(),
        }
    }
}

impl UrlQuery {
    pub fn new(page: u32, page_size: PageSize, sort: SortOrder) -> Self {
        Self {
            page: page.max(1),
            page_size,
            sort,
        }
    }

    /// Decodes a query string, with or without the leading `?`.
    ///
    /// Only the first occurrence of each key is considered. Unknown keys are
    /// ignored.
    pub fn decode(raw: &str) -> Self {
        let raw = raw.trim();
        let raw = raw.strip_prefix('?').unwrap_or(raw);

        let mut page = None;
        let mut page_size = None;
        let mut sort = None;
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match &*key {
                PAGE_KEY if page.is_none() => page = Some(parse_page(&value)),
                PAGE_SIZE_KEY if page_size.is_none() => page_size = Some(PageSize::parse(&value)),
                SORT_KEY if sort.is_none() => sort = Some(SortOrder::parse(&value)),
                _ => {}
            }
        }

        Self {
            page: page.flatten().unwrap_or(1),
            page_size: page_size.flatten().unwrap_or_default(),
            sort: sort.flatten().unwrap_or_default(),
        }
    }

    /// Encodes all three facets in a fixed order, without the leading `?`.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair(PAGE_KEY, &self.page.max(1).to_string())
            .append_pair(PAGE_SIZE_KEY, &self.page_size.get().to_string())
            .append_pair(SORT_KEY, self.sort.as_str())
            .finish()
    }

    pub fn with_page(self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }
}

fn parse_page(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|page| *page >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_accepts_only_allowed_counts() {
        assert_eq!(PageSize::parse("20"), Some(PageSize::Twenty));
        assert_eq!(PageSize::parse(" 50 "), Some(PageSize::Fifty));
        assert_eq!(PageSize::parse("15"), None);
        assert_eq!(PageSize::parse("-10"), None);
    }

    #[test]
    fn sort_parse_ignores_case() {
        assert_eq!(SortOrder::parse("oldest"), Some(SortOrder::Oldest));
        assert_eq!(SortOrder::parse("NEWEST"), Some(SortOrder::Newest));
        assert_eq!(SortOrder::parse("popular"), None);
    }

    #[test]
    fn zero_and_overflowing_pages_fall_back() {
        assert_eq!(parse_page("0"), None);
        assert_eq!(parse_page("99999999999"), None);
        assert_eq!(parse_page("3"), Some(3));
    }
}
