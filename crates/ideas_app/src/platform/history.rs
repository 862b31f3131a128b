//! In-process location history with browser-like push/replace semantics.

use std::fmt;

use ideas_core::RESOURCE_PATH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    /// Query string without the leading `?`.
    pub query: String,
}

impl Location {
    pub fn listing_root() -> Self {
        Self {
            path: RESOURCE_PATH.to_string(),
            query: String::new(),
        }
    }

    /// Parses `/path?query`. A bare `?query` targets the listing and `/` redirects to it.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, query),
            None => (raw, ""),
        };
        let path = path.trim_end_matches('/');
        let path = if path.is_empty() {
            RESOURCE_PATH.to_string()
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        Self {
            path,
            query: query.to_string(),
        }
    }

    pub fn is_listing(&self) -> bool {
        self.path == RESOURCE_PATH
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            f.write_str(&self.path)
        } else {
            write!(f, "{}?{}", self.path, self.query)
        }
    }
}

#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
    index: usize,
}

impl History {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    /// Adds an entry after the current one, dropping any forward entries.
    pub fn push(&mut self, location: Location) {
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index += 1;
    }

    /// Rewrites the current entry's query without adding an entry.
    pub fn replace_query(&mut self, query: impl Into<String>) {
        self.entries[self.index].query = query.into();
    }

    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_paths() {
        assert_eq!(Location::parse("/").path, "/ideas");
        assert_eq!(Location::parse("?page=2"), Location {
            path: "/ideas".to_string(),
            query: "page=2".to_string(),
        });
        assert_eq!(Location::parse("ideas/12/").path, "/ideas/12");
        assert!(Location::parse("/ideas/").is_listing());
        assert!(!Location::parse("/ideas/12").is_listing());
    }

    #[test]
    fn display_omits_empty_query() {
        assert_eq!(Location::listing_root().to_string(), "/ideas");
        assert_eq!(Location::parse("/ideas?page=3").to_string(), "/ideas?page=3");
    }

    #[test]
    fn replace_does_not_add_entries() {
        let mut history = History::new(Location::listing_root());
        history.replace_query("page=2&pageSize=10&sort=Newest");
        history.replace_query("page=3&pageSize=10&sort=Newest");
        assert_eq!(history.len(), 1);
        assert!(!history.back());
        assert_eq!(history.current().query, "page=3&pageSize=10&sort=Newest");
    }

    #[test]
    fn push_then_back_and_forward() {
        let mut history = History::new(Location::parse("/ideas?page=2"));
        history.push(Location::parse("/ideas/5"));
        assert!(history.back());
        assert_eq!(history.current().query, "page=2");
        assert!(history.forward());
        assert_eq!(history.current().path, "/ideas/5");
        assert!(!history.forward());
    }

    #[test]
    fn push_discards_forward_entries() {
        let mut history = History::new(Location::listing_root());
        history.push(Location::parse("/ideas/1"));
        history.back();
        history.push(Location::parse("/ideas/2"));
        assert_eq!(history.len(), 2);
        assert!(!history.forward());
        assert_eq!(history.current().path, "/ideas/2");
    }
}
