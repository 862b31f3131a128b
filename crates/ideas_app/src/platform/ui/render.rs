use ideas_core::{ListViewModel, LoadStatus, PageSize, SortOrder};

use super::constants::*;
use super::dropdown::Dropdowns;
use crate::platform::history::Location;

pub fn render(view: &ListViewModel, menus: &Dropdowns) -> Vec<String> {
    let mut lines = vec![String::new(), controls_row(view)];

    if menus.is_page_size_open() {
        lines.push(menu_row(
            "Show per page",
            PageSize::ALL
                .iter()
                .map(|size| (size.to_string(), *size == view.page_size)),
        ));
    }
    if menus.is_sort_open() {
        lines.push(menu_row(
            "Sort by",
            SortOrder::ALL
                .iter()
                .map(|sort| (sort.to_string(), *sort == view.sort)),
        ));
    }

    match view.status {
        LoadStatus::Idle | LoadStatus::Loading => lines.push(LOADING_TEXT.to_string()),
        LoadStatus::Error => {
            if let Some(error) = &view.error {
                lines.push(error.summary.clone());
                if error.retry_available {
                    lines.push(RETRY_HINT.to_string());
                }
            }
        }
        LoadStatus::Ready if view.items.is_empty() => {
            lines.push(EMPTY_TITLE.to_string());
            lines.push(EMPTY_HINT.to_string());
        }
        LoadStatus::Ready => {
            for (position, item) in view.items.iter().enumerate() {
                lines.push(format!(
                    "{:>3}. {}  {}",
                    position + 1,
                    item.date_label,
                    item.title
                ));
                lines.push(format!("     {}  [{}]", item.link, item.thumbnail_url));
            }
        }
    }

    if view.show_pagination() {
        lines.push(pagination_row(view));
    }
    lines
}

/// Placeholder for routes other than the listing.
pub fn render_location(location: &Location) -> Vec<String> {
    vec![
        String::new(),
        format!("Opened {location}"),
        DETAIL_HINT.to_string(),
    ]
}

pub fn help() -> Vec<String> {
    HELP_LINES.iter().map(|line| line.to_string()).collect()
}

fn controls_row(view: &ListViewModel) -> String {
    let total = if view.range.start == 0 {
        0
    } else {
        view.total_count
    };
    format!(
        "Showing {} - {} of {}    Show per page: [{} v]    Sort by: [{} v]",
        view.range.start, view.range.end, total, view.page_size, view.sort
    )
}

fn menu_row(label: &str, options: impl Iterator<Item = (String, bool)>) -> String {
    let options: Vec<String> = options
        .map(|(text, selected)| {
            if selected {
                format!("({text})")
            } else {
                text
            }
        })
        .collect();
    format!("  {label}: {}", options.join(" | "))
}

fn pagination_row(view: &ListViewModel) -> String {
    let mut parts = vec![
        control(FIRST_MARK, view.can_go_back),
        control(PREVIOUS_MARK, view.can_go_back),
    ];
    parts.extend(view.window.iter().map(|page| {
        if *page == view.page {
            format!("[{page}]")
        } else {
            page.to_string()
        }
    }));
    parts.push(control(NEXT_MARK, view.can_go_forward));
    parts.push(control(LAST_MARK, view.can_go_forward));
    parts.join(" ")
}

fn control(mark: &str, enabled: bool) -> String {
    let shown = if enabled { mark } else { DISABLED_MARK };
    shown.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideas_core::{
        update, ContentItem, Effect, FailureKind, FetchFailure, ListState, Msg,
    };
    use pretty_assertions::assert_eq;

    fn mounted(query: &str) -> (ListState, u64) {
        let (state, effects) = update(ListState::new(), Msg::Mounted(query.to_string()));
        match effects.as_slice() {
            [Effect::FetchPage { request_id, .. }] => (state, *request_id),
            other => panic!("unexpected effects {other:?}"),
        }
    }

    fn ready(query: &str, titles: &[&str], total: u64) -> ListViewModel {
        let (state, request_id) = mounted(query);
        let items = titles
            .iter()
            .enumerate()
            .map(|(n, title)| ContentItem {
                id: (n + 1).to_string(),
                title: title.to_string(),
                published_at: None,
                thumbnail_url: None,
            })
            .collect();
        let (state, _) = update(
            state,
            Msg::FetchSucceeded {
                request_id,
                items,
                total_count: total,
            },
        );
        state.view()
    }

    #[test]
    fn loading_state_shows_spinner_text() {
        let (state, _) = mounted("");
        let lines = render(&state.view(), &Dropdowns::default());
        assert_eq!(
            lines[1],
            "Showing 0 - 0 of 0    Show per page: [10 v]    Sort by: [Newest v]"
        );
        assert_eq!(lines[2], LOADING_TEXT);
    }

    #[test]
    fn ready_state_lists_items_and_pagination() {
        let view = ready("?page=2", &["Alpha", "Beta"], 12);
        let lines = render(&view, &Dropdowns::default());
        assert!(lines[1].starts_with("Showing 11 - 12 of 12"));
        assert_eq!(lines[2], "  1. -  Alpha");
        assert!(lines[3].starts_with("     /ideas/1  [https://images.unsplash.com/"));
        assert_eq!(lines.last().unwrap(), "« ‹ 1 [2] · ·");
    }

    #[test]
    fn empty_state_has_no_pagination() {
        let view = ready("", &[], 0);
        let lines = render(&view, &Dropdowns::default());
        assert_eq!(lines[2..], [EMPTY_TITLE.to_string(), EMPTY_HINT.to_string()]);
    }

    #[test]
    fn error_state_offers_retry() {
        let (state, request_id) = mounted("");
        let (state, _) = update(
            state,
            Msg::FetchFailed {
                request_id,
                failure: FetchFailure::new(
                    FailureKind::UnexpectedContentType,
                    "Server returned text/html instead of JSON. Check API configuration.",
                ),
            },
        );
        let lines = render(&state.view(), &Dropdowns::default());
        assert_eq!(
            lines[2..],
            [
                "Server returned text/html instead of JSON. Check API configuration.".to_string(),
                RETRY_HINT.to_string()
            ]
        );
    }

    #[test]
    fn open_menu_marks_current_choice() {
        let view = ready("?pageSize=20", &["Only"], 1);
        let mut menus = Dropdowns::default();
        menus.toggle_page_size();
        let lines = render(&view, &menus);
        assert_eq!(lines[2], "  Show per page: 10 | (20) | 50");

        menus.toggle_sort();
        let lines = render(&view, &menus);
        assert_eq!(lines[2], "  Sort by: (Newest) | Oldest");
    }

    #[test]
    fn detail_location_is_acknowledged() {
        let lines = render_location(&Location::parse("/ideas/9"));
        assert_eq!(lines[1], "Opened /ideas/9");
    }
}
