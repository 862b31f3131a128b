pub const LOADING_TEXT: &str = "Loading posts...";
pub const EMPTY_TITLE: &str = "No posts found";
pub const EMPTY_HINT: &str = "There are no posts available at the moment.";
pub const RETRY_HINT: &str = "Type `retry` to try again.";
pub const DETAIL_HINT: &str = "Type `back` to return to the listing.";
pub const PROMPT: &str = "> ";

pub const FIRST_MARK: &str = "«";
pub const PREVIOUS_MARK: &str = "‹";
pub const NEXT_MARK: &str = "›";
pub const LAST_MARK: &str = "»";
pub const DISABLED_MARK: &str = "·";

pub const HELP_LINES: &[&str] = &[
    "Commands:",
    "  next | prev | first | last    move between pages",
    "  page <n>                      jump to page n",
    "  size [10|20|50]               open the page size menu, or pick a size",
    "  sort [newest|oldest]          open the sort menu, or pick an order",
    "  open <n>                      open the n-th item on this page",
    "  retry                         repeat the failed request",
    "  go <location>                 navigate, e.g. go /ideas?page=2",
    "  back | forward                move through history",
    "  esc                           close open menus",
    "  help | quit",
];
