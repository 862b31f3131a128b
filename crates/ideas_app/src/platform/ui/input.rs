use ideas_core::{PageSize, PageTarget, SortOrder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Page(PageTarget),
    /// `None` toggles the menu.
    PageSize(Option<PageSize>),
    /// `None` toggles the menu.
    Sort(Option<SortOrder>),
    /// 1-based position on the current page.
    Open(usize),
    Retry,
    Go(String),
    Back,
    Forward,
    Escape,
    Help,
    Quit,
    Unknown(String),
}

/// Parses one input line; blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let head = words.next()?.to_ascii_lowercase();
    let arg = words.next();
    let unknown = || Command::Unknown(line.trim().to_string());

    let command = match (head.as_str(), arg) {
        ("next" | "n", None) => Command::Page(PageTarget::Next),
        ("prev" | "p", None) => Command::Page(PageTarget::Previous),
        ("first", None) => Command::Page(PageTarget::First),
        ("last", None) => Command::Page(PageTarget::Last),
        ("page", Some(raw)) => raw
            .parse()
            .map(|page| Command::Page(PageTarget::Number(page)))
            .unwrap_or_else(|_| unknown()),
        ("size", None) => Command::PageSize(None),
        ("size", Some(raw)) => PageSize::parse(raw)
            .map(|size| Command::PageSize(Some(size)))
            .unwrap_or_else(unknown),
        ("sort", None) => Command::Sort(None),
        ("sort", Some(raw)) => SortOrder::parse(raw)
            .map(|sort| Command::Sort(Some(sort)))
            .unwrap_or_else(unknown),
        ("open", Some(raw)) => raw
            .parse::<usize>()
            .ok()
            .filter(|position| *position >= 1)
            .map(Command::Open)
            .unwrap_or_else(unknown),
        ("retry", None) => Command::Retry,
        ("go", Some(raw)) => Command::Go(raw.to_string()),
        ("back", None) => Command::Back,
        ("forward", None) => Command::Forward,
        ("esc" | "escape", None) => Command::Escape,
        ("help" | "?", None) => Command::Help,
        ("quit" | "exit" | "q", None) => Command::Quit,
        _ => unknown(),
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn navigation_words_map_to_targets() {
        assert_eq!(parse_command("next"), Some(Command::Page(PageTarget::Next)));
        assert_eq!(parse_command("P"), Some(Command::Page(PageTarget::Previous)));
        assert_eq!(
            parse_command("page 4"),
            Some(Command::Page(PageTarget::Number(4)))
        );
    }

    #[test]
    fn menus_toggle_without_argument_and_select_with_one() {
        assert_eq!(parse_command("size"), Some(Command::PageSize(None)));
        assert_eq!(
            parse_command("size 50"),
            Some(Command::PageSize(Some(PageSize::Fifty)))
        );
        assert_eq!(parse_command("sort"), Some(Command::Sort(None)));
        assert_eq!(
            parse_command("sort Oldest"),
            Some(Command::Sort(Some(SortOrder::Oldest)))
        );
    }

    #[test]
    fn invalid_arguments_are_reported() {
        assert_eq!(
            parse_command("size 15"),
            Some(Command::Unknown("size 15".to_string()))
        );
        assert_eq!(
            parse_command("open 0"),
            Some(Command::Unknown("open 0".to_string()))
        );
        assert_eq!(
            parse_command("page two"),
            Some(Command::Unknown("page two".to_string()))
        );
        assert_eq!(
            parse_command("dance"),
            Some(Command::Unknown("dance".to_string()))
        );
    }

    #[test]
    fn go_keeps_location_verbatim() {
        assert_eq!(
            parse_command("go /ideas?page=2&sort=Oldest"),
            Some(Command::Go("/ideas?page=2&sort=Oldest".to_string()))
        );
    }
}
