//! Open/closed state of the page size and sort menus.
//!
//! At most one menu is open. Any selection, escape, unrelated command, or
//! opening the other menu closes it.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dropdowns {
    page_size_open: bool,
    sort_open: bool,
}

impl Dropdowns {
    pub fn is_page_size_open(&self) -> bool {
        self.page_size_open
    }

    pub fn is_sort_open(&self) -> bool {
        self.sort_open
    }

    pub fn toggle_page_size(&mut self) {
        self.sort_open = false;
        self.page_size_open = !self.page_size_open;
    }

    pub fn toggle_sort(&mut self) {
        self.page_size_open = false;
        self.sort_open = !self.sort_open;
    }

    /// Closes both menus; returns whether one was open.
    pub fn close_all(&mut self) -> bool {
        let was_open = self.page_size_open || self.sort_open;
        *self = Self::default();
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_menu_closes_the_other() {
        let mut menus = Dropdowns::default();
        menus.toggle_page_size();
        assert!(menus.is_page_size_open());
        menus.toggle_sort();
        assert!(menus.is_sort_open());
        assert!(!menus.is_page_size_open());
    }

    #[test]
    fn toggling_twice_closes() {
        let mut menus = Dropdowns::default();
        menus.toggle_sort();
        menus.toggle_sort();
        assert_eq!(menus, Dropdowns::default());
    }

    #[test]
    fn close_all_reports_previous_state() {
        let mut menus = Dropdowns::default();
        assert!(!menus.close_all());
        menus.toggle_page_size();
        assert!(menus.close_all());
        assert!(!menus.is_page_size_open());
    }
}
