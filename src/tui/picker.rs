use crate::search::FuzzyList;

/// A titled, fuzzy-filterable single-choice list
pub struct Picker {
    title: &'static str,
    list: FuzzyList,
    selected: usize,
}

impl Picker {
    pub fn new<I, S>(title: &'static str, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { title, list: FuzzyList::new(items), selected: 0 }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn query(&self) -> &str {
        self.list.query()
    }

    pub fn visible(&self) -> Vec<&str> {
        self.list.matches()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.list.matches().get(self.selected).copied()
    }

    /// Move the selection by `delta`, clamped to the visible items
    pub fn move_selection(&mut self, delta: isize) -> bool {
        let total = self.list.matches().len();
        if total == 0 {
            self.selected = 0;
            return false;
        }
        let old = self.selected;
        let new_idx = (self.selected as isize + delta).max(0) as usize;
        self.selected = new_idx.min(total - 1);
        old != self.selected
    }

    /// Select `name` if it is visible
    pub fn select(&mut self, name: &str) -> bool {
        match self.list.matches().iter().position(|item| *item == name) {
            Some(idx) => {
                self.selected = idx;
                true
            }
            None => false,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.list.push_char(c);
        self.selected = 0;
    }

    pub fn pop_char(&mut self) -> bool {
        let changed = self.list.pop_char();
        if changed {
            self.selected = 0;
        }
        changed
    }

    /// Clear the filter; returns false if there was none
    pub fn clear_query(&mut self) -> bool {
        if self.list.query().is_empty() {
            return false;
        }
        let current = self.selected_item().map(str::to_string);
        self.list.clear_query();
        self.selected = 0;
        if let Some(name) = current {
            self.select(&name);
        }
        true
    }
}
