//! Scrollable, filterable list of branches.
//!
//! Owns the cursor (through ratatui's `ListState`) and the filter query.
//! Items are set once and never edited; filtering only changes which of
//! them are visible.

use ratatui::widgets::ListState;

use crate::git::BranchName;

/// Number of rows moved by PageUp/PageDown
pub const PAGE_SIZE: usize = 10;

pub struct BranchList {
    items: Vec<BranchName>,
    /// Indices into `items` that match the current filter, in item order
    visible: Vec<usize>,
    query: String,
    wrap: bool,
    pub state: ListState,
}

impl BranchList {
    pub fn new(items: Vec<BranchName>, wrap: bool) -> Self {
        let visible = (0..items.len()).collect();
        let mut list = Self {
            items,
            visible,
            query: String::new(),
            wrap,
            state: ListState::default(),
        };
        list.reset_cursor();
        list
    }

    pub fn items(&self) -> &[BranchName] {
        &self.items
    }

    /// Items passing the filter, in display order
    pub fn visible_items(&self) -> impl Iterator<Item = &BranchName> {
        self.visible.iter().map(|&idx| &self.items[idx])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Cursor position within the visible items
    pub fn cursor(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Currently highlighted branch
    pub fn selected(&self) -> Option<&BranchName> {
        self.state
            .selected()
            .and_then(|pos| self.visible.get(pos))
            .map(|&idx| &self.items[idx])
    }

    pub fn move_up(&mut self) {
        self.step(-1);
    }

    pub fn move_down(&mut self) {
        self.step(1);
    }

    pub fn page_up(&mut self) {
        self.jump(-(PAGE_SIZE as isize));
    }

    pub fn page_down(&mut self) {
        self.jump(PAGE_SIZE as isize);
    }

    pub fn move_top(&mut self) {
        if !self.visible.is_empty() {
            self.state.select(Some(0));
        }
    }

    pub fn move_bottom(&mut self) {
        if let Some(last) = self.visible.len().checked_sub(1) {
            self.state.select(Some(last));
        }
    }

    /// Single step; wraps at the ends when wrapping is enabled
    fn step(&mut self, delta: isize) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }

        let current = self.state.selected().unwrap_or(0);
        let next = if self.wrap {
            (current as isize + delta).rem_euclid(len as isize) as usize
        } else {
            (current as isize + delta).clamp(0, len as isize - 1) as usize
        };
        self.state.select(Some(next));
    }

    /// Multi-row jump; always clamps
    fn jump(&mut self, delta: isize) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }

        let current = self.state.selected().unwrap_or(0);
        let next = (current as isize + delta).clamp(0, len as isize - 1) as usize;
        self.state.select(Some(next));
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.apply_filter();
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.apply_filter();
        }
    }

    pub fn delete_word(&mut self) {
        let trimmed = self.query.trim_end();
        let keep = trimmed.rfind(char::is_whitespace).map_or(0, |pos| pos + 1);
        self.query.truncate(keep);
        self.apply_filter();
    }

    pub fn clear_filter(&mut self) {
        if !self.query.is_empty() {
            self.query.clear();
            self.apply_filter();
        }
    }

    /// Case-insensitive substring match against the query
    fn apply_filter(&mut self) {
        let previous = self.selected().cloned();
        let needle = self.query.to_lowercase();

        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, name)| name.as_str().to_lowercase().contains(&needle))
            .map(|(idx, _)| idx)
            .collect();

        // Keep the highlighted branch if it survived the filter
        let position = previous.and_then(|prev| {
            self.visible
                .iter()
                .position(|&idx| self.items[idx] == prev)
        });
        match position {
            Some(pos) => self.state.select(Some(pos)),
            None => self.reset_cursor(),
        }
    }

    fn reset_cursor(&mut self) {
        if self.visible.is_empty() {
            self.state.select(None);
        } else {
            self.state.select(Some(0));
        }
    }
}
