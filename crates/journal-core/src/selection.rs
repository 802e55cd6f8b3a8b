//! Highlighted-row state for short lists such as the posts on one page.

/// Which row of a list is highlighted, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection on the first row when the list is non-empty.
    pub fn first_of(len: usize) -> Self {
        Self {
            selected_index: (len > 0).then_some(0),
        }
    }

    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    /// Move down one row, stopping on the last.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            self.selected_index = None;
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    /// Move up one row, stopping on the first.
    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            self.selected_index = None;
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_sub(1).min(len - 1),
            None => 0,
        });
    }

    /// Re-anchor after the list changed underneath, e.g. a page change.
    pub fn reset(&mut self, len: usize) {
        *self = Self::first_of(len);
    }
}
