//! PageWindow: the loaded prefix of an item list

use std::ops::Range;

/// Tracks how much of the full list is currently rendered.
///
/// The window only grows: `initialize` is the sole way to start over, and the
/// viewer calls it only when the item list itself is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    total: usize,
    window_size: usize,
    page_size: usize,
}

impl PageWindow {
    pub fn new(page_size: usize) -> Self {
        Self {
            total: 0,
            window_size: 0,
            page_size: page_size.max(1),
        }
    }

    /// A window that always covers the whole list.
    pub fn unpaginated() -> Self {
        Self::new(usize::MAX)
    }

    pub fn initialize(&mut self, total: usize) {
        self.total = total;
        self.window_size = self.page_size.min(total);
        log::debug!(
            "Carousel window initialized: {}/{} (page_size={})",
            self.window_size,
            self.total,
            self.page_size
        );
    }

    /// Extend the window by one page. Returns false when nothing remained.
    pub fn load_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.window_size =
            self.window_size.saturating_add(self.page_size).min(self.total);
        log::debug!(
            "Carousel window extended: {}/{}",
            self.window_size,
            self.total
        );
        true
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn has_more(&self) -> bool {
        self.window_size < self.total
    }

    /// Items not yet revealed.
    pub fn remaining(&self) -> usize {
        self.total - self.window_size
    }

    pub fn is_empty(&self) -> bool {
        self.window_size == 0
    }

    pub fn last_index(&self) -> Option<usize> {
        self.window_size.checked_sub(1)
    }

    pub fn range(&self) -> Range<usize> {
        0..self.window_size
    }
}
