//! Render projection: what the host needs to draw one frame

use super::pagination::PageWindow;
use super::types::AspectRatio;

/// Navigation state for a non-empty viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<'a, T> {
    pub visible_item: &'a T,
    /// Loaded prefix, for hosts that render the whole strip.
    pub window: &'a [T],
    pub index: usize,
    pub window_size: usize,
    pub total: usize,
    pub can_go_prev: bool,
    pub can_go_next: bool,
    pub show_load_more: bool,
    pub remaining: usize,
    pub is_playing: bool,
    pub aspect_ratio: AspectRatio,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Presentation<'a, T> {
    /// Zero items: the host shows a fixed "No items found" card.
    Empty,
    Carousel(Projection<'a, T>),
}

impl<'a, T> Presentation<'a, T> {
    pub fn projection(&self) -> Option<&Projection<'a, T>> {
        match self {
            Presentation::Empty => None,
            Presentation::Carousel(projection) => Some(projection),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Presentation::Empty)
    }
}

impl<T> Projection<'_, T> {
    /// `"3/25"` style position counter.
    pub fn counter_label(&self) -> String {
        format!("{}/{}", self.index + 1, self.window_size)
    }

    pub fn summary_label(&self) -> String {
        format!("Showing {} of {} items", self.window_size, self.total)
    }

    pub fn load_more_label(&self) -> Option<String> {
        self.show_load_more
            .then(|| format!("View More ({} remaining)", self.remaining))
    }
}

/// Pure mapping from viewer state to presentation.
pub fn project<'a, T>(
    items: &'a [T],
    window: &PageWindow,
    index: usize,
    is_playing: bool,
    aspect_ratio: AspectRatio,
) -> Presentation<'a, T> {
    let window_size = window.window_size().min(items.len());
    let Some(last) = window_size.checked_sub(1) else {
        return Presentation::Empty;
    };
    let index = index.min(last);

    Presentation::Carousel(Projection {
        visible_item: &items[index],
        window: &items[..window_size],
        index,
        window_size,
        total: window.total(),
        can_go_prev: index > 0,
        can_go_next: index < last,
        show_load_more: window.has_more() && index == last,
        remaining: window.remaining(),
        is_playing,
        aspect_ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(page: usize, total: usize) -> PageWindow {
        let mut w = PageWindow::new(page);
        w.initialize(total);
        w
    }

    #[test]
    fn empty_list_projects_empty() {
        let items: Vec<u32> = Vec::new();
        let p = project(&items, &window(25, 0), 0, true, AspectRatio::WIDE);
        assert!(p.is_empty());
    }

    #[test]
    fn first_item_flags() {
        let items = vec!["a", "b", "c"];
        let p = project(&items, &window(25, 3), 0, true, AspectRatio::WIDE);
        let p = p.projection().unwrap();
        assert_eq!(*p.visible_item, "a");
        assert!(!p.can_go_prev);
        assert!(p.can_go_next);
        assert!(!p.show_load_more);
        assert_eq!(p.counter_label(), "1/3");
        assert_eq!(p.summary_label(), "Showing 3 of 3 items");
    }

    #[test]
    fn load_more_shows_only_on_last_loaded_item() {
        let items: Vec<usize> = (0..30).collect();
        let w = window(25, 30);

        let middle = project(&items, &w, 10, false, AspectRatio::WIDE);
        assert!(!middle.projection().unwrap().show_load_more);

        let last = project(&items, &w, 24, false, AspectRatio::WIDE);
        let last = last.projection().unwrap();
        assert!(last.show_load_more);
        assert!(!last.can_go_next);
        assert_eq!(last.window.len(), 25);
        assert_eq!(
            last.load_more_label().as_deref(),
            Some("View More (5 remaining)")
        );
    }
}
