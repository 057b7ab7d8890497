use tilechat_core::{AspectRatio, CarouselViewer, Presentation};
use tilechat_model::Item;

/// Text of the card shown for an empty item list.
pub const EMPTY_LABEL: &str = "No items found";

/// Owned copy of what a viewer is showing, published after every turn.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewerSnapshot {
    pub generation: u64,
    pub mounted: bool,
    pub is_playing: bool,
    pub is_visible: bool,
    pub is_auto_advancing: bool,
    /// `None` when there is nothing to show.
    pub frame: Option<ItemFrame>,
}

/// The visible item plus its navigation affordances.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFrame {
    pub item: Item,
    pub index: usize,
    pub window_size: usize,
    pub total: usize,
    pub can_go_prev: bool,
    pub can_go_next: bool,
    pub show_load_more: bool,
    pub remaining: usize,
    pub aspect_ratio: AspectRatio,
    pub counter_label: String,
    pub summary_label: String,
    pub load_more_label: Option<String>,
}

impl ViewerSnapshot {
    pub fn capture(viewer: &CarouselViewer<Item>) -> Self {
        let frame = match viewer.presentation() {
            Presentation::Empty => None,
            Presentation::Carousel(p) => Some(ItemFrame {
                item: p.visible_item.clone(),
                index: p.index,
                window_size: p.window_size,
                total: p.total,
                can_go_prev: p.can_go_prev,
                can_go_next: p.can_go_next,
                show_load_more: p.show_load_more,
                remaining: p.remaining,
                aspect_ratio: p.aspect_ratio,
                counter_label: p.counter_label(),
                summary_label: p.summary_label(),
                load_more_label: p.load_more_label(),
            }),
        };

        Self {
            generation: viewer.generation(),
            mounted: viewer.is_mounted(),
            is_playing: viewer.is_playing(),
            is_visible: viewer.is_visible(),
            is_auto_advancing: viewer.is_auto_advancing(),
            frame,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.frame.is_none()
    }

    pub fn index(&self) -> Option<usize> {
        self.frame.as_ref().map(|frame| frame.index)
    }

    /// One-line description for logs.
    pub fn describe(&self) -> String {
        match &self.frame {
            None => EMPTY_LABEL.to_string(),
            Some(frame) => format!(
                "[{}] {} {} ({}){}",
                frame.counter_label,
                frame.item.title(),
                frame.item.price_label(),
                if self.is_playing { "playing" } else { "paused" },
                frame
                    .load_more_label
                    .as_deref()
                    .map(|label| format!(" | {label}"))
                    .unwrap_or_default()
            ),
        }
    }
}
