//! Shared types for the carousel viewer

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tilechat_model::ItemKind;

/// Items revealed per "load more" step.
pub const DEFAULT_PAGE_SIZE: usize = 25;
/// Auto-advance period for paginated viewers.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 5_000;
/// Auto-advance period for the simple, unpaginated viewer.
pub const SIMPLE_TICK_INTERVAL_MS: u64 = 3_000;
/// Minimum horizontal wheel delta that counts as a swipe.
pub const DEFAULT_GESTURE_THRESHOLD: f32 = 50.0;
/// Wheel events closer together than this collapse into one evaluation.
pub const DEFAULT_GESTURE_DEBOUNCE_MS: u64 = 50;
/// Fraction of the viewer that must be on screen for it to count as visible.
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.1;

/// Boundary behavior for manual navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapMode {
    /// Next/previous stop at the ends of the window.
    #[default]
    Finite,
    /// Next/previous wrap around once the whole list is loaded.
    Infinite,
}

/// Image frame proportions, e.g. 16:9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    pub const WIDE: Self = Self::new(16, 9);
    pub const STANDARD: Self = Self::new(4, 3);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height, `None` for a degenerate ratio.
    pub fn as_f32(self) -> Option<f32> {
        (self.width > 0 && self.height > 0)
            .then(|| self.width as f32 / self.height as f32)
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.width, self.height)
    }
}

/// Static configuration for a viewer instance. These can be derived from
/// presets (tiles, suggested options, simple) or loaded from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Window growth per "load more"; also the initial window size.
    pub page_size: usize,
    /// When false the whole list is loaded at mount and `page_size` is unused.
    pub paginate: bool,
    pub tick_interval_ms: u64,
    pub gesture_threshold: f32,
    pub gesture_debounce_ms: u64,
    pub visibility_threshold: f32,
    pub aspect_ratio: AspectRatio,
    pub wrap_mode: WrapMode,
    /// Initial play flag on mount and after the item list is replaced.
    pub autoplay: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::tile_defaults()
    }
}

impl ViewerConfig {
    /// Product tiles: 16:9 frames, 25 per page, 5 s auto-advance.
    pub const fn tile_defaults() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            paginate: true,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            gesture_threshold: DEFAULT_GESTURE_THRESHOLD,
            gesture_debounce_ms: DEFAULT_GESTURE_DEBOUNCE_MS,
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            aspect_ratio: AspectRatio::WIDE,
            wrap_mode: WrapMode::Finite,
            autoplay: true,
        }
    }

    /// Recommended options: same behavior as tiles in a 4:3 frame.
    pub const fn suggested_options_defaults() -> Self {
        Self {
            aspect_ratio: AspectRatio::STANDARD,
            ..Self::tile_defaults()
        }
    }

    /// The early single-list viewer: everything loaded, 3 s auto-advance,
    /// manual navigation wraps around.
    pub const fn simple_defaults() -> Self {
        Self {
            paginate: false,
            tick_interval_ms: SIMPLE_TICK_INTERVAL_MS,
            aspect_ratio: AspectRatio::STANDARD,
            wrap_mode: WrapMode::Infinite,
            ..Self::tile_defaults()
        }
    }

    pub const fn for_kind(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Tile => Self::tile_defaults(),
            ItemKind::SuggestedOption => Self::suggested_options_defaults(),
        }
    }

    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub const fn gesture_debounce(&self) -> Duration {
        Duration::from_millis(self.gesture_debounce_ms)
    }
}
