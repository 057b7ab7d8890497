//! Carousel viewer core for the tilechat widget.
//!
//! The viewer presents one item at a time from a paginated window, advances
//! on a timer while it is on screen, and reacts to clicks and horizontal
//! swipes. Nothing in this crate owns a clock or a timer: every entry point
//! takes the current [`Instant`](std::time::Instant) and the host asks
//! [`CarouselViewer::next_deadline`] when to call back.

pub mod carousel;
pub mod menu;

pub use carousel::{
    AspectRatio, CarouselItem, CarouselViewer, PageWindow, Presentation,
    Projection, ViewerConfig, ViewerEvent, ViewerMessage, WrapMode,
};
pub use menu::{CategoryMenu, MenuOption};
