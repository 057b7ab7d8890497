//! Paginated carousel viewer
//!
//! Composition, bottom-up:
//! - [`pagination::PageWindow`]: which prefix of the item list is loaded.
//! - [`playback::PlaybackController`]: play flag and the auto-advance tick.
//! - [`visibility::VisibilityGate`]: suppresses ticks while off screen.
//! - [`gesture::GestureInput`]: debounced wheel/swipe interpretation.
//! - [`projection`]: pure mapping from state to what the host renders.
//! - [`viewer::CarouselViewer`]: the aggregate the host mounts.

pub mod gesture;
pub mod messages;
pub mod pagination;
pub mod playback;
pub mod projection;
pub mod types;
pub mod viewer;
pub mod visibility;

pub use messages::{ViewerEvent, ViewerMessage};
pub use pagination::PageWindow;
pub use projection::{Presentation, Projection};
pub use types::*;
pub use viewer::{CarouselItem, CarouselViewer};
