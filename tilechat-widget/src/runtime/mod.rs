//! tokio host for a [`CarouselViewer`](tilechat_core::CarouselViewer)
//!
//! One task per mounted viewer. The task owns the viewer outright and is the
//! only thing that touches it: commands come in over an mpsc channel, the
//! latest [`ViewerSnapshot`] goes out on a watch channel, and
//! [`ViewerEvent`](tilechat_core::ViewerEvent)s are forwarded to the host.

mod driver;
mod handle;
mod snapshot;

pub use handle::ViewerHandle;
pub use snapshot::{EMPTY_LABEL, ItemFrame, ViewerSnapshot};
