//! Host runtime for the tilechat carousel.
//!
//! [`runtime::ViewerHandle`] drives a [`tilechat_core::CarouselViewer`] on a
//! tokio task, supplying the clock, the timers and visibility reports the
//! core leaves to its host. [`api_client::ApiClient`] talks to the catalogue
//! backend and [`session`] ties the two together for the demo binary.

pub mod api_client;
pub mod runtime;
pub mod session;

pub use api_client::{ApiClient, ApiError, CatalogApi};
pub use runtime::{ItemFrame, ViewerHandle, ViewerSnapshot};
