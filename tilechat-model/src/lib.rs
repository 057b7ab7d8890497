//! Core data model definitions shared across the tilechat crates.
#![allow(missing_docs)]

pub mod action;
pub mod api;
pub mod catalogue;
pub mod error;
pub mod item;

// Intentionally curated re-exports for downstream consumers.
pub use action::ChatAction;
pub use api::{
    ApiErrorBody, ChatRequest, ChatResponse, ChatTurn, SizesRequest,
    SizesResponse, TilesResponse,
};
pub use catalogue::TILE_CATEGORIES;
pub use error::{ModelError, Result as ModelResult};
pub use item::{Item, ItemKind};
