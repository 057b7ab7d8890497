//! Shared configuration library for the tilechat widget.
//!
//! This crate centralizes config defaults, file/env loading and validation so
//! the widget runtime and the demo binary agree on a single source of truth.

pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigSource};
pub use models::WidgetConfig;
pub use validation::ConfigError;
