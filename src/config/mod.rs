//! Widget configuration management.
//!
//! - `CursorConfig`: exclusion zone id, interactive selector, class names and
//!   trail tuning.
//!
//! The active config lives behind a `parking_lot::RwLock` so the page can
//! replace it in one call before mounting.

pub mod cursor;

pub use cursor::{CursorConfig, CURSOR_CONFIG};
