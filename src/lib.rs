//! Portfolio custom cursor widget.
//!
//! Tracks the pointer across the page, draws a ring + dot glyph with a
//! fading five-ghost trail, switches to a hover variant over links and
//! buttons, and hides itself over the hero banner.
//!
//! The core (`cursor`, `rendering`, `contact`) is host-independent and runs
//! natively under test; `web` binds it to the browser DOM on `wasm32`.

pub mod config;
pub mod contact;
pub mod cursor;
pub mod error;
pub mod rendering;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::CursorConfig;
pub use cursor::{CursorState, CursorTracker, DomHost, ZoneRect, XY};
pub use error::{CursorError, CursorResult};
pub use rendering::{CursorFrame, RenderSink, TrailMark};
