//! Presentation side of the cursor widget.

pub mod feed;

pub use feed::{CursorFrame, RenderSink, TrailMark};
