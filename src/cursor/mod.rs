//! Custom cursor tracker.
//!
//! - `events`: pointer inputs and the `XY` coordinate type
//! - `zone`: exclusion zone rect and inside/outside classification
//! - `trail`: bounded history of recent positions
//! - `state`: explicit widget state and its reducer
//! - `observer`: `DomHost` capability trait and scoped hover registration
//! - `tracker`: one mounted widget wiring all of the above to a render sink

pub mod events;
pub mod observer;
pub mod state;
pub mod tracker;
pub mod trail;
pub mod zone;

#[cfg(test)]
pub(crate) mod testing;

pub use events::{CursorInput, PointerSample, XY};
pub use observer::{DomHost, HoverCallback, HoverRegistration};
pub use state::CursorState;
pub use tracker::CursorTracker;
pub use trail::Trail;
pub use zone::{classify, ZoneClass, ZoneRect};
