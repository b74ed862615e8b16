//! Pointer input types fed into the cursor state.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::zone::ZoneRect;

/// 2D coordinate helper type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
}

impl<T> XY<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Most recent cursor coordinates in viewport space.
pub type PointerSample = XY<f64>;

/// A single input delivered by the host event loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CursorInput {
    /// Pointer moved. `zone` is the exclusion zone rect read during the
    /// same event, or `None` when the zone element is absent.
    Move {
        position: PointerSample,
        zone: Option<ZoneRect>,
    },
    /// Pointer entered (`true`) or left (`false`) a registered element.
    Hover(bool),
}

impl CursorInput {
    pub fn moved(x: f64, y: f64, zone: Option<ZoneRect>) -> Self {
        CursorInput::Move {
            position: XY::new(x, y),
            zone,
        }
    }
}
