//! Cursor widget state and its reducer.

use super::events::{CursorInput, PointerSample};
use super::trail::Trail;
use super::zone::classify;

/// Everything the render feed needs, owned by one mounted widget.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorState {
    /// Last position sampled outside the exclusion zone.
    pub position: PointerSample,
    pub trail: Trail,
    /// Pointer is over a registered interactive element.
    pub hovering: bool,
    /// Registered elements currently entered. Nested controls each count
    /// once, so leaving an inner one keeps the outer hover.
    pub hover_depth: u32,
    /// Pointer is inside the exclusion zone; the custom cursor is hidden.
    pub in_zone: bool,
}

impl CursorState {
    pub fn new(trail_capacity: usize) -> Self {
        Self {
            position: PointerSample::default(),
            trail: Trail::new(trail_capacity),
            hovering: false,
            hover_depth: 0,
            in_zone: false,
        }
    }

    /// Apply one input. Returns true when anything observable changed.
    ///
    /// A move inside the zone only updates `in_zone`; position and trail keep
    /// their last outside values.
    pub fn apply(&mut self, input: CursorInput) -> bool {
        match input {
            CursorInput::Move { position, zone } => {
                let inside = classify(position, zone.as_ref()).is_inside();
                let zone_changed = self.in_zone != inside;
                self.in_zone = inside;

                if inside {
                    return zone_changed;
                }

                self.position = position;
                self.trail.append(position);
                true
            }
            CursorInput::Hover(entered) => {
                self.hover_depth = if entered {
                    self.hover_depth.saturating_add(1)
                } else {
                    self.hover_depth.saturating_sub(1)
                };
                let hovering = self.hover_depth > 0;
                let changed = self.hovering != hovering;
                self.hovering = hovering;
                changed
            }
        }
    }

    /// Whether the ring/dot glyph should be drawn.
    pub fn cursor_visible(&self) -> bool {
        !self.in_zone
    }
}
