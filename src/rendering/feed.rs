//! Render feed: the presentation-ready view of [`CursorState`].
//!
//! A frame is rebuilt and pushed to the [`RenderSink`] every time the state
//! reports a change. Frames also cross the JS boundary as plain objects.

use serde::Serialize;
use ts_rs::TS;

use crate::cursor::events::XY;
use crate::cursor::state::CursorState;

/// One trailing ghost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TrailMark {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
}

impl TrailMark {
    /// Inline `left`/`top` values; the ghost is centred with a transform.
    pub fn left_px(&self) -> String {
        format!("{}px", self.x)
    }

    pub fn top_px(&self) -> String {
        format!("{}px", self.y)
    }
}

/// Centre transform applied to every trail ghost.
pub const TRAIL_TRANSFORM: &str = "translate(-50%, -50%)";

/// What the presentation layer draws.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CursorFrame {
    /// False while the pointer is inside the exclusion zone.
    pub visible: bool,
    /// Apply the hover variant to the glyph.
    pub hovering: bool,
    pub position: XY<f64>,
    /// Oldest first, opacity rising towards the newest.
    pub trail: Vec<TrailMark>,
}

impl CursorFrame {
    pub fn from_state(state: &CursorState, trail_max_opacity: f64) -> Self {
        let trail = state
            .trail
            .iter()
            .enumerate()
            .map(|(i, p)| TrailMark {
                x: p.x,
                y: p.y,
                opacity: state.trail.opacity_at(i, trail_max_opacity),
            })
            .collect();

        Self {
            visible: state.cursor_visible(),
            hovering: state.hovering,
            position: state.position,
            trail,
        }
    }

    /// Inline transform for the ring+dot glyph container.
    pub fn cursor_transform(&self) -> String {
        format!("translate({}px, {}px)", self.position.x, self.position.y)
    }

    /// Class list for the glyph container.
    pub fn cursor_class(&self, hover_class: &str) -> String {
        if self.hovering {
            format!("{} {}", CURSOR_CLASS, hover_class)
        } else {
            CURSOR_CLASS.to_string()
        }
    }
}

/// Base class of the glyph container.
pub const CURSOR_CLASS: &str = "custom-cursor";
pub const RING_CLASS: &str = "cursor-ring";
pub const DOT_CLASS: &str = "cursor-dot";
pub const TRAILER_CLASS: &str = "cursor-trailer";

/// Consumer of frames.
pub trait RenderSink {
    fn present(&mut self, frame: &CursorFrame);
}

impl<F: FnMut(&CursorFrame)> RenderSink for F {
    fn present(&mut self, frame: &CursorFrame) {
        self(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::events::CursorInput;

    fn state_with_moves(n: usize) -> CursorState {
        let mut state = CursorState::new(5);
        for i in 0..n {
            state.apply(CursorInput::moved(i as f64 * 10.0, 900.0, None));
        }
        state
    }

    #[test]
    fn test_full_trail_opacity() {
        let frame = CursorFrame::from_state(&state_with_moves(8), 0.5);
        assert_eq!(frame.trail.len(), 5);
        assert!((frame.trail[0].opacity - 0.1).abs() < 1e-12);
        assert!((frame.trail[4].opacity - 0.5).abs() < 1e-12);
        assert_eq!(frame.trail[4].x, 70.0);
        assert_eq!(frame.position, XY::new(70.0, 900.0));
    }

    #[test]
    fn test_hidden_in_zone() {
        let mut state = state_with_moves(3);
        state.in_zone = true;
        let frame = CursorFrame::from_state(&state, 0.5);
        assert!(!frame.visible);
    }

    #[test]
    fn test_styles() {
        let mut state = state_with_moves(1);
        state.apply(CursorInput::moved(12.5, 40.0, None));
        state.hovering = true;
        let frame = CursorFrame::from_state(&state, 0.5);

        assert_eq!(frame.cursor_transform(), "translate(12.5px, 40px)");
        assert_eq!(frame.cursor_class("cursor-hover"), "custom-cursor cursor-hover");
        assert_eq!(frame.trail[1].left_px(), "12.5px");
        assert_eq!(frame.trail[1].top_px(), "40px");
    }

    #[test]
    fn test_frame_json_shape() {
        let frame = CursorFrame::from_state(&state_with_moves(1), 0.5);
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["visible"], true);
        assert_eq!(json["trail"][0]["opacity"], 0.5);
        assert_eq!(json["position"]["y"], 900.0);
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |frame: &CursorFrame| seen.push(frame.trail.len());
            let frame = CursorFrame::from_state(&state_with_moves(2), 0.5);
            sink.present(&frame);
        }
        assert_eq!(seen, vec![2]);
    }

    #[test]
    fn export_bindings_cursorframe() {
        CursorFrame::export_all().unwrap();
    }
}
