//! Exclusion zone classification.
//!
//! The zone rect is re-read on every pointer event because the region moves
//! with scroll and layout. A missing element classifies as outside.

use super::events::PointerSample;

/// Bounding rectangle in viewport coordinates (`getBoundingClientRect`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ZoneRect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, point: PointerSample) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }
}

/// Where the pointer is relative to the exclusion zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneClass {
    Inside,
    Outside,
}

impl ZoneClass {
    pub fn is_inside(self) -> bool {
        matches!(self, ZoneClass::Inside)
    }
}

/// Classify a pointer position against an optional zone rect.
pub fn classify(point: PointerSample, zone: Option<&ZoneRect>) -> ZoneClass {
    match zone {
        Some(rect) if rect.contains(point) => ZoneClass::Inside,
        _ => ZoneClass::Outside,
    }
}
