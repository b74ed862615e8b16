//! Cursor tracker configuration.
//!
//! Defaults reproduce the portfolio page: the hero banner is the exclusion
//! zone, links/buttons/inputs get the `hover-effect` marker, and the trail
//! keeps five ghosts fading up to 50% opacity.

use std::str::FromStr;

use lazy_static::lazy_static;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Element id of the default exclusion zone.
pub const DEFAULT_EXCLUSION_ZONE_ID: &str = "hero";

/// Elements that count as interactive controls.
pub const DEFAULT_INTERACTIVE_SELECTOR: &str = r#"a, button, input, textarea, [role="button"]"#;

/// Class added to every registered interactive element while mounted.
pub const DEFAULT_MARKER_CLASS: &str = "hover-effect";

/// Class applied to the cursor glyph while hovering a registered element.
pub const DEFAULT_HOVER_CLASS: &str = "cursor-hover";

/// Number of trailing ghosts kept.
pub const DEFAULT_TRAIL_LENGTH: u32 = 5;

/// Opacity of the newest trail ghost.
pub const DEFAULT_TRAIL_MAX_OPACITY: f64 = 0.5;

const MAX_TRAIL_LENGTH: u32 = 32;

lazy_static! {
    /// Global cursor configuration, snapshotted by each mount.
    pub static ref CURSOR_CONFIG: RwLock<CursorConfig> = RwLock::new(CursorConfig::default());
}

/// Cursor tracker settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct CursorConfig {
    /// Id of the element where the custom cursor is suppressed.
    pub exclusion_zone_id: String,

    /// CSS selector list scanned once at mount.
    pub interactive_selector: String,

    /// Marker class added to registered elements.
    pub marker_class: String,

    /// Cursor glyph class while hovering.
    pub hover_class: String,

    /// Trail capacity (1-32). The page keeps five ghosts; the five-entry
    /// bound only holds at this default and grows with larger values.
    pub trail_length: u32,

    /// Opacity of the newest trail ghost (0.0-1.0).
    pub trail_max_opacity: f64,

    /// Console log level ("error", "warn", "info", "debug", "trace").
    pub log_level: String,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            exclusion_zone_id: DEFAULT_EXCLUSION_ZONE_ID.to_string(),
            interactive_selector: DEFAULT_INTERACTIVE_SELECTOR.to_string(),
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
            hover_class: DEFAULT_HOVER_CLASS.to_string(),
            trail_length: DEFAULT_TRAIL_LENGTH,
            trail_max_opacity: DEFAULT_TRAIL_MAX_OPACITY,
            log_level: "info".to_string(),
        }
    }
}

impl CursorConfig {
    /// Validate and clamp settings to acceptable ranges.
    pub fn validate(&mut self) {
        self.trail_length = self.trail_length.clamp(1, MAX_TRAIL_LENGTH);
        self.trail_max_opacity = if self.trail_max_opacity.is_finite() {
            self.trail_max_opacity.clamp(0.0, 1.0)
        } else {
            DEFAULT_TRAIL_MAX_OPACITY
        };

        fill_blank(&mut self.exclusion_zone_id, DEFAULT_EXCLUSION_ZONE_ID);
        fill_blank(&mut self.interactive_selector, DEFAULT_INTERACTIVE_SELECTOR);
        fill_blank(&mut self.marker_class, DEFAULT_MARKER_CLASS);
        fill_blank(&mut self.hover_class, DEFAULT_HOVER_CLASS);
    }

    /// Parsed log level, falling back to `Info` for unknown names.
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(self.log_level.trim()).unwrap_or(log::Level::Info)
    }

    /// Trail capacity as a buffer length.
    pub fn trail_capacity(&self) -> usize {
        self.trail_length as usize
    }
}

fn fill_blank(value: &mut String, default: &str) {
    if value.trim().is_empty() {
        *value = default.to_string();
    }
}

// ============================================================================
// Accessors
// ============================================================================

/// Snapshot of the current global config.
pub fn current() -> CursorConfig {
    CURSOR_CONFIG.read().clone()
}

/// Replace the global config. The value is validated first.
pub fn set_config(mut config: CursorConfig) {
    config.validate();
    log::debug!("[CURSOR_CONFIG] set_config({:?})", config);
    log::set_max_level(config.log_level().to_level_filter());
    *CURSOR_CONFIG.write() = config;
}
