//! Snowflake configuration.
//!
//! Startup-only settings for the viewer: base shape geometry, recursion bounds,
//! canvas size and zoom behaviour. Validated once when the controller is built.

use crate::error::{KochError, Result};
use crate::level::LevelBounds;
use crate::points::Point;
use crate::shape::BaseShape;

/// Hard ceiling on generator depth: 3 * 4^12 is ~50M vertices.
pub const MAX_DEPTH: u32 = 12;

/// Configuration for a Koch figure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KochConfig {
    /// Human-readable name for UI display
    pub display_name: &'static str,
    /// Side length of the base triangle in fractal units
    pub side_length: f64,
    /// Centroid of the base triangle in fractal space
    pub center: (f64, f64),
    /// Recursion level shown at startup
    pub default_level: u32,
    pub min_level: u32,
    pub max_level: u32,
    /// Initial canvas size in pixels (width, height)
    pub canvas_size: (u32, u32),
    /// Zoom factor per wheel tick
    pub wheel_zoom_step: f64,
    /// Zoom factor per button press or key press
    pub button_zoom_step: f64,
    /// Smallest zoom relative to the fitted view
    pub min_zoom: f64,
    /// Largest zoom relative to the fitted view
    pub max_zoom: f64,
    /// Deepest level the generator memoizes
    pub max_cached_level: u32,
    /// Quiet period before a level change triggers regeneration
    pub level_debounce_ms: f64,
}

impl KochConfig {
    pub fn level_bounds(&self) -> LevelBounds {
        LevelBounds::new(self.min_level, self.max_level)
    }

    /// Build the base triangle described by this config.
    pub fn base_shape(&self) -> Result<BaseShape> {
        BaseShape::equilateral(Point::new(self.center.0, self.center.1), self.side_length)
    }

    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<()> {
        if !self.side_length.is_finite() || self.side_length <= 0.0 {
            return Err(invalid(format!(
                "side_length must be positive, got {}",
                self.side_length
            )));
        }
        if !self.center.0.is_finite() || !self.center.1.is_finite() {
            return Err(invalid(format!("center must be finite, got {:?}", self.center)));
        }
        if self.min_level > self.max_level {
            return Err(invalid(format!(
                "min_level {} is above max_level {}",
                self.min_level, self.max_level
            )));
        }
        if self.max_level > MAX_DEPTH {
            return Err(invalid(format!(
                "max_level {} exceeds the generator ceiling {}",
                self.max_level, MAX_DEPTH
            )));
        }
        if !self.level_bounds().contains(self.default_level) {
            return Err(invalid(format!(
                "default_level {} is outside {}..={}",
                self.default_level, self.min_level, self.max_level
            )));
        }
        if self.canvas_size.0 == 0 || self.canvas_size.1 == 0 {
            return Err(invalid(format!(
                "canvas_size must be non-zero, got {:?}",
                self.canvas_size
            )));
        }
        for (name, step) in [
            ("wheel_zoom_step", self.wheel_zoom_step),
            ("button_zoom_step", self.button_zoom_step),
        ] {
            if !step.is_finite() || step <= 1.0 {
                return Err(invalid(format!("{name} must be greater than 1, got {step}")));
            }
        }
        if !(self.min_zoom > 0.0 && self.min_zoom <= 1.0) {
            return Err(invalid(format!(
                "min_zoom must be in (0, 1], got {}",
                self.min_zoom
            )));
        }
        if !(self.max_zoom.is_finite() && self.max_zoom >= 1.0) {
            return Err(invalid(format!(
                "max_zoom must be finite and at least 1, got {}",
                self.max_zoom
            )));
        }
        if self.max_cached_level > MAX_DEPTH {
            return Err(invalid(format!(
                "max_cached_level {} exceeds the generator ceiling {}",
                self.max_cached_level, MAX_DEPTH
            )));
        }
        if !self.level_debounce_ms.is_finite() || self.level_debounce_ms < 0.0 {
            return Err(invalid(format!(
                "level_debounce_ms must be non-negative, got {}",
                self.level_debounce_ms
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> KochError {
    KochError::InvalidConfig(message)
}

/// Koch snowflake configuration.
/// A 600-unit triangle in a 1000x800 window at level 4, zoom limited to 0.1x..50x.
pub static SNOWFLAKE_CONFIG: KochConfig = KochConfig {
    display_name: "Koch Snowflake",
    side_length: 600.0,
    center: (0.0, 0.0),
    default_level: 4,
    min_level: 0,
    max_level: 7,
    canvas_size: (1000, 800),
    wheel_zoom_step: 1.1,
    button_zoom_step: 1.2,
    min_zoom: 0.1,
    max_zoom: 50.0,
    max_cached_level: 7,
    level_debounce_ms: 150.0,
};
