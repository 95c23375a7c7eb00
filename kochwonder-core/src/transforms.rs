use crate::points::Point;
use serde::{Deserialize, Serialize};

/// Uniform-scale + translate mapping from fractal space to screen pixels.
///
/// `screen = fractal * scale + offset`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Inclusive range the scale is kept in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRange {
    pub min: f64,
    pub max: f64,
}

impl ScaleRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, scale: f64) -> f64 {
        scale.max(self.min).min(self.max)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ViewTransform {
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Transform that centers a shape of outer radius `radius` around `center`
    /// in a canvas of `canvas_size` pixels.
    ///
    /// Fractal units map 1:1 to pixels when the shape fits; otherwise the scale
    /// shrinks so the shape's outer circle touches the shorter canvas side.
    pub fn fit(radius: f64, center: Point<f64>, canvas_size: (u32, u32)) -> Self {
        let (width, height) = (canvas_size.0 as f64, canvas_size.1 as f64);
        let shortest = width.min(height);

        let scale = if radius > 0.0 && shortest > 0.0 && 2.0 * radius > shortest {
            shortest / (2.0 * radius)
        } else {
            1.0
        };

        Self {
            scale,
            offset_x: width / 2.0 - center.x() * scale,
            offset_y: height / 2.0 - center.y() * scale,
        }
    }

    /// Map a fractal-space point to screen space.
    pub fn apply(&self, point: &Point<f64>) -> Point<f64> {
        Point::new(
            point.x() * self.scale + self.offset_x,
            point.y() * self.scale + self.offset_y,
        )
    }

    /// Map a screen-space point back to fractal space.
    pub fn invert(&self, screen: &Point<f64>) -> Point<f64> {
        Point::new(
            (screen.x() - self.offset_x) / self.scale,
            (screen.y() - self.offset_y) / self.scale,
        )
    }

    /// Shift by a raw pixel delta. Positive dx moves right, positive dy moves down.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Scale by `factor` around the screen point `pivot`, keeping the fractal point
    /// under the pivot fixed.
    ///
    /// The resulting scale is clamped into `range`. Returns the factor actually
    /// applied: 1.0 when the request was rejected (non-finite or non-positive) or
    /// fully absorbed by the clamp.
    pub fn zoom_about(&mut self, factor: f64, pivot: Point<f64>, range: ScaleRange) -> f64 {
        if !factor.is_finite() || factor <= 0.0 {
            return 1.0;
        }

        let new_scale = range.clamp(self.scale * factor);
        if !new_scale.is_finite() || new_scale <= 0.0 || new_scale == self.scale {
            return 1.0;
        }

        let applied = new_scale / self.scale;
        let (px, py) = pivot.into_parts();

        // offset' = pivot - (pivot - offset) * factor
        self.offset_x = px - (px - self.offset_x) * applied;
        self.offset_y = py - (py - self.offset_y) * applied;
        self.scale = new_scale;

        applied
    }
}
