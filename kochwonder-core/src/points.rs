use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Sub};

/// A 2D point. Used both for fractal-space vertices and screen-space pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point<T> {
    x: T,
    y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> &T {
        &self.x
    }

    pub fn y(&self) -> &T {
        &self.y
    }

    pub fn into_parts(self) -> (T, T) {
        (self.x, self.y)
    }

    pub fn add(&self, other: &Self) -> Self
    where
        T: Add<Output = T> + Clone,
    {
        Self {
            x: self.x.clone() + other.x.clone(),
            y: self.y.clone() + other.y.clone(),
        }
    }

    pub fn sub(&self, other: &Self) -> Self
    where
        T: Sub<Output = T> + Clone,
    {
        Self {
            x: self.x.clone() - other.x.clone(),
            y: self.y.clone() - other.y.clone(),
        }
    }

    pub fn div_scalar(&self, scalar: &T) -> Self
    where
        T: Div<Output = T> + Clone,
    {
        Self {
            x: self.x.clone() / scalar.clone(),
            y: self.y.clone() / scalar.clone(),
        }
    }
}

impl Point<f64> {
    /// Length of the vector from the origin to this point.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(&self, other: &Self) -> f64 {
        self.sub(other).length()
    }

    /// Rotate this vector about the origin by `radians` (positive = counter-clockwise in a y-up frame).
    pub fn rotate(&self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
