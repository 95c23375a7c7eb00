use serde::{Deserialize, Serialize};

/// Inclusive range of recursion levels the viewer allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelBounds {
    pub min: u32,
    pub max: u32,
}

impl LevelBounds {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Clamp any requested level, including negative ones, into range.
    pub fn clamp(&self, requested: i64) -> u32 {
        // max wins if the bounds are inverted; KochConfig::validate rejects that case
        requested
            .max(i64::from(self.min))
            .min(i64::from(self.max)) as u32
    }

    pub fn contains(&self, level: u32) -> bool {
        (self.min..=self.max).contains(&level)
    }
}

/// Current recursion depth, always within its bounds.
///
/// Out-of-range requests are clamped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecursionLevel {
    value: u32,
    bounds: LevelBounds,
}

impl RecursionLevel {
    pub fn new(requested: i64, bounds: LevelBounds) -> Self {
        Self {
            value: bounds.clamp(requested),
            bounds,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn bounds(&self) -> LevelBounds {
        self.bounds
    }

    /// Set a new level. Returns true if the stored level changed.
    pub fn set(&mut self, requested: i64) -> bool {
        let clamped = self.bounds.clamp(requested);
        if i64::from(clamped) != requested {
            log::debug!(
                "Recursion level {} clamped to {} (bounds {}..={})",
                requested,
                clamped,
                self.bounds.min,
                self.bounds.max
            );
        }
        let changed = clamped != self.value;
        self.value = clamped;
        changed
    }

    pub fn step(&mut self, delta: i64) -> bool {
        self.set(i64::from(self.value).saturating_add(delta))
    }

    pub fn is_at_min(&self) -> bool {
        self.value == self.bounds.min
    }

    pub fn is_at_max(&self) -> bool {
        self.value == self.bounds.max
    }
}
