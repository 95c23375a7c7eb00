//! Memoizing boundary generator for a fixed base shape.

use crate::cancellation::{CancellationChecker, NeverCancel, SupersedeToken};
use crate::koch::extend_cancellable;
use kochwonder_core::{BaseShape, Boundary, KochConfig, KochError, Result, MAX_DEPTH};

/// Generates boundaries for one base shape, caching every level up to
/// `max_cached_depth`.
///
/// Deeper levels are grown from the deepest cached one, so stepping the level
/// up by one costs a single subdivision. Every returned boundary is an
/// independent copy.
pub struct BoundaryGenerator {
    base: BaseShape,
    /// `ladder[d]` is the boundary at depth `d`. Never empty.
    ladder: Vec<Boundary>,
    max_cached_depth: u32,
    token: SupersedeToken,
}

impl BoundaryGenerator {
    pub fn new(base: BaseShape, max_cached_depth: u32) -> Self {
        Self {
            ladder: vec![Boundary::new(base.vertices().to_vec())],
            base,
            max_cached_depth: max_cached_depth.min(MAX_DEPTH),
            token: SupersedeToken::new(),
        }
    }

    pub fn from_config(config: &KochConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.base_shape()?, config.max_cached_level))
    }

    pub fn base_shape(&self) -> &BaseShape {
        &self.base
    }

    /// Deepest level currently held in the cache.
    pub fn cached_depth(&self) -> u32 {
        // ladder is never empty and never exceeds MAX_DEPTH + 1 entries
        (self.ladder.len() - 1) as u32
    }

    /// Handle for cancelling in-flight requests from elsewhere.
    pub fn supersede_token(&self) -> SupersedeToken {
        self.token.clone()
    }

    /// Boundary at `depth`, without cancellation.
    pub fn boundary(&mut self, depth: u32) -> Result<Boundary> {
        self.boundary_cancellable(depth, &NeverCancel)
    }

    /// Start a new request, superseding any earlier one that is still running.
    pub fn request(&mut self, depth: u32) -> Result<Boundary> {
        let checker = self.token.begin();
        log::debug!("Boundary request #{} for depth {}", checker.issued(), depth);
        self.boundary_cancellable(depth, &checker)
    }

    pub fn boundary_cancellable<C: CancellationChecker>(
        &mut self,
        depth: u32,
        checker: &C,
    ) -> Result<Boundary> {
        if depth > MAX_DEPTH {
            return Err(KochError::DepthTooLarge {
                depth,
                max: MAX_DEPTH,
            });
        }
        if let Some(cached) = self.ladder.get(depth as usize) {
            return Ok(cached.clone());
        }

        let winding = self.base.winding();
        let cached_depth = self.cached_depth();

        if depth > self.max_cached_depth {
            // Grow the cache as far as allowed, then finish uncached.
            if cached_depth < self.max_cached_depth {
                self.boundary_cancellable(self.max_cached_depth, checker)?;
            }
            let deepest = self.cached_depth();
            let start = self.ladder[deepest as usize].points();
            let points = extend_cancellable(start, depth - deepest, winding, checker)?;
            log::debug!("Generated depth {} ({} points, uncached)", depth, points.len());
            return Ok(Boundary::new(points));
        }

        for level in cached_depth + 1..=depth {
            let previous = self.ladder[level as usize - 1].points();
            let points = extend_cancellable(previous, 1, winding, checker)?;
            log::debug!("Cached depth {} ({} points)", level, points.len());
            self.ladder.push(Boundary::new(points));
        }

        Ok(self.ladder[depth as usize].clone())
    }

    /// Drop every cached level above depth 0.
    pub fn clear(&mut self) {
        self.ladder.truncate(1);
    }
}
