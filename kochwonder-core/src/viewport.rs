//! Viewport controller: owns navigation state and turns input into transform
//! updates and regeneration requests.

use crate::boundary::Boundary;
use crate::config::KochConfig;
use crate::error::Result;
use crate::level::RecursionLevel;
use crate::points::Point;
use crate::shape::BaseShape;
use crate::transforms::{ScaleRange, ViewTransform};

/// Wheel `delta_y` worth one full zoom step (one notch of a pixel-mode mouse wheel).
pub const WHEEL_DELTA_PER_STEP: f64 = 100.0;

/// Discrete input delivered by the UI layer. Coordinates are canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f64, y: f64 },
    /// Only meaningful while a drag is active.
    PointerMove { x: f64, y: f64 },
    PointerUp,
    /// Negative `delta_y` (wheel away from the user) zooms in. `delta_y` is in
    /// pixels; smaller deltas zoom proportionally less.
    Wheel { delta_y: f64, x: f64, y: f64 },
    ZoomIn,
    ZoomOut,
    LevelUp,
    LevelDown,
    /// Return to the fitted view, keeping the level.
    Reset,
    Resize { width: u32, height: u32 },
}

/// What the rendering side has to do after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Update {
    Unchanged,
    /// The transform changed; re-project and redraw.
    Redraw,
    /// The level changed; the boundary must be regenerated before the next render.
    Regenerate,
}

impl Update {
    pub fn needs_redraw(&self) -> bool {
        *self != Update::Unchanged
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging { last: Point<f64> },
}

#[derive(Debug, Clone)]
struct InstalledBoundary {
    depth: u32,
    boundary: Boundary,
}

/// Navigation state for one view: transform, recursion level, drag mode and the
/// boundary currently being displayed.
///
/// `fit_scale` always belongs to the current canvas size, so the reported zoom
/// and the zoom limits keep their meaning across resizes. Until the user pans or
/// zooms, a resize re-fits the whole view.
///
/// Knows nothing about how boundaries are generated; callers hand them in through
/// [`ViewportController::regenerate_with`] or [`ViewportController::install_boundary`].
#[derive(Debug, Clone)]
pub struct ViewportController {
    config: KochConfig,
    base: BaseShape,
    transform: ViewTransform,
    fit_scale: f64,
    /// Set once the user moves away from the fitted view.
    navigated: bool,
    canvas_size: (u32, u32),
    level: RecursionLevel,
    drag: DragState,
    boundary: Option<InstalledBoundary>,
}

impl ViewportController {
    /// Build a controller for the config's default canvas size.
    ///
    /// Fails if the configuration is invalid, so a broken setup aborts startup
    /// instead of producing an undefined shape.
    pub fn new(config: &KochConfig) -> Result<Self> {
        Self::with_canvas_size(config, config.canvas_size)
    }

    pub fn with_canvas_size(config: &KochConfig, canvas_size: (u32, u32)) -> Result<Self> {
        config.validate()?;
        let base = config.base_shape()?;
        let transform = Self::fitted(&base, canvas_size);

        Ok(Self {
            config: *config,
            base,
            fit_scale: transform.scale,
            navigated: false,
            transform,
            canvas_size,
            level: RecursionLevel::new(i64::from(config.default_level), config.level_bounds()),
            drag: DragState::Idle,
            boundary: None,
        })
    }

    fn fitted(base: &BaseShape, canvas_size: (u32, u32)) -> ViewTransform {
        ViewTransform::fit(base.circumradius(), base.centroid(), canvas_size)
    }

    pub fn config(&self) -> &KochConfig {
        &self.config
    }

    pub fn base_shape(&self) -> &BaseShape {
        &self.base
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        self.canvas_size
    }

    pub fn level(&self) -> u32 {
        self.level.value()
    }

    pub fn recursion_level(&self) -> RecursionLevel {
        self.level
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Scale relative to the fitted view (1.0 = fitted).
    pub fn zoom(&self) -> f64 {
        self.transform.scale / self.fit_scale
    }

    fn scale_range(&self) -> ScaleRange {
        ScaleRange::new(
            self.fit_scale * self.config.min_zoom,
            self.fit_scale * self.config.max_zoom,
        )
    }

    fn view_center(&self) -> Point<f64> {
        Point::new(
            self.canvas_size.0 as f64 / 2.0,
            self.canvas_size.1 as f64 / 2.0,
        )
    }

    // ========================================================================
    // Input dispatch
    // ========================================================================

    pub fn handle(&mut self, event: InputEvent) -> Update {
        match event {
            InputEvent::PointerDown { x, y } => self.pointer_down(x, y),
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y),
            InputEvent::PointerUp => self.pointer_up(),
            InputEvent::Wheel { delta_y, x, y } => self.wheel(delta_y, x, y),
            InputEvent::ZoomIn => self.zoom_in(),
            InputEvent::ZoomOut => self.zoom_out(),
            InputEvent::LevelUp => self.increment_level(),
            InputEvent::LevelDown => self.decrement_level(),
            InputEvent::Reset => self.reset_view(),
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    // ========================================================================
    // Drag
    // ========================================================================

    pub fn pointer_down(&mut self, x: f64, y: f64) -> Update {
        self.drag = DragState::Dragging {
            last: Point::new(x, y),
        };
        Update::Unchanged
    }

    /// Pan by the raw pixel delta since the previous move. Ignored when idle.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Update {
        let DragState::Dragging { last } = self.drag else {
            return Update::Unchanged;
        };
        let current = Point::new(x, y);
        self.drag = DragState::Dragging { last: current };

        let (dx, dy) = current.sub(&last).into_parts();
        self.pan(dx, dy)
    }

    pub fn pointer_up(&mut self) -> Update {
        self.drag = DragState::Idle;
        Update::Unchanged
    }

    /// Translate the view by a screen-space delta. Unbounded.
    pub fn pan(&mut self, dx: f64, dy: f64) -> Update {
        if !dx.is_finite() || !dy.is_finite() || (dx == 0.0 && dy == 0.0) {
            return Update::Unchanged;
        }
        self.transform.translate(dx, dy);
        self.navigated = true;
        Update::Redraw
    }

    // ========================================================================
    // Zoom
    // ========================================================================

    /// Zoom by `factor` about a screen-space pivot. The fractal point under the
    /// pivot stays under it; scale is clamped to the configured zoom range.
    pub fn zoom_at(&mut self, factor: f64, pivot: Point<f64>) -> Update {
        let range = self.scale_range();
        let applied = self.transform.zoom_about(factor, pivot, range);
        if applied == 1.0 {
            Update::Unchanged
        } else {
            self.navigated = true;
            Update::Redraw
        }
    }

    /// Wheel zoom about the cursor.
    ///
    /// A delta of [`WHEEL_DELTA_PER_STEP`] zooms by one wheel step; smaller deltas
    /// (trackpads) zoom by the matching fraction of a step. Larger deltas are capped
    /// at one step per event.
    pub fn wheel(&mut self, delta_y: f64, x: f64, y: f64) -> Update {
        if !delta_y.is_finite() || delta_y == 0.0 {
            return Update::Unchanged;
        }
        let steps = (-delta_y / WHEEL_DELTA_PER_STEP).clamp(-1.0, 1.0);
        let factor = self.config.wheel_zoom_step.powf(steps);
        self.zoom_at(factor, Point::new(x, y))
    }

    pub fn zoom_in(&mut self) -> Update {
        self.zoom_at(self.config.button_zoom_step, self.view_center())
    }

    pub fn zoom_out(&mut self) -> Update {
        self.zoom_at(1.0 / self.config.button_zoom_step, self.view_center())
    }

    // ========================================================================
    // View
    // ========================================================================

    /// Re-fit the base shape to the canvas. Level and boundary are kept.
    pub fn reset_view(&mut self) -> Update {
        let transform = Self::fitted(&self.base, self.canvas_size);
        self.fit_scale = transform.scale;
        self.navigated = false;
        if transform == self.transform {
            return Update::Unchanged;
        }
        self.transform = transform;
        Update::Redraw
    }

    /// Track a new canvas size.
    ///
    /// An untouched view is re-fitted to the new size. Otherwise the fractal point
    /// at the view center stays fixed and the zoom relative to the new fit is kept.
    pub fn resize(&mut self, width: u32, height: u32) -> Update {
        if width == 0 || height == 0 || (width, height) == self.canvas_size {
            return Update::Unchanged;
        }
        let old_center = self.view_center();
        let zoom = self.zoom();
        self.canvas_size = (width, height);

        let fitted = Self::fitted(&self.base, self.canvas_size);
        self.fit_scale = fitted.scale;
        if !self.navigated {
            self.transform = fitted;
            return Update::Redraw;
        }

        let new_center = self.view_center();
        let target = self.fit_scale * zoom;
        self.transform.zoom_about(target / self.transform.scale, old_center, self.scale_range());

        let (dx, dy) = new_center.sub(&old_center).into_parts();
        self.transform.translate(dx, dy);
        Update::Redraw
    }

    // ========================================================================
    // Recursion level
    // ========================================================================

    /// Set the recursion level, clamping silently into the configured bounds.
    pub fn set_level(&mut self, requested: i64) -> Update {
        if self.level.set(requested) {
            log::debug!("Recursion level set to {}", self.level.value());
            Update::Regenerate
        } else {
            Update::Unchanged
        }
    }

    pub fn increment_level(&mut self) -> Update {
        self.set_level(i64::from(self.level.value()) + 1)
    }

    pub fn decrement_level(&mut self) -> Update {
        self.set_level(i64::from(self.level.value()) - 1)
    }

    // ========================================================================
    // Boundary hand-off
    // ========================================================================

    /// True when no boundary for the current level has been installed.
    pub fn needs_regeneration(&self) -> bool {
        self.boundary
            .as_ref()
            .map_or(true, |installed| installed.depth != self.level.value())
    }

    /// Store a generated boundary. Results for a level that is no longer current
    /// are dropped.
    pub fn install_boundary(&mut self, depth: u32, boundary: Boundary) -> Update {
        if depth != self.level.value() {
            log::debug!(
                "Dropping boundary for level {} (current level {})",
                depth,
                self.level.value()
            );
            return Update::Unchanged;
        }
        self.boundary = Some(InstalledBoundary { depth, boundary });
        Update::Redraw
    }

    /// Regenerate through `generate` if the installed boundary is missing or stale.
    ///
    /// Generation errors propagate and leave the previous boundary in place.
    pub fn regenerate_with<F>(&mut self, generate: F) -> Result<Update>
    where
        F: FnOnce(&BaseShape, u32) -> Result<Boundary>,
    {
        if !self.needs_regeneration() {
            return Ok(Update::Unchanged);
        }
        let depth = self.level.value();
        let boundary = generate(&self.base, depth)?;
        Ok(self.install_boundary(depth, boundary))
    }

    /// The installed boundary, only if it matches the current level.
    pub fn current_boundary(&self) -> Option<&Boundary> {
        self.boundary
            .as_ref()
            .filter(|installed| installed.depth == self.level.value())
            .map(|installed| &installed.boundary)
    }

    /// The last installed boundary, which may lag behind the level while a
    /// regeneration is pending.
    pub fn displayed_boundary(&self) -> Option<&Boundary> {
        self.boundary.as_ref().map(|installed| &installed.boundary)
    }

    pub fn vertex_count(&self) -> usize {
        self.displayed_boundary().map_or(0, Boundary::len)
    }

    // ========================================================================
    // Projection
    // ========================================================================

    /// Map every point of `boundary` to screen space, in order.
    pub fn project<'a>(&self, boundary: &'a Boundary) -> impl Iterator<Item = Point<f64>> + 'a {
        let transform = self.transform;
        boundary.iter().map(move |p| transform.apply(p))
    }

    /// Screen-space polyline for the displayed boundary, empty if none is installed.
    pub fn screen_points(&self) -> Vec<Point<f64>> {
        self.displayed_boundary()
            .map(|boundary| self.project(boundary).collect())
            .unwrap_or_default()
    }
}
