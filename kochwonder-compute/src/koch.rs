//! Koch subdivision.
//!
//! The boundary is rebuilt level by level in a flat buffer: each level replaces
//! every edge A->B (including the closing edge) with the chain A, P1, Pk, P2,
//! where P1/P2 trisect the edge and Pk is the tip of an equilateral bump.
//! B is not emitted; it is the start of the next edge.

use crate::cancellation::{CancellationChecker, NeverCancel};
use kochwonder_core::{
    checked_expected_len, BaseShape, Boundary, KochError, Point, Result, Winding, MAX_DEPTH,
};
use std::f64::consts::FRAC_PI_3;

/// Edges processed between cancellation checks.
const CHECK_INTERVAL: usize = 4096;

/// Rotation that turns an edge direction towards the outside of the polygon.
///
/// Clockwise polygons (y-up) have their interior on the right of each edge, so
/// the bump rotates counter-clockwise, and vice versa.
fn bump_rotation(winding: Winding) -> f64 {
    match winding {
        Winding::Clockwise => FRAC_PI_3,
        Winding::CounterClockwise => -FRAC_PI_3,
    }
}

/// The four points replacing edge `a -> b`.
fn koch_edge(a: Point<f64>, b: Point<f64>, rotation: f64) -> [Point<f64>; 4] {
    let third = b.sub(&a).div_scalar(&3.0);
    let p1 = a.add(&third);
    let p2 = p1.add(&third);
    let tip = p1.add(&third.rotate(rotation));
    [a, p1, tip, p2]
}

fn check_depth(depth: u32) -> Result<usize> {
    if depth > MAX_DEPTH {
        return Err(KochError::DepthTooLarge {
            depth,
            max: MAX_DEPTH,
        });
    }
    checked_expected_len(depth).ok_or(KochError::DepthTooLarge {
        depth,
        max: MAX_DEPTH,
    })
}

/// Apply one level of subdivision to a closed point sequence.
pub fn subdivide(points: &[Point<f64>], winding: Winding) -> Vec<Point<f64>> {
    let rotation = bump_rotation(winding);
    let n = points.len();
    let mut next = Vec::with_capacity(n * 4);
    for i in 0..n {
        next.extend_from_slice(&koch_edge(points[i], points[(i + 1) % n], rotation));
    }
    next
}

/// Like [`subdivide`], polling `checker` every few thousand edges.
pub fn subdivide_cancellable<C: CancellationChecker>(
    points: &[Point<f64>],
    winding: Winding,
    checker: &C,
) -> Result<Vec<Point<f64>>> {
    let rotation = bump_rotation(winding);
    let n = points.len();
    let mut next = Vec::with_capacity(n * 4);
    for i in 0..n {
        if i % CHECK_INTERVAL == 0 && checker.is_cancelled() {
            return Err(KochError::Cancelled);
        }
        next.extend_from_slice(&koch_edge(points[i], points[(i + 1) % n], rotation));
    }
    Ok(next)
}

/// Generate the Koch boundary of `base` at `depth`.
///
/// Returns `3 * 4^depth` points, starting with the base's first vertex. Depth 0
/// returns the base vertices unchanged.
pub fn generate(base: &BaseShape, depth: u32) -> Result<Boundary> {
    generate_cancellable(base, depth, &NeverCancel)
}

/// Generate with cancellation. A cancelled run returns [`KochError::Cancelled`]
/// and no partial boundary.
pub fn generate_cancellable<C: CancellationChecker>(
    base: &BaseShape,
    depth: u32,
    checker: &C,
) -> Result<Boundary> {
    let expected = check_depth(depth)?;
    let winding = base.winding();

    let mut points = base.vertices().to_vec();
    for _ in 0..depth {
        if checker.is_cancelled() {
            return Err(KochError::Cancelled);
        }
        points = subdivide_cancellable(&points, winding, checker)?;
    }

    debug_assert_eq!(points.len(), expected);
    Ok(Boundary::new(points))
}

/// Grow an existing boundary by `levels` more subdivisions.
pub(crate) fn extend_cancellable<C: CancellationChecker>(
    start: &[Point<f64>],
    levels: u32,
    winding: Winding,
    checker: &C,
) -> Result<Vec<Point<f64>>> {
    let mut points = start.to_vec();
    for _ in 0..levels {
        if checker.is_cancelled() {
            return Err(KochError::Cancelled);
        }
        points = subdivide_cancellable(&points, winding, checker)?;
    }
    Ok(points)
}
