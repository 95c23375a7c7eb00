use crate::points::Point;

/// Number of vertices in a Koch boundary after `depth` subdivisions of a triangle.
pub fn expected_len(depth: u32) -> usize {
    3 * 4usize.pow(depth)
}

/// Like [`expected_len`], but `None` when the count does not fit in `usize`.
pub fn checked_expected_len(depth: u32) -> Option<usize> {
    4usize.checked_pow(depth)?.checked_mul(3)
}

/// Ordered, closed outline of the fractal at one recursion depth.
///
/// The closing edge from the last point back to the first is implicit; the first
/// point is never repeated at the end.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Boundary {
    points: Vec<Point<f64>>,
}

impl Boundary {
    pub fn new(points: Vec<Point<f64>>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point<f64>] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point<f64>> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<Point<f64>> {
        self.points
    }

    /// Consecutive point pairs, including the wrap-around edge from last to first.
    pub fn edges(&self) -> impl Iterator<Item = (Point<f64>, Point<f64>)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Length of the closed polyline.
    pub fn perimeter(&self) -> f64 {
        self.edges().map(|(a, b)| a.distance(&b)).sum()
    }
}

impl<'a> IntoIterator for &'a Boundary {
    type Item = &'a Point<f64>;
    type IntoIter = std::slice::Iter<'a, Point<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
