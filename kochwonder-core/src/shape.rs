//! The triangle every Koch boundary is grown from.

use crate::error::{KochError, Result};
use crate::points::Point;
use serde::{Deserialize, Serialize};

/// Relative tolerance below which a triangle counts as collinear.
const COLLINEAR_EPSILON: f64 = 1e-10;

/// Vertex order of a closed polygon, measured in a y-up frame.
///
/// On a y-down screen the visual sense is mirrored. The Koch bump direction is
/// derived from this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// Three ordered, non-collinear vertices. The closing edge from the last vertex
/// back to the first is implicit.
///
/// Deserializes from a plain `[a, b, c]` vertex array and is validated like
/// [`BaseShape::from_vertices`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[Point<f64>; 3]", into = "[Point<f64>; 3]")]
pub struct BaseShape {
    vertices: [Point<f64>; 3],
}

impl BaseShape {
    /// Equilateral triangle with its centroid at `center`.
    ///
    /// Vertex order is apex (smallest y), bottom-left, bottom-right, so on a
    /// y-down screen the apex points up.
    pub fn equilateral(center: Point<f64>, side: f64) -> Result<Self> {
        if !side.is_finite() || side <= 0.0 {
            return Err(KochError::InvalidInput(format!(
                "side length must be a positive finite number, got {side}"
            )));
        }

        let (cx, cy) = center.into_parts();
        let circumradius = side / 3f64.sqrt();
        let half_side = side / 2.0;

        Self::from_vertices(
            Point::new(cx, cy - circumradius),
            Point::new(cx - half_side, cy + circumradius / 2.0),
            Point::new(cx + half_side, cy + circumradius / 2.0),
        )
    }

    /// Build a base shape from arbitrary vertices, rejecting degenerate triangles.
    pub fn from_vertices(a: Point<f64>, b: Point<f64>, c: Point<f64>) -> Result<Self> {
        let vertices = [a, b, c];

        if let Some(bad) = vertices.iter().find(|p| !p.is_finite()) {
            return Err(KochError::InvalidInput(format!(
                "vertex {bad:?} has a non-finite coordinate"
            )));
        }

        for i in 0..3 {
            let j = (i + 1) % 3;
            if vertices[i] == vertices[j] {
                return Err(KochError::InvalidInput(format!(
                    "vertices {i} and {j} coincide at {:?}",
                    vertices[i]
                )));
            }
        }

        let shape = Self { vertices };
        let longest = (0..3)
            .map(|i| vertices[i].distance(&vertices[(i + 1) % 3]))
            .fold(0.0, f64::max);

        if shape.signed_area().abs() <= COLLINEAR_EPSILON * longest * longest {
            return Err(KochError::InvalidInput(
                "base shape vertices are collinear".to_string(),
            ));
        }

        Ok(shape)
    }

    pub fn vertices(&self) -> &[Point<f64>; 3] {
        &self.vertices
    }

    /// Shoelace area. Positive when the vertices run counter-clockwise in a y-up frame.
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        ((b.x() - a.x()) * (c.y() - a.y()) - (c.x() - a.x()) * (b.y() - a.y())) / 2.0
    }

    pub fn winding(&self) -> Winding {
        if self.signed_area() > 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }

    pub fn centroid(&self) -> Point<f64> {
        let [a, b, c] = self.vertices;
        a.add(&b).add(&c).div_scalar(&3.0)
    }

    /// Largest distance from the centroid to a vertex.
    ///
    /// For an equilateral base this is also the outer bound of the Koch boundary
    /// at every depth.
    pub fn circumradius(&self) -> f64 {
        let centroid = self.centroid();
        self.vertices
            .iter()
            .map(|v| v.distance(&centroid))
            .fold(0.0, f64::max)
    }

    /// Length of the first edge. All three agree for an equilateral base.
    pub fn side_length(&self) -> f64 {
        self.vertices[0].distance(&self.vertices[1])
    }

    pub fn perimeter(&self) -> f64 {
        (0..3)
            .map(|i| self.vertices[i].distance(&self.vertices[(i + 1) % 3]))
            .sum()
    }
}

impl TryFrom<[Point<f64>; 3]> for BaseShape {
    type Error = KochError;

    fn try_from([a, b, c]: [Point<f64>; 3]) -> Result<Self> {
        Self::from_vertices(a, b, c)
    }
}

impl From<BaseShape> for [Point<f64>; 3] {
    fn from(shape: BaseShape) -> Self {
        shape.vertices
    }
}

impl TryFrom<&[Point<f64>]> for BaseShape {
    type Error = KochError;

    fn try_from(points: &[Point<f64>]) -> Result<Self> {
        match *points {
            [a, b, c] => Self::from_vertices(a, b, c),
            _ => Err(KochError::InvalidInput(format!(
                "base shape needs exactly 3 vertices, got {}",
                points.len()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Point<f64> {
        Point::new(0.0, 0.0)
    }

    #[test]
    fn equilateral_has_equal_sides() {
        let shape = BaseShape::equilateral(origin(), 600.0).unwrap();
        let [a, b, c] = *shape.vertices();
        assert!((a.distance(&b) - 600.0).abs() < 1e-9);
        assert!((b.distance(&c) - 600.0).abs() < 1e-9);
        assert!((c.distance(&a) - 600.0).abs() < 1e-9);
    }

    #[test]
    fn equilateral_centroid_is_center() {
        let shape = BaseShape::equilateral(Point::new(12.0, -7.0), 90.0).unwrap();
        let centroid = shape.centroid();
        assert!((centroid.x() - 12.0).abs() < 1e-9);
        assert!((centroid.y() + 7.0).abs() < 1e-9);
    }

    #[test]
    fn equilateral_apex_is_first_and_on_top() {
        let shape = BaseShape::equilateral(origin(), 600.0).unwrap();
        let [apex, left, right] = *shape.vertices();
        assert!(apex.y() < left.y());
        assert!(left.x() < right.x());
        assert_eq!(left.y(), right.y());
    }

    #[test]
    fn equilateral_circumradius() {
        let shape = BaseShape::equilateral(origin(), 600.0).unwrap();
        assert!((shape.circumradius() - 600.0 / 3f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn equilateral_rejects_non_positive_side() {
        assert!(matches!(
            BaseShape::equilateral(origin(), 0.0),
            Err(KochError::InvalidInput(_))
        ));
        assert!(BaseShape::equilateral(origin(), -5.0).is_err());
        assert!(BaseShape::equilateral(origin(), f64::NAN).is_err());
    }

    #[test]
    fn from_vertices_rejects_collinear() {
        let result = BaseShape::from_vertices(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        );
        assert!(matches!(result, Err(KochError::InvalidInput(_))));
    }

    #[test]
    fn from_vertices_rejects_duplicates() {
        let result = BaseShape::from_vertices(
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(2.0, 5.0),
        );
        assert!(matches!(result, Err(KochError::InvalidInput(_))));
    }

    #[test]
    fn from_vertices_rejects_non_finite() {
        let result = BaseShape::from_vertices(
            Point::new(0.0, f64::INFINITY),
            Point::new(1.0, 0.0),
            Point::new(2.0, 5.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn winding_follows_vertex_order() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(0.0, 1.0);
        let ccw = BaseShape::from_vertices(a, b, c).unwrap();
        let cw = BaseShape::from_vertices(a, c, b).unwrap();
        assert_eq!(ccw.winding(), Winding::CounterClockwise);
        assert_eq!(cw.winding(), Winding::Clockwise);
        assert_eq!(ccw.signed_area(), -cw.signed_area());
    }

    #[test]
    fn equilateral_is_clockwise_in_y_up_frame() {
        let shape = BaseShape::equilateral(origin(), 600.0).unwrap();
        assert_eq!(shape.winding(), Winding::Clockwise);
    }

    #[test]
    fn try_from_slice_requires_three_vertices() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 3.0),
            Point::new(1.0, 1.0),
        ];
        assert!(BaseShape::try_from(&points[..3]).is_ok());
        assert!(matches!(
            BaseShape::try_from(&points[..]),
            Err(KochError::InvalidInput(_))
        ));
        assert!(BaseShape::try_from(&points[..2]).is_err());
    }

    #[test]
    fn deserialize_validates_vertices() {
        let collinear = r#"[{"x":0,"y":0},{"x":1,"y":1},{"x":2,"y":2}]"#;
        assert!(serde_json::from_str::<BaseShape>(collinear).is_err());

        let duplicate = r#"[{"x":0,"y":0},{"x":0,"y":0},{"x":2,"y":5}]"#;
        assert!(serde_json::from_str::<BaseShape>(duplicate).is_err());

        let too_few = r#"[{"x":0,"y":0},{"x":1,"y":0}]"#;
        assert!(serde_json::from_str::<BaseShape>(too_few).is_err());
    }

    #[test]
    fn serialization_roundtrip() {
        let shape = BaseShape::equilateral(Point::new(5.0, -5.0), 90.0).unwrap();
        let json = serde_json::to_string(&shape).unwrap();
        let restored: BaseShape = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, shape);
    }

    #[test]
    fn perimeter_is_three_sides() {
        let shape = BaseShape::equilateral(origin(), 10.0).unwrap();
        assert!((shape.perimeter() - 30.0).abs() < 1e-9);
    }
}
