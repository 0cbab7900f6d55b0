use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::math::Point2;

/// A 2D point serialized as `{ "x": .., "y": .. }`.
///
/// Carries no coordinate space of its own: whether it lies in raw dataset
/// space (y grows upward) or screen space (y grows downward) depends on the
/// stage that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `x + y`, the key used to order stroke endpoints.
    #[must_use]
    pub fn coord_sum(&self) -> f64 {
        self.x + self.y
    }

    /// Reads a positional pair `[x, y, ..]`.
    ///
    /// Elements past the second are ignored. Returns `None` if the value is
    /// not an array of at least two numbers.
    #[must_use]
    pub fn from_pair(value: &Value) -> Option<Self> {
        match value.as_array()?.as_slice() {
            [x, y, ..] => Some(Self::new(x.as_f64()?, y.as_f64()?)),
            _ => None,
        }
    }

    /// Reads a mapping `{ "x": .., "y": .. }` with numeric coordinates.
    #[must_use]
    pub fn from_mapping(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self::new(obj.get("x")?.as_f64()?, obj.get("y")?.as_f64()?))
    }
}

impl From<Point> for Point2 {
    fn from(p: Point) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pair_reads_first_two_elements() {
        assert_eq!(Point::from_pair(&json!([3, 4])), Some(Point::new(3.0, 4.0)));
        assert_eq!(
            Point::from_pair(&json!([1.5, -2.0, 99])),
            Some(Point::new(1.5, -2.0))
        );
    }

    #[test]
    fn pair_rejects_short_or_non_numeric() {
        assert_eq!(Point::from_pair(&json!([3])), None);
        assert_eq!(Point::from_pair(&json!([])), None);
        assert_eq!(Point::from_pair(&json!(["a", 4])), None);
        assert_eq!(Point::from_pair(&json!({"x": 1, "y": 2})), None);
    }

    #[test]
    fn mapping_reads_x_and_y() {
        assert_eq!(
            Point::from_mapping(&json!({"x": 7, "y": 8.25, "pressure": 0.4})),
            Some(Point::new(7.0, 8.25))
        );
    }

    #[test]
    fn mapping_rejects_missing_or_non_numeric_keys() {
        assert_eq!(Point::from_mapping(&json!({"x": 1})), None);
        assert_eq!(Point::from_mapping(&json!({"x": "1", "y": 2})), None);
        assert_eq!(Point::from_mapping(&json!([1, 2])), None);
    }

    #[test]
    fn serializes_as_xy_object() {
        let v = serde_json::to_value(Point::new(10.0, 890.0)).unwrap();
        assert_eq!(v, json!({"x": 10.0, "y": 890.0}));
    }

    #[test]
    fn nalgebra_conversion_preserves_coordinates() {
        let p = Point::new(-4.0, 12.5);
        let q: Point2 = p.into();
        assert_eq!(Point::from(q), p);
    }
}
