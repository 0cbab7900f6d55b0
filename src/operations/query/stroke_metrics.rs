use std::f64::consts::PI;

use crate::geometry::{Direction, Point};
use crate::math::distance_2d::polyline_length;
use crate::math::{Point2, Vector2};

/// Angle and length of a stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub direction: Direction,
    /// `atan2(dy, dx)` of `direction`, in radians.
    pub angle: f64,
    pub angle_degrees: f64,
    /// Arc length of the raw polyline.
    pub length: f64,
}

/// Computes direction, angle and length for a stroke.
///
/// Direction and angle come from the chord between the two canonical
/// screen-space endpoints. Length is measured along the full raw-space
/// polyline, so it does not depend on which endpoints were chosen or how
/// they were ordered.
pub struct StrokeMetrics<'a> {
    start: Point,
    end: Point,
    raw_points: &'a [Point],
}

impl<'a> StrokeMetrics<'a> {
    /// Creates a new `StrokeMetrics` query.
    #[must_use]
    pub fn new(start: Point, end: Point, raw_points: &'a [Point]) -> Self {
        Self {
            start,
            end,
            raw_points,
        }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> Metrics {
        let chord: Vector2 = Point2::from(self.end) - Point2::from(self.start);
        let angle = chord.y.atan2(chord.x);
        let polyline: Vec<Point2> = self.raw_points.iter().map(|&p| p.into()).collect();

        Metrics {
            direction: Direction {
                dx: chord.x,
                dy: chord.y,
            },
            angle,
            angle_degrees: angle * 180.0 / PI,
            length: polyline_length(&polyline),
        }
    }
}
