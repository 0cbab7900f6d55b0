use crate::geometry::Point;
use crate::math::distance_2d::point_dist;
use crate::math::Point2;

/// A stroke's first point and the point farthest from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoints {
    pub start: Point,
    pub farthest: Point,
    /// Position of `farthest` in the input sequence.
    pub farthest_index: usize,
}

/// Finds the point of a sequence farthest from its first point.
pub struct FarthestPoint<'a> {
    points: &'a [Point],
}

impl<'a> FarthestPoint<'a> {
    /// Creates a new `FarthestPoint` query.
    #[must_use]
    pub fn new(points: &'a [Point]) -> Self {
        Self { points }
    }

    /// Executes the query.
    ///
    /// Ties keep the earliest point. If every point coincides with the
    /// first, the first point is returned as its own farthest point.
    /// Returns `None` for sequences shorter than two points.
    #[must_use]
    pub fn execute(&self) -> Option<Endpoints> {
        let (&start, rest) = self.points.split_first()?;
        if rest.is_empty() {
            return None;
        }

        let origin = Point2::from(start);
        let mut max_dist = 0.0;
        let mut farthest = start;
        let mut farthest_index = 0;
        for (i, &p) in rest.iter().enumerate() {
            let d = point_dist(&origin, &Point2::from(p));
            if d > max_dist {
                max_dist = d;
                farthest = p;
                farthest_index = i + 1;
            }
        }

        Some(Endpoints {
            start,
            farthest,
            farthest_index,
        })
    }
}
