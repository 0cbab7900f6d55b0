use super::Point2;

/// Returns the Euclidean distance between two points.
#[must_use]
pub fn point_dist(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Returns the arc length of an open polyline.
///
/// Sums the distances between consecutive vertices. Fewer than two
/// vertices yield `0.0`.
#[must_use]
pub fn polyline_length(points: &[Point2]) -> f64 {
    points.windows(2).map(|w| point_dist(&w[0], &w[1])).sum()
}
