mod farthest_point;
mod stroke_metrics;

pub use farthest_point::{Endpoints, FarthestPoint};
pub use stroke_metrics::{Metrics, StrokeMetrics};
