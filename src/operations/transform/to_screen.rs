use crate::config::CanvasConfig;
use crate::geometry::Point;

/// Maps raw dataset points (origin bottom-left, y up) into screen space
/// (origin top-left, y down) by flipping against the canvas height.
#[derive(Debug, Clone, Copy)]
pub struct ToScreen {
    height: f64,
}

impl ToScreen {
    /// Creates a new `ToScreen` transform for the given canvas.
    #[must_use]
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            height: config.height(),
        }
    }

    /// Executes the transform on a single point.
    #[must_use]
    pub fn execute(&self, p: Point) -> Point {
        Point::new(p.x, self.height - p.y)
    }
}
