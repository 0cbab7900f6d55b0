use super::path_scan::scan_path;
use crate::geometry::{Point, RawStroke, StrokeSource};

/// Points extracted from a raw stroke, in raw dataset space.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedPoints {
    pub points: Vec<Point>,
    pub source: StrokeSource,
}

/// Converts a raw stroke, in any encoding, into an ordered point sequence.
pub struct ExtractPoints<'a> {
    stroke: &'a RawStroke,
}

impl<'a> ExtractPoints<'a> {
    /// Creates a new `ExtractPoints` operation.
    #[must_use]
    pub fn new(stroke: &'a RawStroke) -> Self {
        Self { stroke }
    }

    /// Executes the extraction.
    ///
    /// An empty result means the stroke is unusable; it is not an error.
    #[must_use]
    pub fn execute(&self) -> ExtractedPoints {
        let points = match self.stroke {
            RawStroke::Medians(points) | RawStroke::Points(points) => points.clone(),
            RawStroke::Path(path) => scan_path(path),
        };
        ExtractedPoints {
            points,
            source: self.stroke.source(),
        }
    }
}
