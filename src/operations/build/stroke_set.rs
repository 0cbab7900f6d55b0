use tracing::debug;

use crate::config::CanvasConfig;
use crate::geometry::{CharacterStrokeSet, RawCharacterRecord, RawStroke, StrokeDescriptor};
use crate::operations::extract::{ExtractPoints, ExtractedPoints};
use crate::operations::query::{FarthestPoint, StrokeMetrics};
use crate::operations::transform::{CanonicalOrder, ToScreen};

/// Derives the canonical stroke set of one character.
///
/// Strokes that yield fewer than two points are dropped without error. The
/// surviving descriptors keep their original stroke index, so the result
/// may have gaps.
pub struct BuildStrokeSet<'a> {
    record: &'a RawCharacterRecord,
    config: &'a CanvasConfig,
}

impl<'a> BuildStrokeSet<'a> {
    /// Creates a new `BuildStrokeSet` operation.
    #[must_use]
    pub fn new(record: &'a RawCharacterRecord, config: &'a CanvasConfig) -> Self {
        Self { record, config }
    }

    /// Executes the build.
    #[must_use]
    pub fn execute(&self) -> CharacterStrokeSet {
        let strokes: Vec<StrokeDescriptor> = self
            .record
            .strokes
            .iter()
            .enumerate()
            .filter_map(|(index, stroke)| {
                let Some(stroke) = stroke else {
                    debug!(index, "dropping stroke: no usable medians, path or points");
                    return None;
                };
                build_descriptor(index, stroke, self.config)
            })
            .collect();

        debug!(
            character = self.record.character.as_deref().unwrap_or("?"),
            raw = self.record.strokes.len(),
            kept = strokes.len(),
            "built stroke set"
        );
        CharacterStrokeSet::new(strokes)
    }
}

/// Derives the descriptor of a single raw stroke.
///
/// Returns `None` if fewer than two points can be extracted.
#[must_use]
pub fn build_descriptor(
    index: usize,
    stroke: &RawStroke,
    config: &CanvasConfig,
) -> Option<StrokeDescriptor> {
    let ExtractedPoints { points, source } = ExtractPoints::new(stroke).execute();

    let Some(endpoints) = FarthestPoint::new(&points).execute() else {
        debug!(
            index,
            %source,
            points = points.len(),
            "dropping stroke: fewer than two points"
        );
        return None;
    };

    let to_screen = ToScreen::new(config);
    let ordered = CanonicalOrder::new(
        to_screen.execute(endpoints.start),
        to_screen.execute(endpoints.farthest),
    )
    .execute();
    let metrics = StrokeMetrics::new(ordered.start, ordered.end, &points).execute();

    Some(StrokeDescriptor {
        index,
        start_point: ordered.start,
        end_point: ordered.end,
        direction: metrics.direction,
        angle: metrics.angle,
        angle_degrees: metrics.angle_degrees,
        length: metrics.length,
        source,
        points_count: points.len(),
        switched: ordered.switched,
    })
}
