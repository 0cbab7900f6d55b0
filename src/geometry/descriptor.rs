use std::fmt;

use serde::{Deserialize, Serialize};

use super::point::Point;

/// Which raw encoding a stroke's points were extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeSource {
    Medians,
    Path,
    Points,
}

impl StrokeSource {
    /// Returns the field name this source is read from.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Medians => "medians",
            Self::Path => "path",
            Self::Points => "points",
        }
    }
}

impl fmt::Display for StrokeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screen-space vector from a stroke's canonical start to its end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    pub dx: f64,
    pub dy: f64,
}

/// Canonical reference geometry of one stroke.
///
/// `start_point` and `end_point` are in screen space and ordered so that
/// `start_point` has the smaller `x + y`. `angle` follows the chord between
/// them, while `length` is the arc length of the full raw polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeDescriptor {
    /// Position of the stroke in the raw record's stroke list.
    pub index: usize,
    pub start_point: Point,
    pub end_point: Point,
    pub direction: Direction,
    /// Chord angle in radians, in `(-π, π]`.
    pub angle: f64,
    pub angle_degrees: f64,
    pub length: f64,
    pub source: StrokeSource,
    /// Number of points extracted from the raw stroke.
    pub points_count: usize,
    /// Whether the endpoints were swapped to reach canonical order.
    pub switched: bool,
}

/// Ordered stroke descriptors for one character.
///
/// Entries are sorted by [`StrokeDescriptor::index`]. Indices may have gaps
/// where a raw stroke was unusable, so look strokes up with
/// [`CharacterStrokeSet::get`] rather than by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<StrokeDescriptor>", into = "Vec<StrokeDescriptor>")]
pub struct CharacterStrokeSet {
    strokes: Vec<StrokeDescriptor>,
}

impl CharacterStrokeSet {
    /// Creates a stroke set, sorting the descriptors by index.
    #[must_use]
    pub fn new(mut strokes: Vec<StrokeDescriptor>) -> Self {
        strokes.sort_by_key(|s| s.index);
        Self { strokes }
    }

    /// Returns the descriptor for the given raw stroke index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&StrokeDescriptor> {
        self.strokes
            .binary_search_by_key(&index, |s| s.index)
            .ok()
            .and_then(|pos| self.strokes.get(pos))
    }

    /// Returns the raw stroke indices present in this set, ascending.
    #[must_use]
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.strokes.iter().map(|s| s.index)
    }

    /// Returns the number of descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Returns `true` if no stroke was usable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Iterates over the descriptors in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, StrokeDescriptor> {
        self.strokes.iter()
    }
}

impl From<Vec<StrokeDescriptor>> for CharacterStrokeSet {
    fn from(strokes: Vec<StrokeDescriptor>) -> Self {
        Self::new(strokes)
    }
}

impl From<CharacterStrokeSet> for Vec<StrokeDescriptor> {
    fn from(set: CharacterStrokeSet) -> Self {
        set.strokes
    }
}

impl<'a> IntoIterator for &'a CharacterStrokeSet {
    type Item = &'a StrokeDescriptor;
    type IntoIter = std::slice::Iter<'a, StrokeDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.strokes.iter()
    }
}
