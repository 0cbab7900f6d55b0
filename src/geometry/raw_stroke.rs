use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::trace;

use super::descriptor::StrokeSource;
use super::point::Point;
use crate::error::{InputError, Result};

/// One brush stroke as supplied by the character dataset.
///
/// Exactly one encoding is kept per stroke, chosen when the record is read.
#[derive(Debug, Clone, PartialEq)]
pub enum RawStroke {
    /// Dataset centerline, one point per median pair.
    Medians(Vec<Point>),
    /// SVG-like path data; only move/line commands contribute points.
    Path(String),
    /// Explicit point list.
    Points(Vec<Point>),
}

impl RawStroke {
    /// Reads one stroke mapping, choosing its encoding by field priority.
    ///
    /// Fields are tried in the order `medians`, `path`, `points`. The first
    /// one that is present and non-empty is used exclusively, even if none
    /// of its entries turn out to be well formed. Malformed entries are
    /// dropped here.
    ///
    /// Returns `None` when the value is not a mapping or carries none of the
    /// three fields in usable form.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        if let Some(Value::Array(entries)) = obj.get("medians") {
            if !entries.is_empty() {
                return Some(Self::Medians(collect_points(
                    entries,
                    "medians",
                    Point::from_pair,
                )));
            }
        }

        if let Some(Value::String(path)) = obj.get("path") {
            if !path.is_empty() {
                return Some(Self::Path(path.clone()));
            }
        }

        if let Some(Value::Array(entries)) = obj.get("points") {
            if !entries.is_empty() {
                return Some(Self::Points(collect_points(entries, "points", |v| {
                    Point::from_pair(v).or_else(|| Point::from_mapping(v))
                })));
            }
        }

        None
    }

    /// Writes the stroke back in its dataset encoding.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let pairs = |points: &[Point]| -> Vec<[f64; 2]> {
            points.iter().map(|p| [p.x, p.y]).collect()
        };
        match self {
            Self::Medians(points) => json!({ "medians": pairs(points) }),
            Self::Path(path) => json!({ "path": path }),
            Self::Points(points) => json!({ "points": pairs(points) }),
        }
    }

    /// Returns which encoding this stroke uses.
    #[must_use]
    pub fn source(&self) -> StrokeSource {
        match self {
            Self::Medians(_) => StrokeSource::Medians,
            Self::Path(_) => StrokeSource::Path,
            Self::Points(_) => StrokeSource::Points,
        }
    }
}

fn collect_points(
    entries: &[Value],
    field: &'static str,
    read: impl Fn(&Value) -> Option<Point>,
) -> Vec<Point> {
    let points: Vec<Point> = entries.iter().filter_map(read).collect();
    let skipped = entries.len() - points.len();
    if skipped > 0 {
        trace!(field, skipped, "skipped malformed point entries");
    }
    points
}

/// A character record from the dataset.
///
/// Only `strokes` is interpreted. A missing or non-array `strokes` field
/// reads as zero strokes. Strokes that cannot be read in any encoding are
/// kept as `None` so that positions still match the dataset's stroke order.
/// `character` is `None` unless it is a string. Every other field is carried
/// along untouched in `extra`, and the record as read stays available through
/// [`RawCharacterRecord::raw_value`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct RawCharacterRecord {
    pub character: Option<String>,
    pub strokes: Vec<Option<RawStroke>>,
    pub extra: Map<String, Value>,
    raw: Value,
}

impl RawCharacterRecord {
    /// Creates a record from already-decoded strokes.
    #[must_use]
    pub fn new(character: impl Into<String>, strokes: Vec<Option<RawStroke>>) -> Self {
        let character = character.into();
        let raw = json!({
            "character": character,
            "strokes": strokes
                .iter()
                .map(|s| s.as_ref().map_or_else(|| json!({}), RawStroke::to_value))
                .collect::<Vec<_>>(),
        });
        Self {
            character: Some(character),
            strokes,
            extra: Map::new(),
            raw,
        }
    }

    /// Decodes a record from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotAnObject`] if `value` is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(Self::try_from(value)?)
    }

    /// Decodes a record from one line of newline-delimited JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or not a JSON object.
    pub fn from_json_str(line: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(line).map_err(InputError::Json)?;
        Self::from_value(value)
    }

    /// Returns the record exactly as it was read.
    #[must_use]
    pub fn raw_value(&self) -> &Value {
        &self.raw
    }

    /// Returns the character as a single `char`, if it is exactly one.
    #[must_use]
    pub fn hanzi(&self) -> Option<char> {
        let mut chars = self.character.as_deref()?.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl Default for RawCharacterRecord {
    fn default() -> Self {
        Self {
            character: None,
            strokes: Vec::new(),
            extra: Map::new(),
            raw: Value::Object(Map::new()),
        }
    }
}

impl TryFrom<Value> for RawCharacterRecord {
    type Error = InputError;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        let Value::Object(obj) = &value else {
            return Err(InputError::NotAnObject);
        };

        let character = obj
            .get("character")
            .and_then(Value::as_str)
            .map(str::to_owned);
        let strokes = match obj.get("strokes") {
            Some(Value::Array(items)) => items.iter().map(RawStroke::from_value).collect(),
            _ => Vec::new(),
        };
        let extra = obj
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), "character" | "strokes"))
            .map(|(key, v)| (key.clone(), v.clone()))
            .collect();

        Ok(Self {
            character,
            strokes,
            extra,
            raw: value,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::StrokeError;
    use serde_json::json;

    #[test]
    fn medians_take_priority_over_path_and_points() {
        let v = json!({
            "medians": [[0, 0], [10, 0]],
            "path": "M 5 5 L 6 6",
            "points": [[1, 1], [2, 2]],
        });
        assert_eq!(
            RawStroke::from_value(&v),
            Some(RawStroke::Medians(vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0)
            ]))
        );
    }

    #[test]
    fn path_takes_priority_over_points() {
        let v = json!({"path": "M 1 2 L 3 4", "points": [[9, 9], [8, 8]]});
        assert_eq!(
            RawStroke::from_value(&v),
            Some(RawStroke::Path("M 1 2 L 3 4".to_owned()))
        );
    }

    #[test]
    fn empty_fields_fall_through() {
        let v = json!({"medians": [], "path": "", "points": [{"x": 1, "y": 2}]});
        assert_eq!(
            RawStroke::from_value(&v),
            Some(RawStroke::Points(vec![Point::new(1.0, 2.0)]))
        );
    }

    #[test]
    fn malformed_medians_do_not_fall_through() {
        // `medians` is present and non-empty, so it wins even though every
        // entry is unreadable.
        let v = json!({"medians": [["a", "b"], [1]], "points": [[1, 1], [2, 2]]});
        assert_eq!(RawStroke::from_value(&v), Some(RawStroke::Medians(vec![])));
    }

    #[test]
    fn points_accept_pairs_and_mappings() {
        let v = json!({"points": [[1, 2], {"x": 3, "y": 4}, "bogus", {"x": 5}, [6, 7]]});
        assert_eq!(
            RawStroke::from_value(&v),
            Some(RawStroke::Points(vec![
                Point::new(1.0, 2.0),
                Point::new(3.0, 4.0),
                Point::new(6.0, 7.0),
            ]))
        );
    }

    #[test]
    fn medians_ignore_mappings() {
        let v = json!({"medians": [{"x": 1, "y": 2}, [3, 4]]});
        assert_eq!(
            RawStroke::from_value(&v),
            Some(RawStroke::Medians(vec![Point::new(3.0, 4.0)]))
        );
    }

    #[test]
    fn unusable_stroke_values() {
        assert_eq!(RawStroke::from_value(&json!({})), None);
        assert_eq!(RawStroke::from_value(&json!({"path": 42})), None);
        assert_eq!(RawStroke::from_value(&json!("M 0 0 L 1 1")), None);
        assert_eq!(RawStroke::from_value(&json!(null)), None);
    }

    #[test]
    fn source_matches_variant() {
        assert_eq!(RawStroke::Medians(vec![]).source(), StrokeSource::Medians);
        assert_eq!(RawStroke::Path(String::new()).source(), StrokeSource::Path);
        assert_eq!(RawStroke::Points(vec![]).source(), StrokeSource::Points);
    }

    #[test]
    fn record_keeps_stroke_positions() {
        let record = RawCharacterRecord::from_json_str(
            r#"{"character": "十", "strokes": [{"medians": [[0, 0], [1, 1]]}, {}, {"path": "M0 0 L1 1"}]}"#,
        )
        .unwrap();
        assert_eq!(record.character.as_deref(), Some("十"));
        assert_eq!(record.strokes.len(), 3);
        assert!(record.strokes[0].is_some());
        assert!(record.strokes[1].is_none());
        assert!(record.strokes[2].is_some());
    }

    #[test]
    fn record_without_strokes_is_empty() {
        let record = RawCharacterRecord::from_json_str(r#"{"character": "一"}"#).unwrap();
        assert!(record.strokes.is_empty());

        let record =
            RawCharacterRecord::from_json_str(r#"{"character": "一", "strokes": null}"#).unwrap();
        assert!(record.strokes.is_empty());
    }

    #[test]
    fn record_keeps_extra_fields() {
        let record = RawCharacterRecord::from_value(json!({
            "character": "人",
            "strokes": [],
            "radStrokes": [0, 1],
        }))
        .unwrap();
        assert_eq!(record.extra.get("radStrokes"), Some(&json!([0, 1])));
        assert!(!record.extra.contains_key("strokes"));
    }

    #[test]
    fn record_rejects_non_objects() {
        let err = RawCharacterRecord::from_value(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, StrokeError::Input(InputError::NotAnObject)));

        let err = RawCharacterRecord::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, StrokeError::Input(InputError::Json(_))));
    }

    #[test]
    fn non_string_character_keeps_strokes() {
        let record = RawCharacterRecord::from_value(json!({
            "character": 20013,
            "strokes": [{"medians": [[0, 0], [1, 1]]}],
        }))
        .unwrap();
        assert_eq!(record.character, None);
        assert_eq!(record.strokes.len(), 1);
        assert!(record.strokes[0].is_some());
        assert!(!record.extra.contains_key("character"));
    }

    #[test]
    fn raw_value_is_record_as_read() {
        let v = json!({
            "character": "人",
            "strokes": [{"path": "M 1 2 L 3 4"}, {}],
            "medians": [[[1, 2], [3, 4]]],
        });
        let record = RawCharacterRecord::from_value(v.clone()).unwrap();
        assert_eq!(record.raw_value(), &v);
    }

    #[test]
    fn deserialize_goes_through_same_reader() {
        let record: RawCharacterRecord =
            serde_json::from_str(r#"{"character": ["x"], "strokes": [{"path": "M0 0 L1 1"}]}"#)
                .unwrap();
        assert_eq!(record.character, None);
        assert_eq!(
            record.strokes,
            vec![Some(RawStroke::Path("M0 0 L1 1".to_owned()))]
        );
    }

    #[test]
    fn new_record_raw_value_reads_back() {
        let strokes = vec![
            Some(RawStroke::Medians(vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)])),
            None,
            Some(RawStroke::Points(vec![Point::new(1.0, 2.0)])),
        ];
        let record = RawCharacterRecord::new("十", strokes.clone());
        let reread = RawCharacterRecord::from_value(record.raw_value().clone()).unwrap();
        assert_eq!(reread.character.as_deref(), Some("十"));
        assert_eq!(reread.strokes, strokes);
    }

    #[test]
    fn hanzi_requires_single_char() {
        assert_eq!(RawCharacterRecord::new("中", vec![]).hanzi(), Some('中'));
        assert_eq!(RawCharacterRecord::new("中国", vec![]).hanzi(), None);
        assert_eq!(RawCharacterRecord::default().hanzi(), None);
    }
}
