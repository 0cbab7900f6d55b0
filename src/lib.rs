//! Canonical reference geometry for hanzi handwriting practice.
//!
//! Turns raw per-character stroke data (median polylines, SVG-like paths or
//! point lists) into one [`StrokeDescriptor`] per usable stroke: screen-space
//! start and end points in canonical order, chord direction and angle, and
//! polyline length.
//!
//! ```
//! use hanzi_strokes::{BuildStrokeSet, CanvasConfig, RawCharacterRecord};
//!
//! let record = RawCharacterRecord::from_json_str(
//!     r#"{"character": "一", "strokes": [{"medians": [[100, 450], [800, 460]]}]}"#,
//! )?;
//! let strokes = BuildStrokeSet::new(&record, &CanvasConfig::default()).execute();
//! assert_eq!(strokes.len(), 1);
//! # Ok::<(), hanzi_strokes::StrokeError>(())
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use config::{CanvasConfig, DEFAULT_CANVAS_HEIGHT};
pub use error::{Result, StrokeError};
pub use geometry::{
    CharacterStrokeSet, Direction, Point, RawCharacterRecord, RawStroke, StrokeDescriptor,
    StrokeSource,
};
pub use operations::build::{
    build_descriptor, index_records, unique_hanzi, BuildStrokeLibrary, BuildStrokeSet,
    CharacterStrokes, StrokeLibrary,
};
