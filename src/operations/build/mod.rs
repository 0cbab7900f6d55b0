mod charset;
mod library;
mod stroke_set;

pub use charset::{unique_hanzi, CJK_UNIFIED_IDEOGRAPHS};
pub use library::{index_records, BuildStrokeLibrary, CharacterStrokes, StrokeLibrary};
pub use stroke_set::{build_descriptor, BuildStrokeSet};
