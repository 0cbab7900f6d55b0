pub mod descriptor;
pub mod point;
pub mod raw_stroke;

pub use descriptor::{CharacterStrokeSet, Direction, StrokeDescriptor, StrokeSource};
pub use point::Point;
pub use raw_stroke::{RawCharacterRecord, RawStroke};
