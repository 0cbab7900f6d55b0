mod extract_points;
mod path_scan;

pub use extract_points::{ExtractPoints, ExtractedPoints};
pub use path_scan::scan_path;
