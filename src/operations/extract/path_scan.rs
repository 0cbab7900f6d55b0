use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::geometry::Point;

/// A move or line command followed by two numeric operands.
///
/// Operands are loose runs of digits, dots and minus signs; whether they
/// form a number is decided when parsing, not by the pattern.
#[allow(clippy::expect_used)]
static MOVE_LINE_COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[MLml]\s*([\d.\-]+)\s*([\d.\-]+)").expect("valid regex")
});

/// Extracts one point per `M`/`L`/`m`/`l` command in an SVG-like path.
///
/// Relative commands are read as absolute coordinates. Curves, close-path
/// and every other command contribute nothing. A command whose operands do
/// not parse as numbers is skipped and scanning continues.
#[must_use]
pub fn scan_path(path: &str) -> Vec<Point> {
    MOVE_LINE_COMMAND
        .captures_iter(path)
        .filter_map(|caps| {
            match (caps[1].parse::<f64>(), caps[2].parse::<f64>()) {
                (Ok(x), Ok(y)) => Some(Point::new(x, y)),
                _ => {
                    trace!(command = &caps[0], "skipping unparseable path command");
                    None
                }
            }
        })
        .collect()
}
