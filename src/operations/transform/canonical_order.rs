use crate::geometry::Point;

/// Two screen-space endpoints in canonical order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderedEndpoints {
    pub start: Point,
    pub end: Point,
    /// `true` if the input order was reversed.
    pub switched: bool,
}

/// Orders a pair of endpoints so the one with the smaller `x + y` comes
/// first.
///
/// Equal sums keep the input order.
pub struct CanonicalOrder {
    start: Point,
    end: Point,
}

impl CanonicalOrder {
    /// Creates a new `CanonicalOrder` operation.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Executes the ordering.
    #[must_use]
    pub fn execute(&self) -> OrderedEndpoints {
        if self.end.coord_sum() < self.start.coord_sum() {
            OrderedEndpoints {
                start: self.end,
                end: self.start,
                switched: true,
            }
        } else {
            OrderedEndpoints {
                start: self.start,
                end: self.end,
                switched: false,
            }
        }
    }
}
