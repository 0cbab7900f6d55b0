mod canonical_order;
mod to_screen;

pub use canonical_order::{CanonicalOrder, OrderedEndpoints};
pub use to_screen::ToScreen;
