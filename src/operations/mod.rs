pub mod build;
pub mod extract;
pub mod query;
pub mod transform;
