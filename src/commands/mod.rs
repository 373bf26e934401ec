//! Command implementations

pub mod distance;
pub mod search;
pub mod simple;

pub use distance::{DistanceResult, measure_distance};
pub use search::{SearchResult, search_countries};
pub use simple::run_simple;
