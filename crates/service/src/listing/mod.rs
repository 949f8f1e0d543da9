//! Listing filter engine: search, filter and order provider listings.

pub mod criteria;
pub mod engine;

pub use criteria::{FilterCriteria, SortBy};
pub use engine::{filter, result_label, SearchOutcome};
