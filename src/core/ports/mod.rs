//! Port traits (interfaces) for filesystem access
//!
//! The coverage and markup services depend only on these traits. Real
//! implementations live in the `adapters` module; tests supply in-memory ones.

mod listing;
mod search;

pub use listing::DirectoryListing;
pub use search::TreeSearch;
