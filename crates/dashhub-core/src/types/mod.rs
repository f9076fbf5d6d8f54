//! Shared value types: identifiers and sort keys.

pub mod id;
pub mod sorting;

pub use id::ItemId;
pub use sorting::SortKey;
