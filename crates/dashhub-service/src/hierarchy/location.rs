//! The page-location port: one-way push of state into the URL query.
//!
//! The coordinator pushes the full parameter set on every state mutation so
//! that reloading reproduces the same view. The location is read exactly
//! once, at load, to seed the initial folder and filter state; it is never
//! read back afterwards.

use dashhub_core::types::ItemId;
use dashhub_entity::FilterState;

/// Query parameter carrying the current folder id.
pub const PARAM_ID: &str = "id";

/// Write access to the page URL's query string.
pub trait LocationSync: Send + Sync {
    /// Replace the query parameters without adding a history entry.
    fn replace_query(&self, pairs: &[(String, String)]);
}

/// The full parameter set for a folder plus filter state, defaults omitted.
pub fn query_pairs(folder_id: &ItemId, filters: &FilterState) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    if !folder_id.is_root() {
        pairs.push((PARAM_ID.to_string(), folder_id.to_string()));
    }
    pairs.extend(filters.to_query_pairs());
    pairs
}

/// Seed the initial folder and filter state from the URL, read once at load.
pub fn initial_state<'a, I>(pairs: I) -> (ItemId, FilterState)
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut folder_id = ItemId::root();
    let mut filter_pairs = Vec::new();
    for (key, value) in pairs {
        if key == PARAM_ID {
            if !value.is_empty() {
                folder_id = ItemId::new(value);
            }
        } else {
            filter_pairs.push((key, value));
        }
    }
    (folder_id, FilterState::from_query_pairs(filter_pairs))
}
