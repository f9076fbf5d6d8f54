//! Filter state and its URL query-parameter form.
//!
//! `FilterState` is the single source of truth for whether any filter is
//! active, which in turn selects tree versus flat rendering. Every mutation
//! is pushed into the page URL (one parameter per field, omitted when at
//! its default) so a reload reproduces the same view; the URL is read once
//! at load to seed the initial state.

use serde::{Deserialize, Serialize};

use dashhub_core::types::SortKey;

/// Query parameter carrying the search text.
pub const PARAM_QUERY: &str = "query";
/// Query parameter carrying the sort key.
pub const PARAM_SORT: &str = "sort";
/// Query parameter carrying the starred-only flag.
pub const PARAM_STARRED: &str = "starred";

/// User-selected filtering and sorting for the content listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Search text; matched against item names only.
    #[serde(default)]
    pub query: String,
    /// Sort key; `None` means insertion/tree order.
    #[serde(default)]
    pub sort: Option<SortKey>,
    /// Show only starred dashboards.
    #[serde(default)]
    pub starred: bool,
}

impl FilterState {
    /// Whether any filter is active. Active filters force the flat view.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.sort.is_some() || self.starred
    }

    /// Reset every field to its default, restoring tree order.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The URL query parameters for this state, defaults omitted.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if !self.query.is_empty() {
            pairs.push((PARAM_QUERY.to_string(), self.query.clone()));
        }
        if let Some(sort) = self.sort {
            pairs.push((PARAM_SORT.to_string(), sort.as_param().to_string()));
        }
        if self.starred {
            pairs.push((PARAM_STARRED.to_string(), "true".to_string()));
        }
        pairs
    }

    /// Seed a state from URL query parameters.
    ///
    /// Unknown parameters are ignored; an unparseable sort value is treated
    /// as no sort, matching a hand-edited URL rather than failing the load.
    pub fn from_query_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut state = Self::default();
        for (key, value) in pairs {
            match key {
                PARAM_QUERY => state.query = value.trim().to_string(),
                PARAM_SORT => state.sort = value.parse().ok(),
                PARAM_STARRED => state.starred = value == "true",
                _ => {}
            }
        }
        state
    }
}
