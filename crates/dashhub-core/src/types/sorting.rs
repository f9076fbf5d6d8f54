//! Sort keys for flat content listings.
//!
//! Each key carries a machine-readable wire parameter and a human-readable
//! label, with inverse lookups for both. The absence of a sort key means
//! insertion/tree order; that case is represented as `Option<SortKey>` at
//! the call sites, never as a variant here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A fixed sort criterion for flat listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Case-insensitive name, ascending; ties broken by id.
    AlphaAsc,
    /// Case-insensitive name, descending; ties broken by id.
    AlphaDesc,
    /// Creation time, newest first.
    CreatedDesc,
    /// Creation time, oldest first.
    CreatedAsc,
}

impl SortKey {
    /// All keys in menu order.
    pub const ALL: [SortKey; 4] = [
        SortKey::AlphaAsc,
        SortKey::AlphaDesc,
        SortKey::CreatedDesc,
        SortKey::CreatedAsc,
    ];

    /// The wire parameter sent to the list endpoint.
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::AlphaAsc => "alpha-asc",
            Self::AlphaDesc => "alpha-desc",
            Self::CreatedDesc => "created-desc",
            Self::CreatedAsc => "created-asc",
        }
    }

    /// The human-readable menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AlphaAsc => "Alphabetically (A-Z)",
            Self::AlphaDesc => "Alphabetically (Z-A)",
            Self::CreatedDesc => "Newest First",
            Self::CreatedAsc => "Oldest First",
        }
    }

    /// Inverse lookup from a menu label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.label() == label)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_param())
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_param() == s)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

/// Error returned when a wire parameter does not name a sort key.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);
