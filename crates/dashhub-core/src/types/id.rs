//! Typed identifier for folders and dashboards.
//!
//! Identifiers are opaque strings assigned by the backend. The root of the
//! content tree is a well-known sentinel id that always exists and is never
//! deleted or reparented.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel identifier of the root folder.
pub const ROOT_FOLDER_ID: &str = "root-folder";

/// Opaque identifier of a folder or dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an identifier from a backend-assigned string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The well-known root folder identifier.
    pub fn root() -> Self {
        Self(ROOT_FOLDER_ID.to_string())
    }

    /// Whether this is the root sentinel.
    pub fn is_root(&self) -> bool {
        self.0 == ROOT_FOLDER_ID
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
