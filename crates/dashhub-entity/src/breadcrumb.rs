//! Breadcrumb entries returned with folder contents.

use serde::{Deserialize, Serialize};

use dashhub_core::types::ItemId;

/// One entry in a folder's ancestor chain.
///
/// The backend returns the raw chain root-inclusive and ending at the
/// current folder; display trimming is done by the resolver in the service
/// layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// Folder identifier.
    pub id: ItemId,
    /// Folder display name.
    pub name: String,
}

impl Breadcrumb {
    /// Create a breadcrumb entry.
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
