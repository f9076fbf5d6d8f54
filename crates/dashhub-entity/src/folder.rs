//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dashhub_core::types::ItemId;

/// A folder in the content hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Unique folder identifier.
    pub id: ItemId,
    /// Folder name.
    pub name: String,
    /// Parent folder ID; the root sentinel for top-level folders.
    #[serde(rename = "parentId")]
    pub parent_id: ItemId,
    /// Whether this is a protected system-seeded folder.
    #[serde(rename = "isDefault", default)]
    pub is_default: bool,
    /// Number of direct children, for expandable tree rendering.
    #[serde(rename = "childCount", default)]
    pub child_count: u64,
    /// When the folder was created.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl FolderNode {
    /// Whether this node is the root sentinel itself.
    pub fn is_root(&self) -> bool {
        self.id.is_root()
    }
}
