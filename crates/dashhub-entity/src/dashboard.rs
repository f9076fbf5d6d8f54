//! Dashboard reference model.
//!
//! A `DashboardRef` is the hierarchy's view of a dashboard: name, placement,
//! and flags. Panel contents live behind the grid widget and are not part
//! of this core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dashhub_core::types::ItemId;

/// A dashboard as listed inside the folder hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardRef {
    /// Unique dashboard identifier.
    pub id: ItemId,
    /// Dashboard name.
    pub name: String,
    /// Containing folder ID.
    #[serde(rename = "parentId")]
    pub parent_id: ItemId,
    /// Whether the user starred this dashboard.
    #[serde(rename = "isFavorite", default)]
    pub is_favorite: bool,
    /// Whether this is a protected system-seeded dashboard.
    #[serde(rename = "isDefault", default)]
    pub is_default: bool,
    /// Optional description entered at creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the dashboard was created.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
