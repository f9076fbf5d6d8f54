//! Unified content item: the union of folders and dashboards.
//!
//! Tree and flat views are two projections over the same `ContentItem` set,
//! so filtering and sorting live here as pure functions and every view path
//! goes through them.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dashhub_core::types::{ItemId, SortKey};

use crate::dashboard::DashboardRef;
use crate::folder::FolderNode;

/// Discriminant for the two content item kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A folder.
    Folder,
    /// A dashboard.
    Dashboard,
}

/// A folder or dashboard, discriminated by the `kind` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentItem {
    /// A folder entry.
    Folder(FolderNode),
    /// A dashboard entry.
    Dashboard(DashboardRef),
}

impl ContentItem {
    /// The item kind.
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Folder(_) => ItemKind::Folder,
            Self::Dashboard(_) => ItemKind::Dashboard,
        }
    }

    /// The item identifier.
    pub fn id(&self) -> &ItemId {
        match self {
            Self::Folder(folder) => &folder.id,
            Self::Dashboard(dashboard) => &dashboard.id,
        }
    }

    /// The item name.
    pub fn name(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.name,
            Self::Dashboard(dashboard) => &dashboard.name,
        }
    }

    /// The containing folder.
    pub fn parent_id(&self) -> &ItemId {
        match self {
            Self::Folder(folder) => &folder.parent_id,
            Self::Dashboard(dashboard) => &dashboard.parent_id,
        }
    }

    /// Whether this is a protected system-seeded item.
    pub fn is_default(&self) -> bool {
        match self {
            Self::Folder(folder) => folder.is_default,
            Self::Dashboard(dashboard) => dashboard.is_default,
        }
    }

    /// Whether the user starred this item. Folders cannot be starred.
    pub fn is_favorite(&self) -> bool {
        match self {
            Self::Folder(_) => false,
            Self::Dashboard(dashboard) => dashboard.is_favorite,
        }
    }

    /// When the item was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::Folder(folder) => folder.created_at,
            Self::Dashboard(dashboard) => dashboard.created_at,
        }
    }
}

/// Whether an item's name matches a search query (case-insensitive
/// substring on the name only).
pub fn matches_query(item: &ContentItem, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    item.name().to_lowercase().contains(&query.to_lowercase())
}

/// Order two items under a sort key.
///
/// Alphabetical keys compare case-insensitively and break ties by id so the
/// order is total; creation-time keys fall back to id on equal timestamps.
pub fn compare_items(a: &ContentItem, b: &ContentItem, key: SortKey) -> Ordering {
    let by_name = || {
        a.name()
            .to_lowercase()
            .cmp(&b.name().to_lowercase())
            .then_with(|| a.id().cmp(b.id()))
    };
    let by_created = || a.created_at().cmp(&b.created_at()).then_with(|| a.id().cmp(b.id()));

    match key {
        SortKey::AlphaAsc => by_name(),
        SortKey::AlphaDesc => by_name().reverse(),
        SortKey::CreatedAsc => by_created(),
        SortKey::CreatedDesc => by_created().reverse(),
    }
}

/// Sort items in place; `None` preserves insertion/tree order.
pub fn sort_items(items: &mut [ContentItem], key: Option<SortKey>) {
    if let Some(key) = key {
        items.sort_by(|a, b| compare_items(a, b, key));
    }
}
