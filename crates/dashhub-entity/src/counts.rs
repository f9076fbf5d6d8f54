//! Recursive content counts for confirmation messaging.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::item::{ContentItem, ItemKind};

/// Counts over a folder's full recursive descendant set.
///
/// Used only for move/delete confirmation messaging; never cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCounts {
    /// Number of descendant folders.
    pub folders: u64,
    /// Number of descendant dashboards.
    pub dashboards: u64,
    /// Total descendants.
    pub total: u64,
}

impl ContentCounts {
    /// Tally a descendant listing.
    pub fn from_items(items: &[ContentItem]) -> Self {
        let mut counts = Self::default();
        for item in items {
            counts.total += 1;
            match item.kind() {
                ItemKind::Folder => counts.folders += 1,
                ItemKind::Dashboard => counts.dashboards += 1,
            }
        }
        counts
    }
}

impl fmt::Display for ContentCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} items: {} folders, {} dashboards",
            self.total, self.folders, self.dashboards
        )
    }
}
