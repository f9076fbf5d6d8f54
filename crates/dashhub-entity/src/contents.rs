//! Response envelopes for the two listing projections.

use serde::{Deserialize, Serialize};

use crate::breadcrumb::Breadcrumb;
use crate::folder::FolderNode;
use crate::item::ContentItem;

/// Tree-view payload: one folder's header, ancestry, and direct children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderContents {
    /// The folder being viewed.
    pub folder: FolderNode,
    /// Raw ancestor chain, root-inclusive, ending at `folder` itself.
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Direct children in insertion order.
    pub items: Vec<ContentItem>,
}

/// Flat-view payload: a filtered/sorted subtree listing, never nested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredList {
    /// Matching items across the whole subtree.
    pub items: Vec<ContentItem>,
    /// Total match count.
    #[serde(rename = "totalCount")]
    pub total_count: u64,
}

impl FilteredList {
    /// Wrap a listing, deriving the count.
    pub fn new(items: Vec<ContentItem>) -> Self {
        let total_count = items.len() as u64;
        Self { items, total_count }
    }
}
