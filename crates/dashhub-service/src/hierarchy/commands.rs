//! Typed commands consumed by the coordinator.
//!
//! Every user action arrives as one of these values, so the whole flow is
//! testable without a DOM. Filter commands mutate state and trigger a
//! re-fetch; mutation commands go to the repository and report their result
//! back to the originating form.

use dashhub_core::types::{ItemId, SortKey};

/// A user action against the hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Search input changed; fetch is debounced.
    SetQuery(String),
    /// Sort selected or cleared. Setting a sort forces the flat view.
    SetSort(Option<SortKey>),
    /// Starred-only checkbox toggled.
    SetStarred(bool),
    /// Reset all filters, restoring the tree view.
    ClearFilters,
    /// Open a different folder.
    Navigate(ItemId),
    /// Re-fetch the current listing.
    Refresh,
    /// Create a dashboard under a folder.
    CreateDashboard {
        /// Dashboard name.
        name: String,
        /// Optional description.
        description: Option<String>,
        /// Containing folder.
        parent_id: ItemId,
    },
    /// Create a folder under a folder.
    CreateFolder {
        /// Folder name.
        name: String,
        /// Containing folder.
        parent_id: ItemId,
    },
    /// Reparent a folder.
    MoveFolder {
        /// The folder to move.
        folder_id: ItemId,
        /// Its new parent.
        new_parent_id: ItemId,
    },
    /// Delete a folder and its whole subtree.
    DeleteFolder {
        /// The folder to delete.
        folder_id: ItemId,
        /// The typed confirmation; must equal the fixed literal.
        confirmation: String,
    },
    /// Delete a single dashboard.
    DeleteDashboard(ItemId),
    /// Toggle a dashboard's star.
    ToggleFavorite(ItemId),
}

/// What a successfully dispatched command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// State updated; any new listing went through the view sink.
    None,
    /// An item was created.
    Created(ItemId),
    /// The starred flag's new value.
    Favorite(bool),
}
