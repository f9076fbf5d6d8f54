//! The rendering port and the payloads pushed through it.

use dashhub_core::error::AppError;
use dashhub_core::types::ItemId;
use dashhub_entity::{ContentItem, FolderContents};

/// What the (out-of-scope) grid widget should render.
///
/// Tree and flat are two projections over the same item set; the error view
/// replaces the listing only for a dead deep link. Transient failures never
/// produce a view of their own.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentView {
    /// Nested, expandable rendering of a folder's direct children.
    Tree(FolderContents),
    /// Non-nested rendering of a filtered/sorted subtree listing.
    Flat(Vec<ContentItem>),
    /// The requested folder no longer exists (stale deep link).
    NotFound {
        /// The id that failed to resolve.
        folder_id: ItemId,
    },
}

/// Rendering surface for the coordinator.
///
/// Implementations wrap the actual grid widget; tests record calls.
pub trait ViewSink: Send + Sync {
    /// Replace the current listing.
    fn render(&self, view: &ContentView);

    /// Raise a dismissible notification; the current listing is kept.
    fn notify_error(&self, error: &AppError);
}
