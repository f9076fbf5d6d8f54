//! The `ContentRepository` trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use dashhub_core::result::AppResult;
use dashhub_core::types::ItemId;
use dashhub_entity::{FilterState, FilteredList, FolderContents, ItemKind};

/// Request to create a new dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDashboardRequest {
    /// Dashboard name; must be unique among siblings.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Containing folder.
    #[serde(rename = "parentId")]
    pub parent_id: ItemId,
}

/// Request to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolderRequest {
    /// Folder name; must be unique among siblings.
    pub name: String,
    /// Containing folder.
    #[serde(rename = "parentId")]
    pub parent_id: ItemId,
}

/// Async client over the backend's folder/dashboard endpoints.
///
/// The repository is the authority on every structural invariant. Callers
/// may pre-check (move-target exclusion, empty names) but always honor a
/// rejection from here. All operations are request/response with no cache
/// kept across calls.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Fetch one folder's header, breadcrumbs, and direct children.
    ///
    /// `folders_only` restricts the children to folders, used by the
    /// move-target tree. Fails with `NotFound` for an unknown id.
    async fn get_folder_contents(
        &self,
        folder_id: &ItemId,
        folders_only: bool,
    ) -> AppResult<FolderContents>;

    /// Fetch a flat, filtered/sorted listing of the folder's full subtree.
    ///
    /// `kind` optionally restricts the listing to one item kind.
    async fn get_filtered_list(
        &self,
        folder_id: &ItemId,
        filters: &FilterState,
        kind: Option<ItemKind>,
    ) -> AppResult<FilteredList>;

    /// Create a dashboard; returns the new id.
    ///
    /// Fails with `Validation` on an empty name and `Conflict` on a
    /// duplicate sibling name.
    async fn create_dashboard(&self, req: CreateDashboardRequest) -> AppResult<ItemId>;

    /// Create a folder; same failure modes as `create_dashboard`.
    async fn create_folder(&self, req: CreateFolderRequest) -> AppResult<ItemId>;

    /// Reparent a folder.
    ///
    /// Fails with `InvalidOperation` when the target equals the folder or
    /// is one of its descendants, and with `Forbidden` for default folders.
    async fn move_folder(&self, folder_id: &ItemId, new_parent_id: &ItemId) -> AppResult<()>;

    /// Delete a folder and everything beneath it.
    ///
    /// Fails with `Forbidden` when the folder or any descendant is a
    /// default item; the root sentinel is never deletable.
    async fn delete_folder(&self, folder_id: &ItemId) -> AppResult<()>;

    /// Delete a single dashboard.
    async fn delete_dashboard(&self, id: &ItemId) -> AppResult<()>;

    /// Toggle a dashboard's starred flag; returns the new value.
    async fn toggle_favorite(&self, id: &ItemId) -> AppResult<bool>;
}
