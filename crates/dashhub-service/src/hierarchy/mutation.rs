//! Gating for structural mutations: move-target exclusion and the typed
//! delete confirmation.
//!
//! These checks run before any commit as a first line of defense; the
//! repository remains the authority and its rejection is always honored.

use std::collections::HashSet;

use dashhub_core::result::AppResult;
use dashhub_core::types::ItemId;
use dashhub_entity::{ContentCounts, ContentItem, FilterState, FolderNode, ItemKind};

use dashhub_client::ContentRepository;

/// The literal a user must type to enable a folder delete.
pub const DELETE_CONFIRMATION: &str = "Delete";

/// State of the typed delete confirmation gate.
#[derive(Debug, Clone)]
pub struct DeleteConfirmation {
    /// Recursive counts shown in the confirmation message.
    pub counts: ContentCounts,
    input: String,
}

impl DeleteConfirmation {
    /// Open the gate for a subtree with the given counts.
    pub fn new(counts: ContentCounts) -> Self {
        Self {
            counts,
            input: String::new(),
        }
    }

    /// Record the current confirmation input.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Only the exact literal enables the delete button.
    pub fn is_confirmed(&self) -> bool {
        self.input == DELETE_CONFIRMATION
    }
}

/// Ids a move-target selector must exclude: the folder itself plus every
/// descendant folder.
pub async fn move_exclusions(
    repo: &dyn ContentRepository,
    folder_id: &ItemId,
) -> AppResult<HashSet<ItemId>> {
    let mut excluded = HashSet::from([folder_id.clone()]);
    let descendants = repo
        .get_filtered_list(folder_id, &FilterState::default(), Some(ItemKind::Folder))
        .await?;
    excluded.extend(descendants.items.into_iter().map(|item| item.id().clone()));
    Ok(excluded)
}

/// Folders eligible as a move target for `folder_id`, optionally narrowed
/// by a search query. Excludes the folder's own subtree and default
/// folders; the root is offered separately by the selector.
pub async fn move_target_candidates(
    repo: &dyn ContentRepository,
    folder_id: &ItemId,
    search: &str,
) -> AppResult<Vec<FolderNode>> {
    let excluded = move_exclusions(repo, folder_id).await?;

    let filters = FilterState {
        query: search.trim().to_string(),
        ..FilterState::default()
    };
    let listing = repo
        .get_filtered_list(&ItemId::root(), &filters, Some(ItemKind::Folder))
        .await?;

    Ok(listing
        .items
        .into_iter()
        .filter_map(|item| match item {
            ContentItem::Folder(folder) => Some(folder),
            ContentItem::Dashboard(_) => None,
        })
        .filter(|folder| !excluded.contains(&folder.id) && !folder.is_default)
        .collect())
}
