//! In-memory implementation of the content repository.
//!
//! Carries the backend's authority semantics (sibling-name uniqueness,
//! default-item protection, cycle rejection, cascade delete) so the
//! coordinator can be exercised without a network. Single node storage:
//! an item table plus per-parent insertion order, mirroring the backend's
//! folder structure file.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use async_trait::async_trait;

use dashhub_core::error::AppError;
use dashhub_core::result::AppResult;
use dashhub_core::types::ItemId;
use dashhub_entity::item::{matches_query, sort_items};
use dashhub_entity::{
    Breadcrumb, ContentItem, DashboardRef, FilterState, FilteredList, FolderContents, FolderNode,
    ItemKind,
};

use crate::repository::{ContentRepository, CreateDashboardRequest, CreateFolderRequest};

/// One stored folder or dashboard.
#[derive(Debug, Clone)]
struct StoredItem {
    name: String,
    kind: ItemKind,
    /// `None` only for the root sentinel.
    parent_id: Option<ItemId>,
    is_default: bool,
    is_favorite: bool,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

/// The item table plus per-parent insertion order.
#[derive(Debug, Default)]
struct Store {
    items: HashMap<ItemId, StoredItem>,
    order: HashMap<ItemId, Vec<ItemId>>,
    last_created_at: Option<DateTime<Utc>>,
}

impl Store {
    fn get(&self, id: &ItemId) -> Option<&StoredItem> {
        self.items.get(id)
    }

    fn folder(&self, id: &ItemId) -> AppResult<&StoredItem> {
        match self.get(id) {
            Some(item) if item.kind == ItemKind::Folder => Ok(item),
            _ => Err(AppError::not_found(format!("Folder not found: {id}"))),
        }
    }

    fn children(&self, id: &ItemId) -> &[ItemId] {
        self.order.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn has_sibling_named(&self, parent_id: &ItemId, name: &str) -> bool {
        self.children(parent_id)
            .iter()
            .filter_map(|child_id| self.get(child_id))
            .any(|child| child.name == name)
    }

    /// Whether `candidate` sits inside `folder`'s subtree.
    fn is_descendant_of(&self, candidate: &ItemId, folder: &ItemId) -> bool {
        let mut current = self.get(candidate).and_then(|item| item.parent_id.clone());
        while let Some(id) = current {
            if id == *folder {
                return true;
            }
            current = self.get(&id).and_then(|item| item.parent_id.clone());
        }
        false
    }

    /// Every id in the subtree, the folder itself first.
    fn collect_subtree(&self, folder_id: &ItemId) -> Vec<ItemId> {
        let mut collected = vec![folder_id.clone()];
        for child_id in self.children(folder_id) {
            match self.get(child_id).map(|child| child.kind) {
                Some(ItemKind::Folder) => collected.extend(self.collect_subtree(child_id)),
                Some(ItemKind::Dashboard) => collected.push(child_id.clone()),
                None => {}
            }
        }
        collected
    }

    fn item_view(&self, id: &ItemId) -> Option<ContentItem> {
        let stored = self.get(id)?;
        let parent_id = stored.parent_id.clone().unwrap_or_else(ItemId::root);
        Some(match stored.kind {
            ItemKind::Folder => ContentItem::Folder(FolderNode {
                id: id.clone(),
                name: stored.name.clone(),
                parent_id,
                is_default: stored.is_default,
                child_count: self.children(id).len() as u64,
                created_at: stored.created_at,
            }),
            ItemKind::Dashboard => ContentItem::Dashboard(DashboardRef {
                id: id.clone(),
                name: stored.name.clone(),
                parent_id,
                is_favorite: stored.is_favorite,
                is_default: stored.is_default,
                description: stored.description.clone(),
                created_at: stored.created_at,
            }),
        })
    }

    /// Raw ancestor chain, root first, ending at the folder itself.
    fn breadcrumbs(&self, folder_id: &ItemId) -> Vec<Breadcrumb> {
        let mut chain = Vec::new();
        let mut current = Some(folder_id.clone());
        while let Some(id) = current {
            let Some(item) = self.get(&id) else { break };
            chain.push(Breadcrumb::new(id, item.name.clone()));
            current = item.parent_id.clone();
        }
        chain.reverse();
        chain
    }

    /// Strictly monotonic creation timestamps keep creation-time sorting
    /// deterministic even for back-to-back inserts.
    fn next_created_at(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamped = match self.last_created_at {
            Some(last) if now <= last => last + Duration::milliseconds(1),
            _ => now,
        };
        self.last_created_at = Some(stamped);
        stamped
    }

    fn insert(&mut self, parent_id: &ItemId, item: StoredItem) -> ItemId {
        let id = ItemId::new(Uuid::new_v4().to_string());
        if item.kind == ItemKind::Folder {
            self.order.insert(id.clone(), Vec::new());
        }
        self.items.insert(id.clone(), item);
        self.order.entry(parent_id.clone()).or_default().push(id.clone());
        id
    }
}

/// Content repository backed by process memory.
#[derive(Debug, Clone)]
pub struct InMemoryContentRepository {
    store: Arc<RwLock<Store>>,
}

impl Default for InMemoryContentRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryContentRepository {
    /// Create a repository containing only the root sentinel.
    pub fn new() -> Self {
        let mut store = Store::default();
        let root_created = store.next_created_at();
        store.items.insert(
            ItemId::root(),
            StoredItem {
                name: "Dashboards".to_string(),
                kind: ItemKind::Folder,
                parent_id: None,
                is_default: false,
                is_favorite: false,
                description: None,
                created_at: root_created,
            },
        );
        store.order.insert(ItemId::root(), Vec::new());
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Seed a user folder, bypassing request validation.
    pub async fn seed_folder(&self, name: &str, parent_id: &ItemId) -> ItemId {
        self.seed(name, parent_id, ItemKind::Folder, false).await
    }

    /// Seed a protected default folder.
    pub async fn seed_default_folder(&self, name: &str, parent_id: &ItemId) -> ItemId {
        self.seed(name, parent_id, ItemKind::Folder, true).await
    }

    /// Seed a user dashboard.
    pub async fn seed_dashboard(&self, name: &str, parent_id: &ItemId) -> ItemId {
        self.seed(name, parent_id, ItemKind::Dashboard, false).await
    }

    /// Seed a protected default dashboard.
    pub async fn seed_default_dashboard(&self, name: &str, parent_id: &ItemId) -> ItemId {
        self.seed(name, parent_id, ItemKind::Dashboard, true).await
    }

    async fn seed(&self, name: &str, parent_id: &ItemId, kind: ItemKind, is_default: bool) -> ItemId {
        let mut store = self.store.write().await;
        let created_at = store.next_created_at();
        store.insert(
            parent_id,
            StoredItem {
                name: name.to_string(),
                kind,
                parent_id: Some(parent_id.clone()),
                is_default,
                is_favorite: false,
                description: None,
                created_at,
            },
        )
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn get_folder_contents(
        &self,
        folder_id: &ItemId,
        folders_only: bool,
    ) -> AppResult<FolderContents> {
        let store = self.store.read().await;
        store.folder(folder_id)?;

        let Some(ContentItem::Folder(folder)) = store.item_view(folder_id) else {
            return Err(AppError::not_found(format!("Folder not found: {folder_id}")));
        };

        let items = store
            .children(folder_id)
            .iter()
            .filter_map(|child_id| store.item_view(child_id))
            .filter(|item| !folders_only || item.kind() == ItemKind::Folder)
            .collect();

        Ok(FolderContents {
            folder,
            breadcrumbs: store.breadcrumbs(folder_id),
            items,
        })
    }

    async fn get_filtered_list(
        &self,
        folder_id: &ItemId,
        filters: &FilterState,
        kind: Option<ItemKind>,
    ) -> AppResult<FilteredList> {
        let store = self.store.read().await;
        store.folder(folder_id)?;

        let mut items: Vec<ContentItem> = store
            .collect_subtree(folder_id)
            .into_iter()
            .skip(1) // the folder itself is not part of its own listing
            .filter_map(|id| store.item_view(&id))
            .filter(|item| kind.is_none_or(|k| item.kind() == k))
            .filter(|item| matches_query(item, &filters.query))
            .filter(|item| !filters.starred || item.is_favorite())
            .collect();

        sort_items(&mut items, filters.sort);
        Ok(FilteredList::new(items))
    }

    async fn create_dashboard(&self, req: CreateDashboardRequest) -> AppResult<ItemId> {
        let name = req.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Dashboard name cannot be empty"));
        }

        let mut store = self.store.write().await;
        store.folder(&req.parent_id)?;
        if store.has_sibling_named(&req.parent_id, name) {
            return Err(AppError::conflict(
                "Dashboard name already exists in this folder",
            ));
        }

        let created_at = store.next_created_at();
        let id = store.insert(
            &req.parent_id,
            StoredItem {
                name: name.to_string(),
                kind: ItemKind::Dashboard,
                parent_id: Some(req.parent_id.clone()),
                is_default: false,
                is_favorite: false,
                description: req.description.clone(),
                created_at,
            },
        );
        info!(%id, parent_id = %req.parent_id, name, "Dashboard created");
        Ok(id)
    }

    async fn create_folder(&self, req: CreateFolderRequest) -> AppResult<ItemId> {
        let name = req.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        let mut store = self.store.write().await;
        store.folder(&req.parent_id)?;
        if store.has_sibling_named(&req.parent_id, name) {
            return Err(AppError::conflict(
                "Folder with same name already exists in this location",
            ));
        }

        let created_at = store.next_created_at();
        let id = store.insert(
            &req.parent_id,
            StoredItem {
                name: name.to_string(),
                kind: ItemKind::Folder,
                parent_id: Some(req.parent_id.clone()),
                is_default: false,
                is_favorite: false,
                description: None,
                created_at,
            },
        );
        info!(%id, parent_id = %req.parent_id, name, "Folder created");
        Ok(id)
    }

    async fn move_folder(&self, folder_id: &ItemId, new_parent_id: &ItemId) -> AppResult<()> {
        let mut store = self.store.write().await;

        let folder = store.folder(folder_id)?;
        if folder_id.is_root() {
            return Err(AppError::forbidden("Cannot move the root folder"));
        }
        if folder.is_default {
            return Err(AppError::forbidden("Cannot move a default folder"));
        }
        store.folder(new_parent_id)?;

        if new_parent_id == folder_id {
            return Err(AppError::invalid_operation(
                "Cannot move a folder into itself",
            ));
        }
        if store.is_descendant_of(new_parent_id, folder_id) {
            return Err(AppError::invalid_operation(
                "Cannot move a folder into one of its descendants",
            ));
        }

        let old_parent_id = store
            .get(folder_id)
            .and_then(|item| item.parent_id.clone())
            .unwrap_or_else(ItemId::root);
        if let Some(siblings) = store.order.get_mut(&old_parent_id) {
            siblings.retain(|id| id != folder_id);
        }
        store
            .order
            .entry(new_parent_id.clone())
            .or_default()
            .push(folder_id.clone());
        if let Some(item) = store.items.get_mut(folder_id) {
            item.parent_id = Some(new_parent_id.clone());
        }

        info!(%folder_id, %new_parent_id, "Folder moved");
        Ok(())
    }

    async fn delete_folder(&self, folder_id: &ItemId) -> AppResult<()> {
        let mut store = self.store.write().await;

        store.folder(folder_id)?;
        if folder_id.is_root() {
            return Err(AppError::forbidden("Cannot delete the root folder"));
        }

        let subtree = store.collect_subtree(folder_id);
        let protects_default = subtree
            .iter()
            .filter_map(|id| store.get(id))
            .any(|item| item.is_default);
        if protects_default {
            return Err(AppError::forbidden(
                "Cannot delete default items or folders containing them",
            ));
        }

        let parent_id = store
            .get(folder_id)
            .and_then(|item| item.parent_id.clone())
            .unwrap_or_else(ItemId::root);
        if let Some(siblings) = store.order.get_mut(&parent_id) {
            siblings.retain(|id| id != folder_id);
        }
        for id in &subtree {
            store.items.remove(id);
            store.order.remove(id);
        }

        info!(%folder_id, removed = subtree.len(), "Folder deleted");
        Ok(())
    }

    async fn delete_dashboard(&self, id: &ItemId) -> AppResult<()> {
        let mut store = self.store.write().await;

        let Some(item) = store.get(id) else {
            return Err(AppError::not_found(format!("Dashboard not found: {id}")));
        };
        if item.kind != ItemKind::Dashboard {
            return Err(AppError::not_found(format!("Dashboard not found: {id}")));
        }
        if item.is_default {
            return Err(AppError::forbidden("Cannot delete a default dashboard"));
        }

        let parent_id = item.parent_id.clone().unwrap_or_else(ItemId::root);
        if let Some(siblings) = store.order.get_mut(&parent_id) {
            siblings.retain(|sibling| sibling != id);
        }
        store.items.remove(id);

        info!(%id, "Dashboard deleted");
        Ok(())
    }

    async fn toggle_favorite(&self, id: &ItemId) -> AppResult<bool> {
        let mut store = self.store.write().await;

        match store.items.get_mut(id) {
            Some(item) if item.kind == ItemKind::Dashboard => {
                item.is_favorite = !item.is_favorite;
                Ok(item.is_favorite)
            }
            _ => Err(AppError::not_found(format!("Dashboard not found: {id}"))),
        }
    }
}
