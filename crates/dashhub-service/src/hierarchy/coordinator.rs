//! The hierarchy coordinator: one owner for page state.
//!
//! Owns the current folder id and `FilterState`, decides tree versus flat
//! rendering, debounces search input, guards against stale fetch results,
//! and issues structural mutations. All collaborators are ports: the
//! repository, the view sink, and the page location.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use dashhub_core::error::{AppError, ErrorKind};
use dashhub_core::result::AppResult;
use dashhub_core::types::{ItemId, SortKey};
use dashhub_entity::{ContentCounts, FilterState, FilteredList, FolderContents, FolderNode};

use dashhub_client::{ContentRepository, CreateDashboardRequest, CreateFolderRequest};

use crate::hierarchy::breadcrumb::BreadcrumbResolver;
use crate::hierarchy::commands::{Command, CommandOutcome};
use crate::hierarchy::location::{self, LocationSync};
use crate::hierarchy::mutation::{self, DELETE_CONFIRMATION, DeleteConfirmation};
use crate::hierarchy::view::{ContentView, ViewSink};

/// Mutable page state. Only the coordinator writes it, and only from the
/// dispatching flow, never from a completed background fetch.
#[derive(Debug)]
struct PageState {
    /// The folder being viewed.
    folder_id: ItemId,
    /// Active filters; the single source of truth for view selection.
    filters: FilterState,
    /// Last known parent of the viewed folder, for navigating "up".
    parent_id: ItemId,
}

/// A fetched listing, one variant per projection.
enum FetchPayload {
    Tree(FolderContents),
    Flat(FilteredList),
}

/// Coordinates the repository, the filter state, and the rendering surface.
#[derive(Clone)]
pub struct HierarchyCoordinator {
    repo: Arc<dyn ContentRepository>,
    sink: Arc<dyn ViewSink>,
    location: Arc<dyn LocationSync>,
    state: Arc<RwLock<PageState>>,
    /// Sequence of issued fetches; a result renders only while it is still
    /// the latest.
    fetch_seq: Arc<AtomicU64>,
    /// Generation of search input; a debounced fetch fires only if no
    /// newer keystroke superseded it.
    query_gen: Arc<AtomicU64>,
    debounce: Duration,
}

impl HierarchyCoordinator {
    /// Create a coordinator viewing the root folder with no filters.
    pub fn new(
        repo: Arc<dyn ContentRepository>,
        sink: Arc<dyn ViewSink>,
        location: Arc<dyn LocationSync>,
        debounce: Duration,
    ) -> Self {
        Self::with_state(repo, sink, location, debounce, ItemId::root(), FilterState::default())
    }

    /// Create a coordinator seeded from URL state (deep link).
    pub fn with_state(
        repo: Arc<dyn ContentRepository>,
        sink: Arc<dyn ViewSink>,
        location: Arc<dyn LocationSync>,
        debounce: Duration,
        folder_id: ItemId,
        filters: FilterState,
    ) -> Self {
        Self {
            repo,
            sink,
            location,
            state: Arc::new(RwLock::new(PageState {
                folder_id,
                filters,
                parent_id: ItemId::root(),
            })),
            fetch_seq: Arc::new(AtomicU64::new(0)),
            query_gen: Arc::new(AtomicU64::new(0)),
            debounce,
        }
    }

    /// Create a coordinator seeded from raw URL query parameters.
    pub fn from_location<'a, I>(
        repo: Arc<dyn ContentRepository>,
        sink: Arc<dyn ViewSink>,
        location: Arc<dyn LocationSync>,
        debounce: Duration,
        pairs: I,
    ) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let (folder_id, filters) = location::initial_state(pairs);
        Self::with_state(repo, sink, location, debounce, folder_id, filters)
    }

    /// The folder currently being viewed.
    pub async fn current_folder(&self) -> ItemId {
        self.state.read().await.folder_id.clone()
    }

    /// A snapshot of the active filters.
    pub async fn current_filters(&self) -> FilterState {
        self.state.read().await.filters.clone()
    }

    /// Whether the next render uses the flat projection.
    pub async fn in_flat_view(&self) -> bool {
        self.state.read().await.filters.is_active()
    }

    /// Last known parent of the viewed folder, for the "up" affordance.
    /// Root until a tree render has resolved the ancestry.
    pub async fn parent_folder(&self) -> ItemId {
        self.state.read().await.parent_id.clone()
    }

    /// Initial load: push the canonical URL form and fetch.
    pub async fn load(&self) {
        self.sync_location().await;
        self.refresh().await;
    }

    /// Dispatch one user action.
    pub async fn dispatch(&self, command: Command) -> AppResult<CommandOutcome> {
        match command {
            Command::SetQuery(query) => {
                self.set_query(query).await;
                Ok(CommandOutcome::None)
            }
            Command::SetSort(sort) => {
                self.set_sort(sort).await;
                Ok(CommandOutcome::None)
            }
            Command::SetStarred(starred) => {
                self.set_starred(starred).await;
                Ok(CommandOutcome::None)
            }
            Command::ClearFilters => {
                self.clear_filters().await;
                Ok(CommandOutcome::None)
            }
            Command::Navigate(folder_id) => {
                self.navigate(folder_id).await;
                Ok(CommandOutcome::None)
            }
            Command::Refresh => {
                self.refresh().await;
                Ok(CommandOutcome::None)
            }
            Command::CreateDashboard {
                name,
                description,
                parent_id,
            } => self.create_dashboard(name, description, parent_id).await,
            Command::CreateFolder { name, parent_id } => {
                self.create_folder(name, parent_id).await
            }
            Command::MoveFolder {
                folder_id,
                new_parent_id,
            } => self.move_folder(folder_id, new_parent_id).await,
            Command::DeleteFolder {
                folder_id,
                confirmation,
            } => self.delete_folder(folder_id, confirmation).await,
            Command::DeleteDashboard(id) => {
                self.repo.delete_dashboard(&id).await?;
                info!(%id, "Dashboard deleted");
                self.refresh().await;
                Ok(CommandOutcome::None)
            }
            Command::ToggleFavorite(id) => {
                let starred = self.repo.toggle_favorite(&id).await?;
                self.refresh().await;
                Ok(CommandOutcome::Favorite(starred))
            }
        }
    }

    /// Fetch and render the current listing.
    ///
    /// Each call takes a new sequence number; when it resolves, the result
    /// is dropped unless it is still the most recent request in flight.
    /// The superseded network call is not cancelled, only ignored.
    pub async fn refresh(&self) {
        let seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let (folder_id, filters) = {
            let state = self.state.read().await;
            (state.folder_id.clone(), state.filters.clone())
        };

        let result = if filters.is_active() {
            self.repo
                .get_filtered_list(&folder_id, &filters, None)
                .await
                .map(FetchPayload::Flat)
        } else {
            self.repo
                .get_folder_contents(&folder_id, false)
                .await
                .map(FetchPayload::Tree)
        };

        if self.fetch_seq.load(Ordering::SeqCst) != seq {
            debug!(seq, %folder_id, "Dropping stale fetch result");
            return;
        }

        match result {
            Ok(FetchPayload::Tree(contents)) => {
                self.state.write().await.parent_id =
                    BreadcrumbResolver::parent_of(&contents.breadcrumbs);
                self.sink.render(&ContentView::Tree(contents));
            }
            Ok(FetchPayload::Flat(listing)) => {
                self.sink.render(&ContentView::Flat(listing.items));
            }
            Err(err) if err.kind == ErrorKind::NotFound => {
                warn!(%folder_id, "Viewed folder no longer exists");
                self.sink.render(&ContentView::NotFound { folder_id });
            }
            Err(err) => {
                // Transient failure: keep the last-known-good listing.
                warn!(%folder_id, error = %err, "Fetch failed");
                self.sink.notify_error(&err);
            }
        }
    }

    /// Recursive counts for a delete/move confirmation message.
    pub async fn delete_preview(&self, folder_id: &ItemId) -> AppResult<ContentCounts> {
        let listing = self
            .repo
            .get_filtered_list(folder_id, &FilterState::default(), None)
            .await?;
        Ok(ContentCounts::from_items(&listing.items))
    }

    /// Open a typed confirmation gate for deleting `folder_id`.
    pub async fn delete_confirmation(&self, folder_id: &ItemId) -> AppResult<DeleteConfirmation> {
        Ok(DeleteConfirmation::new(self.delete_preview(folder_id).await?))
    }

    /// Folders offered by the move-target selector, with the moving
    /// folder's subtree and default folders excluded.
    pub async fn move_target_candidates(
        &self,
        folder_id: &ItemId,
        search: &str,
    ) -> AppResult<Vec<FolderNode>> {
        mutation::move_target_candidates(self.repo.as_ref(), folder_id, search).await
    }

    async fn set_query(&self, query: String) {
        let generation = self.query_gen.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.write().await;
            state.filters.query = query.trim().to_string();
        }
        self.sync_location().await;

        if self.debounce.is_zero() {
            self.refresh().await;
            return;
        }

        let coordinator = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(coordinator.debounce).await;
            if coordinator.query_gen.load(Ordering::SeqCst) == generation {
                coordinator.refresh().await;
            } else {
                debug!(generation, "Keystroke superseded, skipping fetch");
            }
        });
    }

    async fn set_sort(&self, sort: Option<SortKey>) {
        self.state.write().await.filters.sort = sort;
        self.sync_location().await;
        self.refresh().await;
    }

    async fn set_starred(&self, starred: bool) {
        self.state.write().await.filters.starred = starred;
        self.sync_location().await;
        self.refresh().await;
    }

    async fn clear_filters(&self) {
        // Invalidate any pending debounced keystroke as well.
        self.query_gen.fetch_add(1, Ordering::SeqCst);
        self.state.write().await.filters.clear();
        self.sync_location().await;
        self.refresh().await;
    }

    /// Open another folder. Filters reset, as on a fresh page load.
    async fn navigate(&self, folder_id: ItemId) {
        self.query_gen.fetch_add(1, Ordering::SeqCst);
        {
            let mut state = self.state.write().await;
            state.folder_id = folder_id;
            state.filters.clear();
        }
        self.sync_location().await;
        self.refresh().await;
    }

    async fn create_dashboard(
        &self,
        name: String,
        description: Option<String>,
        parent_id: ItemId,
    ) -> AppResult<CommandOutcome> {
        let name = name.trim().to_string();
        if name.is_empty() {
            // Recovered locally; no network call needed to detect this.
            return Err(AppError::validation("Dashboard name is required"));
        }

        let id = self
            .repo
            .create_dashboard(CreateDashboardRequest {
                name,
                description: description.filter(|d| !d.trim().is_empty()),
                parent_id,
            })
            .await?;
        info!(%id, "Dashboard created");
        self.refresh().await;
        Ok(CommandOutcome::Created(id))
    }

    async fn create_folder(&self, name: String, parent_id: ItemId) -> AppResult<CommandOutcome> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::validation("Folder name is required"));
        }

        let id = self
            .repo
            .create_folder(CreateFolderRequest { name, parent_id })
            .await?;
        info!(%id, "Folder created");
        // The original console opens a newly created folder directly.
        self.navigate(id.clone()).await;
        Ok(CommandOutcome::Created(id))
    }

    async fn move_folder(
        &self,
        folder_id: ItemId,
        new_parent_id: ItemId,
    ) -> AppResult<CommandOutcome> {
        // Pre-check mirrors the selector's exclusion list; the repository
        // remains the authority.
        let excluded = mutation::move_exclusions(self.repo.as_ref(), &folder_id).await?;
        if excluded.contains(&new_parent_id) {
            return Err(AppError::invalid_operation(
                "Cannot move a folder into itself or its descendants",
            ));
        }

        self.repo.move_folder(&folder_id, &new_parent_id).await?;
        info!(%folder_id, %new_parent_id, "Folder moved");
        self.refresh().await;
        Ok(CommandOutcome::None)
    }

    async fn delete_folder(
        &self,
        folder_id: ItemId,
        confirmation: String,
    ) -> AppResult<CommandOutcome> {
        if confirmation != DELETE_CONFIRMATION {
            return Err(AppError::validation(format!(
                "Type \"{DELETE_CONFIRMATION}\" to confirm deletion"
            )));
        }

        // Capture the parent before the folder disappears.
        let contents = self.repo.get_folder_contents(&folder_id, true).await?;
        let parent_id = BreadcrumbResolver::parent_of(&contents.breadcrumbs);

        self.repo.delete_folder(&folder_id).await?;
        info!(%folder_id, "Folder deleted");

        let viewing_deleted = self.state.read().await.folder_id == folder_id;
        if viewing_deleted {
            // Navigate up; the root listing when the parent was root.
            self.navigate(parent_id).await;
        } else {
            self.refresh().await;
        }
        Ok(CommandOutcome::None)
    }

    /// Push the current folder and filters into the page URL.
    async fn sync_location(&self) {
        let pairs = {
            let state = self.state.read().await;
            location::query_pairs(&state.folder_id, &state.filters)
        };
        self.location.replace_query(&pairs);
    }
}
