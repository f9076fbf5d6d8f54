//! Shared test helpers for integration tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use dashhub_client::{
    ContentRepository, CreateDashboardRequest, CreateFolderRequest, InMemoryContentRepository,
};
use dashhub_core::error::AppError;
use dashhub_core::result::AppResult;
use dashhub_core::types::ItemId;
use dashhub_entity::{FilterState, FilteredList, FolderContents, ItemKind};
use dashhub_service::{ContentView, HierarchyCoordinator, LocationSync, ViewSink};

/// A view sink recording every render and error notification.
#[derive(Default)]
pub struct RecordingSink {
    views: Mutex<Vec<ContentView>>,
    errors: Mutex<Vec<AppError>>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn view_count(&self) -> usize {
        self.views.lock().unwrap().len()
    }

    pub fn error_count(&self) -> usize {
        self.errors.lock().unwrap().len()
    }

    pub fn last_view(&self) -> ContentView {
        self.views
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("nothing rendered yet")
    }

    /// Item names in the last rendered listing, in render order.
    pub fn last_names(&self) -> Vec<String> {
        match self.last_view() {
            ContentView::Tree(contents) => contents
                .items
                .iter()
                .map(|item| item.name().to_string())
                .collect(),
            ContentView::Flat(items) => {
                items.iter().map(|item| item.name().to_string()).collect()
            }
            ContentView::NotFound { .. } => Vec::new(),
        }
    }
}

impl ViewSink for RecordingSink {
    fn render(&self, view: &ContentView) {
        self.views.lock().unwrap().push(view.clone());
    }

    fn notify_error(&self, error: &AppError) {
        self.errors.lock().unwrap().push(error.clone());
    }
}

/// A location port recording every pushed query-parameter set.
#[derive(Default)]
pub struct RecordingLocation {
    pushes: Mutex<Vec<Vec<(String, String)>>>,
}

#[allow(dead_code)]
impl RecordingLocation {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn last_query(&self) -> Vec<(String, String)> {
        self.pushes
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("nothing pushed yet")
    }
}

impl LocationSync for RecordingLocation {
    fn replace_query(&self, pairs: &[(String, String)]) {
        self.pushes.lock().unwrap().push(pairs.to_vec());
    }
}

/// A seeded hierarchy shared by most tests.
///
/// ```text
/// root
/// ├── Infrastructure/        (folder)
/// │   ├── Network/           (folder)
/// │   │   └── Latency        (dashboard)
/// │   └── CPU Usage          (dashboard, starred)
/// ├── Archive/               (folder)
/// ├── Provisioned/           (default folder)
/// │   └── Service Health     (default dashboard)
/// └── Uptime                 (dashboard)
/// ```
#[allow(dead_code)]
pub struct Fixture {
    pub repo: Arc<InMemoryContentRepository>,
    pub infra: ItemId,
    pub network: ItemId,
    pub archive: ItemId,
    pub provisioned: ItemId,
    pub latency: ItemId,
    pub cpu: ItemId,
    pub uptime: ItemId,
}

pub async fn fixture() -> Fixture {
    let repo = Arc::new(InMemoryContentRepository::new());
    let root = ItemId::root();

    let infra = repo.seed_folder("Infrastructure", &root).await;
    let network = repo.seed_folder("Network", &infra).await;
    let archive = repo.seed_folder("Archive", &root).await;
    let provisioned = repo.seed_default_folder("Provisioned", &root).await;
    let latency = repo.seed_dashboard("Latency", &network).await;
    let cpu = repo.seed_dashboard("CPU Usage", &infra).await;
    let uptime = repo.seed_dashboard("Uptime", &root).await;
    repo.seed_default_dashboard("Service Health", &provisioned).await;
    repo.toggle_favorite(&cpu).await.expect("star CPU Usage");

    Fixture {
        repo,
        infra,
        network,
        archive,
        provisioned,
        latency,
        cpu,
        uptime,
    }
}

/// A coordinator over `repo` with recording ports and no search debounce.
pub fn coordinator(
    repo: Arc<dyn ContentRepository>,
) -> (HierarchyCoordinator, Arc<RecordingSink>, Arc<RecordingLocation>) {
    coordinator_with_debounce(repo, Duration::ZERO)
}

pub fn coordinator_with_debounce(
    repo: Arc<dyn ContentRepository>,
    debounce: Duration,
) -> (HierarchyCoordinator, Arc<RecordingSink>, Arc<RecordingLocation>) {
    let sink = RecordingSink::new();
    let location = RecordingLocation::new();
    let coordinator =
        HierarchyCoordinator::new(repo, sink.clone(), location.clone(), debounce);
    (coordinator, sink, location)
}

/// A repository wrapper that counts fetches and can delay them, for
/// debounce and fetch-ordering tests. Delays are consumed per fetch in
/// FIFO order; an exhausted queue means no delay.
pub struct InstrumentedRepository {
    inner: Arc<dyn ContentRepository>,
    delays: Mutex<VecDeque<Duration>>,
    pub list_fetches: AtomicUsize,
    pub tree_fetches: AtomicUsize,
}

#[allow(dead_code)]
impl InstrumentedRepository {
    pub fn new(inner: Arc<dyn ContentRepository>) -> Arc<Self> {
        Arc::new(Self {
            inner,
            delays: Mutex::new(VecDeque::new()),
            list_fetches: AtomicUsize::new(0),
            tree_fetches: AtomicUsize::new(0),
        })
    }

    pub fn push_delay(&self, delay: Duration) {
        self.delays.lock().unwrap().push_back(delay);
    }

    pub fn fetch_count(&self) -> usize {
        self.list_fetches.load(Ordering::SeqCst) + self.tree_fetches.load(Ordering::SeqCst)
    }

    async fn apply_delay(&self) {
        let delay = self.delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl ContentRepository for InstrumentedRepository {
    async fn get_folder_contents(
        &self,
        folder_id: &ItemId,
        folders_only: bool,
    ) -> AppResult<FolderContents> {
        self.tree_fetches.fetch_add(1, Ordering::SeqCst);
        self.apply_delay().await;
        self.inner.get_folder_contents(folder_id, folders_only).await
    }

    async fn get_filtered_list(
        &self,
        folder_id: &ItemId,
        filters: &FilterState,
        kind: Option<ItemKind>,
    ) -> AppResult<FilteredList> {
        self.list_fetches.fetch_add(1, Ordering::SeqCst);
        self.apply_delay().await;
        self.inner.get_filtered_list(folder_id, filters, kind).await
    }

    async fn create_dashboard(&self, req: CreateDashboardRequest) -> AppResult<ItemId> {
        self.inner.create_dashboard(req).await
    }

    async fn create_folder(&self, req: CreateFolderRequest) -> AppResult<ItemId> {
        self.inner.create_folder(req).await
    }

    async fn move_folder(&self, folder_id: &ItemId, new_parent_id: &ItemId) -> AppResult<()> {
        self.inner.move_folder(folder_id, new_parent_id).await
    }

    async fn delete_folder(&self, folder_id: &ItemId) -> AppResult<()> {
        self.inner.delete_folder(folder_id).await
    }

    async fn delete_dashboard(&self, id: &ItemId) -> AppResult<()> {
        self.inner.delete_dashboard(id).await
    }

    async fn toggle_favorite(&self, id: &ItemId) -> AppResult<bool> {
        self.inner.toggle_favorite(id).await
    }
}
