//! # dashhub-service
//!
//! Coordination logic between the content repository and the rendering
//! surface: tree/flat view selection, debounced search, stale-response
//! guarding, URL synchronization, breadcrumb resolution, and gated
//! structural mutations. Rendering itself stays behind the [`ViewSink`]
//! port; no DOM is involved anywhere in this crate.

pub mod hierarchy;

pub use hierarchy::breadcrumb::BreadcrumbResolver;
pub use hierarchy::commands::{Command, CommandOutcome};
pub use hierarchy::coordinator::HierarchyCoordinator;
pub use hierarchy::location::LocationSync;
pub use hierarchy::mutation::{DELETE_CONFIRMATION, DeleteConfirmation};
pub use hierarchy::view::{ContentView, ViewSink};
