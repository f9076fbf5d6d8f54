//! # dashhub-entity
//!
//! Domain value objects for DashHub. Every struct in this crate represents
//! a piece of backend payload or page state. All entities derive `Debug`,
//! `Clone`, `Serialize`, and `Deserialize`.

pub mod breadcrumb;
pub mod contents;
pub mod counts;
pub mod dashboard;
pub mod filter;
pub mod folder;
pub mod item;

pub use breadcrumb::Breadcrumb;
pub use contents::{FilteredList, FolderContents};
pub use counts::ContentCounts;
pub use dashboard::DashboardRef;
pub use filter::FilterState;
pub use folder::FolderNode;
pub use item::{ContentItem, ItemKind};
