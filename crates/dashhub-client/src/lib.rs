//! # dashhub-client
//!
//! The content repository port: a thin async client over the backend's
//! folder/dashboard endpoints. No local caching beyond the payload being
//! returned; every render re-fetches.
//!
//! Two implementations are provided: [`http::HttpContentRepository`] for a
//! live backend and [`memory::InMemoryContentRepository`], which carries
//! the backend's authority semantics (sibling-name uniqueness, default-item
//! protection, cycle rejection, cascade delete) for tests and offline use.

pub mod http;
pub mod memory;
pub mod repository;

pub use http::HttpContentRepository;
pub use memory::InMemoryContentRepository;
pub use repository::{ContentRepository, CreateDashboardRequest, CreateFolderRequest};
