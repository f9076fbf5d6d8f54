//! Dashboard/folder hierarchy management.

pub mod breadcrumb;
pub mod commands;
pub mod coordinator;
pub mod location;
pub mod mutation;
pub mod view;
