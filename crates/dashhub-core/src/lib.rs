//! # dashhub-core
//!
//! Core crate for DashHub. Contains configuration schemas, typed
//! identifiers, sort keys, and the unified error system.
//!
//! This crate has **no** internal dependencies on other DashHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
