//! Shared utilities, configuration, and error handling for Pressrun
//!
//! This crate provides common functionality used across the Pressrun service:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping
//! - The validated JSON extractor
//! - Screen primitives (state machine errors, user notices)

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod notice;
pub mod state;

pub use config::Config;
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
pub use notice::{Notice, NoticeKind};
pub use state::StateError;
