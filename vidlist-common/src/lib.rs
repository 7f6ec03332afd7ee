//! # Vidlist Common Library
//!
//! Shared code for the vidlist catalog service:
//! - Error taxonomy
//! - Watch-URL validation and identifier extraction
//! - Database schema and video repository queries

pub mod db;
pub mod error;
pub mod watch_url;

pub use error::{Error, Result};
