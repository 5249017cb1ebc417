//! Error handling
//!
//! Error classification for the scrape workflow plus the formatting
//! helpers that turn failures into envelope messages and log payloads.

pub mod formatting;
pub mod types;

pub use formatting::{format_error, format_error_for_logging};
pub use types::{Error, Result};
