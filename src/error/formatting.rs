//! Error formatting
//!
//! Renders errors for the JSON envelope and for structured logs.

use crate::Error;
use std::error::Error as StdError;

/// Message surfaced in the `error` field of the JSON envelope
///
/// The error's own display text, with any nested causes appended that the
/// text does not already mention.
pub fn format_error(error: &Error) -> String {
    let mut message = error.to_string();

    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message = format!("{} (caused by {})", message, cause_text);
        }
        source = cause.source();
    }

    message
}

/// Structured log payload for a failed scrape
pub fn format_error_for_logging(error: &Error) -> serde_json::Value {
    match error {
        Error::PageLoad { page, status } => serde_json::json!({
            "message": format_error(error),
            "category": error.category(),
            "page": page,
            "status": status,
        }),
        Error::Auth { final_url } => serde_json::json!({
            "message": format_error(error),
            "category": error.category(),
            "final_url": final_url,
        }),
        _ => serde_json::json!({
            "message": format_error(error),
            "category": error.category(),
        }),
    }
}
