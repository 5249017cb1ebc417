//! Request type definitions
//!
//! Defines the caller-supplied inputs for a scrape call.

use serde::{Deserialize, Serialize};

/// Portal login credentials for one scrape call
///
/// Supplied per call and never persisted; the scraper discards them along
/// with the call's cookie jar when the call completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Portal account username
    pub username: String,
    /// Portal account password
    pub password: String,
}

impl Credentials {
    /// Create new credentials
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Query parameters accepted by the scrape endpoint
///
/// Both parameters are optional at the deserialization layer so the
/// handler can reject incomplete requests with the fixed 400 message
/// instead of axum's generic extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScrapeQuery {
    /// Portal account username
    pub username: Option<String>,
    /// Portal account password
    pub password: Option<String>,
}

impl ScrapeQuery {
    /// Extract credentials, treating absent or empty parameters as missing
    pub fn credentials(&self) -> Option<Credentials> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Some(Credentials::new(username, password))
            }
            _ => None,
        }
    }
}
