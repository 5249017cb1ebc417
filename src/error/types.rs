//! Error types
//!
//! The scrape workflow has three failure kinds of its own — page load,
//! authentication, caller validation — and the rest of the enum covers
//! the surrounding transport, config and serialization plumbing.

use thiserror::Error;

/// Every way a scrape call or its plumbing can fail
#[derive(Debug, Error)]
pub enum Error {
    /// Non-success HTTP status while fetching an upstream portal page
    #[error("Failed to load {page}: {status}")]
    PageLoad {
        /// Which page was being fetched (login page, usage page)
        page: String,
        /// The HTTP status code the portal returned
        status: u16,
    },

    /// Post-login redirect landed somewhere other than the dashboard
    #[error("Login failed. Final URL: {final_url}")]
    Auth {
        /// Where the portal redirected the login submission
        final_url: String,
    },

    /// Missing or invalid caller-supplied input, surfaced as HTTP 400
    #[error("{0}")]
    Validation(String),

    /// Transport-level failure talking to the portal (DNS, reset, timeout)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Bad configuration value
    #[error("Configuration error in {field}: {message}")]
    Config {
        /// The offending configuration field
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// JSON encoding or decoding failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unparseable TOML
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Unparseable URL
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Filesystem failure reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Page-load error for an upstream fetch
    pub fn page_load(page: impl Into<String>, status: u16) -> Self {
        Self::PageLoad {
            page: page.into(),
            status,
        }
    }

    /// Authentication error carrying the observed redirect target
    pub fn auth(final_url: impl Into<String>) -> Self {
        Self::Auth {
            final_url: final_url.into(),
        }
    }

    /// Validation error with the message surfaced verbatim
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Configuration error for a named field
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// HTTP status the error surfaces as in the JSON envelope
    ///
    /// Validation errors are the caller's fault (400); everything else in
    /// the scrape path is reported as an internal failure (500).
    pub fn http_status(&self) -> axum::http::StatusCode {
        match self {
            Error::Validation(..) => axum::http::StatusCode::BAD_REQUEST,
            _ => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Error::PageLoad { .. } => "page_load",
            Error::Auth { .. } => "auth",
            Error::Validation(..) => "validation",
            Error::Http(..) => "http",
            Error::Config { .. } => "config",
            Error::Json(..) => "json",
            Error::Toml(..) => "toml",
            Error::Url(..) => "url",
            Error::Io(..) => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_page_load_error_message_contains_status() {
        let err = Error::page_load("login page", 503);
        assert_eq!(err.to_string(), "Failed to load login page: 503");
        assert_eq!(err.category(), "page_load");
    }

    #[test]
    fn test_auth_error_message_contains_final_url() {
        let err = Error::auth("https://portal.example/customer/?error=1");
        assert_eq!(
            err.to_string(),
            "Login failed. Final URL: https://portal.example/customer/?error=1"
        );
        assert_eq!(err.category(), "auth");
    }

    #[test]
    fn test_validation_error_displays_message_verbatim() {
        let err = Error::validation("Missing \"username\" or \"password\" query parameters.");
        assert_eq!(
            err.to_string(),
            "Missing \"username\" or \"password\" query parameters."
        );
    }

    #[test]
    fn test_only_validation_maps_to_bad_request() {
        assert_eq!(
            Error::validation("bad input").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::page_load("usage page", 500).http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::auth("https://portal.example/").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::config("port", "cannot be 0").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_config_error_names_the_field() {
        let err = Error::config("port", "cannot be 0");
        assert_eq!(err.to_string(), "Configuration error in port: cannot be 0");
        assert_eq!(err.category(), "config");
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert_eq!(err.category(), "json");
    }

    #[test]
    fn test_url_error_converts() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err: Error = url_err.into();
        assert!(matches!(err, Error::Url(_)));
    }
}
