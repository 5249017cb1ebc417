//! Application settings
//!
//! One [`Settings`] tree covering the listening server, the upstream
//! portal endpoints, the outbound HTTP client and logging. Every field
//! has a default, so a missing config file or a partial one is fine.

use serde::{Deserialize, Serialize};
use std::time::Duration;

// Timeouts are written as plain seconds in the TOML file
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

/// Resolved configuration for both server and fetch modes
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Listening server configuration
    pub server: ServerSettings,
    /// Upstream portal endpoints
    pub portal: PortalSettings,
    /// Logging configuration
    pub logging: LoggingSettings,
    /// Outbound HTTP client configuration
    pub network: NetworkSettings,
}

/// Listening server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Host to bind, `"::"` or `"0.0.0.0"` or a literal IP
    pub host: String,
    /// Listening port
    pub port: u16,
    /// Per-request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "::".to_string(),
            port: 3000,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Upstream portal endpoints
///
/// The scrape workflow depends on the portal's exact HTML structure;
/// these paths relocate the pages, not their markup contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalSettings {
    /// Portal base URL, no trailing slash
    pub base_url: String,
    /// Path of the login page carrying the CSRF token
    pub login_page_path: String,
    /// Path the login form is submitted to
    pub login_action_path: String,
    /// Path of the usage-log page
    pub usage_log_path: String,
    /// Suffix the post-login redirect URL must end with
    pub dashboard_suffix: String,
}

impl Default for PortalSettings {
    fn default() -> Self {
        Self {
            base_url: "https://user.orangecommunication.org".to_string(),
            login_page_path: "/customer/".to_string(),
            login_action_path: "/customer/login".to_string(),
            usage_log_path: "/customer/syslog".to_string(),
            dashboard_suffix: "/dashboard".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Force debug-level logging
    pub verbose: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            verbose: false,
        }
    }
}

/// Outbound HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSettings {
    /// Connect timeout in seconds
    pub connect_timeout: u64,
    /// Whole-request timeout in seconds
    pub request_timeout: u64,
    /// User agent sent on every portal request
    pub user_agent: String,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            connect_timeout: 10,
            request_timeout: 30,
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

impl Settings {
    /// Settings with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Full URL of the portal login page
    pub fn login_page_url(&self) -> String {
        format!("{}{}", self.portal.base_url, self.portal.login_page_path)
    }

    /// Full URL the login form is submitted to
    pub fn login_action_url(&self) -> String {
        format!("{}{}", self.portal.base_url, self.portal.login_action_path)
    }

    /// Full URL of the usage-log page
    pub fn usage_log_url(&self) -> String {
        format!("{}{}", self.portal.base_url, self.portal.usage_log_path)
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> crate::Result<Self> {
        Self::default().merge_with_env()
    }

    /// Parse a TOML settings file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::config("file", format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content).map_err(|e| {
            crate::Error::config("file", format!("Failed to parse config file: {}", e))
        })
    }

    /// Apply environment variable overrides on top of these settings
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        if let Some(host) = env_var("PORTAL_SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = env_var("PORTAL_SERVER_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| crate::Error::config("port", format!("Invalid port: {}", e)))?;
        }
        if let Some(secs) = env_var("PORTAL_SERVER_TIMEOUT") {
            let secs: u64 = secs
                .parse()
                .map_err(|e| crate::Error::config("timeout", format!("Invalid timeout: {}", e)))?;
            self.server.timeout = Duration::from_secs(secs);
        }
        if let Some(base_url) = env_var("PORTAL_BASE_URL") {
            self.portal.base_url = base_url;
        }
        if let Some(level) = env_var("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(verbose) = env_var("VERBOSE") {
            self.logging.verbose = verbose.parse().unwrap_or(false);
        }

        Ok(self)
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> crate::Result<()> {
        if self.server.port == 0 {
            return Err(crate::Error::config(
                "port",
                "Invalid server port: cannot be 0",
            ));
        }

        if let Err(e) = url::Url::parse(&self.portal.base_url) {
            return Err(crate::Error::config(
                "base_url",
                format!("Invalid portal base URL '{}': {}", self.portal.base_url, e),
            ));
        }
        if self.portal.base_url.ends_with('/') {
            return Err(crate::Error::config(
                "base_url",
                "Portal base URL must not end with a slash",
            ));
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(crate::Error::config(
                "log_level",
                format!("Invalid log level: {}", other),
            )),
        }
    }
}
