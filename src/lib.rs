//! Portal Scraper
//!
//! Logs into an ISP customer portal with username/password credentials,
//! scrapes account, billing and usage-session data from the HTML pages
//! behind that login, and returns the aggregate as one JSON document.
//!
//! The scrape itself is a strictly sequential four-request workflow: load
//! the login page, submit the credentials (echoing the page's CSRF token),
//! parse the dashboard, then fetch and parse the usage log. Each call owns
//! its cookie jar, so concurrent calls never see each other's session.
//!
//! Two front ends wrap that workflow:
//!
//! - **server mode** — an axum service exposing the scrape as
//!   `GET /?username=<u>&password=<p>` plus a `/ping` health endpoint:
//!
//!   ```bash
//!   portal-scrape server --port 3000 --host 0.0.0.0
//!   ```
//!
//! - **fetch mode** — a one-shot CLI printing the same JSON envelope to
//!   stdout:
//!
//!   ```bash
//!   portal-scrape --username alice --password s3cret
//!   ```
//!
//! Dashboard fields whose markup is missing degrade to the literal
//! `"N/A"`; only page-load and authentication failures abort a call.
//!
//! # Library usage
//!
//! ```rust
//! use portal_scraper::{PortalScraper, Settings};
//!
//! # fn example() {
//! let settings = Settings::default();
//! let scraper = PortalScraper::new(settings);
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod scrape;
pub mod server;
pub mod types;

/// Crate version, reported by `/ping` and the startup log line
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use config::{ConfigLoader, Settings};
pub use error::{Error, Result};
pub use scrape::PortalScraper;
pub use types::{
    AccountData, Credentials, PaymentRecord, PingResponse, ScrapeResponse, UsageRecord, UserInfo,
};
