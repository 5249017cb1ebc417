//! Login-session establishment and HTML scraping
//!
//! This module holds the whole scrape workflow: the per-call HTTP client
//! with its isolated cookie jar, the extraction rules for the dashboard
//! and usage-log markup, and the scraper that sequences the steps.

pub mod client;
pub mod extract;
pub mod scraper;

pub use client::PortalClient;
pub use scraper::PortalScraper;
