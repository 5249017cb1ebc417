//! Per-call HTTP client for the portal
//!
//! Wraps a `reqwest::Client` configured with its own cookie jar so every
//! scrape call accumulates session cookies in isolation. The client sends
//! a fixed browser-mimicking header set on every request and follows
//! redirects, which is how the login flow reaches the dashboard.

use crate::config::settings::NetworkSettings;
use crate::{Error, Result};
use reqwest::cookie::Jar;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, ORIGIN, REFERER};
use reqwest::{Client, redirect};
use std::sync::Arc;
use std::time::Duration;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANG: &str = "en-US,en;q=0.5";

/// HTTP client scoped to a single scrape call
///
/// Dropping the client discards the cookie jar; no session state survives
/// the call.
#[derive(Debug)]
pub struct PortalClient {
    client: Client,
}

impl PortalClient {
    /// Build a client with a fresh cookie jar and the portal header set
    pub fn new(network: &NetworkSettings) -> Result<Self> {
        let jar = Arc::new(Jar::default());

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANG));

        let client = Client::builder()
            .cookie_provider(jar)
            .default_headers(headers)
            .user_agent(network.user_agent.as_str())
            .redirect(redirect::Policy::limited(10))
            .connect_timeout(Duration::from_secs(network.connect_timeout))
            .timeout(Duration::from_secs(network.request_timeout))
            .build()?;

        Ok(Self { client })
    }

    /// GET an upstream page, returning its body
    ///
    /// `page` names the page for the error message ("login page", "usage
    /// page"). A non-success status is a hard failure.
    pub async fn fetch_page(&self, url: &str, page: &str) -> Result<String> {
        tracing::debug!("Fetching {} from {}", page, url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} returned status {}", page, status);
            return Err(Error::page_load(page, status.as_u16()));
        }

        Ok(response.text().await?)
    }

    /// POST the URL-encoded login form, following redirects
    ///
    /// Returns the final URL after redirect-following together with the
    /// body of the final response. The caller decides whether that URL
    /// means the login succeeded; the status is deliberately not checked
    /// here because the portal signals failure by where it redirects, not
    /// by status code.
    pub async fn submit_login(
        &self,
        url: &str,
        form: &[(&str, &str)],
        origin: &str,
        referer: &str,
    ) -> Result<(String, String)> {
        tracing::debug!("Submitting login form to {}", url);

        let response = self
            .client
            .post(url)
            .header(ORIGIN, origin)
            .header(REFERER, referer)
            .form(form)
            .send()
            .await?;

        let final_url = response.url().to_string();
        let body = response.text().await?;

        Ok((final_url, body))
    }
}
