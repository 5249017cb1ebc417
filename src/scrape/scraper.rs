//! The login-and-scrape workflow
//!
//! One call = one authenticated portal session: load the login page, echo
//! its CSRF token back with the credentials, confirm the redirect landed
//! on the dashboard, then parse the dashboard and the usage log. Every
//! call builds a fresh [`PortalClient`], so concurrent calls never share
//! cookies and nothing survives the call.

use crate::config::Settings;
use crate::scrape::{client::PortalClient, extract};
use crate::types::{AccountData, Credentials};
use crate::{Error, Result};
use scraper::Html;

/// Stateless-per-call portal scraper
#[derive(Debug)]
pub struct PortalScraper {
    settings: Settings,
}

impl PortalScraper {
    /// Create a scraper over the configured portal
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Configured settings, for diagnostics
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run the full login-and-scrape sequence for one set of credentials
    ///
    /// Steps run strictly in order; the first failure aborts the call.
    /// Missing dashboard fields do not fail — they come back as `"N/A"`.
    pub async fn fetch_account_data(&self, credentials: &Credentials) -> Result<AccountData> {
        let client = PortalClient::new(&self.settings.network)?;

        // Step 1: load the login page to pick up the CSRF token
        let login_page_url = self.settings.login_page_url();
        let login_html = client.fetch_page(&login_page_url, "login page").await?;

        // Parsed documents are dropped before the next await; they hold
        // non-Send internals and must not live across suspension points.
        let csrf = {
            let document = Html::parse_document(&login_html);
            extract::csrf_token(&document)
        };

        if csrf.is_none() {
            tracing::debug!("Login page carried no CSRF token, submitting without one");
        }

        // Step 2: submit the login form, following redirects
        let mut form: Vec<(&str, &str)> = vec![
            ("USERNAME", credentials.username.as_str()),
            ("PASS", credentials.password.as_str()),
        ];
        if let Some(token) = csrf.as_deref() {
            form.push(("_csrf", token));
        }

        let (final_url, dashboard_html) = client
            .submit_login(
                &self.settings.login_action_url(),
                &form,
                &self.settings.portal.base_url,
                &login_page_url,
            )
            .await?;

        // Step 3: the portal's only success signal is where it redirects to
        if !final_url.ends_with(&self.settings.portal.dashboard_suffix) {
            tracing::warn!("Login redirect landed on {}", final_url);
            return Err(Error::auth(final_url));
        }

        tracing::info!("Logged in as {}", credentials.username);

        // Step 4: parse the dashboard for account fields and payments
        let (user_info, payment_history) = {
            let document = Html::parse_document(&dashboard_html);
            (
                extract::user_info(&document),
                extract::payment_history(&document),
            )
        };

        // Step 5: fetch the usage log with the same session cookies
        let usage_html = client
            .fetch_page(&self.settings.usage_log_url(), "usage page")
            .await?;

        // Step 6: parse the session-history table
        let usage_history = {
            let document = Html::parse_document(&usage_html);
            extract::usage_history(&document)
        };

        tracing::debug!(
            "Scraped {} payment rows and {} usage rows",
            payment_history.len(),
            usage_history.len()
        );

        Ok(AccountData {
            user_info,
            payment_history,
            usage_history,
        })
    }
}
