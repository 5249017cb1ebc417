//! Fetch mode CLI logic
//!
//! Contains the core logic for the one-shot scrape mode: log in, scrape,
//! print the aggregate JSON to stdout, exit.

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    Settings,
    error::format_error,
    scrape::PortalScraper,
    types::{Credentials, ScrapeResponse},
};

/// Arguments for fetch mode
#[derive(Debug)]
pub struct FetchArgs {
    pub username: Option<String>,
    pub password: Option<String>,
    pub base_url: Option<String>,
    pub verbose: bool,
}

/// Run fetch mode with the given arguments
pub async fn run_fetch_mode(args: FetchArgs) -> Result<()> {
    // Initialize logging (stderr only, stdout is reserved for the JSON result)
    let default_level = if args.verbose { "debug" } else { "error" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let (Some(username), Some(password)) = (args.username, args.password) else {
        eprintln!("--username and --password are required unless running in server mode");
        std::process::exit(2);
    };

    let mut settings = Settings::default().merge_with_env()?;
    if let Some(base_url) = args.base_url {
        settings.portal.base_url = base_url;
    }
    settings.validate()?;

    debug!(
        "Starting one-shot scrape for user {} against {}",
        username, settings.portal.base_url
    );

    let scraper = PortalScraper::new(settings);
    let credentials = Credentials::new(username, password);

    match scraper.fetch_account_data(&credentials).await {
        Ok(data) => {
            let output = serde_json::to_string(&ScrapeResponse::success(data))?;
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Scrape failed. Error: {}", format_error(&e));

            // Still emit a machine-readable envelope on stdout
            let output = serde_json::to_string(&ScrapeResponse::failure(format_error(&e)))?;
            println!("{}", output);
            std::process::exit(1);
        }
    }

    Ok(())
}
