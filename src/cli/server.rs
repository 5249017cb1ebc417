//! Server mode
//!
//! Resolves configuration, brings up logging, binds the listener and
//! serves the scrape API until the process is stopped.

use crate::{Settings, VERSION, config::ConfigLoader, server};
use anyhow::Result;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Arguments for server mode
#[derive(Debug)]
pub struct ServerArgs {
    pub port: Option<u16>,
    pub host: Option<String>,
    pub config: Option<String>,
    pub verbose: bool,
}

/// Run server mode with the given arguments
pub async fn run_server_mode(args: ServerArgs) -> Result<()> {
    // Configuration has to be resolved before logging comes up so the
    // config file's logging.level can take effect.
    let settings = resolve_settings(&args);

    tracing_subscriber::registry()
        .with(log_filter(args.verbose, &settings.logging.level))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = server::create_app(settings.clone());
    let addr = resolve_listen_addr(&settings.server.host, settings.server.port).await?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Portal scraper v{} listening on {}", VERSION, addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Settings for this server run: defaults, then config file, then
/// environment, then CLI flags on top
fn resolve_settings(args: &ServerArgs) -> Settings {
    // Config path: --config beats PORTAL_SCRAPER_CONFIG beats the
    // platform config directory.
    let config_path = args
        .config
        .as_ref()
        .map(std::path::PathBuf::from)
        .or_else(ConfigLoader::get_config_path);

    let mut settings = ConfigLoader::new()
        .load(config_path.as_deref())
        .unwrap_or_else(|e| {
            // Logging is not up yet at this point
            eprintln!(
                "Warning: Failed to load configuration: {}. Using defaults.",
                e
            );
            Settings::default()
        });

    if let Some(host) = &args.host {
        settings.server.host = host.clone();
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    settings.logging.verbose = args.verbose;

    settings
}

/// Pick the log filter: --verbose beats RUST_LOG beats the config level
fn log_filter(verbose: bool, config_level: &str) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else if let Ok(filter) = EnvFilter::try_from_default_env() {
        filter
    } else {
        EnvFilter::new(config_level)
    }
}

/// Resolve the configured host to a bindable socket address
///
/// `"::"` is probed first and falls back to `0.0.0.0` on hosts without
/// IPv6 support; a literal IP binds as given. Hostnames are rejected.
pub async fn resolve_listen_addr(host: &str, port: u16) -> Result<SocketAddr> {
    match host {
        "::" => {
            let v6 = SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), port);
            match tokio::net::TcpListener::bind(v6).await {
                Ok(_) => Ok(v6),
                Err(e) => {
                    let v4 = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port);
                    tracing::warn!(
                        "Could not listen on [::]:{} ({}), falling back to {}",
                        port,
                        e,
                        v4
                    );
                    Ok(v4)
                }
            }
        }
        "0.0.0.0" => Ok(SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port)),
        other => match other.parse::<IpAddr>() {
            Ok(ip) => Ok(SocketAddr::new(ip, port)),
            Err(_) => anyhow::bail!(
                "Invalid host address: {}. Use '::' for IPv6 or '0.0.0.0' for IPv4",
                other
            ),
        },
    }
}
