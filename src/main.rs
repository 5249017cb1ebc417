//! `portal-scrape` binary
//!
//! One executable, two modes. With the `server` subcommand it runs the
//! long-lived HTTP service; with no subcommand it performs a single
//! scrape and prints the JSON envelope to stdout.
//!
//! ```bash
//! portal-scrape server --port 3000 --host 0.0.0.0
//! portal-scrape --username alice --password s3cret
//! ```

use clap::{Parser, Subcommand};

use portal_scraper::cli::{
    fetch::{FetchArgs, run_fetch_mode},
    server::{ServerArgs, run_server_mode},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "portal-scrape")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    // One-shot fetch options, used when no subcommand is given
    /// Portal account username
    #[arg(short, long, value_name = "USERNAME")]
    username: Option<String>,

    /// Portal account password
    #[arg(short, long, value_name = "PASSWORD")]
    password: Option<String>,

    /// Override the portal base URL
    #[arg(long, value_name = "BASE_URL")]
    base_url: Option<String>,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server mode
    Server {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Configuration file path
        #[arg(long)]
        config: Option<String>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Server {
            port,
            host,
            config,
            verbose,
        }) => {
            run_server_mode(ServerArgs {
                port,
                host,
                config,
                verbose,
            })
            .await
        }
        None => {
            run_fetch_mode(FetchArgs {
                username: cli.username,
                password: cli.password,
                base_url: cli.base_url,
                verbose: cli.verbose,
            })
            .await
        }
    }
}
