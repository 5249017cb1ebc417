//! Command-line entry points
//!
//! The long-running server mode and the one-shot fetch mode.

pub mod fetch;
pub mod server;

pub use fetch::{FetchArgs, run_fetch_mode};
pub use server::{ServerArgs, run_server_mode};
