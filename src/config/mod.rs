//! Configuration
//!
//! Settings for both server and fetch modes, loaded from defaults, an
//! optional TOML file and environment overrides.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::Settings;

// Environment variables are process-global; every test that touches them
// serializes on this one lock.
#[cfg(test)]
pub(crate) static ENV_TEST_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
