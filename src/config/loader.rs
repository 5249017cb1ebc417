//! Configuration source resolution
//!
//! Finds the config file and folds the sources together in precedence
//! order. CLI flags are applied by the caller on top of the result.

use crate::{Result, config::Settings};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Folds configuration sources into one [`Settings`] value
///
/// Precedence, lowest to highest: built-in defaults, the TOML config
/// file, environment variables.
#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Locate the config file
    ///
    /// `PORTAL_SCRAPER_CONFIG` wins; otherwise the platform config
    /// directory (`~/.config/portal-scraper/config.toml` on Linux) is
    /// checked. Returns `None` when neither points at an existing file.
    pub fn get_config_path() -> Option<PathBuf> {
        if let Ok(env_path) = std::env::var("PORTAL_SCRAPER_CONFIG") {
            let path = PathBuf::from(env_path);
            if path.exists() {
                debug!("Using config file from PORTAL_SCRAPER_CONFIG: {:?}", path);
                return Some(path);
            }
            warn!(
                "PORTAL_SCRAPER_CONFIG points to non-existent file: {:?}",
                path
            );
        }

        let candidate = dirs::config_dir()?.join("portal-scraper").join("config.toml");
        if candidate.exists() {
            debug!("Using default config file: {:?}", candidate);
            return Some(candidate);
        }

        debug!("No config file found");
        None
    }

    /// Load, merge and validate the configuration
    ///
    /// A `config_file` that does not exist falls through to defaults
    /// with a warning rather than failing; a file that exists but does
    /// not parse, or a final configuration that fails validation, is an
    /// error.
    pub fn load(&self, config_file: Option<&Path>) -> Result<Settings> {
        let settings = match config_file {
            Some(path) if path.exists() => {
                info!("Loading configuration from file: {:?}", path);
                Settings::from_file(path)?
            }
            Some(path) => {
                warn!("Configuration file not found: {:?}, using defaults", path);
                Settings::default()
            }
            None => Settings::default(),
        };

        let settings = settings.merge_with_env()?;
        settings.validate()?;

        debug!("Final configuration: {:?}", settings);
        Ok(settings)
    }
}
