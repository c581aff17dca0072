mod loader;
mod types;
mod validate;

pub use loader::{load_config, load_config_from_str};
pub use types::*;
pub use validate::validate_config;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Settings consulted by the decision specifications.
pub trait ConfigProvider: Send + Sync {
    /// Minimum usenet release age in minutes.
    fn minimum_age(&self) -> u32;
    fn skip_free_space_check_when_importing(&self) -> bool;
    /// Free space that must remain after import, in MB.
    fn minimum_free_space_when_importing(&self) -> u64;
    fn download_propers_and_repacks(&self) -> ProperDownloadType;
    fn auto_unmonitor_previously_downloaded_episodes(&self) -> bool;
    fn enable_completed_download_handling(&self) -> bool;
}

impl ConfigProvider for Config {
    fn minimum_age(&self) -> u32 {
        self.indexers.minimum_age
    }

    fn skip_free_space_check_when_importing(&self) -> bool {
        self.media_management.skip_free_space_check
    }

    fn minimum_free_space_when_importing(&self) -> u64 {
        self.media_management.minimum_free_space_mb
    }

    fn download_propers_and_repacks(&self) -> ProperDownloadType {
        self.media_management.download_propers_and_repacks
    }

    fn auto_unmonitor_previously_downloaded_episodes(&self) -> bool {
        self.media_management
            .auto_unmonitor_previously_downloaded_episodes
    }

    fn enable_completed_download_handling(&self) -> bool {
        self.download_clients.enable_completed_download_handling
    }
}
