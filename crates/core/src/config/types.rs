use serde::{Deserialize, Serialize};

use crate::profiles::DelayProfile;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub indexers: IndexerConfig,
    #[serde(default)]
    pub media_management: MediaManagementConfig,
    #[serde(default)]
    pub download_clients: DownloadClientConfig,
    #[serde(default)]
    pub delay_profiles: Vec<DelayProfile>,
}

/// Indexer-wide settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IndexerConfig {
    /// Minimum age in minutes before a usenet release may be grabbed.
    #[serde(default)]
    pub minimum_age: u32,
}

/// How propers and repacks are treated when comparing releases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProperDownloadType {
    /// Prefer higher revisions and upgrade existing files to them.
    #[default]
    PreferAndUpgrade,
    /// Prefer higher revisions but never replace an existing file with one.
    DoNotUpgrade,
    /// Ignore revisions entirely.
    DoNotPrefer,
}

/// Import and library settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaManagementConfig {
    #[serde(default)]
    pub skip_free_space_check: bool,
    /// Space that must remain on the destination after import, in MB.
    #[serde(default = "default_minimum_free_space_mb")]
    pub minimum_free_space_mb: u64,
    #[serde(default)]
    pub download_propers_and_repacks: ProperDownloadType,
    #[serde(default)]
    pub auto_unmonitor_previously_downloaded_episodes: bool,
}

impl Default for MediaManagementConfig {
    fn default() -> Self {
        Self {
            skip_free_space_check: false,
            minimum_free_space_mb: default_minimum_free_space_mb(),
            download_propers_and_repacks: ProperDownloadType::default(),
            auto_unmonitor_previously_downloaded_episodes: false,
        }
    }
}

fn default_minimum_free_space_mb() -> u64 {
    100
}

/// Download client settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DownloadClientConfig {
    #[serde(default = "default_true")]
    pub enable_completed_download_handling: bool,
}

impl Default for DownloadClientConfig {
    fn default() -> Self {
        Self {
            enable_completed_download_handling: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}
