use super::{types::Config, ConfigError};

/// Smallest free-space floor accepted when the check is enabled, in MB.
const MIN_FREE_SPACE_FLOOR_MB: u64 = 100;

/// Validate configuration
/// Currently validates:
/// - Minimum free space is at least 100 MB unless the check is skipped
/// - Delay profiles enable at least one protocol
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let media = &config.media_management;
    if !media.skip_free_space_check && media.minimum_free_space_mb < MIN_FREE_SPACE_FLOOR_MB {
        return Err(ConfigError::ValidationError(format!(
            "media_management.minimum_free_space_mb must be at least {} (got {})",
            MIN_FREE_SPACE_FLOOR_MB, media.minimum_free_space_mb
        )));
    }

    for (index, profile) in config.delay_profiles.iter().enumerate() {
        if !profile.enable_usenet && !profile.enable_torrent {
            return Err(ConfigError::ValidationError(format!(
                "delay_profiles[{}] must enable usenet or torrent",
                index
            )));
        }
    }

    Ok(())
}
