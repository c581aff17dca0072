//! Testing utilities and mock implementations of the decision services.
//!
//! # Example
//!
//! ```rust,ignore
//! use releasegate_core::testing::{fixtures, MockDiskProvider, MockHistoryService};
//!
//! let disk = MockDiskProvider::new();
//! disk.set_free_space(fixtures::series().space_check_path(), Some(1 << 40));
//!
//! let subject = fixtures::remote_episode(
//!     "Series.Title.S01E01.720p.HDTV-GRP",
//!     vec![fixtures::episode(1, 1, 1)],
//! );
//! ```

mod mock_disk_provider;
mod mock_history_service;

pub use mock_disk_provider::MockDiskProvider;
pub use mock_history_service::MockHistoryService;

/// Test fixtures and helper functions.
pub mod fixtures {
    use chrono::{Duration, Utc};
    use std::path::PathBuf;

    use crate::language::Language;
    use crate::model::{DownloadProtocol, Episode, ReleaseInfo, RemoteEpisode, Series};
    use crate::parser::{ParsedEpisodeInfo, SeriesTitleInfo};
    use crate::profiles::{QualityProfile, QualityProfileItem};
    use crate::quality::{default_definitions, Quality, QualityModel};

    pub const SERIES_TITLE: &str = "Series Title";

    /// Profile allowing every known quality, worst to best, with upgrades on.
    pub fn quality_profile(cutoff: Quality) -> QualityProfile {
        let items = default_definitions()
            .into_iter()
            .map(|d| QualityProfileItem::single(d.quality, d.quality != Quality::Unknown))
            .collect();
        let mut profile = QualityProfile::new("Any", cutoff, items);
        profile.id = 1;
        profile.upgrade_allowed = true;
        profile
    }

    /// Standard series under `/tv`, 45 minute episodes.
    pub fn series() -> Series {
        Series {
            id: 1,
            title: SERIES_TITLE.to_string(),
            series_type: Default::default(),
            path: PathBuf::from("/tv/Series Title"),
            root_folder_path: Some(PathBuf::from("/tv")),
            runtime: 45,
            tags: Default::default(),
            quality_profile: quality_profile(Quality::Bluray1080p),
            first_aired: Some(Utc::now() - Duration::days(365)),
            first_season_number: 1,
        }
    }

    /// Monitored episode of series 1 that aired 30 days ago, runtime unknown.
    pub fn episode(id: i32, season_number: u32, episode_number: u32) -> Episode {
        let mut episode = Episode::new(id, season_number, episode_number);
        episode.series_id = 1;
        episode.air_date_utc = Some(Utc::now() - Duration::days(30));
        episode
    }

    /// Usenet release published a day ago.
    pub fn release(title: &str, size: u64) -> ReleaseInfo {
        let mut release = ReleaseInfo::new(
            title,
            size,
            Utc::now() - Duration::days(1),
            DownloadProtocol::Usenet,
        );
        release.guid = format!("guid-{}", title);
        release.indexer = "mock-indexer".to_string();
        release.indexer_id = 1;
        release
    }

    /// HDTV-720p episode release of [`series`] covering `episodes`.
    ///
    /// The parsed info is built directly from the episodes rather than the title.
    pub fn remote_episode(title: &str, episodes: Vec<Episode>) -> RemoteEpisode {
        let parsed = ParsedEpisodeInfo {
            release_title: title.to_string(),
            series_title: SERIES_TITLE.to_string(),
            series_title_info: SeriesTitleInfo {
                title: SERIES_TITLE.to_string(),
                title_without_year: SERIES_TITLE.to_string(),
                year: None,
            },
            season_number: episodes.first().map(|e| e.season_number).unwrap_or(1),
            episode_numbers: episodes.iter().map(|e| e.episode_number).collect(),
            quality: QualityModel::new(Quality::HDTV720p),
            languages: vec![Language::English],
            release_group: Some("GRP".to_string()),
            ..Default::default()
        };

        RemoteEpisode::new(release(title, 1024 * 1024 * 1024), parsed, series(), episodes)
    }
}
