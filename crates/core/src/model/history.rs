use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::profiles::CustomFormat;
use crate::quality::QualityModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeHistoryEventType {
    Unknown,
    Grabbed,
    SeriesFolderImported,
    DownloadFolderImported,
    DownloadFailed,
    EpisodeFileDeleted,
    EpisodeFileRenamed,
    DownloadIgnored,
}

/// One history entry for an episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeHistory {
    pub episode_id: i32,
    pub event_type: EpisodeHistoryEventType,
    pub date: DateTime<Utc>,
    pub quality: QualityModel,
    #[serde(default)]
    pub languages: Vec<Language>,
    /// Download client id. Present when the grab is tracked by a client.
    #[serde(default)]
    pub download_id: Option<String>,
    #[serde(default)]
    pub custom_formats: Vec<CustomFormat>,
}

impl EpisodeHistory {
    pub fn grabbed(episode_id: i32, quality: QualityModel, date: DateTime<Utc>) -> Self {
        Self {
            episode_id,
            event_type: EpisodeHistoryEventType::Grabbed,
            date,
            quality,
            languages: Vec::new(),
            download_id: None,
            custom_formats: Vec::new(),
        }
    }

    pub fn has_download_id(&self) -> bool {
        self.download_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}
