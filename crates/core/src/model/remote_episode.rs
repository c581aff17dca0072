use serde::{Deserialize, Serialize};

use super::{Episode, ReleaseInfo, Series};
use crate::parser::ParsedEpisodeInfo;
use crate::profiles::CustomFormat;

/// A release resolved against the library: what it is and which episodes it covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteEpisode {
    pub release: ReleaseInfo,
    pub parsed_episode_info: ParsedEpisodeInfo,
    pub series: Series,
    pub episodes: Vec<Episode>,
    #[serde(default)]
    pub custom_formats: Vec<CustomFormat>,
    #[serde(default)]
    pub custom_format_score: i32,
}

impl RemoteEpisode {
    pub fn new(
        release: ReleaseInfo,
        parsed_episode_info: ParsedEpisodeInfo,
        series: Series,
        episodes: Vec<Episode>,
    ) -> Self {
        Self {
            release,
            parsed_episode_info,
            series,
            episodes,
            custom_formats: Vec::new(),
            custom_format_score: 0,
        }
    }

    /// Attach matched custom formats and score them against the series profile.
    pub fn with_custom_formats(mut self, formats: Vec<CustomFormat>) -> Self {
        self.custom_format_score = self
            .series
            .quality_profile
            .calculate_custom_format_score(&formats);
        self.custom_formats = formats;
        self
    }

    pub fn title(&self) -> &str {
        &self.release.title
    }
}
