use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::quality::{QualityModel, QualitySource};

/// Series title with an optional trailing year split off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesTitleInfo {
    pub title: String,
    pub title_without_year: String,
    pub year: Option<u16>,
}

/// Structured result of parsing a release title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedEpisodeInfo {
    pub release_title: String,
    pub series_title: String,
    pub series_title_info: SeriesTitleInfo,
    pub season_number: u32,
    /// Ascending, without duplicates.
    pub episode_numbers: Vec<u32>,
    pub absolute_episode_numbers: Vec<u32>,
    pub air_date: Option<NaiveDate>,
    pub quality: QualityModel,
    pub languages: Vec<Language>,
    pub release_group: Option<String>,
    pub full_season: bool,
    pub is_multi_season: bool,
    pub special: bool,
    pub is_split_episode: bool,
}

impl ParsedEpisodeInfo {
    pub fn is_daily(&self) -> bool {
        self.air_date.is_some()
    }

    pub fn is_absolute_numbering(&self) -> bool {
        !self.absolute_episode_numbers.is_empty()
    }

    /// Scene-style title that parses back to the same structure.
    pub fn canonical_title(&self) -> String {
        let tokens = quality_tokens(&self.quality);

        if self.is_absolute_numbering() && self.episode_numbers.is_empty() {
            let numbers = match (
                self.absolute_episode_numbers.first(),
                self.absolute_episode_numbers.last(),
            ) {
                (Some(first), Some(last)) if first != last => format!("{:02} ~ {:02}", first, last),
                (Some(first), _) => format!("{:02}", first),
                _ => String::new(),
            };
            let group = self
                .release_group
                .as_ref()
                .map(|g| format!("[{}] ", g))
                .unwrap_or_default();
            return format!("{}{} - {} [{}]", group, self.series_title, numbers, tokens.join(" "));
        }

        let mut parts = Vec::new();
        if !self.series_title.is_empty() {
            parts.push(self.series_title.replace(' ', "."));
        }

        if let Some(date) = self.air_date {
            parts.push(date.format("%Y.%m.%d").to_string());
        } else if self.full_season {
            parts.push(format!("S{:02}", self.season_number));
        } else {
            let episodes: String = self
                .episode_numbers
                .iter()
                .map(|e| format!("E{:02}", e))
                .collect();
            parts.push(format!("S{:02}{}", self.season_number, episodes));
        }

        parts.extend(tokens);

        let mut title = parts.join(".");
        if let Some(group) = &self.release_group {
            title.push('-');
            title.push_str(group);
        }
        title
    }
}

fn quality_tokens(quality: &QualityModel) -> Vec<String> {
    let mut tokens = Vec::new();
    let revision = quality.revision;
    for _ in 0..revision.real {
        tokens.push("REAL".to_string());
    }
    match (revision.version, revision.is_repack) {
        (1, _) => {}
        (2, true) => tokens.push("REPACK".to_string()),
        (2, false) => tokens.push("PROPER".to_string()),
        (v, true) => tokens.push(format!("REPACK{}", v - 1)),
        (v, false) => tokens.push(format!("v{}", v)),
    }

    let resolution = quality.quality.resolution();
    let source = quality.quality.source();
    let show_resolution = resolution > 480
        || matches!(
            source,
            QualitySource::Web | QualitySource::WebRip | QualitySource::Bluray
        );
    if show_resolution && resolution > 0 {
        tokens.push(format!("{}p", resolution));
    }

    let source_token = match source {
        QualitySource::Television if resolution <= 480 => Some("SDTV"),
        QualitySource::Television => Some("HDTV"),
        QualitySource::TelevisionRaw => Some("RawHD"),
        QualitySource::Web => Some("WEB-DL"),
        QualitySource::WebRip => Some("WEBRip"),
        QualitySource::Dvd => Some("DVD"),
        QualitySource::Bluray => Some("BluRay"),
        QualitySource::BlurayRaw => Some("BluRay.REMUX"),
        QualitySource::Unknown => None,
    };
    tokens.extend(source_token.map(str::to_string));
    tokens
}
