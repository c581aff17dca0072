use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::language::Language;
use crate::profiles::{CustomFormat, QualityProfile};
use crate::quality::QualityModel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesType {
    #[default]
    Standard,
    Daily,
    Anime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub series_type: SeriesType,
    pub path: PathBuf,
    /// Library root the series lives under. Free space is measured here.
    #[serde(default)]
    pub root_folder_path: Option<PathBuf>,
    /// Typical episode runtime in minutes, zero when unknown.
    #[serde(default)]
    pub runtime: u32,
    #[serde(default)]
    pub tags: BTreeSet<i32>,
    pub quality_profile: QualityProfile,
    /// Air date of the first episode of the first regular season.
    #[serde(default)]
    pub first_aired: Option<DateTime<Utc>>,
    #[serde(default = "default_first_season")]
    pub first_season_number: u32,
}

fn default_first_season() -> u32 {
    1
}

impl Series {
    /// Folder used for free-space checks.
    pub fn space_check_path(&self) -> &PathBuf {
        self.root_folder_path.as_ref().unwrap_or(&self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: i32,
    pub series_id: i32,
    pub season_number: u32,
    pub episode_number: u32,
    #[serde(default)]
    pub absolute_episode_number: Option<u32>,
    #[serde(default)]
    pub air_date_utc: Option<DateTime<Utc>>,
    /// Minutes, zero when unknown.
    #[serde(default)]
    pub runtime: u32,
    #[serde(default = "default_monitored")]
    pub monitored: bool,
    #[serde(default)]
    pub episode_file: Option<EpisodeFile>,
}

fn default_monitored() -> bool {
    true
}

impl Episode {
    pub fn new(id: i32, season_number: u32, episode_number: u32) -> Self {
        Self {
            id,
            series_id: 0,
            season_number,
            episode_number,
            absolute_episode_number: None,
            air_date_utc: None,
            runtime: 0,
            monitored: true,
            episode_file: None,
        }
    }
}

/// A file already imported for one or more episodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeFile {
    pub id: i32,
    /// Relative to the series path.
    pub relative_path: PathBuf,
    pub quality: QualityModel,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub release_group: Option<String>,
    #[serde(default)]
    pub custom_formats: Vec<CustomFormat>,
}

impl EpisodeFile {
    pub fn new(id: i32, relative_path: &str, quality: QualityModel) -> Self {
        Self {
            id,
            relative_path: PathBuf::from(relative_path),
            quality,
            languages: Vec::new(),
            release_group: None,
            custom_formats: Vec::new(),
        }
    }
}
