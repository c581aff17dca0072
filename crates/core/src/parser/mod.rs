//! Release title parsing.
//!
//! [`TitleParser`] compiles every pattern once and is then shared freely:
//! parsing is read-only and never panics. Titles whose episode identity
//! cannot be determined yield `None`. A bare `S01E04` or `1x04` parses with
//! an empty series title; the caller already knows the series.

mod language;
mod quality;
mod release_group;
mod title;
mod types;

pub use types::{ParsedEpisodeInfo, SeriesTitleInfo};

use thiserror::Error;

use crate::language::Language;
use crate::metrics;
use crate::quality::QualityModel;

use quality::QualityPatterns;
use release_group::ReleaseGroupPatterns;
use title::EpisodePatterns;

/// Errors that can occur while building a parser.
#[derive(Debug, Error)]
pub enum ParserError {
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex_lite::Error),
}

/// Precompiled release title parser.
#[derive(Debug)]
pub struct TitleParser {
    episodes: EpisodePatterns,
    quality: QualityPatterns,
    groups: ReleaseGroupPatterns,
}

impl TitleParser {
    pub fn new() -> Result<Self, ParserError> {
        Ok(Self {
            episodes: EpisodePatterns::new()?,
            quality: QualityPatterns::new()?,
            groups: ReleaseGroupPatterns::new()?,
        })
    }

    /// Parse a release title into its episode identity, quality, languages and group.
    pub fn parse_title(&self, title: &str) -> Option<ParsedEpisodeInfo> {
        let normalized = self.episodes.normalize(title);

        let matched = match self.episodes.parse(&normalized) {
            Some(m) if !m.info.series_title.is_empty() || !m.info.episode_numbers.is_empty() => m,
            _ => {
                tracing::debug!(title, "unable to parse episode information");
                metrics::PARSE_ATTEMPTS
                    .with_label_values(&["unparseable"])
                    .inc();
                return None;
            }
        };

        let mut info = matched.info;
        info.release_title = title.trim().to_string();
        info.series_title_info = self.episodes.title_info(&info.series_title);

        info.quality = self.quality.parse(title);
        if let Some(version) = matched.version {
            info.quality.revision.version = info.quality.revision.version.max(version);
        }

        let title_words = language::tokenize(&info.series_title).count();
        info.languages = language::parse_languages(&normalized, title_words);
        info.release_group = self.groups.parse(title);

        tracing::trace!(
            title,
            series = %info.series_title,
            season = info.season_number,
            episodes = ?info.episode_numbers,
            quality = %info.quality,
            "parsed release title"
        );
        metrics::PARSE_ATTEMPTS.with_label_values(&["parsed"]).inc();

        Some(info)
    }

    pub fn parse_release_group(&self, title: &str) -> Option<String> {
        self.groups.parse(title)
    }

    pub fn parse_quality(&self, title: &str) -> QualityModel {
        self.quality.parse(title)
    }

    /// Languages named anywhere in the title; `[Unknown]` when none are.
    pub fn parse_languages(&self, title: &str) -> Vec<Language> {
        language::parse_languages(title, 0)
    }
}
