//! Season/episode detection and series title extraction.

use chrono::{Duration, NaiveDate, Utc};
use regex_lite::{Captures, Regex};

use super::types::{ParsedEpisodeInfo, SeriesTitleInfo};

/// Output of the episode cascade, before quality and group are attached.
#[derive(Debug, Clone, Default)]
pub(crate) struct EpisodeMatch {
    pub info: ParsedEpisodeInfo,
    /// Version suffix on the episode token (`E01v2`).
    pub version: Option<u32>,
}

/// Precompiled patterns for the season/episode cascade, most specific first.
#[derive(Debug)]
pub(crate) struct EpisodePatterns {
    extension: Regex,
    leading_bracket: Regex,
    leading_website: Regex,
    variety: Regex,
    standard: Regex,
    season_words: Regex,
    cross: Regex,
    leading_pair: Regex,
    spanish_code: Regex,
    continuation: Regex,
    daily: Regex,
    daily_compact: Regex,
    season_dot: Regex,
    full_season: Regex,
    mini_series: Regex,
    scene_numbered: Regex,
    concatenated: Regex,
    absolute: Regex,
    trailing_year: Regex,
    trailing_air_date: Regex,
    mini_series_tag: Regex,
    open_year: Regex,
}

/// Container and download extensions trimmed from the end of a title.
pub(crate) const VIDEO_EXTENSION: &str = concat!(
    r"(?i)\.(?:mkv|mp4|avi|m4v|wmv|mpg|mpeg|mov|flv|webm|divx",
    r"|ts|m2ts|iso|vob|img|nzb|torrent|rar)$",
);

/// Longest `E01-E24` style range accepted as a list of episodes.
const MAX_EPISODE_SPAN: u32 = 200;

const NUMBER_WORDS: [&str; 10] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

/// Widths that show up as `1920x1080` and must not be read as `season x episode`.
const RESOLUTION_WIDTHS: [u32; 11] = [640, 704, 720, 848, 960, 1024, 1280, 1440, 1920, 2560, 3840];

impl EpisodePatterns {
    pub fn new() -> Result<Self, regex_lite::Error> {
        Ok(Self {
            extension: Regex::new(VIDEO_EXTENSION)?,
            leading_bracket: Regex::new(r"^\[[^\]]*\][-_. ]*")?,
            leading_website: Regex::new(r"(?i)^www\.[a-z0-9-]+\.[a-z]{2,6}[-_. ]+")?,
            // `221208 Show Title ep11`: YYMMDD broadcast stamp, then an episode counter.
            variety: Regex::new(concat!(
                r"(?i)^\d{6}[ _.]+(?P<title>.+?)[ _.]+",
                r"(?:season[ _.]?(?P<season>\d{1,4})[ _.]*)?(?:ep|#)(?P<episode>\d{1,4})",
                r"(?:[^0-9]|$)",
            ))?,
            standard: Regex::new(concat!(
                r"(?i)^(?P<title>.*?)[-_. (\[]*",
                r"s(?P<season>\d{1,4})[-_. ]{0,3}(?:ep|e)[-_. ]?(?P<episode>\d{1,5})",
                r"(?:(?P<split>[a-dA-D])|\.(?P<decimal>\d)(?:[ \[]|$))?",
                r"(?:v(?P<version>\d))?",
                r"(?P<rest>(?:[-_. ]?(?:ep|e)[-_. ]?\d{1,5}|-\d{1,4})*)",
                r"(?:[^a-zA-Z0-9]|$)",
            ))?,
            // Unanchored so a quoted episode name can precede the real title.
            season_words: Regex::new(concat!(
                r#"(?i)(?P<title>[^"]*?)(?:[-_. (\[]*season|[-_. ]+se)"#,
                r"[-_. ]?(?P<season>\d{1,4})[-_. ]{1,3}",
                r"(?:episode|ep|afl)[-_. ]?(?P<episode>\d{1,4})",
                r"(?:[^a-zA-Z0-9]|$)",
            ))?,
            cross: Regex::new(concat!(
                r"(?i)^(?P<title>.*?)(?:^|[-_. (\[]+)",
                r"(?P<season>\d{1,4})x(?P<episode>\d{1,4})",
                r"(?:v(?P<version>\d))?",
                r"(?P<rest>(?:[-_. ]?x\d{1,4}|-\d{1,4})*)",
                r"(?:[^a-zA-Z0-9]|$)",
            ))?,
            leading_pair: Regex::new(
                r"^(?P<title>)(?P<season>\d{1,2})-(?P<episode>\d{2})(?:[ _.]|$)",
            )?,
            spanish_code: Regex::new(concat!(
                r"(?i)^(?P<title>.+?)(?:[-_. ]+temporada[-_. ]?\d{1,2})?[-_. ]*(?:\[[^\]]*\])*",
                r"\[cap[. ]+(?P<season>\d{1,2})(?P<episode>\d{2})\]",
            ))?,
            continuation: Regex::new(r"(?i)(?P<dash>-)?[-_. ]*(?:ep|e|x)?[-_. ]*(?P<number>\d+)")?,
            daily: Regex::new(concat!(
                r"^(?P<title>.*?)(?:^|[-_. (\[]+)",
                r"(?P<year>(?:19|20)\d{2})[-_. ](?P<month>[01]\d)[-_. ](?P<day>[0-3]\d)",
                r"(?:[^0-9]|$)",
            ))?,
            daily_compact: Regex::new(concat!(
                r"^(?P<title>.*?)(?:^|[-_. (\[]+)",
                r"(?P<year>(?:19|20)\d{2})(?P<month>[01]\d)(?P<day>[0-3]\d)",
                r"(?:[^0-9]|$)",
            ))?,
            season_dot: Regex::new(concat!(
                r"(?i)^(?P<title>.+?)[-_. ]+",
                r"s(?P<season>\d{1,2})\.(?P<episode>\d{2})(?:[-_. ]|$)",
            ))?,
            full_season: Regex::new(concat!(
                r"(?i)^(?P<title>.*?)(?:^|[-_. (\[]+)",
                r"(?:s(?P<season>\d{1,4})(?:[-_. ]?(?:-|to)[-_. ]?s?(?P<season_end>\d{1,4}))?",
                r"|season[-_. ]?(?P<season_word>\d{1,4}))",
                r"(?:[-_. \])]|$)",
            ))?,
            mini_series: Regex::new(concat!(
                r"(?i)^(?P<title>.+?)[-_. ]+",
                r"(?:part[-_. ]?(?P<part>\d{1,2}|one|two|three|four|five|six|seven|eight|nine|ten)",
                r"|(?P<of>\d{1,2})of\d{1,2})",
                r"(?:[-_. ]|$)",
            ))?,
            scene_numbered: Regex::new(concat!(
                r"(?i)^(?P<title>.+?)-(?:x26[45]|h26[45]|xvid)-",
                r"(?P<season>\d{1,2})(?P<episode>\d{2})$",
            ))?,
            concatenated: Regex::new(r"\b(?P<number>\d{3,4})\b")?,
            absolute: Regex::new(concat!(
                r"(?i)^(?P<title>.+?)[ _.]+-[ _.]+",
                r"(?P<absolute>\d{2,4})(?:[ _.]*[-~][ _.]*(?P<absolute_end>\d{2,4}))?",
                r"(?:v(?P<version>\d))?",
                r"(?:[ _.\[(]|$)",
            ))?,
            trailing_year: Regex::new(r"^(?P<title>.+?)\s+\(?(?P<year>(?:19|20)\d{2})\)?$")?,
            trailing_air_date: Regex::new(r"[-_. ]+(?:19|20)\d{2}[-_. ]\d{2}[-_. ]\d{2}$")?,
            mini_series_tag: Regex::new(r"(?i)[-_. ]*\(mini[- ]?seri(?:e|es)\)")?,
            open_year: Regex::new(r"\((?:19|20)\d{2}$")?,
        })
    }

    /// Strip container extension and leading site/group tags, normalize underscores.
    /// Bilingual `Local Title / English Title` releases keep the Latin-script part.
    pub fn normalize(&self, title: &str) -> String {
        let mut normalized = self.extension.replace(title.trim(), "").into_owned();

        for prefix in [&self.leading_website, &self.leading_bracket] {
            let stripped = prefix.replace(&normalized, "").into_owned();
            if !stripped.trim().is_empty() {
                normalized = stripped;
            }
        }

        let mut parts: Vec<&str> = normalized.split(" / ").collect();
        while parts.len() > 1 && !starts_latin(parts[0]) {
            parts.remove(0);
        }

        parts.join(" / ").replace('_', " ")
    }

    /// Run the cascade over a normalized title.
    pub fn parse(&self, title: &str) -> Option<EpisodeMatch> {
        self.parse_numbered(&self.variety, title)
            .or_else(|| self.parse_standard(title))
            .or_else(|| self.parse_numbered(&self.season_words, title))
            .or_else(|| self.parse_cross(title))
            .or_else(|| self.parse_numbered(&self.leading_pair, title))
            .or_else(|| self.parse_numbered(&self.spanish_code, title))
            .or_else(|| self.parse_daily(title))
            .or_else(|| self.parse_numbered(&self.season_dot, title))
            .or_else(|| self.parse_full_season(title))
            .or_else(|| self.parse_mini_series(title))
            .or_else(|| self.parse_numbered(&self.scene_numbered, title))
            .or_else(|| self.parse_concatenated(title))
            .or_else(|| self.parse_absolute(title))
    }

    fn parse_standard(&self, title: &str) -> Option<EpisodeMatch> {
        let caps = self.standard.captures(title)?;
        let season = number(&caps, "season")?;
        let first = number(&caps, "episode")?;
        let rest = caps.name("rest").map_or("", |r| r.as_str());
        let mut m = self.episode_match(&caps, season, first, rest)?;
        m.info.special = caps.name("decimal").is_some();
        m.info.is_split_episode = caps.name("split").is_some();
        m.version = number(&caps, "version");
        tracing::trace!(title, season = m.info.season_number, "matched SxxEyy pattern");
        Some(m)
    }

    /// Single-episode patterns with a `season` and `episode` group. No season means season 1.
    fn parse_numbered(&self, pattern: &Regex, title: &str) -> Option<EpisodeMatch> {
        let caps = pattern.captures(title)?;
        let season = number(&caps, "season").unwrap_or(1);
        let first = number(&caps, "episode")?;
        self.episode_match(&caps, season, first, "")
    }

    fn parse_cross(&self, title: &str) -> Option<EpisodeMatch> {
        let caps = self.cross.captures(title)?;
        let season = number(&caps, "season")?;
        let first = number(&caps, "episode")?;
        if RESOLUTION_WIDTHS.contains(&season) && first >= 360 {
            return None;
        }
        let rest = caps.name("rest").map_or("", |r| r.as_str());
        let mut m = self.episode_match(&caps, season, first, rest)?;
        m.version = number(&caps, "version");
        Some(m)
    }

    /// `Part01`, `Part.Two`, `5of9`: numbered parts of a single-season show.
    fn parse_mini_series(&self, title: &str) -> Option<EpisodeMatch> {
        let caps = self.mini_series.captures(title)?;
        let episode = match caps.name("part") {
            Some(part) => {
                let word = part.as_str().to_ascii_lowercase();
                match NUMBER_WORDS.iter().position(|w| *w == word) {
                    Some(index) => index as u32 + 1,
                    None => word.parse().ok()?,
                }
            }
            None => number(&caps, "of")?,
        };
        self.episode_match(&caps, 1, episode, "")
    }

    /// Ranges wider than [`MAX_EPISODE_SPAN`] reject the match. A dash followed
    /// by a smaller number belongs to the episode name and is ignored.
    fn episode_match(
        &self,
        caps: &Captures<'_>,
        season: u32,
        first: u32,
        rest: &str,
    ) -> Option<EpisodeMatch> {
        let mut episodes = vec![first];

        for token in self.continuation.captures_iter(rest) {
            let Some(value) = number(&token, "number") else {
                continue;
            };
            let previous = episodes.last().copied().unwrap_or(first);
            match token.name("dash") {
                Some(_) if value > previous => {
                    if value - previous > MAX_EPISODE_SPAN {
                        tracing::debug!(first, last = value, "episode range too wide");
                        return None;
                    }
                    episodes.extend(previous + 1..=value);
                }
                Some(_) => {}
                None => episodes.push(value),
            }
        }

        episodes.sort_unstable();
        episodes.dedup();

        Some(EpisodeMatch {
            info: ParsedEpisodeInfo {
                series_title: self.series_title(caps.name("title").map_or("", |t| t.as_str())),
                season_number: season,
                episode_numbers: episodes,
                ..ParsedEpisodeInfo::default()
            },
            version: None,
        })
    }

    fn parse_daily(&self, title: &str) -> Option<EpisodeMatch> {
        [&self.daily, &self.daily_compact].into_iter().find_map(|pattern| {
            let caps = pattern.captures(title)?;
            let date = NaiveDate::from_ymd_opt(
                number(&caps, "year")? as i32,
                number(&caps, "month")?,
                number(&caps, "day")?,
            )?;
            if date > (Utc::now() + Duration::days(1)).date_naive() {
                tracing::debug!(title, %date, "ignoring air date in the future");
                return None;
            }

            Some(EpisodeMatch {
                info: ParsedEpisodeInfo {
                    series_title: self.series_title(caps.name("title").map_or("", |t| t.as_str())),
                    air_date: Some(date),
                    ..ParsedEpisodeInfo::default()
                },
                version: None,
            })
        })
    }

    fn parse_full_season(&self, title: &str) -> Option<EpisodeMatch> {
        let caps = self.full_season.captures(title)?;
        let season = number(&caps, "season").or_else(|| number(&caps, "season_word"))?;
        let multi = number(&caps, "season_end").is_some_and(|end| end > season);

        Some(EpisodeMatch {
            info: ParsedEpisodeInfo {
                series_title: self.series_title(caps.name("title").map_or("", |t| t.as_str())),
                season_number: season,
                full_season: true,
                is_multi_season: multi,
                ..ParsedEpisodeInfo::default()
            },
            version: None,
        })
    }

    /// `Title.103` / `Title.1013`: one or two digits of season, two of episode.
    fn parse_concatenated(&self, title: &str) -> Option<EpisodeMatch> {
        for found in self.concatenated.find_iter(title) {
            let digits = found.as_str();
            let prefix = &title[..found.start()];
            let series_title = self.series_title(prefix);

            if series_title.is_empty() || looks_like_year(digits) || follows_marker(prefix) {
                continue;
            }

            let (season, episode) = digits.split_at(digits.len() - 2);
            let (Ok(season), Ok(episode)) = (season.parse::<u32>(), episode.parse::<u32>()) else {
                continue;
            };
            if episode == 0 {
                continue;
            }

            return Some(EpisodeMatch {
                info: ParsedEpisodeInfo {
                    series_title,
                    season_number: season,
                    episode_numbers: vec![episode],
                    ..ParsedEpisodeInfo::default()
                },
                version: None,
            });
        }
        None
    }

    fn parse_absolute(&self, title: &str) -> Option<EpisodeMatch> {
        let caps = self.absolute.captures(title)?;
        let absolute = caps.name("absolute")?.as_str();
        if looks_like_year(absolute) {
            return None;
        }
        let first = number(&caps, "absolute")?;
        let numbers = match number(&caps, "absolute_end") {
            Some(last) if last > first && last - first < 500 => (first..=last).collect(),
            _ => vec![first],
        };

        Some(EpisodeMatch {
            info: ParsedEpisodeInfo {
                series_title: self.series_title(caps.name("title").map_or("", |t| t.as_str())),
                absolute_episode_numbers: numbers,
                ..ParsedEpisodeInfo::default()
            },
            version: number(&caps, "version"),
        })
    }

    /// Display title from the text before the episode marker. Drops an air date
    /// that precedes `SxxEyy` and a `(Miniseries)` tag, and closes `(2024/...` blocks.
    fn series_title(&self, raw: &str) -> String {
        let raw = self.trailing_air_date.replace(raw, "");
        let raw = self.mini_series_tag.replace_all(&raw, "");
        let mut title = clean_series_title(&raw);
        if self.open_year.is_match(&title) {
            title.push(')');
        }
        title
    }

    pub fn title_info(&self, title: &str) -> SeriesTitleInfo {
        match self.trailing_year.captures(title) {
            Some(caps) => SeriesTitleInfo {
                title: title.to_string(),
                title_without_year: caps.name("title").map_or("", |t| t.as_str()).to_string(),
                year: caps.name("year").and_then(|y| y.as_str().parse().ok()),
            },
            None => SeriesTitleInfo {
                title: title.to_string(),
                title_without_year: title.to_string(),
                year: None,
            },
        }
    }
}

fn number(caps: &Captures<'_>, name: &str) -> Option<u32> {
    caps.name(name).and_then(|m| m.as_str().parse().ok())
}

fn starts_latin(part: &str) -> bool {
    part.chars()
        .find(|c| c.is_alphabetic())
        .map_or(true, |c| c.is_ascii())
}

fn looks_like_year(digits: &str) -> bool {
    digits.len() == 4 && (digits.starts_with("19") || digits.starts_with("20"))
}

/// Numbers after range markers or codec names are not season/episode pairs.
fn follows_marker(prefix: &str) -> bool {
    let trimmed = prefix.trim_end_matches([' ', '.']);
    if trimmed.ends_with(['-', '#', '~']) {
        return true;
    }
    let last_word = trimmed
        .rsplit([' ', '.', '-'])
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    matches!(last_word.as_str(), "h" | "x" | "dd" | "ddp" | "aac" | "ac3")
}

/// Turn the text preceding an episode marker into a display title.
pub(crate) fn clean_series_title(raw: &str) -> String {
    let spaced = raw.replace(['.', '_'], " ");
    let collapsed = spaced.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_start_matches([' ', '-'])
        .trim_end_matches([' ', '-', '[', '(', '/', '~'])
        .to_string()
}
