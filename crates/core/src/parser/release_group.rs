//! Release group extraction.

use regex_lite::Regex;

use super::language::language_for_token;
use super::title::VIDEO_EXTENSION;

/// Groups whose names contain separators, or that tag releases without a dash.
const EXCEPTION_GROUPS: &str = concat!(
    r"D-Z0N3|Fight-BB|BEN[ .]THE[ .]MEN|E\.N\.D|KRaLiMaRKo|BluDragon|DarQ|KCRT|Tigole|afm72",
    r"|Silence|Panda|Ghost|MONOLITH|Joy|ImE|t3nzin|HONE|Vyndros|SEV|Garshasp|Kappa|Natty",
    r"|RCVR|SAMPA|YOGI|r00t|EDGE2020|RZeroX|TAoE|UTR",
);

/// Suffixes appended by reposters and indexers, never the real group.
const REPOST_SUFFIXES: &str = concat!(
    r"RP|NZBGeek|Obfuscated|Scrambled|sample|Pre|postbot|xpost|Rakuv[a-z0-9]*|WhiteRev",
    r"|BUYMORE|AsRequested|AlternativeToRequested|GEROV|Z0iDS3N|Chamele0n|4P|4Planet",
    r"|AlteZachen|RePACKPOST|\d{1,2}",
);

/// Tokens that end up after a dash but are part of the quality or audio description.
const NOT_A_GROUP: &[&str] = &[
    "dl", "es", "en", "cat", "eng", "jap", "ger", "fra", "fre", "ita", "hdrip", "ray", "bit", "hd",
    "ma", "x", "sdtv", "hdtv", "dvd", "webdl", "webrip", "bluray", "web", "remux", "rawhd", "raw",
];

#[derive(Debug)]
pub(crate) struct ReleaseGroupPatterns {
    extension: Regex,
    website_prefix: Regex,
    tracker_suffix: Regex,
    anime_group: Regex,
    repost_suffix: Regex,
    trailing_language: Regex,
    exception: Regex,
    resolution: Regex,
    trailing_comment: Regex,
    bracket_group: Regex,
    dash_group: Regex,
    hash: Regex,
    resolution_token: Regex,
    episode_token: Regex,
}

impl ReleaseGroupPatterns {
    pub fn new() -> Result<Self, regex_lite::Error> {
        Ok(Self {
            extension: Regex::new(VIDEO_EXTENSION)?,
            website_prefix: Regex::new(concat!(
                r"(?i)^(?:\[\s*(?:www\.)?[-a-z0-9]+\.[a-z]{2,6}\s*\]",
                r"|www\.[-a-z0-9]+\.[a-z]{2,6})[-_. ]*",
            ))?,
            tracker_suffix: Regex::new(concat!(
                r"(?i)[-_. ]*\[(?:eztv|ettv|rartv|rarbg|cttv|publichd|ethd|tgx)",
                r"(?:\.[a-z]{2,6})?\]$",
            ))?,
            anime_group: Regex::new(r"^\[(?P<group>[^\]]+)\]")?,
            repost_suffix: Regex::new(&format!(r"(?i)-(?:{})$", REPOST_SUFFIXES))?,
            trailing_language: Regex::new(r"(?i)[ ._](?P<word>[a-z]+)$")?,
            exception: Regex::new(&format!(
                r"(?i)(?:^|[-._ \[(])(?P<group>{})(?:[-._ \])]|$)",
                EXCEPTION_GROUPS
            ))?,
            resolution: Regex::new(r"(?i)\b(?:\d{3,4}[pi]|4k)\b")?,
            trailing_comment: Regex::new(r"\s+\([^()]*\)$")?,
            bracket_group: Regex::new(r"(?i)[-._ ]\[(?P<group>[a-z0-9]+)\]$")?,
            dash_group: Regex::new(r"(?i)-(?P<group>[a-z0-9]+)(?:-(?P<part2>[a-z0-9]+))?$")?,
            hash: Regex::new(r"(?i)^[0-9a-f]{8}$")?,
            resolution_token: Regex::new(r"(?i)^\d{3,4}[pi]$")?,
            episode_token: Regex::new(r"(?i)^s\d+e\d+")?,
        })
    }

    pub fn parse(&self, title: &str) -> Option<String> {
        let mut title = self.extension.replace(title.trim(), "").into_owned();
        title = self.website_prefix.replace(&title, "").into_owned();
        strip_repeatedly(&self.tracker_suffix, &mut title);

        if let Some(caps) = self.anime_group.captures(&title) {
            let group = caps.name("group").map_or("", |g| g.as_str()).trim();
            return (!group.is_empty() && !self.hash.is_match(group)).then(|| group.to_string());
        }

        let mut title = title.trim_end_matches(['-', ' ', '.']).to_string();
        strip_repeatedly(&self.repost_suffix, &mut title);

        if let Some(caps) = self.trailing_language.captures(&title) {
            let is_language = caps
                .name("word")
                .is_some_and(|w| language_for_token(w.as_str()).is_some());
            if is_language {
                let cut = caps.get(0).map_or(title.len(), |m| m.start());
                title.truncate(cut);
            }
        }

        if let Some(group) = self.exception_group(&title) {
            return Some(group);
        }

        // `-GROUP (Show Name, Multi-Subs)`
        strip_repeatedly(&self.trailing_comment, &mut title);

        if let Some(caps) = self.bracket_group.captures(&title) {
            let group = caps.name("group").map_or("", |g| g.as_str());
            if self.hash.is_match(group) {
                return None;
            }
            return self.is_valid(group).then(|| group.to_string());
        }

        let caps = self.dash_group.captures(&title)?;
        let group = caps.name("group")?.as_str();
        match caps.name("part2").map(|p| p.as_str()) {
            Some(part2) if self.is_valid(group) && self.is_valid(part2) => {
                Some(format!("{}-{}", group, part2))
            }
            Some(part2) => self.is_valid(part2).then(|| part2.to_string()),
            None => self.is_valid(group).then(|| group.to_string()),
        }
    }

    /// Known groups only count when they appear after the resolution token,
    /// or at the very end of a title without one.
    fn exception_group(&self, title: &str) -> Option<String> {
        let resolution_end = self.resolution.find_iter(title).last().map(|m| m.end());
        self.exception
            .captures_iter(title)
            .filter_map(|caps| caps.name("group"))
            .filter(|group| match resolution_end {
                Some(end) => group.start() >= end,
                None => group.end() == title.len(),
            })
            .last()
            .map(|group| group.as_str().to_string())
    }

    fn is_valid(&self, group: &str) -> bool {
        !group.is_empty()
            && !self.hash.is_match(group)
            && !self.resolution_token.is_match(group)
            && !self.episode_token.is_match(group)
            && !NOT_A_GROUP.contains(&group.to_ascii_lowercase().as_str())
            && language_for_token(group).is_none()
    }
}

fn strip_repeatedly(pattern: &Regex, title: &mut String) {
    while let Some(found) = pattern.find(title) {
        if found.start() == 0 {
            break;
        }
        title.truncate(found.start());
    }
}
