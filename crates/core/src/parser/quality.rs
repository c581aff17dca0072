//! Quality tier and revision detection from release titles.

use regex_lite::Regex;

use crate::quality::{Quality, QualityModel, Revision};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    R360p,
    R480p,
    R540p,
    R576p,
    R720p,
    R1080p,
    R2160p,
}

#[derive(Debug)]
pub(crate) struct QualityPatterns {
    bluray: Regex,
    bdrip: Regex,
    webrip: Regex,
    webdl: Regex,
    hdtv: Regex,
    raw_hd: Regex,
    dvd: Regex,
    television: Regex,
    remux: Regex,
    codec: Regex,
    resolution: Regex,
    proper: Regex,
    repack: Regex,
    version: Regex,
    real: Regex,
}

impl QualityPatterns {
    pub fn new() -> Result<Self, regex_lite::Error> {
        Ok(Self {
            bluray: Regex::new(
                r"(?i)\b(?:m?blu-?ray|hddvd|bd25|bd50|bdiso|bdmux|uhd[-. ]?bd|bd)\b",
            )?,
            bdrip: Regex::new(r"(?i)\b(?:bdrip|brrip|bdlight)\b")?,
            webrip: Regex::new(r"(?i)\b(?:web[-_. ]?rip|webmux)\b")?,
            webdl: Regex::new(
                r"(?i)\b(?:web[-_. ]?dl|webhd|amazonhd|itunes ?hd|netflixu?hd|web)\b",
            )?,
            hdtv: Regex::new(r"(?i)\bhdtv\b")?,
            raw_hd: Regex::new(r"(?i)\b(?:rawhd|raw[-_. ]hd|1080i[-_. ]mpeg-?2)\b")?,
            dvd: Regex::new(r"(?i)\b(?:dvd|dvdrip|xvidvd|ntsc|pal)\b")?,
            television: Regex::new(
                r"(?i)\b(?:ws[-_. ]dsr|dsr|dsrip|pdtv|sdtv|tvrip|dthrip|dvbrip|satrip)\b",
            )?,
            remux: Regex::new(r"(?i)\b(?:remux|bdremux)\b")?,
            codec: Regex::new(r"(?i)\b(?:x264|h\.?264|xvid|divx)\b")?,
            resolution: Regex::new(concat!(
                r"(?i)\b(?:",
                r"(?P<r2160>2160p|3840x2160|4k[-_. ](?:uhd|hevc|bd))",
                r"|(?P<r1080>1080p|1080i|1920x1080|1440p|fhd)",
                r"|(?P<r720>720p|1280x720|960p)",
                r"|(?P<r576>576p)",
                r"|(?P<r540>540p)",
                r"|(?P<r480>480p|480i|640x480|848x480)",
                r"|(?P<r360>360p)",
                r")\b",
            ))?,
            proper: Regex::new(r"(?i)\bproper\b")?,
            repack: Regex::new(r"(?i)\b(?:repack|rerip)(?P<count>\d)?\b")?,
            version: Regex::new(r"(?i)(?:\d|\[|[-_. ])v(?P<version>\d)(?:\]|\b)")?,
            real: Regex::new(r"\bREAL\b")?,
        })
    }

    pub fn parse(&self, title: &str) -> QualityModel {
        let normalized = title.replace('_', " ");
        QualityModel {
            quality: self.parse_tier(&normalized),
            revision: self.parse_revision(&normalized),
        }
    }

    fn parse_resolution(&self, title: &str) -> Option<Resolution> {
        let caps = self.resolution.captures(title)?;
        [
            ("r2160", Resolution::R2160p),
            ("r1080", Resolution::R1080p),
            ("r720", Resolution::R720p),
            ("r576", Resolution::R576p),
            ("r540", Resolution::R540p),
            ("r480", Resolution::R480p),
            ("r360", Resolution::R360p),
        ]
        .into_iter()
        .find(|(name, _)| caps.name(name).is_some())
        .map(|(_, resolution)| resolution)
    }

    fn parse_tier(&self, title: &str) -> Quality {
        use Resolution::*;

        let resolution = self.parse_resolution(title);
        let remux = self.remux.is_match(title);

        if self.raw_hd.is_match(title) {
            return Quality::RAWHD;
        }

        if self.bluray.is_match(title) {
            return match (remux, resolution) {
                (true, Some(R2160p)) => Quality::Bluray2160pRemux,
                (true, _) => Quality::Bluray1080pRemux,
                (false, Some(R2160p)) => Quality::Bluray2160p,
                (false, Some(R1080p)) => Quality::Bluray1080p,
                (false, Some(R576p)) => Quality::Bluray576p,
                (false, Some(R360p | R480p | R540p)) => Quality::Bluray480p,
                (false, _) => Quality::Bluray720p,
            };
        }

        if self.bdrip.is_match(title) {
            return match resolution {
                Some(R2160p) => Quality::Bluray2160p,
                Some(R1080p) => Quality::Bluray1080p,
                Some(R720p) => Quality::Bluray720p,
                Some(R576p) => Quality::Bluray576p,
                _ => Quality::Bluray480p,
            };
        }

        if self.webrip.is_match(title) {
            return match resolution {
                Some(R2160p) => Quality::WEBRip2160p,
                Some(R1080p) => Quality::WEBRip1080p,
                Some(R720p) => Quality::WEBRip720p,
                _ if title.contains("[WEBRip]") => Quality::WEBRip720p,
                _ => Quality::WEBRip480p,
            };
        }

        if self.webdl.is_match(title) {
            return match resolution {
                Some(R2160p) => Quality::WEBDL2160p,
                Some(R1080p) => Quality::WEBDL1080p,
                Some(R720p) => Quality::WEBDL720p,
                _ if title.contains("[WEBDL]") => Quality::WEBDL720p,
                _ => Quality::WEBDL480p,
            };
        }

        if self.hdtv.is_match(title) {
            return match resolution {
                Some(R2160p) => Quality::HDTV2160p,
                Some(R1080p) => Quality::HDTV1080p,
                Some(R720p) => Quality::HDTV720p,
                _ if title.contains("[HDTV]") => Quality::HDTV720p,
                _ => Quality::SDTV,
            };
        }

        if self.dvd.is_match(title) {
            return Quality::DVD;
        }

        if self.television.is_match(title) {
            return match resolution {
                Some(R1080p) => Quality::HDTV1080p,
                Some(R720p) => Quality::HDTV720p,
                _ => Quality::SDTV,
            };
        }

        match (remux, resolution) {
            (true, Some(R2160p)) => Quality::Bluray2160pRemux,
            (true, Some(R1080p)) => Quality::Bluray1080pRemux,
            (_, Some(R2160p)) => Quality::HDTV2160p,
            (_, Some(R1080p)) => Quality::HDTV1080p,
            (_, Some(R720p)) => Quality::HDTV720p,
            (_, Some(_)) => Quality::SDTV,
            (_, None) if self.codec.is_match(title) => Quality::SDTV,
            (_, None) => Quality::Unknown,
        }
    }

    fn parse_revision(&self, title: &str) -> Revision {
        let mut revision = Revision::default();

        if self.proper.is_match(title) {
            revision.version = 2;
        }

        if let Some(caps) = self.repack.captures(title) {
            let count = caps
                .name("count")
                .and_then(|c| c.as_str().parse::<u32>().ok())
                .unwrap_or(1);
            revision.version = revision.version.max(count + 1);
            revision.is_repack = true;
        }

        if let Some(version) = self
            .version
            .captures(title)
            .and_then(|caps| caps.name("version"))
            .and_then(|v| v.as_str().parse::<u32>().ok())
        {
            revision.version = revision.version.max(version);
        }

        revision.real = self.real.find_iter(title).count() as u32;
        revision
    }
}
