use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a release was sourced from, independent of resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualitySource {
    Unknown,
    Television,
    TelevisionRaw,
    Web,
    WebRip,
    Dvd,
    Bluray,
    BlurayRaw,
}

/// Closed set of quality tiers. Ids are stable and persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    #[default]
    Unknown,
    SDTV,
    DVD,
    WEBDL1080p,
    HDTV720p,
    WEBDL720p,
    Bluray720p,
    Bluray1080p,
    WEBDL480p,
    HDTV1080p,
    RAWHD,
    WEBRip480p,
    Bluray480p,
    WEBRip720p,
    WEBRip1080p,
    HDTV2160p,
    WEBRip2160p,
    WEBDL2160p,
    Bluray2160p,
    Bluray1080pRemux,
    Bluray2160pRemux,
    Bluray576p,
}

struct QualityInfo {
    quality: Quality,
    id: i32,
    name: &'static str,
    source: QualitySource,
    resolution: u16,
}

const fn info(
    quality: Quality,
    id: i32,
    name: &'static str,
    source: QualitySource,
    resolution: u16,
) -> QualityInfo {
    QualityInfo {
        quality,
        id,
        name,
        source,
        resolution,
    }
}

const QUALITIES: [QualityInfo; 22] = [
    info(Quality::Unknown, 0, "Unknown", QualitySource::Unknown, 0),
    info(Quality::SDTV, 1, "SDTV", QualitySource::Television, 480),
    info(Quality::DVD, 2, "DVD", QualitySource::Dvd, 480),
    info(Quality::WEBDL1080p, 3, "WEBDL-1080p", QualitySource::Web, 1080),
    info(Quality::HDTV720p, 4, "HDTV-720p", QualitySource::Television, 720),
    info(Quality::WEBDL720p, 5, "WEBDL-720p", QualitySource::Web, 720),
    info(Quality::Bluray720p, 6, "Bluray-720p", QualitySource::Bluray, 720),
    info(Quality::Bluray1080p, 7, "Bluray-1080p", QualitySource::Bluray, 1080),
    info(Quality::WEBDL480p, 8, "WEBDL-480p", QualitySource::Web, 480),
    info(Quality::HDTV1080p, 9, "HDTV-1080p", QualitySource::Television, 1080),
    info(Quality::RAWHD, 10, "Raw-HD", QualitySource::TelevisionRaw, 1080),
    info(Quality::WEBRip480p, 12, "WEBRip-480p", QualitySource::WebRip, 480),
    info(Quality::Bluray480p, 13, "Bluray-480p", QualitySource::Bluray, 480),
    info(Quality::WEBRip720p, 14, "WEBRip-720p", QualitySource::WebRip, 720),
    info(Quality::WEBRip1080p, 15, "WEBRip-1080p", QualitySource::WebRip, 1080),
    info(Quality::HDTV2160p, 16, "HDTV-2160p", QualitySource::Television, 2160),
    info(Quality::WEBRip2160p, 17, "WEBRip-2160p", QualitySource::WebRip, 2160),
    info(Quality::WEBDL2160p, 18, "WEBDL-2160p", QualitySource::Web, 2160),
    info(Quality::Bluray2160p, 19, "Bluray-2160p", QualitySource::Bluray, 2160),
    info(Quality::Bluray1080pRemux, 20, "Bluray-1080p Remux", QualitySource::BlurayRaw, 1080),
    info(Quality::Bluray2160pRemux, 21, "Bluray-2160p Remux", QualitySource::BlurayRaw, 2160),
    info(Quality::Bluray576p, 22, "Bluray-576p", QualitySource::Bluray, 576),
];

impl Quality {
    fn info(self) -> &'static QualityInfo {
        // Every variant has a row; Unknown is the first row.
        QUALITIES
            .iter()
            .find(|q| q.quality == self)
            .unwrap_or(&QUALITIES[0])
    }

    pub fn id(self) -> i32 {
        self.info().id
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn source(self) -> QualitySource {
        self.info().source
    }

    pub fn resolution(self) -> u16 {
        self.info().resolution
    }

    pub fn from_id(id: i32) -> Option<Quality> {
        QUALITIES.iter().find(|q| q.id == id).map(|q| q.quality)
    }

    /// Case-insensitive lookup by display name (`"WEBDL-1080p"`).
    pub fn from_name(name: &str) -> Option<Quality> {
        QUALITIES
            .iter()
            .find(|q| q.name.eq_ignore_ascii_case(name.trim()))
            .map(|q| q.quality)
    }

    pub fn all() -> impl Iterator<Item = Quality> {
        QUALITIES.iter().map(|q| q.quality)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
