use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::DownloadProtocol;

/// How long to hold a release back in the hope of a better one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelayProfile {
    #[serde(default)]
    pub id: i32,
    #[serde(default = "default_true")]
    pub enable_usenet: bool,
    #[serde(default = "default_true")]
    pub enable_torrent: bool,
    #[serde(default = "default_preferred_protocol")]
    pub preferred_protocol: DownloadProtocol,
    /// Minutes.
    #[serde(default)]
    pub usenet_delay: u32,
    /// Minutes.
    #[serde(default)]
    pub torrent_delay: u32,
    #[serde(default)]
    pub bypass_if_highest_quality: bool,
    #[serde(default)]
    pub bypass_if_above_custom_format_score: bool,
    #[serde(default)]
    pub minimum_custom_format_score: i32,
    /// Lower orders win when several profiles match a series.
    #[serde(default = "default_order")]
    pub order: i32,
    /// An empty tag set matches every series.
    #[serde(default)]
    pub tags: BTreeSet<i32>,
}

fn default_true() -> bool {
    true
}

fn default_preferred_protocol() -> DownloadProtocol {
    DownloadProtocol::Usenet
}

fn default_order() -> i32 {
    i32::MAX
}

impl Default for DelayProfile {
    fn default() -> Self {
        Self {
            id: 0,
            enable_usenet: true,
            enable_torrent: true,
            preferred_protocol: default_preferred_protocol(),
            usenet_delay: 0,
            torrent_delay: 0,
            bypass_if_highest_quality: false,
            bypass_if_above_custom_format_score: false,
            minimum_custom_format_score: 0,
            order: default_order(),
            tags: BTreeSet::new(),
        }
    }
}

impl DelayProfile {
    /// Delay in minutes for a protocol. Unknown protocols are never delayed.
    pub fn protocol_delay(&self, protocol: DownloadProtocol) -> u32 {
        match protocol {
            DownloadProtocol::Usenet => self.usenet_delay,
            DownloadProtocol::Torrent => self.torrent_delay,
            DownloadProtocol::Unknown => 0,
        }
    }

    fn applies_to(&self, tags: &BTreeSet<i32>) -> bool {
        self.tags.is_empty() || !self.tags.is_disjoint(tags)
    }
}

/// Resolves the delay profile for a series from its tags.
pub trait DelayProfileService: Send + Sync {
    fn best_for_tags(&self, tags: &BTreeSet<i32>) -> DelayProfile;
}

/// Delay profiles held in memory, typically loaded from configuration.
#[derive(Debug, Clone, Default)]
pub struct DelayProfileStore {
    profiles: Vec<DelayProfile>,
}

impl DelayProfileStore {
    pub fn new(mut profiles: Vec<DelayProfile>) -> Self {
        profiles.sort_by_key(|p| p.order);
        Self { profiles }
    }
}

impl DelayProfileService for DelayProfileStore {
    fn best_for_tags(&self, tags: &BTreeSet<i32>) -> DelayProfile {
        self.profiles
            .iter()
            .find(|p| p.applies_to(tags))
            .cloned()
            .unwrap_or_default()
    }
}
