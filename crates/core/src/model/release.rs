use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadProtocol {
    #[default]
    Unknown,
    Usenet,
    Torrent,
}

/// A release as reported by an indexer, before any parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseInfo {
    pub guid: String,
    pub title: String,
    /// Bytes. Zero when the indexer did not report a size.
    #[serde(default)]
    pub size: u64,
    pub publish_date: DateTime<Utc>,
    #[serde(default)]
    pub download_protocol: DownloadProtocol,
    /// Container reported by the indexer (`mkv`, `iso`, `vob`, ...).
    #[serde(default)]
    pub container: Option<String>,
    #[serde(default)]
    pub indexer: String,
    #[serde(default)]
    pub indexer_id: i32,
}

impl ReleaseInfo {
    pub fn new(
        title: &str,
        size: u64,
        publish_date: DateTime<Utc>,
        protocol: DownloadProtocol,
    ) -> Self {
        Self {
            guid: String::new(),
            title: title.to_string(),
            size,
            publish_date,
            download_protocol: protocol,
            container: None,
            indexer: String::new(),
            indexer_id: 0,
        }
    }

    pub fn age_minutes(&self) -> f64 {
        self.age_minutes_at(Utc::now())
    }

    pub fn age_minutes_at(&self, now: DateTime<Utc>) -> f64 {
        (now - self.publish_date).num_milliseconds() as f64 / 60_000.0
    }
}
