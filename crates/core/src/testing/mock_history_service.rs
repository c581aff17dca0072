//! Mock history service for testing.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::decision::HistoryService;
use crate::model::EpisodeHistory;

/// History lookups backed by a map of episode id to most recent entry.
#[derive(Debug, Default)]
pub struct MockHistoryService {
    most_recent: RwLock<HashMap<i32, EpisodeHistory>>,
}

impl MockHistoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the most recent entry for `history.episode_id`.
    pub fn set_most_recent(&self, history: EpisodeHistory) {
        self.most_recent
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(history.episode_id, history);
    }

    pub fn clear(&self) {
        self.most_recent.write().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl HistoryService for MockHistoryService {
    fn most_recent_for_episode(&self, episode_id: i32) -> Option<EpisodeHistory> {
        self.most_recent.read().unwrap_or_else(|e| e.into_inner()).get(&episode_id).cloned()
    }
}
