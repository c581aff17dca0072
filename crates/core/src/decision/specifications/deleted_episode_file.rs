use std::collections::BTreeSet;
use std::sync::Arc;

use crate::config::ConfigProvider;
use crate::decision::traits::{DecisionSpecification, DiskProvider};
use crate::decision::types::{
    DecisionContext, RejectionReason, RejectionType, SpecDecision, SpecificationPriority,
};
use crate::model::RemoteEpisode;

/// Files known to the library but gone from disk will be unmonitored on the
/// next scan, so nothing is grabbed for them in the meantime.
pub struct DeletedEpisodeFileSpecification {
    config: Arc<dyn ConfigProvider>,
    disk: Arc<dyn DiskProvider>,
}

impl DeletedEpisodeFileSpecification {
    pub fn new(config: Arc<dyn ConfigProvider>, disk: Arc<dyn DiskProvider>) -> Self {
        Self { config, disk }
    }
}

impl DecisionSpecification for DeletedEpisodeFileSpecification {
    fn name(&self) -> &str {
        "DeletedEpisodeFileSpecification"
    }

    fn priority(&self) -> SpecificationPriority {
        SpecificationPriority::Disk
    }

    fn rejection_type(&self) -> RejectionType {
        RejectionType::Temporary
    }

    fn is_satisfied_by(&self, subject: &RemoteEpisode, context: &DecisionContext) -> SpecDecision {
        if !self.config.auto_unmonitor_previously_downloaded_episodes() {
            return SpecDecision::Accept;
        }

        if context.is_search() {
            tracing::debug!("skipping deleted episode file check during search");
            return SpecDecision::Accept;
        }

        let mut seen = BTreeSet::new();
        let mut missing = 0;
        for file in subject.episodes.iter().filter_map(|e| e.episode_file.as_ref()) {
            if !seen.insert(file.id) {
                continue;
            }
            let full_path = subject.series.path.join(&file.relative_path);
            if !self.disk.file_exists(&full_path) {
                tracing::trace!(path = %full_path.display(), "episode file is missing from disk");
                missing += 1;
            }
        }

        if missing > 0 {
            tracing::debug!(
                missing,
                "files for this episode exist in the library but not on disk, \
                 will be unmonitored on next scan"
            );
            return SpecDecision::reject(
                RejectionReason::EpisodeFileMissing,
                "Episode is not monitored",
            );
        }

        SpecDecision::Accept
    }
}
