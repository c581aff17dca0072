use std::sync::Arc;

use super::size_suffix;
use crate::config::ConfigProvider;
use crate::decision::traits::{DecisionSpecification, DiskProvider};
use crate::decision::types::{
    DecisionContext, RejectionReason, RejectionType, SpecDecision, SpecificationPriority,
};
use crate::metrics;
use crate::model::RemoteEpisode;

/// The release must fit on the destination volume with the configured margin left over.
pub struct FreeSpaceSpecification {
    config: Arc<dyn ConfigProvider>,
    disk: Arc<dyn DiskProvider>,
}

impl FreeSpaceSpecification {
    pub fn new(config: Arc<dyn ConfigProvider>, disk: Arc<dyn DiskProvider>) -> Self {
        Self { config, disk }
    }

    fn free_space(&self, subject: &RemoteEpisode, context: &DecisionContext) -> Option<u64> {
        let path = subject.series.space_check_path();

        if let Some(cached) = context.cached_free_space(path) {
            metrics::FREE_SPACE_LOOKUPS.with_label_values(&["cached"]).inc();
            return cached;
        }

        let space = match self.disk.available_space(path) {
            Ok(Some(space)) => {
                metrics::FREE_SPACE_LOOKUPS.with_label_values(&["known"]).inc();
                Some(space)
            }
            Ok(None) => {
                metrics::FREE_SPACE_LOOKUPS.with_label_values(&["unknown"]).inc();
                None
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "free space lookup failed");
                metrics::FREE_SPACE_LOOKUPS.with_label_values(&["error"]).inc();
                None
            }
        };

        context.cache_free_space(path, space);
        space
    }
}

impl DecisionSpecification for FreeSpaceSpecification {
    fn name(&self) -> &str {
        "FreeSpaceSpecification"
    }

    fn priority(&self) -> SpecificationPriority {
        SpecificationPriority::Disk
    }

    fn rejection_type(&self) -> RejectionType {
        RejectionType::Permanent
    }

    fn is_satisfied_by(&self, subject: &RemoteEpisode, context: &DecisionContext) -> SpecDecision {
        if self.config.skip_free_space_check_when_importing() {
            tracing::debug!("skipping free space check");
            return SpecDecision::Accept;
        }

        let Some(free_space) = self.free_space(subject, context) else {
            tracing::debug!(
                path = %subject.series.space_check_path().display(),
                "unable to get available space, skipping"
            );
            return SpecDecision::Accept;
        };

        let minimum = i128::from(self.config.minimum_free_space_when_importing()) * 1024 * 1024;
        let remaining = i128::from(free_space) - i128::from(subject.release.size);

        if remaining <= 0 {
            let message = "Importing after download will exceed available disk space";
            tracing::debug!("{}", message);
            return SpecDecision::reject(RejectionReason::MinimumFreeSpace, message);
        }

        if remaining < minimum {
            let message = format!(
                "Not enough free space ({}) to import after download: {}",
                size_suffix(minimum),
                size_suffix(remaining)
            );
            tracing::debug!("{}", message);
            return SpecDecision::reject(RejectionReason::MinimumFreeSpace, message);
        }

        SpecDecision::Accept
    }
}
