use std::sync::Arc;

use crate::config::{ConfigProvider, ProperDownloadType};
use crate::decision::traits::DecisionSpecification;
use crate::decision::types::{
    DecisionContext, RejectionReason, RejectionType, SpecDecision, SpecificationPriority,
};
use crate::decision::upgrade::UpgradableSpecification;
use crate::model::RemoteEpisode;

/// A repack only replaces a file from the group that made it.
pub struct RepackSpecification {
    config: Arc<dyn ConfigProvider>,
    upgradable: Arc<UpgradableSpecification>,
}

impl RepackSpecification {
    pub fn new(config: Arc<dyn ConfigProvider>, upgradable: Arc<UpgradableSpecification>) -> Self {
        Self { config, upgradable }
    }
}

impl DecisionSpecification for RepackSpecification {
    fn name(&self) -> &str {
        "RepackSpecification"
    }

    fn priority(&self) -> SpecificationPriority {
        SpecificationPriority::Database
    }

    fn rejection_type(&self) -> RejectionType {
        RejectionType::Permanent
    }

    fn is_satisfied_by(&self, subject: &RemoteEpisode, _context: &DecisionContext) -> SpecDecision {
        let parsed = &subject.parsed_episode_info;
        if !parsed.quality.revision.is_repack {
            return SpecDecision::Accept;
        }

        let preference = self.config.download_propers_and_repacks();
        if preference == ProperDownloadType::DoNotPrefer {
            tracing::debug!("repacks are not preferred, skipping check");
            return SpecDecision::Accept;
        }

        let profile = &subject.series.quality_profile;
        let files = subject.episodes.iter().filter_map(|e| e.episode_file.as_ref());
        for file in files {
            if !self.upgradable.is_revision_upgrade(profile, &file.quality, &parsed.quality) {
                continue;
            }

            if preference == ProperDownloadType::DoNotUpgrade {
                tracing::debug!("auto downloading of repacks is disabled");
                return SpecDecision::reject(
                    RejectionReason::RepackDisabled,
                    "Repack downloading is disabled",
                );
            }

            let file_group = file.release_group.as_deref().map(str::trim).unwrap_or("");
            let release_group = parsed.release_group.as_deref().map(str::trim).unwrap_or("");

            if file_group.is_empty() {
                return SpecDecision::reject(
                    RejectionReason::RepackUnknownReleaseGroup,
                    "Unable to determine release group for the existing file",
                );
            }

            if release_group.is_empty() {
                return SpecDecision::reject(
                    RejectionReason::RepackUnknownReleaseGroup,
                    "Unable to determine release group for this release",
                );
            }

            if !file_group.eq_ignore_ascii_case(release_group) {
                tracing::debug!(
                    release_group,
                    file_group,
                    "release is a repack for a different release group"
                );
                return SpecDecision::reject(
                    RejectionReason::RepackReleaseGroupDoesNotMatch,
                    format!(
                        "Release is a repack for a different release group. \
                         Release Group: {}. File release group: {}",
                        release_group, file_group
                    ),
                );
            }
        }

        SpecDecision::Accept
    }
}
