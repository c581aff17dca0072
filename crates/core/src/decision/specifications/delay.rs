use std::sync::Arc;

use crate::decision::traits::DecisionSpecification;
use crate::decision::types::{
    DecisionContext, RejectionReason, RejectionType, SpecDecision, SpecificationPriority,
};
use crate::decision::upgrade::UpgradableSpecification;
use crate::model::RemoteEpisode;
use crate::profiles::DelayProfileService;

/// Waits out the delay profile so a better release has a chance to show up.
pub struct DelaySpecification {
    delay_profiles: Arc<dyn DelayProfileService>,
    upgradable: Arc<UpgradableSpecification>,
}

impl DelaySpecification {
    pub fn new(
        delay_profiles: Arc<dyn DelayProfileService>,
        upgradable: Arc<UpgradableSpecification>,
    ) -> Self {
        Self {
            delay_profiles,
            upgradable,
        }
    }
}

impl DecisionSpecification for DelaySpecification {
    fn name(&self) -> &str {
        "DelaySpecification"
    }

    fn priority(&self) -> SpecificationPriority {
        SpecificationPriority::Database
    }

    fn rejection_type(&self) -> RejectionType {
        RejectionType::Temporary
    }

    fn is_satisfied_by(&self, subject: &RemoteEpisode, context: &DecisionContext) -> SpecDecision {
        if context.is_user_invoked_search() {
            tracing::debug!("ignoring delay for user invoked search");
            return SpecDecision::Accept;
        }

        let profile = &subject.series.quality_profile;
        let delay_profile = self.delay_profiles.best_for_tags(&subject.series.tags);
        let protocol = subject.release.download_protocol;
        let delay = delay_profile.protocol_delay(protocol);
        let preferred_protocol = protocol == delay_profile.preferred_protocol;

        if delay == 0 {
            tracing::debug!(?protocol, "delay profile does not require a waiting period");
            return SpecDecision::Accept;
        }

        let quality = &subject.parsed_episode_info.quality;

        if preferred_protocol {
            let revision_upgrade = subject
                .episodes
                .iter()
                .filter_map(|e| e.episode_file.as_ref())
                .any(|file| self.upgradable.is_revision_upgrade(profile, &file.quality, quality));
            if revision_upgrade {
                tracing::debug!(
                    "new quality is a better revision for existing quality, skipping delay"
                );
                return SpecDecision::Accept;
            }
        }

        if delay_profile.bypass_if_highest_quality && preferred_protocol {
            let best_in_profile = profile
                .last_allowed_quality()
                .is_some_and(|best| profile.rank(quality.quality) >= profile.rank(best));
            if best_in_profile {
                tracing::debug!(
                    "quality is highest in profile for preferred protocol, will not delay"
                );
                return SpecDecision::Accept;
            }
        }

        if delay_profile.bypass_if_above_custom_format_score
            && preferred_protocol
            && subject.custom_format_score >= delay_profile.minimum_custom_format_score
        {
            tracing::debug!(
                score = subject.custom_format_score,
                minimum = delay_profile.minimum_custom_format_score,
                "custom format score meets minimum for preferred protocol, will not delay"
            );
            return SpecDecision::Accept;
        }

        let age = subject.release.age_minutes();
        if age < f64::from(delay) {
            tracing::debug!(
                age = format!("{:.1}", age),
                delay,
                "waiting for better quality release"
            );
            return SpecDecision::reject(
                RejectionReason::MinimumAgeDelay,
                "Waiting for better quality release",
            );
        }

        SpecDecision::Accept
    }
}
