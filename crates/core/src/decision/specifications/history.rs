use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::config::ConfigProvider;
use crate::decision::traits::{DecisionSpecification, HistoryService};
use crate::decision::types::{
    DecisionContext, RejectionReason, RejectionType, SpecDecision, SpecificationPriority,
};
use crate::decision::upgrade::{UpgradableSpecification, UpgradeRejectReason};
use crate::model::{EpisodeHistoryEventType, RemoteEpisode};

/// Grabs this recent are assumed to still be downloading.
const RECENT_GRAB_HOURS: i64 = 12;

/// Blocks grabs that would not improve on what was already grabbed.
pub struct HistorySpecification {
    config: Arc<dyn ConfigProvider>,
    history: Arc<dyn HistoryService>,
    upgradable: Arc<UpgradableSpecification>,
}

impl HistorySpecification {
    pub fn new(
        config: Arc<dyn ConfigProvider>,
        history: Arc<dyn HistoryService>,
        upgradable: Arc<UpgradableSpecification>,
    ) -> Self {
        Self {
            config,
            history,
            upgradable,
        }
    }
}

impl DecisionSpecification for HistorySpecification {
    fn name(&self) -> &str {
        "HistorySpecification"
    }

    fn priority(&self) -> SpecificationPriority {
        SpecificationPriority::Database
    }

    fn rejection_type(&self) -> RejectionType {
        RejectionType::Temporary
    }

    fn is_satisfied_by(&self, subject: &RemoteEpisode, context: &DecisionContext) -> SpecDecision {
        if context.is_search() {
            tracing::debug!("skipping history check during search");
            return SpecDecision::Accept;
        }

        let cdh_enabled = self.config.enable_completed_download_handling();
        let profile = &subject.series.quality_profile;
        let quality = &subject.parsed_episode_info.quality;
        let recent_cutoff = Utc::now() - Duration::hours(RECENT_GRAB_HOURS);

        for episode in &subject.episodes {
            let Some(most_recent) = self.history.most_recent_for_episode(episode.id) else {
                continue;
            };
            if most_recent.event_type != EpisodeHistoryEventType::Grabbed {
                continue;
            }

            let recent = most_recent.date > recent_cutoff;
            if cdh_enabled && (!recent || most_recent.has_download_id()) {
                tracing::trace!(
                    episode_id = episode.id,
                    "grab is tracked by completed download handling"
                );
                continue;
            }

            tracing::debug!(
                episode_id = episode.id,
                quality = %most_recent.quality,
                "checking current grab in history"
            );

            let cutoff_unmet = self.upgradable.cutoff_not_met(
                profile,
                &most_recent.quality,
                &most_recent.custom_formats,
                Some(quality),
            );

            if !cutoff_unmet {
                return if recent {
                    SpecDecision::reject(
                        RejectionReason::HistoryRecentCutoffMet,
                        format!(
                            "Recent grab event in history already meets cutoff: {}",
                            profile.cutoff_name()
                        ),
                    )
                } else {
                    SpecDecision::reject(
                        RejectionReason::HistoryCdhDisabledCutoffMet,
                        format!(
                            "CDH is disabled and grab event in history already meets cutoff: {}",
                            profile.cutoff_name()
                        ),
                    )
                };
            }

            let upgrade = self.upgradable.is_upgradable(
                profile,
                &most_recent.quality,
                &most_recent.custom_formats,
                quality,
                &subject.custom_formats,
            );

            let Err(reason) = upgrade else {
                continue;
            };

            let who = if recent { "Recent" } else { "CDH is disabled and" };
            let (reason, message) = match reason {
                UpgradeRejectReason::BetterQuality => (
                    RejectionReason::HistoryHigherPreference,
                    format!(
                        "{} grab event in history is of equal or higher preference: {}",
                        who, most_recent.quality
                    ),
                ),
                UpgradeRejectReason::BetterRevision => (
                    RejectionReason::HistoryHigherRevision,
                    format!(
                        "{} grab event in history is of equal or higher revision: {}",
                        who, most_recent.quality.revision
                    ),
                ),
                UpgradeRejectReason::QualityCutoff => (
                    RejectionReason::HistoryCutoffMet,
                    format!(
                        "{} grab event in history meets quality cutoff: {}",
                        who,
                        profile.cutoff_name()
                    ),
                ),
                UpgradeRejectReason::CustomFormatScore => (
                    RejectionReason::HistoryCustomFormatScore,
                    format!(
                        "{} grab event in history has an equal or higher custom format score: {}",
                        who,
                        profile.calculate_custom_format_score(&most_recent.custom_formats)
                    ),
                ),
                UpgradeRejectReason::MinCustomFormatScore => (
                    RejectionReason::HistoryCustomFormatScoreIncrement,
                    format!(
                        "{} grab event in history has a custom format score within \
                         Custom Format score increment: {}",
                        who, profile.min_upgrade_format_score
                    ),
                ),
                UpgradeRejectReason::UpgradesNotAllowed => (
                    RejectionReason::HistoryUpgradesNotAllowed,
                    format!("{} grab event in history and Quality Profile prevents upgrades", who),
                ),
            };

            return SpecDecision::reject(reason, message);
        }

        SpecDecision::Accept
    }
}
