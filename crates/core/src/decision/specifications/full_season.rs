use chrono::{Duration, Utc};

use crate::decision::traits::DecisionSpecification;
use crate::decision::types::{
    DecisionContext, RejectionReason, RejectionType, SpecDecision, SpecificationPriority,
};
use crate::model::RemoteEpisode;

/// Season packs are only grabbed once every episode in them has aired.
#[derive(Debug, Default)]
pub struct FullSeasonSpecification;

impl DecisionSpecification for FullSeasonSpecification {
    fn name(&self) -> &str {
        "FullSeasonSpecification"
    }

    fn priority(&self) -> SpecificationPriority {
        SpecificationPriority::Default
    }

    fn rejection_type(&self) -> RejectionType {
        RejectionType::Permanent
    }

    fn is_satisfied_by(&self, subject: &RemoteEpisode, _context: &DecisionContext) -> SpecDecision {
        if !subject.parsed_episode_info.full_season {
            return SpecDecision::Accept;
        }

        let horizon = Utc::now() + Duration::hours(24);
        let unaired = subject
            .episodes
            .iter()
            .any(|e| e.air_date_utc.map_or(true, |aired| aired > horizon));

        if unaired {
            tracing::debug!(title = subject.title(), "full season release has unaired episodes");
            return SpecDecision::reject(
                RejectionReason::FullSeasonNotAired,
                "Full season release rejected. All episodes haven't aired yet.",
            );
        }

        SpecDecision::Accept
    }
}
