use crate::decision::traits::DecisionSpecification;
use crate::decision::types::{
    DecisionContext, RejectionReason, RejectionType, SpecDecision, SpecificationPriority,
};
use crate::model::RemoteEpisode;

#[derive(Debug, Default)]
pub struct SplitEpisodeSpecification;

impl DecisionSpecification for SplitEpisodeSpecification {
    fn name(&self) -> &str {
        "SplitEpisodeSpecification"
    }

    fn priority(&self) -> SpecificationPriority {
        SpecificationPriority::Default
    }

    fn rejection_type(&self) -> RejectionType {
        RejectionType::Permanent
    }

    fn is_satisfied_by(&self, subject: &RemoteEpisode, _context: &DecisionContext) -> SpecDecision {
        if subject.parsed_episode_info.is_split_episode {
            tracing::debug!(title = subject.title(), "split episode release");
            return SpecDecision::reject(
                RejectionReason::SplitEpisode,
                "Split episode releases are not supported",
            );
        }
        SpecDecision::Accept
    }
}
