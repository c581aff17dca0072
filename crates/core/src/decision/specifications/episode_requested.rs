use crate::decision::traits::DecisionSpecification;
use crate::decision::types::{
    DecisionContext, RejectionReason, RejectionType, SpecDecision, SpecificationPriority,
};
use crate::model::{Episode, RemoteEpisode};

/// During a search, only releases covering a requested episode pass.
#[derive(Debug, Default)]
pub struct EpisodeRequestedSpecification;

impl DecisionSpecification for EpisodeRequestedSpecification {
    fn name(&self) -> &str {
        "EpisodeRequestedSpecification"
    }

    fn priority(&self) -> SpecificationPriority {
        SpecificationPriority::Default
    }

    fn rejection_type(&self) -> RejectionType {
        RejectionType::Permanent
    }

    fn is_satisfied_by(&self, subject: &RemoteEpisode, context: &DecisionContext) -> SpecDecision {
        let Some(criteria) = &context.search_criteria else {
            return SpecDecision::Accept;
        };

        if subject
            .episodes
            .iter()
            .any(|e| criteria.episode_ids.contains(&e.id))
        {
            return SpecDecision::Accept;
        }

        tracing::debug!(
            title = subject.title(),
            "release rejected since the episode wasn't requested"
        );

        let mut episodes: Vec<&Episode> = subject.episodes.iter().collect();
        episodes.sort_by_key(|e| (e.season_number, e.episode_number));

        let message = match (episodes.first(), episodes.last()) {
            (Some(first), Some(last)) if episodes.len() > 1 => format!(
                "Episode wasn't requested: {}x{}-{}",
                first.season_number, first.episode_number, last.episode_number
            ),
            (Some(first), _) => format!(
                "Episode wasn't requested: {}x{}",
                first.season_number, first.episode_number
            ),
            _ => "Episode wasn't requested".to_string(),
        };

        SpecDecision::reject(RejectionReason::WrongEpisode, message)
    }
}
