use chrono::Duration;
use std::sync::Arc;

use super::size_suffix;
use crate::decision::traits::DecisionSpecification;
use crate::decision::types::{
    DecisionContext, RejectionReason, RejectionType, SpecDecision, SpecificationPriority,
};
use crate::model::RemoteEpisode;
use crate::quality::QualityDefinitionService;

/// Runtime assumed for a premiere whose runtime is not known yet, in minutes.
const PREMIERE_RUNTIME: u32 = 45;

const MB: f64 = 1024.0 * 1024.0;

/// Size must fit the quality's MB-per-minute limits for the total runtime covered.
pub struct AcceptableSizeSpecification {
    quality_definitions: Arc<dyn QualityDefinitionService>,
}

impl AcceptableSizeSpecification {
    pub fn new(quality_definitions: Arc<dyn QualityDefinitionService>) -> Self {
        Self {
            quality_definitions,
        }
    }

    /// Total runtime in minutes, or `None` when it cannot be determined.
    fn runtime(&self, subject: &RemoteEpisode) -> Option<u32> {
        let series = &subject.series;
        let total: u32 = subject
            .episodes
            .iter()
            .map(|e| if e.runtime > 0 { e.runtime } else { series.runtime })
            .sum();
        if total > 0 {
            return Some(total);
        }

        // Premieres often arrive before their runtime is published. Without a
        // series premiere date the earliest episode in the release stands in.
        let aired_from = series
            .first_aired
            .or_else(|| subject.episodes.iter().filter_map(|e| e.air_date_utc).min())
            .unwrap_or(subject.release.publish_date);
        let premiere = subject.episodes.iter().all(|e| {
            e.season_number == series.first_season_number
                && e.air_date_utc
                    .map_or(true, |aired| aired < aired_from + Duration::hours(24))
        });

        premiere.then(|| PREMIERE_RUNTIME * subject.episodes.len() as u32)
    }
}

impl DecisionSpecification for AcceptableSizeSpecification {
    fn name(&self) -> &str {
        "AcceptableSizeSpecification"
    }

    fn priority(&self) -> SpecificationPriority {
        SpecificationPriority::Default
    }

    fn rejection_type(&self) -> RejectionType {
        RejectionType::Permanent
    }

    fn is_satisfied_by(&self, subject: &RemoteEpisode, _context: &DecisionContext) -> SpecDecision {
        let parsed = &subject.parsed_episode_info;
        let size = subject.release.size;

        if parsed.special {
            tracing::debug!("special release, skipping size check");
            return SpecDecision::Accept;
        }
        if size == 0 {
            tracing::debug!("release has unknown size, skipping size check");
            return SpecDecision::Accept;
        }
        if subject.episodes.is_empty() {
            return SpecDecision::Accept;
        }

        let quality = parsed.quality.quality;
        let (min_size, max_size) = match subject.series.quality_profile.item_for(quality) {
            Some(item) if item.min_size.is_some() || item.max_size.is_some() => {
                (item.min_size, item.max_size)
            }
            _ => {
                let definition = self.quality_definitions.get(quality);
                (definition.min_size, definition.max_size)
            }
        };

        let Some(runtime) = self.runtime(subject) else {
            tracing::debug!("runtime of all episodes is 0, unable to validate size");
            return SpecDecision::reject(
                RejectionReason::UnknownRuntime,
                "Runtime of all episodes is 0, unable to validate size until it is available",
            );
        };

        tracing::debug!(size, runtime, %quality, "checking release size");

        if let Some(min_size) = min_size {
            let minimum = (min_size * MB * f64::from(runtime)) as u64;
            if size < minimum {
                return SpecDecision::reject(
                    RejectionReason::BelowMinimumSize,
                    format!(
                        "{} is smaller than minimum allowed {} (for {} minutes)",
                        size_suffix(size.into()),
                        size_suffix(minimum.into()),
                        runtime
                    ),
                );
            }
        }

        if let Some(max_size) = max_size {
            let maximum = (max_size * MB * f64::from(runtime)) as u64;
            if size > maximum {
                return SpecDecision::reject(
                    RejectionReason::AboveMaximumSize,
                    format!(
                        "{} is larger than maximum allowed {} (for {} minutes)",
                        size_suffix(size.into()),
                        size_suffix(maximum.into()),
                        runtime
                    ),
                );
            }
        }

        SpecDecision::Accept
    }
}
