//! Runs a release through the ordered specification chain.

use std::sync::Arc;
use thiserror::Error;

use crate::config::{Config, ConfigProvider};
use crate::decision::specifications::{
    AcceptableSizeSpecification, DelaySpecification, DeletedEpisodeFileSpecification,
    EpisodeRequestedSpecification, FreeSpaceSpecification, FullSeasonSpecification,
    HistorySpecification, MinimumAgeSpecification, RawDiskSpecification, RepackSpecification,
    SplitEpisodeSpecification,
};
use crate::decision::traits::{DecisionSpecification, DiskProvider, HistoryService};
use crate::decision::types::{Decision, DecisionContext, Rejection, SpecDecision};
use crate::decision::upgrade::UpgradableSpecification;
use crate::metrics;
use crate::model::RemoteEpisode;
use crate::profiles::{DelayProfileService, DelayProfileStore};
use crate::quality::{QualityDefinitionService, QualityDefinitionTable};

/// Errors that can occur while building an engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex_lite::Error),
}

/// Read-only services the built-in specifications consult.
#[derive(Clone)]
pub struct DecisionServices {
    pub config: Arc<dyn ConfigProvider>,
    pub disk: Arc<dyn DiskProvider>,
    pub history: Arc<dyn HistoryService>,
    pub delay_profiles: Arc<dyn DelayProfileService>,
    pub quality_definitions: Arc<dyn QualityDefinitionService>,
}

impl DecisionServices {
    /// Services backed by a loaded configuration: its delay profiles and the
    /// default quality definitions.
    pub fn from_config(
        config: Config,
        disk: Arc<dyn DiskProvider>,
        history: Arc<dyn HistoryService>,
    ) -> Self {
        let delay_profiles = Arc::new(DelayProfileStore::new(config.delay_profiles.clone()));
        Self {
            config: Arc::new(config),
            disk,
            history,
            delay_profiles,
            quality_definitions: Arc::new(QualityDefinitionTable::new()),
        }
    }
}

/// Ordered chain of specifications. The first rejection wins.
pub struct DecisionEngine {
    specifications: Vec<Box<dyn DecisionSpecification>>,
}

impl DecisionEngine {
    /// Specifications are ordered by priority once; ties keep their given order.
    pub fn new(mut specifications: Vec<Box<dyn DecisionSpecification>>) -> Self {
        specifications.sort_by_key(|s| s.priority());
        Self { specifications }
    }

    /// Engine with every built-in specification.
    pub fn with_defaults(services: DecisionServices) -> Result<Self, EngineError> {
        let upgradable = Arc::new(UpgradableSpecification::new(services.config.clone()));

        let specifications: Vec<Box<dyn DecisionSpecification>> = vec![
            Box::new(EpisodeRequestedSpecification),
            Box::new(FullSeasonSpecification),
            Box::new(SplitEpisodeSpecification),
            Box::new(RawDiskSpecification::new()?),
            Box::new(AcceptableSizeSpecification::new(
                services.quality_definitions.clone(),
            )),
            Box::new(MinimumAgeSpecification::new(services.config.clone())),
            Box::new(RepackSpecification::new(
                services.config.clone(),
                upgradable.clone(),
            )),
            Box::new(DelaySpecification::new(
                services.delay_profiles.clone(),
                upgradable.clone(),
            )),
            Box::new(HistorySpecification::new(
                services.config.clone(),
                services.history.clone(),
                upgradable,
            )),
            Box::new(DeletedEpisodeFileSpecification::new(
                services.config.clone(),
                services.disk.clone(),
            )),
            Box::new(FreeSpaceSpecification::new(services.config, services.disk)),
        ];

        Ok(Self::new(specifications))
    }

    pub fn specification_names(&self) -> Vec<&str> {
        self.specifications.iter().map(|s| s.name()).collect()
    }

    pub fn evaluate(&self, subject: &RemoteEpisode, context: &DecisionContext) -> Decision {
        for specification in &self.specifications {
            if let SpecDecision::Reject { reason, message } =
                specification.is_satisfied_by(subject, context)
            {
                tracing::debug!(
                    title = subject.title(),
                    specification = specification.name(),
                    reason = reason.as_str(),
                    %message,
                    "release rejected"
                );
                metrics::DECISIONS_TOTAL
                    .with_label_values(&["rejected", reason.as_str()])
                    .inc();

                return Decision::Rejected(Rejection {
                    reason,
                    rejection_type: specification.rejection_type(),
                    message,
                    specification: specification.name().to_string(),
                });
            }
        }

        tracing::debug!(title = subject.title(), "release accepted");
        metrics::DECISIONS_TOTAL
            .with_label_values(&["accepted", ""])
            .inc();
        Decision::Accepted
    }

    /// Evaluate a batch within one pass, sharing the context's lookups.
    pub fn evaluate_all(
        &self,
        subjects: &[RemoteEpisode],
        context: &DecisionContext,
    ) -> Vec<Decision> {
        subjects.iter().map(|s| self.evaluate(s, context)).collect()
    }
}
