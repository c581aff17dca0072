use std::sync::Arc;

use crate::config::ConfigProvider;
use crate::decision::traits::DecisionSpecification;
use crate::decision::types::{
    DecisionContext, RejectionReason, RejectionType, SpecDecision, SpecificationPriority,
};
use crate::model::{DownloadProtocol, RemoteEpisode};

/// Holds back usenet posts until they have propagated.
pub struct MinimumAgeSpecification {
    config: Arc<dyn ConfigProvider>,
}

impl MinimumAgeSpecification {
    pub fn new(config: Arc<dyn ConfigProvider>) -> Self {
        Self { config }
    }
}

impl DecisionSpecification for MinimumAgeSpecification {
    fn name(&self) -> &str {
        "MinimumAgeSpecification"
    }

    fn priority(&self) -> SpecificationPriority {
        SpecificationPriority::Default
    }

    fn rejection_type(&self) -> RejectionType {
        RejectionType::Temporary
    }

    fn is_satisfied_by(&self, subject: &RemoteEpisode, _context: &DecisionContext) -> SpecDecision {
        if subject.release.download_protocol != DownloadProtocol::Usenet {
            tracing::debug!(
                title = subject.title(),
                "not usenet release, skipping minimum age check"
            );
            return SpecDecision::Accept;
        }

        let minimum_age = self.config.minimum_age();
        if minimum_age == 0 {
            return SpecDecision::Accept;
        }

        let age = subject.release.age_minutes();
        tracing::debug!(age = format!("{:.1}", age), minimum_age, "checking minimum age");

        if age < f64::from(minimum_age) {
            return SpecDecision::reject(
                RejectionReason::MinimumAge,
                format!(
                    "Only {:.1} minutes old, minimum age is {} minutes",
                    age, minimum_age
                ),
            );
        }

        SpecDecision::Accept
    }
}
