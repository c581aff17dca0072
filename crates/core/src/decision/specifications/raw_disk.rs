use regex_lite::Regex;

use crate::decision::traits::DecisionSpecification;
use crate::decision::types::{
    DecisionContext, RejectionReason, RejectionType, SpecDecision, SpecificationPriority,
};
use crate::model::RemoteEpisode;

/// Rejects disc images and untouched disc structures.
#[derive(Debug)]
pub struct RawDiskSpecification {
    disc_patterns: Vec<Regex>,
}

impl RawDiskSpecification {
    pub fn new() -> Result<Self, regex_lite::Error> {
        let disc_patterns = [
            concat!(
                r"(?i)(?:dis[ck])(?:[-_. ]\d+[-_. ])",
                r"(?:(?:(?:480|720|1080|2160)[ip]|)[-_. ])?(?:blu-?ray)",
            ),
            r"(?i)(?:(?:480|720|1080|2160)[ip]|)[-_. ](?:full)[-_. ](?:blu-?ray)",
            r"(?i)(?:\d?x?m?dvd-?[r59])(?:[ ._]|$)",
        ]
        .into_iter()
        .map(Regex::new)
        .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { disc_patterns })
    }
}

impl DecisionSpecification for RawDiskSpecification {
    fn name(&self) -> &str {
        "RawDiskSpecification"
    }

    fn priority(&self) -> SpecificationPriority {
        SpecificationPriority::Default
    }

    fn rejection_type(&self) -> RejectionType {
        RejectionType::Permanent
    }

    fn is_satisfied_by(&self, subject: &RemoteEpisode, _context: &DecisionContext) -> SpecDecision {
        let title = subject.title();

        if self.disc_patterns.iter().any(|p| p.is_match(title)) {
            tracing::debug!(title, "release contains raw Bluray/DVD, rejecting");
            return SpecDecision::reject(RejectionReason::Raw, "Raw Bluray/DVD release");
        }

        let Some(container) = subject.release.container.as_deref() else {
            return SpecDecision::Accept;
        };

        match container.to_ascii_lowercase().as_str() {
            "vob" | "iso" => {
                tracing::debug!(title, container, "release contains raw DVD, rejecting");
                SpecDecision::reject(RejectionReason::Raw, "Raw DVD release")
            }
            "m2ts" => {
                tracing::debug!(title, container, "release contains raw Bluray, rejecting");
                SpecDecision::reject(RejectionReason::Raw, "Raw Bluray release")
            }
            _ => SpecDecision::Accept,
        }
    }
}
