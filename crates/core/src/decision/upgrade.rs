//! Upgrade comparison between an existing file (or grab) and a candidate release.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::config::{ConfigProvider, ProperDownloadType};
use crate::profiles::{format_names, CustomFormat, QualityProfile};
use crate::quality::QualityModel;

/// Why a candidate is not an upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeRejectReason {
    QualityCutoff,
    BetterQuality,
    BetterRevision,
    UpgradesNotAllowed,
    CustomFormatScore,
    MinCustomFormatScore,
}

impl fmt::Display for UpgradeRejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::QualityCutoff => "existing quality meets the cutoff",
            Self::BetterQuality => "existing quality is better",
            Self::BetterRevision => "existing revision is equal or better",
            Self::UpgradesNotAllowed => "upgrades are not allowed",
            Self::CustomFormatScore => "existing custom format score is higher",
            Self::MinCustomFormatScore => "custom format score increment is too small",
        };
        f.write_str(text)
    }
}

/// Decides whether a candidate would upgrade what is already there.
pub struct UpgradableSpecification {
    config: Arc<dyn ConfigProvider>,
}

impl UpgradableSpecification {
    pub fn new(config: Arc<dyn ConfigProvider>) -> Self {
        Self { config }
    }

    /// `Ok(())` when `new_quality` with `new_formats` upgrades the current item.
    ///
    /// The comparison is a strict order: no item upgrades itself, and
    /// upgrades chain transitively.
    pub fn is_upgradable(
        &self,
        profile: &QualityProfile,
        current_quality: &QualityModel,
        current_formats: &[CustomFormat],
        new_quality: &QualityModel,
        new_formats: &[CustomFormat],
    ) -> Result<(), UpgradeRejectReason> {
        if profile.rank(current_quality.quality) >= profile.cutoff_rank() {
            tracing::debug!(
                current = %current_quality,
                cutoff = %profile.cutoff_name(),
                "existing item meets cutoff"
            );
            return Err(UpgradeRejectReason::QualityCutoff);
        }

        match profile.compare(new_quality.quality, current_quality.quality) {
            Ordering::Less => {
                tracing::debug!(
                    current = %current_quality,
                    new = %new_quality,
                    "existing item has better quality"
                );
                return Err(UpgradeRejectReason::BetterQuality);
            }
            Ordering::Equal => {
                let revisions_count =
                    self.config.download_propers_and_repacks() != ProperDownloadType::DoNotPrefer;
                if !revisions_count || new_quality.revision <= current_quality.revision {
                    tracing::debug!(
                        current = %current_quality,
                        new = %new_quality,
                        "existing item has equal or better revision"
                    );
                    return Err(UpgradeRejectReason::BetterRevision);
                }
            }
            Ordering::Greater => {}
        }

        if !profile.upgrade_allowed {
            tracing::debug!(
                profile = %profile.name,
                "upgrading is not allowed by the quality profile"
            );
            return Err(UpgradeRejectReason::UpgradesNotAllowed);
        }

        let current_score = profile.calculate_custom_format_score(current_formats);
        let new_score = profile.calculate_custom_format_score(new_formats);
        if new_score < current_score + profile.min_upgrade_format_score {
            tracing::debug!(
                current_formats = %format_names(current_formats),
                new_formats = %format_names(new_formats),
                current_score,
                new_score,
                min_increment = profile.min_upgrade_format_score,
                "custom format score does not improve enough"
            );
            return Err(if new_score < current_score {
                UpgradeRejectReason::CustomFormatScore
            } else {
                UpgradeRejectReason::MinCustomFormatScore
            });
        }

        Ok(())
    }

    /// Same profile rank, strictly newer revision. Qualities grouped together
    /// in the profile count as the same quality.
    pub fn is_revision_upgrade(
        &self,
        profile: &QualityProfile,
        current: &QualityModel,
        new: &QualityModel,
    ) -> bool {
        profile.compare(new.quality, current.quality) == Ordering::Equal
            && new.revision > current.revision
    }

    /// True while the current quality is below the effective cutoff, or the
    /// candidate is a revision upgrade of it.
    ///
    /// When upgrades are disabled the effective cutoff is the first allowed quality.
    pub fn quality_cutoff_not_met(
        &self,
        profile: &QualityProfile,
        current: &QualityModel,
        new: Option<&QualityModel>,
    ) -> bool {
        let cutoff_rank = if profile.upgrade_allowed {
            profile.cutoff_rank()
        } else {
            profile
                .first_allowed_quality()
                .map(|q| profile.rank(q))
                .unwrap_or_else(|| profile.cutoff_rank())
        };

        if profile.rank(current.quality) < cutoff_rank {
            return true;
        }

        new.is_some_and(|new| self.is_revision_upgrade(profile, current, new))
    }

    /// Quality cutoff or custom format cutoff not yet reached.
    pub fn cutoff_not_met(
        &self,
        profile: &QualityProfile,
        current: &QualityModel,
        current_formats: &[CustomFormat],
        new: Option<&QualityModel>,
    ) -> bool {
        if self.quality_cutoff_not_met(profile, current, new) {
            return true;
        }

        let score = profile.calculate_custom_format_score(current_formats);
        if score < profile.cutoff_format_score {
            tracing::debug!(
                score,
                cutoff = profile.cutoff_format_score,
                "custom format cutoff not met"
            );
            return true;
        }

        false
    }

    /// False only when the profile forbids upgrades and the candidate would be one.
    pub fn is_upgrade_allowed(
        &self,
        profile: &QualityProfile,
        current: &QualityModel,
        current_formats: &[CustomFormat],
        new: &QualityModel,
        new_formats: &[CustomFormat],
    ) -> bool {
        if profile.upgrade_allowed {
            return true;
        }

        let quality_upgrade = profile.compare(new.quality, current.quality) == Ordering::Greater;
        let format_upgrade = profile.calculate_custom_format_score(new_formats)
            > profile.calculate_custom_format_score(current_formats);

        if quality_upgrade || format_upgrade {
            tracing::debug!(profile = %profile.name, "quality profile does not allow upgrades");
            return false;
        }
        true
    }
}
