use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Evaluation order of a specification. Cheaper checks run first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecificationPriority {
    Default = 0,
    Database = 1,
    Disk = 2,
}

/// Whether a rejection may clear up on a later evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionType {
    Permanent,
    Temporary,
}

/// Closed set of reasons a release can be turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    UnableToParse,
    WrongEpisode,
    FullSeasonNotAired,
    SplitEpisode,
    Raw,
    BelowMinimumSize,
    AboveMaximumSize,
    UnknownRuntime,
    MinimumAge,
    RepackDisabled,
    RepackUnknownReleaseGroup,
    RepackReleaseGroupDoesNotMatch,
    MinimumAgeDelay,
    HistoryRecentCutoffMet,
    HistoryCdhDisabledCutoffMet,
    HistoryHigherPreference,
    HistoryHigherRevision,
    HistoryCutoffMet,
    HistoryCustomFormatScore,
    HistoryCustomFormatScoreIncrement,
    HistoryUpgradesNotAllowed,
    EpisodeFileMissing,
    MinimumFreeSpace,
}

impl RejectionReason {
    /// Stable label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnableToParse => "unable_to_parse",
            Self::WrongEpisode => "wrong_episode",
            Self::FullSeasonNotAired => "full_season_not_aired",
            Self::SplitEpisode => "split_episode",
            Self::Raw => "raw",
            Self::BelowMinimumSize => "below_minimum_size",
            Self::AboveMaximumSize => "above_maximum_size",
            Self::UnknownRuntime => "unknown_runtime",
            Self::MinimumAge => "minimum_age",
            Self::RepackDisabled => "repack_disabled",
            Self::RepackUnknownReleaseGroup => "repack_unknown_release_group",
            Self::RepackReleaseGroupDoesNotMatch => "repack_release_group_does_not_match",
            Self::MinimumAgeDelay => "minimum_age_delay",
            Self::HistoryRecentCutoffMet => "history_recent_cutoff_met",
            Self::HistoryCdhDisabledCutoffMet => "history_cdh_disabled_cutoff_met",
            Self::HistoryHigherPreference => "history_higher_preference",
            Self::HistoryHigherRevision => "history_higher_revision",
            Self::HistoryCutoffMet => "history_cutoff_met",
            Self::HistoryCustomFormatScore => "history_custom_format_score",
            Self::HistoryCustomFormatScoreIncrement => "history_custom_format_score_increment",
            Self::HistoryUpgradesNotAllowed => "history_upgrades_not_allowed",
            Self::EpisodeFileMissing => "episode_file_missing",
            Self::MinimumFreeSpace => "minimum_free_space",
        }
    }
}

/// Verdict of a single specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecDecision {
    Accept,
    Reject {
        reason: RejectionReason,
        message: String,
    },
}

impl SpecDecision {
    pub fn reject(reason: RejectionReason, message: impl Into<String>) -> Self {
        Self::Reject {
            reason,
            message: message.into(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accept)
    }
}

/// A rejection attributed to the specification that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub reason: RejectionReason,
    pub rejection_type: RejectionType,
    pub message: String,
    pub specification: String,
}

impl Rejection {
    pub fn is_permanent(&self) -> bool {
        self.rejection_type == RejectionType::Permanent
    }
}

/// Outcome of running a release through the whole chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Decision {
    Accepted,
    Rejected(Rejection),
}

impl Decision {
    /// Rejection for a title the parser could not make sense of.
    pub fn unparseable(title: &str) -> Self {
        Self::Rejected(Rejection {
            reason: RejectionReason::UnableToParse,
            rejection_type: RejectionType::Permanent,
            message: format!("Unable to parse release: {}", title),
            specification: "TitleParser".to_string(),
        })
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Accepted => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }
}

/// What triggered the evaluation when it came from a search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub episode_ids: Vec<i32>,
    #[serde(default)]
    pub user_invoked_search: bool,
}

/// Free space per folder, looked up at most once per evaluation pass.
#[derive(Debug, Default)]
struct FreeSpaceCache {
    entries: Mutex<HashMap<PathBuf, Option<u64>>>,
}

/// Per-pass state shared by every specification.
#[derive(Debug, Default)]
pub struct DecisionContext {
    pub search_criteria: Option<SearchCriteria>,
    free_space: FreeSpaceCache,
}

impl DecisionContext {
    /// Context for releases coming from an RSS feed.
    pub fn rss() -> Self {
        Self::default()
    }

    pub fn search(criteria: SearchCriteria) -> Self {
        Self {
            search_criteria: Some(criteria),
            free_space: FreeSpaceCache::default(),
        }
    }

    pub fn is_search(&self) -> bool {
        self.search_criteria.is_some()
    }

    pub fn is_user_invoked_search(&self) -> bool {
        self.search_criteria
            .as_ref()
            .is_some_and(|c| c.user_invoked_search)
    }

    /// Outer `None` when the folder has not been looked up yet in this pass.
    pub(crate) fn cached_free_space(&self, path: &Path) -> Option<Option<u64>> {
        let entries = self
            .free_space
            .entries
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        entries.get(path).copied()
    }

    pub(crate) fn cache_free_space(&self, path: &Path, space: Option<u64>) {
        let mut entries = self
            .free_space
            .entries
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        entries.insert(path.to_path_buf(), space);
    }
}
